//! Incident types
//!
//! The categories of insurable incidents form a closed set. Adding a
//! category is a code change, not a data change, so exhaustive matches on
//! this enum are checked by the compiler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Categories of insurable incidents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
    Accident,
    Theft,
    Fire,
    #[serde(rename = "water damage")]
    WaterDamage,
}

impl IncidentType {
    /// Returns the wire tag for this incident type
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Accident => "accident",
            IncidentType::Theft => "theft",
            IncidentType::Fire => "fire",
            IncidentType::WaterDamage => "water damage",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IncidentType {
    type Err = PolicyError;

    /// Parses a wire tag. Matching is exact and case-sensitive; no
    /// normalization is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accident" => Ok(IncidentType::Accident),
            "theft" => Ok(IncidentType::Theft),
            "fire" => Ok(IncidentType::Fire),
            "water damage" => Ok(IncidentType::WaterDamage),
            other => Err(PolicyError::UnknownIncidentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip() {
        let all = [
            IncidentType::Accident,
            IncidentType::Theft,
            IncidentType::Fire,
            IncidentType::WaterDamage,
        ];

        for incident in all {
            let parsed: IncidentType = incident.as_str().parse().unwrap();
            assert_eq!(parsed, incident);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "flood".parse::<IncidentType>().unwrap_err();
        assert!(matches!(err, PolicyError::UnknownIncidentType(s) if s == "flood"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Fire".parse::<IncidentType>().is_err());
        assert!("FIRE".parse::<IncidentType>().is_err());
    }

    #[test]
    fn test_water_damage_tag_has_space() {
        assert_eq!(IncidentType::WaterDamage.as_str(), "water damage");
        assert!("waterdamage".parse::<IncidentType>().is_err());
    }
}
