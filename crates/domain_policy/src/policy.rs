//! Policy records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CoverPeriod, Money, PolicyNumber};

use crate::incident::IncidentType;

/// An insurance contract as loaded into the store
///
/// Policies are plain immutable value records: constructed once at store
/// initialization and never mutated or deleted for the lifetime of the
/// store. The `start <= end` invariant on the cover period is expected
/// from upstream but not enforced here; a reversed period makes every
/// claim against the policy fall outside the active window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique policy number (uniqueness is the caller's responsibility)
    pub policy_number: PolicyNumber,
    /// Dates during which the policy is in force, both bounds inclusive
    pub cover_period: CoverPeriod,
    /// Amount subtracted from a claim before reimbursement, non-negative
    pub deductible: Money,
    /// Maximum reimbursable amount after the deductible, non-negative
    pub coverage_limit: Money,
    /// Incident types this policy covers, non-empty
    pub covered_incidents: Vec<IncidentType>,
}

impl Policy {
    /// Creates a new policy record
    pub fn new(
        policy_number: impl Into<PolicyNumber>,
        cover_period: CoverPeriod,
        deductible: Money,
        coverage_limit: Money,
        covered_incidents: Vec<IncidentType>,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            cover_period,
            deductible,
            coverage_limit,
            covered_incidents,
        }
    }

    /// Returns true if the policy is in force on the given date
    pub fn is_in_force_on(&self, date: NaiveDate) -> bool {
        self.cover_period.contains(date)
    }

    /// Returns true if the given incident type is covered
    ///
    /// Membership is exact value equality against the covered set.
    pub fn covers(&self, incident: IncidentType) -> bool {
        self.covered_incidents.contains(&incident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_policy() -> Policy {
        Policy::new(
            "POL123",
            CoverPeriod::new(date(2023, 1, 1), date(2024, 1, 1)),
            Money::new(dec!(500)),
            Money::new(dec!(10000)),
            vec![IncidentType::Accident, IncidentType::Fire],
        )
    }

    #[test]
    fn test_in_force_window_is_inclusive() {
        let policy = test_policy();

        assert!(policy.is_in_force_on(date(2023, 1, 1)));
        assert!(policy.is_in_force_on(date(2023, 6, 15)));
        assert!(policy.is_in_force_on(date(2024, 1, 1)));
        assert!(!policy.is_in_force_on(date(2022, 12, 31)));
        assert!(!policy.is_in_force_on(date(2024, 1, 2)));
    }

    #[test]
    fn test_covers_membership() {
        let policy = test_policy();

        assert!(policy.covers(IncidentType::Fire));
        assert!(policy.covers(IncidentType::Accident));
        assert!(!policy.covers(IncidentType::Theft));
        assert!(!policy.covers(IncidentType::WaterDamage));
    }
}
