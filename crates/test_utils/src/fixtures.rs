//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the claims evaluation suite, centered on the
//! canonical two-policy sample dataset used throughout the documentation
//! and tests. The dataset is reference fixture data, not production
//! configuration.

use chrono::NaiveDate;
use core_kernel::{CoverPeriod, Money};
use domain_claims::Claim;
use domain_policy::{IncidentType, Policy};
use rust_decimal_macros::dec;

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Start of the standard policy's cover (2023-01-01)
    pub fn standard_start() -> NaiveDate {
        Self::date(2023, 1, 1)
    }

    /// End of the standard policy's cover (2024-01-01)
    pub fn standard_end() -> NaiveDate {
        Self::date(2024, 1, 1)
    }

    /// A date inside both sample policies' cover (2023-06-15)
    pub fn mid_cover() -> NaiveDate {
        Self::date(2023, 6, 15)
    }

    /// A date before the standard policy starts (2022-12-31)
    pub fn before_standard_cover() -> NaiveDate {
        Self::date(2022, 12, 31)
    }

    /// A date after the standard policy ends (2024-06-15)
    pub fn after_standard_cover() -> NaiveDate {
        Self::date(2024, 6, 15)
    }
}

/// Fixture for policy test data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// POL123: in force 2023-01-01..2024-01-01, deductible 500,
    /// coverage limit 10000, covers accident and fire
    pub fn standard() -> Policy {
        Policy::new(
            "POL123",
            CoverPeriod::new(DateFixtures::standard_start(), DateFixtures::standard_end()),
            Money::new(dec!(500)),
            Money::new(dec!(10000)),
            vec![IncidentType::Accident, IncidentType::Fire],
        )
    }

    /// POL456: in force 2022-06-01..2025-06-01, deductible 250,
    /// coverage limit 50000, covers every incident type
    pub fn comprehensive() -> Policy {
        Policy::new(
            "POL456",
            CoverPeriod::new(
                NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            ),
            Money::new(dec!(250)),
            Money::new(dec!(50000)),
            vec![
                IncidentType::Accident,
                IncidentType::Theft,
                IncidentType::Fire,
                IncidentType::WaterDamage,
            ],
        )
    }

    /// The canonical sample dataset: POL123 and POL456
    pub fn sample_policies() -> Vec<Policy> {
        vec![Self::standard(), Self::comprehensive()]
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A fire claim against POL123 for 3000, mid-cover
    pub fn fire_claim() -> Claim {
        Claim::new(
            "POL123",
            IncidentType::Fire,
            DateFixtures::mid_cover(),
            Money::new(dec!(3000)),
        )
    }

    /// A theft claim against POL123 (theft is not covered there)
    pub fn uncovered_theft_claim() -> Claim {
        Claim::new(
            "POL123",
            IncidentType::Theft,
            DateFixtures::mid_cover(),
            Money::new(dec!(2000)),
        )
    }

    /// A claim against a policy number absent from the sample dataset
    pub fn unknown_policy_claim() -> Claim {
        Claim::new(
            "UNKNOWN",
            IncidentType::Fire,
            DateFixtures::mid_cover(),
            Money::new(dec!(1000)),
        )
    }

    /// A claim below POL123's deductible
    pub fn below_deductible_claim() -> Claim {
        Claim::new(
            "POL123",
            IncidentType::Fire,
            DateFixtures::mid_cover(),
            Money::new(dec!(400)),
        )
    }
}
