//! Property-Based Test Generators
//!
//! Proptest strategies for generating random claims-domain test data.

use chrono::{Days, NaiveDate};
use core_kernel::{CoverPeriod, Money};
use domain_claims::Claim;
use domain_policy::{IncidentType, Policy};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating incident types
pub fn incident_type_strategy() -> impl Strategy<Value = IncidentType> {
    prop_oneof![
        Just(IncidentType::Accident),
        Just(IncidentType::Theft),
        Just(IncidentType::Fire),
        Just(IncidentType::WaterDamage),
    ]
}

/// Strategy for generating non-empty covered-incident sets
pub fn covered_incidents_strategy() -> impl Strategy<Value = Vec<IncidentType>> {
    proptest::sample::subsequence(
        vec![
            IncidentType::Accident,
            IncidentType::Theft,
            IncidentType::Fire,
            IncidentType::WaterDamage,
        ],
        1..=4,
    )
}

/// Strategy for claimed amounts, including zero and negative values
pub fn claimed_amount_strategy() -> impl Strategy<Value = Money> {
    (-1_000_000i64..10_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy for non-negative amounts (deductibles and coverage limits)
pub fn non_negative_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy for dates within a decade of 2020-01-01
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(offset)
    })
}

/// Strategy for well-formed cover periods (start <= end)
pub fn cover_period_strategy() -> impl Strategy<Value = CoverPeriod> {
    (date_strategy(), 0u64..1825u64)
        .prop_map(|(start, len)| CoverPeriod::new(start, start + Days::new(len)))
}

/// Strategy for generating policies under a fixed policy number
pub fn policy_strategy(policy_number: &'static str) -> impl Strategy<Value = Policy> {
    (
        cover_period_strategy(),
        non_negative_amount_strategy(),
        non_negative_amount_strategy(),
        covered_incidents_strategy(),
    )
        .prop_map(move |(period, deductible, limit, covered)| {
            Policy::new(policy_number, period, deductible, limit, covered)
        })
}

/// Strategy for generating claims against a fixed policy number
pub fn claim_strategy(policy_number: &'static str) -> impl Strategy<Value = Claim> {
    (
        incident_type_strategy(),
        date_strategy(),
        claimed_amount_strategy(),
    )
        .prop_map(move |(incident_type, date, amount)| {
            Claim::new(policy_number, incident_type, date, amount)
        })
}
