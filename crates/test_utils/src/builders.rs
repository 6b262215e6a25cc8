//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::NaiveDate;
use core_kernel::{CoverPeriod, Money, PolicyNumber};
use domain_claims::Claim;
use domain_policy::{IncidentType, Policy};
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    policy_number: PolicyNumber,
    cover_period: CoverPeriod,
    deductible: Money,
    coverage_limit: Money,
    covered_incidents: Vec<IncidentType>,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: PolicyNumber::new("POL123"),
            cover_period: CoverPeriod::new(
                DateFixtures::standard_start(),
                DateFixtures::standard_end(),
            ),
            deductible: Money::new(dec!(500)),
            coverage_limit: Money::new(dec!(10000)),
            covered_incidents: vec![IncidentType::Accident, IncidentType::Fire],
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<PolicyNumber>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the cover period
    pub fn with_cover_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.cover_period = CoverPeriod::new(start, end);
        self
    }

    /// Sets the deductible
    pub fn with_deductible(mut self, deductible: Money) -> Self {
        self.deductible = deductible;
        self
    }

    /// Sets the coverage limit
    pub fn with_coverage_limit(mut self, limit: Money) -> Self {
        self.coverage_limit = limit;
        self
    }

    /// Sets the covered incident types
    pub fn with_covered_incidents(mut self, incidents: Vec<IncidentType>) -> Self {
        self.covered_incidents = incidents;
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        Policy::new(
            self.policy_number,
            self.cover_period,
            self.deductible,
            self.coverage_limit,
            self.covered_incidents,
        )
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    policy_number: PolicyNumber,
    incident_type: IncidentType,
    incident_date: NaiveDate,
    amount_claimed: Money,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: PolicyNumber::new("POL123"),
            incident_type: IncidentType::Fire,
            incident_date: DateFixtures::mid_cover(),
            amount_claimed: Money::new(dec!(3000)),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<PolicyNumber>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the incident type
    pub fn with_incident_type(mut self, incident_type: IncidentType) -> Self {
        self.incident_type = incident_type;
        self
    }

    /// Sets the incident date
    pub fn with_incident_date(mut self, date: NaiveDate) -> Self {
        self.incident_date = date;
        self
    }

    /// Sets the amount claimed
    pub fn with_amount_claimed(mut self, amount: Money) -> Self {
        self.amount_claimed = amount;
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim::new(
            self.policy_number,
            self.incident_type,
            self.incident_date,
            self.amount_claimed,
        )
    }
}
