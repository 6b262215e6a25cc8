//! Claim records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PolicyNumber};
use domain_policy::IncidentType;

/// A single reimbursement request
///
/// Claims are transient value records: constructed by the caller per
/// request, consumed once by evaluation, and not retained. The policy
/// number is a lookup key, not ownership of a record.
///
/// The claimed amount is not validated; zero and negative amounts flow
/// through payout arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Number of the policy the claim is filed against
    pub policy_number: PolicyNumber,
    /// Category of the incident
    pub incident_type: IncidentType,
    /// Date the incident occurred
    pub incident_date: NaiveDate,
    /// Amount of damages claimed
    pub amount_claimed: Money,
}

impl Claim {
    /// Creates a new claim
    pub fn new(
        policy_number: impl Into<PolicyNumber>,
        incident_type: IncidentType,
        incident_date: NaiveDate,
        amount_claimed: Money,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            incident_type,
            incident_date,
            amount_claimed,
        }
    }
}
