//! Evaluation outcomes
//!
//! Reason codes are a closed, string-valued set for interoperability with
//! other systems; the wire tags are stable and exhaustively matched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::Money;

use crate::error::ClaimError;

/// Reason for an evaluation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Claim approved with a positive payout
    Approved,
    /// Incident date outside the policy's cover period
    PolicyInactive,
    /// Incident type not in the policy's covered set
    NotCovered,
    /// Claim valid but nothing payable after the deductible
    ZeroPayout,
    /// No policy record matches the claim's policy number
    PolicyNotFound,
}

impl ReasonCode {
    /// Returns the wire tag for this reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Approved => "APPROVED",
            ReasonCode::PolicyInactive => "POLICY_INACTIVE",
            ReasonCode::NotCovered => "NOT_COVERED",
            ReasonCode::ZeroPayout => "ZERO_PAYOUT",
            ReasonCode::PolicyNotFound => "POLICY_NOT_FOUND",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReasonCode {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APPROVED" => Ok(ReasonCode::Approved),
            "POLICY_INACTIVE" => Ok(ReasonCode::PolicyInactive),
            "NOT_COVERED" => Ok(ReasonCode::NotCovered),
            "ZERO_PAYOUT" => Ok(ReasonCode::ZeroPayout),
            "POLICY_NOT_FOUND" => Ok(ReasonCode::PolicyNotFound),
            other => Err(ClaimError::UnknownReasonCode(other.to_string())),
        }
    }
}

/// Outcome of evaluating one claim
///
/// Constructed fresh per evaluation call, never mutated, and owned solely
/// by the caller after return. `approved` is false only with a rejection
/// reason (`PolicyNotFound`, `PolicyInactive`, `NotCovered`); a valid
/// claim that pays nothing is still approved, with reason `ZeroPayout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    /// Whether the claim was accepted
    pub approved: bool,
    /// Amount payable, non-negative
    pub payout: Money,
    /// Why the evaluation ended the way it did
    pub reason_code: ReasonCode,
}

impl ClaimResult {
    /// Creates an approval with the given payout
    pub fn approve(payout: Money) -> Self {
        Self {
            approved: true,
            payout,
            reason_code: ReasonCode::Approved,
        }
    }

    /// Creates a rejection with zero payout
    ///
    /// `reason` is expected to be one of the rejection codes; the payout
    /// branch outcomes have their own constructors.
    pub fn deny(reason: ReasonCode) -> Self {
        Self {
            approved: false,
            payout: Money::ZERO,
            reason_code: reason,
        }
    }

    /// Creates an approved outcome that pays nothing
    ///
    /// Distinguishes a legitimate zero-dollar outcome from a rejected
    /// claim: the claim is valid and recorded even though nothing is paid.
    pub fn zero_payout() -> Self {
        Self {
            approved: true,
            payout: Money::ZERO,
            reason_code: ReasonCode::ZeroPayout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reason_code_wire_tags() {
        assert_eq!(ReasonCode::Approved.as_str(), "APPROVED");
        assert_eq!(ReasonCode::PolicyInactive.as_str(), "POLICY_INACTIVE");
        assert_eq!(ReasonCode::NotCovered.as_str(), "NOT_COVERED");
        assert_eq!(ReasonCode::ZeroPayout.as_str(), "ZERO_PAYOUT");
        assert_eq!(ReasonCode::PolicyNotFound.as_str(), "POLICY_NOT_FOUND");
    }

    #[test]
    fn test_reason_code_parse_round_trip() {
        for code in [
            ReasonCode::Approved,
            ReasonCode::PolicyInactive,
            ReasonCode::NotCovered,
            ReasonCode::ZeroPayout,
            ReasonCode::PolicyNotFound,
        ] {
            let parsed: ReasonCode = code.as_str().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn test_reason_code_parse_rejects_unknown() {
        let err = "DECLINED".parse::<ReasonCode>().unwrap_err();
        assert!(matches!(err, ClaimError::UnknownReasonCode(s) if s == "DECLINED"));
    }

    #[test]
    fn test_constructors() {
        let approved = ClaimResult::approve(Money::new(dec!(2500)));
        assert!(approved.approved);
        assert_eq!(approved.payout, Money::new(dec!(2500)));
        assert_eq!(approved.reason_code, ReasonCode::Approved);

        let denied = ClaimResult::deny(ReasonCode::NotCovered);
        assert!(!denied.approved);
        assert!(denied.payout.is_zero());

        let zero = ClaimResult::zero_payout();
        assert!(zero.approved);
        assert!(zero.payout.is_zero());
        assert_eq!(zero.reason_code, ReasonCode::ZeroPayout);
    }
}
