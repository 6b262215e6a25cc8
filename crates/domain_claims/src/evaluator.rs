//! Claim evaluation pipeline

use tracing::{debug, instrument};

use domain_policy::{Policy, PolicyStore};

use crate::claim::Claim;
use crate::evaluation::{ClaimResult, ReasonCode};

/// Evaluates claims against a store of policy records
///
/// Each evaluator owns its own store; there is no process-wide policy
/// registry. The store is read-only after construction, so one evaluator
/// can serve concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct ClaimsEvaluator {
    policies: PolicyStore,
}

impl ClaimsEvaluator {
    /// Creates an evaluator over the given policy records
    ///
    /// The input is stored as supplied: duplicate policy numbers, an empty
    /// list, and malformed cover periods are all accepted silently.
    pub fn new(policies: Vec<Policy>) -> Self {
        Self {
            policies: PolicyStore::new(policies),
        }
    }

    /// Creates an evaluator over a prebuilt store
    pub fn with_store(policies: PolicyStore) -> Self {
        Self { policies }
    }

    /// Evaluates a single claim
    ///
    /// Applies four checks in fixed order; the first failing check
    /// short-circuits and determines the result:
    ///
    /// 1. the policy number must resolve to a record (`PolicyNotFound`);
    /// 2. the incident date must fall within the cover period, both
    ///    bounds inclusive (`PolicyInactive`);
    /// 3. the incident type must be in the covered set (`NotCovered`);
    /// 4. `raw = amount claimed - deductible`; nothing payable when
    ///    `raw <= 0` (`ZeroPayout`, still approved), otherwise the payout
    ///    is `raw` capped at the coverage limit (`Approved`).
    ///
    /// Evaluation reads the store and the claim only, and returns a fresh
    /// result value on every call.
    #[instrument(skip(self, claim), fields(policy_number = %claim.policy_number))]
    pub fn evaluate_claim(&self, claim: &Claim) -> ClaimResult {
        let Some(policy) = self.policies.find(&claim.policy_number) else {
            debug!("no policy record matches");
            return ClaimResult::deny(ReasonCode::PolicyNotFound);
        };

        if !policy.is_in_force_on(claim.incident_date) {
            debug!(incident_date = %claim.incident_date, "incident outside cover period");
            return ClaimResult::deny(ReasonCode::PolicyInactive);
        }

        if !policy.covers(claim.incident_type) {
            debug!(incident_type = %claim.incident_type, "incident type not covered");
            return ClaimResult::deny(ReasonCode::NotCovered);
        }

        // The zero-payout branch is decided on the raw difference, not the
        // capped payout: a positive difference against a zero coverage
        // limit is still an approval.
        let raw = claim.amount_claimed - policy.deductible;
        if !raw.is_positive() {
            debug!(amount_claimed = %claim.amount_claimed, "claim within deductible");
            return ClaimResult::zero_payout();
        }

        ClaimResult::approve(raw.min(policy.coverage_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CoverPeriod, Money};
    use domain_policy::IncidentType;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn evaluator() -> ClaimsEvaluator {
        ClaimsEvaluator::new(vec![Policy::new(
            "POL123",
            CoverPeriod::new(date(2023, 1, 1), date(2024, 1, 1)),
            Money::new(dec!(500)),
            Money::new(dec!(10000)),
            vec![IncidentType::Accident, IncidentType::Fire],
        )])
    }

    fn fire_claim(amount: Money) -> Claim {
        Claim::new("POL123", IncidentType::Fire, date(2023, 6, 15), amount)
    }

    #[test]
    fn test_checks_run_in_order() {
        // Unknown policy wins over everything else, even an uncovered
        // incident on an impossible date
        let claim = Claim::new(
            "UNKNOWN",
            IncidentType::Theft,
            date(1990, 1, 1),
            Money::new(dec!(-5)),
        );

        let result = evaluator().evaluate_claim(&claim);
        assert_eq!(result.reason_code, ReasonCode::PolicyNotFound);
    }

    #[test]
    fn test_inactive_wins_over_not_covered() {
        // Theft is not covered AND the date is out of window; the window
        // check runs first
        let claim = Claim::new(
            "POL123",
            IncidentType::Theft,
            date(2024, 6, 15),
            Money::new(dec!(2000)),
        );

        let result = evaluator().evaluate_claim(&claim);
        assert_eq!(result.reason_code, ReasonCode::PolicyInactive);
    }

    #[test]
    fn test_zero_limit_with_positive_raw_is_approved() {
        let evaluator = ClaimsEvaluator::new(vec![Policy::new(
            "POL000",
            CoverPeriod::new(date(2023, 1, 1), date(2024, 1, 1)),
            Money::new(dec!(500)),
            Money::ZERO,
            vec![IncidentType::Fire],
        )]);
        let claim = Claim::new(
            "POL000",
            IncidentType::Fire,
            date(2023, 6, 15),
            Money::new(dec!(3000)),
        );

        let result = evaluator.evaluate_claim(&claim);
        assert!(result.approved);
        assert!(result.payout.is_zero());
        assert_eq!(result.reason_code, ReasonCode::Approved);
    }

    #[test]
    fn test_negative_amount_flows_to_zero_payout() {
        let result = evaluator().evaluate_claim(&fire_claim(Money::new(dec!(-1000))));

        assert!(result.approved);
        assert!(result.payout.is_zero());
        assert_eq!(result.reason_code, ReasonCode::ZeroPayout);
    }

    #[test]
    fn test_with_store_matches_new() {
        use domain_policy::PolicyStore;

        let policies = vec![Policy::new(
            "POL123",
            CoverPeriod::new(date(2023, 1, 1), date(2024, 1, 1)),
            Money::new(dec!(500)),
            Money::new(dec!(10000)),
            vec![IncidentType::Fire],
        )];
        let from_records = ClaimsEvaluator::new(policies.clone());
        let from_store = ClaimsEvaluator::with_store(PolicyStore::new(policies));

        let claim = fire_claim(Money::new(dec!(3000)));
        assert_eq!(
            from_records.evaluate_claim(&claim),
            from_store.evaluate_claim(&claim)
        );
    }

    #[test]
    fn test_evaluation_does_not_consume_inputs() {
        let evaluator = evaluator();
        let claim = fire_claim(Money::new(dec!(3000)));

        let first = evaluator.evaluate_claim(&claim);
        let second = evaluator.evaluate_claim(&claim);

        assert_eq!(first, second);
    }
}
