//! Custom Test Assertions
//!
//! Assertion helpers for evaluation outcomes that give more meaningful
//! error messages than standard assertions.

use core_kernel::Money;
use domain_claims::{ClaimResult, ReasonCode};

/// Asserts that a result is an approval with the expected payout
///
/// # Panics
///
/// Panics if the result is not approved, carries a different reason code
/// than `APPROVED`, or pays a different amount.
pub fn assert_approved(result: &ClaimResult, expected_payout: Money) {
    assert!(
        result.approved,
        "expected approval, got {:?} with reason {}",
        result, result.reason_code
    );
    assert_eq!(
        result.reason_code,
        ReasonCode::Approved,
        "expected APPROVED, got {}",
        result.reason_code
    );
    assert_eq!(
        result.payout, expected_payout,
        "payout mismatch: expected {}, got {}",
        expected_payout, result.payout
    );
}

/// Asserts that a result is a rejection with the expected reason
///
/// Rejections always pay zero; that is asserted too.
pub fn assert_denied(result: &ClaimResult, expected_reason: ReasonCode) {
    assert!(
        !result.approved,
        "expected rejection, got approval with reason {}",
        result.reason_code
    );
    assert_eq!(
        result.reason_code, expected_reason,
        "reason mismatch: expected {}, got {}",
        expected_reason, result.reason_code
    );
    assert!(
        result.payout.is_zero(),
        "rejection must pay zero, got {}",
        result.payout
    );
}

/// Asserts that a result is the approved-but-unpaid outcome
pub fn assert_zero_payout(result: &ClaimResult) {
    assert!(
        result.approved,
        "zero-payout outcomes are approvals, got rejection with reason {}",
        result.reason_code
    );
    assert_eq!(
        result.reason_code,
        ReasonCode::ZeroPayout,
        "expected ZERO_PAYOUT, got {}",
        result.reason_code
    );
    assert!(
        result.payout.is_zero(),
        "expected zero payout, got {}",
        result.payout
    );
}
