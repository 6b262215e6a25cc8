//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Evaluating a claim never fails; every input maps to a `ClaimResult`.
/// The only fallible surface is parsing reason codes received as strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("unknown reason code: {0}")]
    UnknownReasonCode(String),
}
