//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
///
/// Claim evaluation itself never fails; the only fallible surface here is
/// parsing incident tags received as strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("unknown incident type: {0}")]
    UnknownIncidentType(String),
}
