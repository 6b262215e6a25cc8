//! Claims Evaluation Domain
//!
//! This crate implements the claim decision chain: given a claim and a
//! store of policy records, determine approval, payout, and a reason code.
//!
//! # Decision Chain
//!
//! ```text
//! lookup -> active window -> coverage -> payout arithmetic
//! ```
//!
//! The first failing check short-circuits and determines the result. Every
//! input maps to a [`ClaimResult`] value; evaluation itself never fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::{Claim, ClaimsEvaluator};
//!
//! let evaluator = ClaimsEvaluator::new(policies);
//! let result = evaluator.evaluate_claim(&claim);
//! if result.approved {
//!     println!("payout: {}", result.payout);
//! }
//! ```

pub mod claim;
pub mod evaluation;
pub mod evaluator;
pub mod error;

pub use claim::Claim;
pub use evaluation::{ClaimResult, ReasonCode};
pub use evaluator::ClaimsEvaluator;
pub use error::ClaimError;
