//! Core Kernel - Foundational types for the claims evaluation system
//!
//! This crate provides the fundamental building blocks used by the domain modules:
//! - Money with precise decimal arithmetic
//! - Cover periods for policy in-force checks
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::Money;
pub use temporal::CoverPeriod;
pub use identifiers::PolicyNumber;
