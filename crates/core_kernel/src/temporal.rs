//! Cover period handling
//!
//! Policies are in force over a calendar date range. Incident dates are
//! compared against that range with both bounds inclusive: a loss on the
//! first or last day of cover is inside the period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range during which a policy is in force
///
/// Both bounds are inclusive. Construction performs no validation; records
/// are accepted as supplied, and a reversed range simply contains no dates.
/// Callers that want the `start <= end` invariant checked up front can use
/// [`CoverPeriod::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPeriod {
    /// First day of cover (inclusive)
    pub start: NaiveDate,
    /// Last day of cover (inclusive)
    pub end: NaiveDate,
}

impl CoverPeriod {
    /// Creates a new cover period
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within the period, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if the period satisfies `start <= end`
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Number of days from start to end
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
