//! Policy store
//!
//! An in-memory, read-only collection of policy records. Populated once at
//! construction; the evaluator only ever queries it by policy number.

use core_kernel::PolicyNumber;

use crate::policy::Policy;

/// Holds the set of known policies and answers identity lookups
///
/// Lookup is a linear scan returning the first match. Duplicate policy
/// numbers are not prevented or deduplicated; under duplicates the first
/// record in input order wins. The store is never written after
/// construction, so sharing it across threads needs no synchronization.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    policies: Vec<Policy>,
}

impl PolicyStore {
    /// Creates a store from the given policy records
    ///
    /// No validation is performed: duplicate numbers, an empty list, and
    /// malformed cover periods are all accepted silently.
    pub fn new(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    /// Finds a policy by exact, case-sensitive number match
    ///
    /// Returns the first matching record, or `None` on a miss. A miss is a
    /// normal outcome consumed by the evaluator, not an error.
    pub fn find(&self, number: &PolicyNumber) -> Option<&Policy> {
        self.policies
            .iter()
            .find(|policy| policy.policy_number == *number)
    }

    /// Number of stored records, duplicates included
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Iterates over the stored records in input order
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }
}

impl From<Vec<Policy>> for PolicyStore {
    fn from(policies: Vec<Policy>) -> Self {
        Self::new(policies)
    }
}

impl FromIterator<Policy> for PolicyStore {
    fn from_iter<I: IntoIterator<Item = Policy>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
