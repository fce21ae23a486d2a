//! The subject-indexed triple store.
//!
//! A [`Store`] is built once per normalization pass, either by [`crate::parse`] or
//! from an iterator of triples, and is read-only afterwards. Each subject owns a
//! bucket of its statements in first-seen order; that order is what gives
//! sequence containers their member order.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::parse::GrammarError;
use crate::term::{Subject, Triple};


//================================================================================================
// Types
//================================================================================================

/// Statements grouped by subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    buckets: BTreeMap<Subject, Vec<Triple>>,
}

//================================================================================================
// Impls
//================================================================================================

impl Store {
    /// The statements about `subject`, or `None` if it is never described.
    pub fn get(&self, subject: &Subject) -> Option<&[Triple]> {
        self.buckets.get(subject).map(Vec::as_slice)
    }

    /// The statements about `subject`; empty if it is never described.
    pub fn triples(&self, subject: &Subject) -> &[Triple] {
        self.get(subject).unwrap_or_default()
    }

    /// Whether `subject` has at least one statement.
    pub fn contains(&self, subject: &Subject) -> bool {
        self.buckets.contains_key(subject)
    }

    /// The number of distinct subjects.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the store holds no statements at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The total number of statements across all subjects.
    pub fn triple_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Iterate subjects in order, with their buckets.
    pub fn iter(&self) -> impl Iterator<Item = (&Subject, &[Triple])> {
        self.buckets.iter().map(|(s, t)| (s, t.as_slice()))
    }

    pub(crate) fn insert(&mut self, triple: Triple) {
        self.buckets
            .entry(triple.subject.clone())
            .or_default()
            .push(triple);
    }
}

impl FromIterator<Triple> for Store {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut store = Store::default();
        for triple in iter {
            store.insert(triple);
        }
        store
    }
}

impl FromStr for Store {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
