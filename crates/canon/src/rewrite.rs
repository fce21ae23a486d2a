//! Hooks for replacing property values while they are rendered.
//!
//! The serializer consults its [`Rewrite`] hook once per property statement,
//! before the namespace filter, with the statement's original subject,
//! predicate and object. Returning `None` keeps the original object.

use crate::term::{Subject, Term};
use crate::vocab::Vocabulary;

//================================================================================================
// Traits
//================================================================================================

/// A value rewrite applied during serialization.
pub trait Rewrite {
    /// Return a replacement object for the statement, or `None` to keep it.
    fn rewrite(&self, subject: &Subject, predicate: &str, object: &Term) -> Option<Term>;
}

//================================================================================================
// Types
//================================================================================================

/// The hook that never rewrites anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRewrite;

/// Replaces the object of every statement with a given predicate by a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    predicate: String,
    value: String,
}

/// An ordered list of substitutions; the first one matching a predicate wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(Vec<Substitute>);

//================================================================================================
// Impls
//================================================================================================

impl<F> Rewrite for F
where
    F: Fn(&Subject, &str, &Term) -> Option<Term>,
{
    fn rewrite(&self, subject: &Subject, predicate: &str, object: &Term) -> Option<Term> {
        self(subject, predicate, object)
    }
}

impl Rewrite for NoRewrite {
    fn rewrite(&self, _: &Subject, _: &str, _: &Term) -> Option<Term> {
        None
    }
}

impl Substitute {
    /// Substitute `value` for objects of the full predicate IRI `predicate`.
    pub fn new(predicate: impl Into<String>, value: impl Into<String>) -> Self {
        Substitute {
            predicate: predicate.into(),
            value: value.into(),
        }
    }

    /// Substitute `value` for objects of the property `local` in `vocab`.
    pub fn local(vocab: &Vocabulary, local: &str, value: impl Into<String>) -> Self {
        Substitute::new(vocab.predicate(local), value)
    }

    /// The predicate this substitution applies to.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}

impl Rewrite for Substitute {
    fn rewrite(&self, _: &Subject, predicate: &str, _: &Term) -> Option<Term> {
        (predicate == self.predicate).then(|| Term::Literal(self.value.clone()))
    }
}

impl Substitutions {
    /// Add a substitution with the lowest precedence so far.
    pub fn push(&mut self, sub: Substitute) {
        self.0.push(sub);
    }

    /// Whether there is nothing to substitute.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Substitute> for Substitutions {
    fn from_iter<T: IntoIterator<Item = Substitute>>(iter: T) -> Self {
        Substitutions(iter.into_iter().collect())
    }
}

impl Rewrite for Substitutions {
    fn rewrite(&self, subject: &Subject, predicate: &str, object: &Term) -> Option<Term> {
        self.0
            .iter()
            .find_map(|s| s.rewrite(subject, predicate, object))
    }
}
