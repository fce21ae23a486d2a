//! # RDF Terms
//!
//! The building blocks of a statement. Which variant a value belongs to is decided
//! once, by the parser, from its syntax: angle brackets denote an IRI, quotes a
//! literal and the reserved `_:id` prefix a blank node. Nothing downstream
//! re-derives the variant from the text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The prefix of every blank node label emitted by the upstream transform.
pub const BLANK_PREFIX: &str = "_:id";

//================================================================================================
// Types
//================================================================================================

/// The subject position of a statement: never a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Subject {
    /// An anonymous node, stored with its `_:id` prefix.
    Blank(String),
    /// A named resource, stored without angle brackets.
    Iri(String),
}

/// The object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Term {
    /// An anonymous node, stored with its `_:id` prefix.
    Blank(String),
    /// A named resource, stored without angle brackets.
    Iri(String),
    /// Quoted text, stored without quotes.
    Literal(String),
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// What the statement is about.
    pub subject: Subject,
    /// The predicate IRI, without angle brackets.
    pub predicate: String,
    /// The value.
    pub object: Term,
}

//================================================================================================
// Impls
//================================================================================================

impl Subject {
    /// Interpret a caller-provided label: an exact blank node token becomes
    /// [`Subject::Blank`], anything else is taken as an IRI.
    pub fn from_label(label: &str) -> Self {
        if is_blank_label(label) {
            Subject::Blank(label.to_owned())
        } else {
            Subject::Iri(label.to_owned())
        }
    }

    /// The raw value, as stored.
    pub fn value(&self) -> &str {
        match self {
            Subject::Blank(v) | Subject::Iri(v) => v,
        }
    }

    /// Whether this subject is anonymous.
    pub fn is_blank(&self) -> bool {
        matches!(self, Subject::Blank(_))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Blank(b) => f.write_str(b),
            Subject::Iri(i) => write!(f, "<{i}>"),
        }
    }
}

impl Term {
    /// The raw value, as stored.
    pub fn value(&self) -> &str {
        match self {
            Term::Blank(v) | Term::Iri(v) | Term::Literal(v) => v,
        }
    }

    /// The subject this term names when it is used as a resource, e.g. as a
    /// container member. A literal is addressed by its text.
    pub fn to_subject(&self) -> Subject {
        match self {
            Term::Blank(b) => Subject::Blank(b.clone()),
            Term::Iri(v) | Term::Literal(v) => Subject::Iri(v.clone()),
        }
    }

    /// Whether this term is exactly the IRI `iri`.
    pub fn is_iri(&self, iri: &str) -> bool {
        matches!(self, Term::Iri(v) if v == iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Blank(b) => f.write_str(b),
            Term::Iri(i) => write!(f, "<{i}>"),
            Term::Literal(l) => write!(f, "\"{l}\""),
        }
    }
}

impl From<Subject> for Term {
    fn from(s: Subject) -> Self {
        match s {
            Subject::Blank(b) => Term::Blank(b),
            Subject::Iri(i) => Term::Iri(i),
        }
    }
}

impl Triple {
    /// Assemble a statement.
    pub fn new(subject: Subject, predicate: impl Into<String>, object: Term) -> Self {
        Triple {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Whether `s` is a complete blank node token: the reserved prefix followed by
/// one or more ASCII digits.
pub fn is_blank_label(s: &str) -> bool {
    s.strip_prefix(BLANK_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
