//! # Container Classification
//!
//! A subject is a container when one of its statements points at a well-known
//! RDF container type. Classification is derived on demand from the store and
//! never recorded anywhere.
//!
//! Only sequences can be taken apart into members. Alternatives and bags are
//! recognized but refused with [`UnsupportedContainer`]; no member list is ever
//! guessed for them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::Store;
use crate::term::{Subject, Term};

/// The RDF syntax namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// Type marker of an ordered sequence.
pub const SEQ: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Seq";
/// Type marker of a set of alternatives.
pub const ALT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Alt";
/// Type marker of an unordered bag.
pub const BAG: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Bag";

//================================================================================================
// Types
//================================================================================================

/// The shape of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// An ordered sequence (`rdf:Seq`).
    Sequence,
    /// A set of alternatives (`rdf:Alt`).
    Alternative,
    /// An unordered bag (`rdf:Bag`).
    Bag,
    /// A plain resource.
    Description,
}

/// Member extraction was requested for a container kind that has none implemented.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot extract members of {subject}: {kind} containers are not supported")]
pub struct UnsupportedContainer {
    /// The container subject.
    pub subject: Subject,
    /// Its classification.
    pub kind: Kind,
}

//================================================================================================
// Impls
//================================================================================================

impl Kind {
    /// Container kinds in classification precedence order.
    pub const CONTAINERS: [Kind; 3] = [Kind::Sequence, Kind::Alternative, Kind::Bag];

    /// The local element name used for this kind in rendered output.
    pub fn element(self) -> &'static str {
        match self {
            Kind::Sequence => "Seq",
            Kind::Alternative => "Alt",
            Kind::Bag => "Bag",
            Kind::Description => "Description",
        }
    }

    /// The well-known type IRI marking this kind, if it is a container.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Kind::Sequence => Some(SEQ),
            Kind::Alternative => Some(ALT),
            Kind::Bag => Some(BAG),
            Kind::Description => None,
        }
    }

    /// Whether this kind is one of the three containers.
    pub fn is_container(self) -> bool {
        self != Kind::Description
    }

    fn is_marked_by(self, object: &Term) -> bool {
        self.marker().is_some_and(|m| object.is_iri(m))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Classify `subject`. Sequence wins over alternative, which wins over bag, if a
/// subject carries more than one marker. Undescribed subjects are descriptions.
pub fn classify(store: &Store, subject: &Subject) -> Kind {
    let triples = store.triples(subject);
    Kind::CONTAINERS
        .into_iter()
        .find(|kind| triples.iter().any(|t| kind.is_marked_by(&t.object)))
        .unwrap_or(Kind::Description)
}

/// Extract the members of `subject` given its classification.
///
/// For a sequence this is the object of every statement other than the type
/// marker, in statement order. Ordinal predicates are not interpreted. A plain
/// description has no members.
///
/// # Errors
///
/// Alternatives and bags always fail with [`UnsupportedContainer`].
pub fn materialize<'s>(
    store: &'s Store,
    subject: &Subject,
    kind: Kind,
) -> Result<Vec<&'s Term>, UnsupportedContainer> {
    match kind {
        Kind::Sequence => Ok(store
            .triples(subject)
            .iter()
            .filter(|t| !kind.is_marked_by(&t.object))
            .map(|t| &t.object)
            .collect()),
        Kind::Alternative | Kind::Bag => Err(UnsupportedContainer {
            subject: subject.clone(),
            kind,
        }),
        Kind::Description => Ok(Vec::new()),
    }
}
