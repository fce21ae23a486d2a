//! # Canonical Rendering
//!
//! Renders a subject of a [`Store`] as nested elements, recursing into blank
//! node properties and sequence members.
//!
//! ## Output Format
//!
//! ```text
//! <RDF:Seq about="urn:mozilla:extension:foo">
//!   <RDF:li>
//!     <RDF:Description>
//!       <em:version>1.0</em:version>
//!     </RDF:Description>
//!   </RDF:li>
//! </RDF:Seq>
//! ```
//!
//! - The wrapper element is `RDF:Description`, `RDF:Seq`, `RDF:Alt` or `RDF:Bag`,
//!   as decided by [`container::classify`].
//! - Only named subjects carry an `about` attribute.
//! - Sequence members are wrapped in `RDF:li` and keep their statement order.
//! - Properties are rendered as `em:<local name>` for predicates in the
//!   [`Vocabulary`] namespace. Everything else is dropped.
//! - Rendered property fragments, nested children included, are sorted bytewise
//!   before they are joined. This is what makes the output independent of input
//!   order.
//!
//! Every nesting level adds two spaces of indentation and every element line
//! ends in a newline.

use std::borrow::Cow;
use std::collections::HashSet;

use thiserror::Error;

use crate::container::{self, Kind, UnsupportedContainer};
use crate::rewrite::Rewrite;
use crate::store::Store;
use crate::term::{Subject, Term};
use crate::vocab::Vocabulary;

#[cfg(test)]
mod tests;

/// One level of indentation.
pub const INDENT: &str = "  ";
/// Element prefix of wrappers and list items.
const RDF: &str = "RDF";
/// Element prefix of properties.
const EM: &str = "em";

//================================================================================================
// Types
//================================================================================================

/// Why a subject could not be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// An alternative or bag was reached.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedContainer),
    /// A subject was reached again while it was still being rendered.
    #[error("reference cycle through {0}")]
    Cycle(Subject),
}

/// Renders subjects of one store.
///
/// The serializer tracks which subjects are on the current recursion path, so a
/// subject that refers back to itself, directly or through blank nodes and
/// sequence members, fails with [`SerializeError::Cycle`] instead of recursing
/// forever. A subject shared by two branches is not a cycle and is rendered in
/// both places.
pub struct Serializer<'s, R> {
    store: &'s Store,
    vocab: &'s Vocabulary,
    rewrite: R,
    path: HashSet<Subject>,
}

//================================================================================================
// Impls
//================================================================================================

impl<'s, R: Rewrite> Serializer<'s, R> {
    /// Create a serializer over `store`.
    pub fn new(store: &'s Store, vocab: &'s Vocabulary, rewrite: R) -> Self {
        Serializer {
            store,
            vocab,
            rewrite,
            path: HashSet::new(),
        }
    }

    /// Render `subject` at the top level.
    ///
    /// # Errors
    ///
    /// See [`Serializer::serialize_indented`].
    pub fn serialize(&mut self, subject: &Subject) -> Result<String, SerializeError> {
        self.serialize_indented(subject, "")
    }

    /// Render `subject`, prefixing its outermost lines with `indent`.
    ///
    /// # Errors
    ///
    /// Fails if an alternative or bag container is reached, or if the graph
    /// below `subject` contains a cycle.
    pub fn serialize_indented(
        &mut self,
        subject: &Subject,
        indent: &str,
    ) -> Result<String, SerializeError> {
        self.path.clear();
        self.resource(subject, indent)
    }

    fn resource(&mut self, subject: &Subject, indent: &str) -> Result<String, SerializeError> {
        if !self.path.insert(subject.clone()) {
            return Err(SerializeError::Cycle(subject.clone()));
        }
        let res = self.render(subject, indent);
        self.path.remove(subject);
        res
    }

    fn render(&mut self, subject: &Subject, indent: &str) -> Result<String, SerializeError> {
        let store = self.store;
        let kind = container::classify(store, subject);

        if !store.contains(subject) {
            tracing::debug!(%subject, "undescribed subject rendered as an empty resource");
        }
        tracing::trace!(%subject, %kind, depth = self.path.len());

        let element = kind.element();
        let inner = format!("{indent}{INDENT}");

        let mut out = format!("{indent}<{RDF}:{element}");
        if let Subject::Iri(iri) = subject {
            out.push_str(&format!(" about=\"{iri}\""));
        }
        out.push_str(">\n");

        if kind.is_container() {
            // a sequence's statements are all either its type marker or a member
            out.push_str(&self.members(subject, kind, &inner)?);
        } else {
            out.push_str(&self.properties(subject, &inner)?);
        }

        out.push_str(&format!("{indent}</{RDF}:{element}>\n"));
        Ok(out)
    }

    fn members(
        &mut self,
        subject: &Subject,
        kind: Kind,
        indent: &str,
    ) -> Result<String, SerializeError> {
        let members = container::materialize(self.store, subject, kind)?;
        let nested = format!("{indent}{INDENT}");

        let mut out = String::new();
        for member in members {
            out.push_str(&format!("{indent}<{RDF}:li>\n"));
            out.push_str(&self.resource(&member.to_subject(), &nested)?);
            out.push_str(&format!("{indent}</{RDF}:li>\n"));
        }
        Ok(out)
    }

    fn properties(&mut self, subject: &Subject, indent: &str) -> Result<String, SerializeError> {
        let store = self.store;
        let vocab = self.vocab;
        let nested = format!("{indent}{INDENT}");

        let mut items = Vec::new();
        for triple in store.triples(subject) {
            let rewritten = self
                .rewrite
                .rewrite(subject, &triple.predicate, &triple.object);
            let object = rewritten.as_ref().unwrap_or(&triple.object);

            let Some(prop) = vocab.local_name(&triple.predicate) else {
                continue;
            };

            let item = match object {
                Term::Blank(b) => {
                    let child = self.resource(&Subject::Blank(b.clone()), &nested)?;
                    format!("{indent}<{EM}:{prop}>\n{child}{indent}</{EM}:{prop}>\n")
                },
                Term::Iri(v) | Term::Literal(v) => {
                    format!("{indent}<{EM}:{prop}>{}</{EM}:{prop}>\n", escape(value(v)))
                },
            };
            items.push(item);
        }

        items.sort();
        Ok(items.concat())
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Render `subject` of `store` at the top level.
///
/// # Errors
///
/// See [`Serializer::serialize_indented`].
pub fn serialize(
    store: &Store,
    subject: &Subject,
    vocab: &Vocabulary,
    rewrite: impl Rewrite,
) -> Result<String, SerializeError> {
    Serializer::new(store, vocab, rewrite).serialize(subject)
}

/// The text a property value renders as. Currently the value itself.
fn value(object: &str) -> Cow<'_, str> {
    Cow::Borrowed(object)
}

/// Entity escaping for element text. Currently none is applied.
fn escape(text: Cow<'_, str>) -> Cow<'_, str> {
    text
}
