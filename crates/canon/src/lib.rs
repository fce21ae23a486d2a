//! # Canon Crate
//!
//! The `canon` crate normalizes extension metadata graphs into a canonical,
//! deterministic nested-element text form. Two descriptions that state the same
//! facts produce byte-identical output, no matter the order their statements
//! were written in.
//!
//! ## Pipeline
//!
//! Input is the flattened N-Triples text produced by an upstream RDF/XML
//! transform, one statement per line:
//!
//! ```text
//! <urn:mozilla:install-manifest> <http://www.mozilla.org/2004/em-rdf#id> "ext@example.org" .
//! <urn:mozilla:install-manifest> <http://www.mozilla.org/2004/em-rdf#targetApplication> _:id1 .
//! ```
//!
//! Processing happens in three steps:
//! - [`parse`] turns the text into a subject-indexed [`Store`].
//! - [`container`] classifies subjects as plain descriptions or `Seq`/`Alt`/`Bag`
//!   containers and extracts sequence members.
//! - [`serialize`] renders a root subject recursively, sorting property elements
//!   by their rendered text so the result is independent of input order.
//!
//! ## Basic Usage
//!
//! ```rust
//! use canon::{NoRewrite, Vocabulary};
//!
//! let input = r#"<urn:ext> <http://www.mozilla.org/2004/em-rdf#version> "1.0" ."#;
//! let out = canon::normalize(input, "urn:ext", &Vocabulary::default(), NoRewrite).unwrap();
//! assert_eq!(
//!     out,
//!     "<RDF:Description about=\"urn:ext\">\n  <em:version>1.0</em:version>\n</RDF:Description>\n"
//! );
//! ```
//!
//! ## Rewriting Values
//!
//! A [`Rewrite`] hook sees every property triple before it is rendered and may
//! replace its object. The common case, substituting a caller-provided
//! identifier, is covered by [`Substitute`]:
//!
//! ```rust
//! use canon::{Substitute, Vocabulary};
//!
//! let vocab = Vocabulary::default();
//! let input = r#"<urn:ext> <http://www.mozilla.org/2004/em-rdf#id> "old" ."#;
//! let out = canon::normalize(input, "urn:ext", &vocab, Substitute::local(&vocab, "id", "new")).unwrap();
//! assert!(out.contains("<em:id>new</em:id>"));
//! ```

#![deny(missing_docs)]

pub use self::container::Kind;
pub use self::parse::{GrammarError, parse};
pub use self::rewrite::{NoRewrite, Rewrite, Substitute, Substitutions};
pub use self::serialize::{SerializeError, Serializer};
pub use self::store::Store;
pub use self::term::{Subject, Term, Triple};
pub use self::vocab::Vocabulary;

pub mod container;
pub mod parse;
pub mod rewrite;
pub mod serialize;
pub mod store;
pub mod term;
pub mod vocab;

use thiserror::Error;

//================================================================================================
// Types
//================================================================================================

/// Any failure of a full normalization pass.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input text is not a valid statement list.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    /// The graph could not be rendered from the requested root.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

//================================================================================================
// Functions
//================================================================================================

/// Parse `input` and render it canonically, starting at `root`.
///
/// `root` is interpreted with [`Subject::from_label`], so a blank node label
/// such as `_:id3` may be given as well as a plain IRI.
///
/// # Errors
///
/// Fails with [`Error::Grammar`] if any input line is malformed, and with
/// [`Error::Serialize`] if rendering reaches an unsupported container or a cycle.
pub fn normalize(
    input: &str,
    root: &str,
    vocab: &Vocabulary,
    rewrite: impl Rewrite,
) -> Result<String, Error> {
    let store = parse(input)?;
    let root = Subject::from_label(root);
    tracing::debug!(%root, namespace = vocab.namespace(), "normalizing");
    Ok(Serializer::new(&store, vocab, rewrite).serialize(&root)?)
}
