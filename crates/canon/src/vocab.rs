//! The recognized property namespace.

/// The extension manifest namespace recognized by default.
pub const EM_NAMESPACE: &str = "http://www.mozilla.org/2004/em-rdf#";

/// Decides which predicates are rendered as properties, and under what name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    namespace: String,
}

impl Vocabulary {
    /// Recognize predicates under `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Vocabulary {
            namespace: namespace.into(),
        }
    }

    /// The recognized namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The local property name of `predicate`, or `None` when it lies outside the
    /// namespace (or names the namespace itself).
    pub fn local_name<'p>(&self, predicate: &'p str) -> Option<&'p str> {
        predicate
            .strip_prefix(self.namespace.as_str())
            .filter(|local| !local.is_empty())
    }

    /// The full predicate IRI for `local`.
    pub fn predicate(&self, local: &str) -> String {
        format!("{}{}", self.namespace, local)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new(EM_NAMESPACE)
    }
}
