//! rdfnorm, a canonical normalizer for extension metadata graphs.
//!
//! The heavy lifting lives in the `canon` crate; this crate wires it to a
//! command line, configuration and logging.

#![warn(missing_docs)]

pub mod cli;
