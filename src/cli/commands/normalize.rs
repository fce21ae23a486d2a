//! This module defines the `normalize` subcommand.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use canon::{Substitute, Substitutions, Vocabulary};
use clap::Parser;
use thiserror::Error;

//================================================================================================
// Types
//================================================================================================

/// The `normalize` subcommand.
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// The N-Triples file to read, or `-` for standard input.
    file: PathBuf,

    /// The subject to render as the root element.
    ///
    /// A blank node label such as `_:id1` renders an anonymous root.
    subject: String,

    /// Render properties of this namespace instead of the configured one.
    #[arg(long, value_name = "IRI")]
    namespace: Option<String>,

    /// Replace the value of every LOCAL property with VALUE.
    ///
    /// May be given multiple times. Takes precedence over substitutions from the
    /// configuration file.
    #[arg(long = "set", value_name = "LOCAL=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,
}

/// A malformed `--set` argument.
#[derive(Error, Debug)]
enum AssignmentError {
    #[error("expected LOCAL=VALUE, found `{0}`")]
    MissingEquals(String),
    #[error("the property name in `{0}` is empty")]
    EmptyName(String),
}

//================================================================================================
// Functions
//================================================================================================

/// The main entry point for the `normalize` subcommand.
pub(super) fn run(args: Args) -> Result<()> {
    let config = &*config::CONFIG;

    let namespace = args
        .namespace
        .as_deref()
        .unwrap_or(&config.vocab.namespace);
    let vocab = Vocabulary::new(namespace);

    let mut rewrite: Substitutions = args
        .set
        .iter()
        .map(|(local, value)| Substitute::local(&vocab, local, value.as_str()))
        .collect();
    for (local, value) in &config.rewrite {
        rewrite.push(Substitute::local(&vocab, local, value.as_str()));
    }

    tracing::debug!(
        file = %args.file.display(),
        subject = %args.subject,
        namespace,
        substitutions = !rewrite.is_empty()
    );

    let input = super::read_input(&args.file)?;
    let out = canon::normalize(&input, &args.subject, &vocab, rewrite)
        .with_context(|| format!("could not normalize {}", args.file.display()))?;

    std::io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("could not write output")?;
    Ok(())
}

fn parse_assignment(s: &str) -> Result<(String, String), AssignmentError> {
    let (local, value) = s
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingEquals(s.to_owned()))?;
    if local.is_empty() {
        return Err(AssignmentError::EmptyName(s.to_owned()));
    }
    Ok((local.to_owned(), value.to_owned()))
}
