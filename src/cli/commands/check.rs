//! This module defines the `check` subcommand.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use canon::container::classify;
use canon::{Kind, Subject, Triple};
use clap::Parser;
use serde::Serialize;

//================================================================================================
// Types
//================================================================================================

/// The `check` subcommand.
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// The N-Triples file to read, or `-` for standard input.
    file: PathBuf,

    /// Print the parsed store as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Entry<'a> {
    subject: &'a Subject,
    kind: Kind,
    triples: &'a [Triple],
}

//================================================================================================
// Functions
//================================================================================================

/// The main entry point for the `check` subcommand.
pub(super) fn run(args: Args) -> Result<()> {
    let input = super::read_input(&args.file)?;
    let store = canon::parse(&input)
        .with_context(|| format!("could not parse {}", args.file.display()))?;

    let entries: Vec<Entry> = store
        .iter()
        .map(|(subject, triples)| Entry {
            subject,
            kind: classify(&store, subject),
            triples,
        })
        .collect();

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
    } else {
        for Entry {
            subject,
            kind,
            triples,
        } in &entries
        {
            writeln!(out, "{kind}\t{}\t{subject}", triples.len())?;
        }
    }

    tracing::info!(
        subjects = store.len(),
        triples = store.triple_count(),
        "statement list is well-formed"
    );
    Ok(())
}
