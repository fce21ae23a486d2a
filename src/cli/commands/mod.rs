mod check;
mod normalize;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Subcommand;

use super::Args;

/// The path that stands for standard input.
const STDIN: &str = "-";

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Render a subject of an N-Triples file in canonical form.
    ///
    /// The statements are parsed into a subject-indexed store and the given
    /// subject is rendered recursively:
    ///
    /// - containers list their members in statement order
    /// - properties outside the recognized namespace are dropped
    /// - the remaining properties are sorted, so the output does not depend on
    ///   the order of the input statements
    #[command(verbatim_doc_comment)]
    Normalize(normalize::Args),
    /// Validate an N-Triples file and summarize its subjects.
    ///
    /// Prints one line per subject with its classification, the number of
    /// statements about it, and the subject itself.
    #[command(verbatim_doc_comment)]
    Check(check::Args),
}

/// Dispatch the parsed command line to its subcommand.
pub fn run(args: Args) -> anyhow::Result<()> {
    if let Some(dir) = &args.working_directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("could not change directory to {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "changed working directory");
    }
    match args.command {
        Commands::Normalize(args) => normalize::run(args),
        Commands::Check(args) => check::run(args),
    }
}

/// Read the statement list at `path`, or standard input for `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("could not read standard input")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
    }
}
