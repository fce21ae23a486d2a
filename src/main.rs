//! The main entry point for the rdfnorm CLI.

#![warn(missing_docs)]

use std::process::ExitCode;

use clap::Parser;
use rdfnorm::cli::{self, Args};

//================================================================================================
// Functions
//================================================================================================

fn main() -> ExitCode {
    let args = Args::parse();
    let Args { log, .. } = args;

    let _guard = cli::init_global_subscriber(log);

    if let Err(e) = cli::run(args) {
        rdfnorm::fatal!(format!("{e:#}"));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
