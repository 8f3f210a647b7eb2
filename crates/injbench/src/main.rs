//! injbench - Entry Point
//!
//! Loads configuration, installs logging on stderr, runs the benchmark and
//! prints the report on stdout. Any failure exits non-zero.

// Force-link injbench-subjects to ensure linkme registrations are included
extern crate injbench_subjects;

use clap::Parser;
use injbench::cli::{Cli, print_subjects};
use injbench_infrastructure::logging::{init_logging, log_config_loaded};
use injbench_infrastructure::run_benchmark;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        print_subjects(io::stdout().lock())?;
        return Ok(());
    }

    let (config, source) = cli.load_config()?;
    init_logging(&config.logging)?;
    if let Some(path) = &source {
        log_config_loaded(path);
    }

    run_benchmark(&config, io::stdout().lock())?;
    Ok(())
}
