//! Generates a Boost.PFR `core_name` test translation unit with randomly
//! named aggregate fields. The source goes to stdout; logs go to stderr.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cpp_types;
mod document;
mod layout;
mod name_gen;
mod suite_gen;

use layout::Layout;
use name_gen::NameGen;
use suite_gen::SuiteGenerator;

/// A bigger value might lead to compiler out of heap space error on MSVC.
const STRUCT_COUNT: usize = 50;

#[derive(Parser)]
#[command(name = "pfr-names-gen")]
#[command(about = "Generate a field-name reflection test for Boost.PFR")]
#[command(version)]
struct Cli {
    /// Seed for the name generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the aggregates' field names as JSON to this file
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let name_gen = match cli.seed {
        Some(seed) => NameGen::with_seed(seed),
        None => NameGen::new(),
    };
    let mut suite_gen = SuiteGenerator::new(STRUCT_COUNT, name_gen);
    let doc = suite_gen.gen();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", doc).context("failed to write generated source")?;
    out.flush().context("failed to flush stdout")?;

    if let Some(path) = &cli.layout {
        Layout::from_generator(&mut suite_gen).write_to_file(path)?;
        info!(path = %path.display(), "wrote layout");
    }

    info!(
        aggregates = STRUCT_COUNT,
        names = suite_gen.name_gen().allocated_count(),
        "generated test source"
    );
    Ok(())
}
