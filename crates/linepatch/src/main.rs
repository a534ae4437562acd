//! linepatch - apply AI-generated line edit instructions to text files.
//!
//! The binary wires the two engine halves together for batch use:
//! read files, parse the instruction block, apply, write.
//!
//! # Examples
//!
//! ```bash
//! # Parse an instruction block and inspect the operations as JSON
//! linepatch parse instructions.txt
//!
//! # Full pipeline: instructions from a file, result to stdout
//! linepatch apply src/original.py instructions.txt
//!
//! # Instructions from stdin, result written to a file
//! generator-cli < request.txt | linepatch apply src/original.py - -o patched.py
//!
//! # Render the instruction-request prompt for the upstream generator
//! linepatch prompt src/original.py src/suggested.py
//! ```

mod cli;
mod files;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics (e.g. skipped instruction lines) go to stderr via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    cli::run(args)
}
