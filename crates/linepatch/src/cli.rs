//! Command-line interface: argument definitions and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use linepatch_core::build_instruction_prompt;
use linepatch_engine::{InstructionParser, PatchApplier};
use tracing::info;

use crate::files;

#[derive(Parser)]
#[command(
    name = "linepatch",
    about = "Apply AI-generated line edit instructions to text files",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an instruction block and print the operations as JSON
    Parse {
        /// Instruction file, or `-` for stdin
        instructions: PathBuf,
    },
    /// Parse an instruction block and apply it to the original file
    Apply {
        /// File holding the original text
        original: PathBuf,
        /// Instruction file, or `-` for stdin
        instructions: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the instruction-request prompt for the upstream generator
    Prompt {
        /// File holding the original text
        original: PathBuf,
        /// File holding the suggested text
        suggestion: PathBuf,
    },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Parse { instructions } => {
            let block = read_instructions(&instructions)?;
            let ops = InstructionParser::parse(&block);
            println!("{}", serde_json::to_string_pretty(&ops)?);
        }
        Command::Apply {
            original,
            instructions,
            output,
        } => {
            let source = files::read_file(&original)
                .with_context(|| format!("failed to read original file {}", original.display()))?;
            let block = read_instructions(&instructions)?;

            // The empty/ERROR sentinels both parse to "nothing to apply";
            // the distinction between them is this boundary's job.
            let trimmed = block.trim();
            if trimmed.is_empty() {
                bail!("no instructions supplied");
            }
            if trimmed.to_uppercase().starts_with("ERROR:") {
                bail!("upstream generator failed: {trimmed}");
            }

            let ops = InstructionParser::parse(&block);
            info!(op_count = ops.len(), "applying parsed operations");
            let patched = PatchApplier::apply(&source, &ops);

            match output {
                Some(path) => {
                    files::write_file(&path, &patched)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "patched text written");
                }
                None => println!("{patched}"),
            }
        }
        Command::Prompt {
            original,
            suggestion,
        } => {
            let original_text = files::read_file(&original)
                .with_context(|| format!("failed to read original file {}", original.display()))?;
            let suggestion_text = files::read_file(&suggestion).with_context(|| {
                format!("failed to read suggestion file {}", suggestion.display())
            })?;
            println!("{}", build_instruction_prompt(&original_text, &suggestion_text));
        }
    }
    Ok(())
}

/// Read the instruction block from a file, or from stdin for `-`.
fn read_instructions(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read instructions from stdin")
    } else {
        Ok(files::read_file(path)
            .with_context(|| format!("failed to read instruction file {}", path.display()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_apply_with_output() {
        let args =
            Args::try_parse_from(["linepatch", "apply", "orig.py", "ops.txt", "-o", "out.py"])
                .unwrap();
        match args.command {
            Command::Apply {
                original,
                instructions,
                output,
            } => {
                assert_eq!(original, PathBuf::from("orig.py"));
                assert_eq!(instructions, PathBuf::from("ops.txt"));
                assert_eq!(output, Some(PathBuf::from("out.py")));
            }
            _ => panic!("Expected apply subcommand"),
        }
    }

    #[test]
    fn test_args_parse_stdin_marker() {
        let args = Args::try_parse_from(["linepatch", "parse", "-"]).unwrap();
        match args.command {
            Command::Parse { instructions } => assert_eq!(instructions, PathBuf::from("-")),
            _ => panic!("Expected parse subcommand"),
        }
    }

    #[test]
    fn test_args_reject_missing_subcommand() {
        assert!(Args::try_parse_from(["linepatch"]).is_err());
    }
}
