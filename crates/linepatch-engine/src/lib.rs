//! Line-oriented edit instruction parsing and application.
//!
//! This crate turns the free-form instruction block produced by an upstream
//! text generator into typed edit operations and applies them to an original
//! text in one deterministic pass.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Engine)** crate:
//! - Depends on: linepatch-core (operation types)
//! - Used by: linepatch (CLI binary)
//!
//! # Usage
//!
//! ```rust
//! use linepatch_engine::{InstructionParser, PatchApplier};
//!
//! let ops = InstructionParser::parse("INSERT 2: line2\nDELETE 3");
//! let patched = PatchApplier::apply("line1\nline3\nline_gone", &ops);
//!
//! assert_eq!(patched, "line1\nline2\nline3");
//! ```
//!
//! The two halves never call each other: the parser produces a `Vec<EditOp>`
//! and the applier consumes one, so either can be used standalone.

mod applier;
mod parser;

pub use applier::PatchApplier;
pub use parser::InstructionParser;
