//! Core types for the linepatch workspace.
//!
//! This crate provides the foundation types used by the other linepatch
//! crates. It has ZERO internal crate dependencies and only depends on
//! external libraries.
//!
//! ## Architecture Principle
//!
//! linepatch-core sits at the bottom of the dependency hierarchy:
//! - Layer 1 (Foundation): linepatch-core ← YOU ARE HERE
//! - Layer 2 (Engine): linepatch-engine
//! - Layer 3 (Application): linepatch (CLI binary)

pub mod numbering;
pub mod op;
pub mod prompt;

// Re-exports
pub use numbering::{number_lines, number_lines_vec};
pub use op::EditOp;
pub use prompt::{build_instruction_prompt, SYSTEM_PROMPT};
