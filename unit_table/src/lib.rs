//! # Unit Table
//!
//! The definition table for `convert`: the records that describe units and
//! the pairwise relations between them, the line-oriented definition file
//! format, and the lookup rules for finding that file on disk.
//!
//! This crate holds no graph logic. It produces a stream of
//! [`DefinitionRecord`]s that `unit_convert` turns into a unit graph.

pub mod error;
pub mod locate;
pub mod parser;
pub mod records;

pub use error::*;
pub use locate::*;
pub use parser::*;
pub use records::*;
