//! Error types for graph building and conversion.

use thiserror::Error;
use unit_table::DefinitionError;

/// Failures raised by the unit graph and the path converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("conversion factor from {from} to {to} is zero")]
    ZeroFactor { from: String, to: String },

    #[error("unit {0} not found")]
    UnknownUnit(String),

    #[error("cannot convert {from} to {to}")]
    NoConversionPath { from: String, to: String },

    /// An inverted relation was reached with an accumulated value of zero.
    #[error("cannot convert zero value from {from} to {to}")]
    DivisionByZero { from: String, to: String },

    /// A stored graph breaks the invariants `UnitGraph` maintains.
    #[error("invalid unit graph: {0}")]
    InvalidGraph(String),
}

/// Any failure between reading definitions and producing a result.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
