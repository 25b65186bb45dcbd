//! Unified error handling for GraphVis
//!
//! Parse and mutation errors are surfaced synchronously to the caller;
//! nothing is retried. `GraphResult<T>` is the return type used throughout
//! the library.

use thiserror::Error;

/// Unified error type for graph construction, mutation and algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid edge weight: {0:?}")]
    InvalidWeight(String),

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unified result type
pub type GraphResult<T> = Result<T, GraphError>;
