//! Core type system and error definitions shared across the crate.

pub mod error;
pub mod types;

pub use error::{GraphError, GraphResult};
pub use types::{Edge, HighlightEvent, Step, Vertex};
