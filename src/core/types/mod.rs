//! Core graph types
//!
//! Contains the vertex/edge records that make up a graph, the algorithm
//! step sequence consumed by playback, and the highlight events emitted to
//! the renderer.

pub mod edge;
pub mod step;

pub use edge::{Edge, Vertex};
pub use step::{steps_from_edges, HighlightEvent, Step};
