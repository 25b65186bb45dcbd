//! GraphVis - A lightweight graph visualization core implemented in Rust
//!
//! This crate provides the data model and algorithm engine behind a graph
//! visualizer: a canonical in-memory graph, a textual codec and a sentence
//! similarity builder that produce it, edit-time edge reconciliation, the
//! four classic algorithms (DFS, BFS, Kruskal MST, Dijkstra) and a
//! cancellable playback scheduler that replays algorithm output as timed
//! highlight events for an external renderer.

pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod services;
pub mod utils;
