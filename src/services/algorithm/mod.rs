//! Graph algorithms
//!
//! All algorithms run to completion synchronously against an immutable
//! graph reference and return a full result; ordering is deterministic
//! given the stored edge list order.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod union_find;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use kruskal::Kruskal;
pub use union_find::UnionFind;
