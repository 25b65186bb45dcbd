//! Vertex and edge record definitions

use serde::{Deserialize, Serialize};

/// A named node in a graph. Identity is the id string; position and visual
/// state belong to the external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
}

impl Vertex {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A weighted relationship between two vertices.
///
/// `directed = false` means the record stands for a single bidirectional
/// relationship between the unordered pair; such a record must never coexist
/// with a second edge over the same pair. Two directed edges between the
/// same vertices in opposite orientations are independent as long as their
/// weights differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub directed: bool,
}

impl Edge {
    pub fn directed(source: impl Into<String>, weight: f64, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            directed: true,
        }
    }

    pub fn undirected(source: impl Into<String>, weight: f64, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            directed: false,
        }
    }

    /// True if `other` connects the same unordered vertex pair.
    pub fn same_pair(&self, other: &Edge) -> bool {
        self.connects(&other.source, &other.target)
    }

    /// True if this edge connects the unordered pair `(a, b)`.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// True if `other` has the same stored orientation.
    pub fn same_orientation(&self, other: &Edge) -> bool {
        self.source == other.source && self.target == other.target
    }

    /// True if this edge can be walked out of `id`: always from its stored
    /// source, and from its target as well when undirected.
    pub fn leaves(&self, id: &str) -> bool {
        self.source == id || (!self.directed && self.target == id)
    }

    /// The endpoint reached when walking this edge out of `from`.
    pub fn other_end(&self, from: &str) -> &str {
        if self.source == from {
            &self.target
        } else {
            &self.source
        }
    }
}
