//! Canonical in-memory graph model
//!
//! The graph is the sole long-lived entity in the system: it is created by
//! the text codec or the similarity builder, mutated in place through the
//! reconciliation rules in [`reconcile`], and read (never mutated) by the
//! algorithm services.

pub mod reconcile;

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{Edge, Vertex};

/// Outcome of the adapter-boundary vertex toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexToggle {
    Inserted,
    Removed,
}

/// A set of vertices (insertion order preserved for stable rendering and
/// serialization) and a list of edges, with an optional sentence side table
/// for text-derived graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    sentences: HashMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from already-reconciled parts, rejecting edges whose
    /// endpoints do not name an existing vertex.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut graph = Self {
            vertices,
            edges: Vec::new(),
            sentences: HashMap::new(),
        };
        for edge in edges {
            if !graph.contains_vertex(&edge.source) {
                return Err(GraphError::UnknownVertex(edge.source));
            }
            if !graph.contains_vertex(&edge.target) {
                return Err(GraphError::UnknownVertex(edge.target));
            }
            graph.edges.push(edge);
        }
        Ok(graph)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    /// Sentence side table. Empty for explicit-format graphs.
    pub fn sentences(&self) -> &HashMap<String, String> {
        &self.sentences
    }

    pub fn sentence_of(&self, id: &str) -> Option<&str> {
        self.sentences.get(id).map(String::as_str)
    }

    pub(crate) fn attach_sentence(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.sentences.insert(id.into(), text.into());
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.iter().any(|v| v.id == id)
    }

    pub fn vertex_index(&self, id: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    /// Insert a new vertex. Inserting an id that already exists is an error,
    /// not a toggle; see [`Graph::toggle_vertex`] for the adapter-boundary
    /// upsert-or-remove contract.
    pub fn insert_vertex(&mut self, id: impl Into<String>) -> GraphResult<()> {
        let id = id.into();
        if self.contains_vertex(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.push(Vertex::new(id));
        Ok(())
    }

    /// Remove a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<()> {
        let index = self
            .vertex_index(id)
            .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))?;
        self.vertices.remove(index);
        let before = self.edges.len();
        self.edges.retain(|e| e.source != id && e.target != id);
        debug!(
            "removed vertex {} and {} incident edge(s)",
            id,
            before - self.edges.len()
        );
        self.sentences.remove(id);
        Ok(())
    }

    /// Upsert-or-remove toggle: insert the id if absent, otherwise delete it
    /// along with its incident edges. Kept for UI adapters that edit through
    /// a single mutation request; library callers should prefer the explicit
    /// insert/remove operations.
    pub fn toggle_vertex(&mut self, id: &str) -> VertexToggle {
        if self.contains_vertex(id) {
            // the id was just checked, remove cannot fail
            let _ = self.remove_vertex(id);
            VertexToggle::Removed
        } else {
            let _ = self.insert_vertex(id.to_string());
            VertexToggle::Inserted
        }
    }

    /// N x N weight matrix over vertices in insertion order. An undirected
    /// edge fills both cells, a directed edge only `[source][target]`.
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for edge in &self.edges {
            let (Some(s), Some(t)) = (
                self.vertex_index(&edge.source),
                self.vertex_index(&edge.target),
            ) else {
                continue;
            };
            matrix[s][t] = edge.weight;
            if !edge.directed {
                matrix[t][s] = edge.weight;
            }
        }
        matrix
    }
}
