//! Edge reconciliation
//!
//! The undirected-uniqueness invariant is maintained by a single pure
//! function, [`reconcile`], applied after every edit-time mutation: at most
//! one edge record may exist per unordered vertex pair once the pair is
//! undirected, and a reciprocal pair of directed edges with equal weight is
//! always collapsed into one undirected record.

use log::debug;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::Edge;
use crate::graph::Graph;

/// What a `set_edge_weight` request did to the edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChange {
    Inserted,
    Updated,
    Removed,
}

/// Sweep an edge list into its reconciled form:
///
/// - zero-weight records are dropped;
/// - a directed pair over the same unordered endpoints with equal weight is
///   collapsed into one undirected record carrying that weight;
/// - once a pair is undirected, any further record over the same pair is
///   absorbed into it.
///
/// Records keep the position of their first occurrence, so the stored edge
/// order stays stable across sweeps.
pub fn reconcile(edges: Vec<Edge>) -> Vec<Edge> {
    let mut kept: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        if edge.weight == 0.0 {
            continue;
        }
        match kept.iter().position(|k| k.same_pair(&edge)) {
            Some(i) => {
                if !kept[i].directed {
                    // pair already undirected; a second record may not coexist
                    continue;
                }
                if kept[i].same_orientation(&edge) {
                    if kept[i].weight == edge.weight {
                        // plain duplicate
                        continue;
                    }
                    kept.push(edge);
                } else if kept[i].weight == edge.weight {
                    // reciprocal pair of equal weight becomes one undirected edge
                    kept[i].directed = false;
                } else {
                    // opposing directions with different weights stay independent
                    kept.push(edge);
                }
            }
            None => kept.push(edge),
        }
    }
    debug_assert!(undirected_pairs_unique(&kept));
    kept
}

/// Invariant check: no unordered pair is represented by more than one record
/// once any record for it is undirected.
fn undirected_pairs_unique(edges: &[Edge]) -> bool {
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            if a.same_pair(b) && (!a.directed || !b.directed) {
                return false;
            }
        }
    }
    true
}

impl Graph {
    /// Apply an edit-time edge mutation request.
    ///
    /// `weight == 0` deletes any edge matching the unordered pair in either
    /// orientation. A non-zero weight updates an existing edge in place
    /// (exact orientation preferred, then an undirected record, then the
    /// reverse directed edge) or inserts a new directed edge when the pair
    /// has no record at all. Every change is followed by one [`reconcile`]
    /// sweep.
    pub fn set_edge_weight(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
    ) -> GraphResult<EdgeChange> {
        if !self.contains_vertex(source) {
            return Err(GraphError::UnknownVertex(source.to_string()));
        }
        if !self.contains_vertex(target) {
            return Err(GraphError::UnknownVertex(target.to_string()));
        }

        let change = if weight == 0.0 {
            let edges = self.edges_mut();
            let before = edges.len();
            edges.retain(|e| !e.connects(source, target));
            if edges.len() == before {
                debug!("delete request for absent edge {}-{}", source, target);
            }
            EdgeChange::Removed
        } else if let Some(existing) = self.find_edge_mut(source, target) {
            existing.weight = weight;
            EdgeChange::Updated
        } else {
            self.edges_mut().push(Edge::directed(source, weight, target));
            EdgeChange::Inserted
        };

        let swept = reconcile(std::mem::take(self.edges_mut()));
        *self.edges_mut() = swept;
        Ok(change)
    }

    /// The edge a `(source, target)` edit request addresses: the exact
    /// stored orientation or an undirected record first, the reverse
    /// directed edge second.
    fn find_edge_mut(&mut self, source: &str, target: &str) -> Option<&mut Edge> {
        let edges = self.edges_mut();
        let exact = edges
            .iter()
            .position(|e| (e.source == source && e.target == target) || !e.directed && e.connects(source, target));
        let index = exact.or_else(|| {
            edges
                .iter()
                .position(|e| e.source == target && e.target == source)
        })?;
        Some(&mut edges[index])
    }
}
