//! Minimum spanning tree via Kruskal's algorithm

use log::debug;

use crate::core::types::Edge;
use crate::graph::Graph;
use crate::services::algorithm::UnionFind;

/// Kruskal MST over the stored edge list. Direction is ignored for
/// selection; weight is the only criterion.
pub struct Kruskal;

impl Kruskal {
    /// The edge subset of a minimum spanning tree: |V|-1 edges for a
    /// connected graph, a spanning forest (one tree per component) for a
    /// disconnected one. Callers needing the tree/forest distinction check
    /// the component count themselves.
    pub fn spanning_edges(graph: &Graph) -> Vec<Edge> {
        let mut by_weight: Vec<&Edge> = graph.edges().iter().collect();
        // stable sort keeps original list order between equal weights
        by_weight.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut components = UnionFind::new(graph.vertices().len());
        let mut selected = Vec::new();
        for edge in by_weight {
            let (Some(s), Some(t)) = (
                graph.vertex_index(&edge.source),
                graph.vertex_index(&edge.target),
            ) else {
                continue;
            };
            if components.union(s, t) {
                selected.push(edge.clone());
            }
        }
        debug!(
            "kruskal: selected {} of {} edges",
            selected.len(),
            graph.edges().len()
        );
        selected
    }
}
