//! Single-source shortest paths
//!
//! Classic O(V^2) Dijkstra: scan the unvisited set for the minimum
//! tentative distance, relax that vertex's outgoing edges, stop early once
//! the minimum remaining distance is infinite.
//!
//! Relaxation follows only an edge's stored `source -> target` orientation.
//! An undirected edge therefore relaxes in its stored direction alone;
//! callers that need the reverse direction must store the edge accordingly.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::Edge;
use crate::graph::Graph;

pub struct Dijkstra;

impl Dijkstra {
    /// Tentative distance of every vertex from `start`; unreachable
    /// vertices stay at `f64::INFINITY`.
    pub fn distances(graph: &Graph, start: &str) -> GraphResult<HashMap<String, f64>> {
        let (distances, _) = Self::run(graph, start)?;
        Ok(distances)
    }

    /// The set of edges used in the shortest path tree rooted at `start`,
    /// produced by unwinding the predecessor chain of every reachable
    /// vertex. Order follows vertex insertion order.
    pub fn shortest_path_tree(graph: &Graph, start: &str) -> GraphResult<Vec<Edge>> {
        let (_, previous) = Self::run(graph, start)?;
        let tree = graph
            .vertices()
            .iter()
            .filter_map(|v| previous.get(&v.id).cloned())
            .collect();
        Ok(tree)
    }

    fn run(
        graph: &Graph,
        start: &str,
    ) -> GraphResult<(HashMap<String, f64>, HashMap<String, Edge>)> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut distances: HashMap<String, f64> = graph
            .vertices()
            .iter()
            .map(|v| (v.id.clone(), f64::INFINITY))
            .collect();
        distances.insert(start.to_string(), 0.0);

        let mut previous: HashMap<String, Edge> = HashMap::new();
        let mut unvisited: HashSet<String> =
            graph.vertices().iter().map(|v| v.id.clone()).collect();

        while !unvisited.is_empty() {
            // scan in insertion order so distance ties resolve deterministically
            let Some(current) = graph
                .vertices()
                .iter()
                .filter(|v| unvisited.contains(&v.id))
                .min_by(|a, b| distances[&a.id].total_cmp(&distances[&b.id]))
                .map(|v| v.id.clone())
            else {
                break;
            };
            if distances[&current].is_infinite() {
                // everything still unvisited is unreachable
                break;
            }

            for edge in graph.edges().iter().filter(|e| e.source == current) {
                let candidate = distances[&current] + edge.weight;
                if candidate < distances[&edge.target] {
                    distances.insert(edge.target.clone(), candidate);
                    previous.insert(edge.target.clone(), edge.clone());
                }
            }

            unvisited.remove(&current);
        }

        debug!(
            "dijkstra from {}: {} reachable vertices",
            start,
            distances.values().filter(|d| d.is_finite()).count()
        );
        Ok((distances, previous))
    }
}
