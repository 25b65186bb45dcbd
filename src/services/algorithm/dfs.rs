//! Depth-first traversal

use std::collections::HashSet;

use log::debug;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::Step;
use crate::graph::Graph;

/// Recursive depth-first search producing an ordered step sequence.
pub struct Dfs;

impl Dfs {
    /// Visit everything reachable from `start`. Outgoing edges are
    /// considered in stored list order; a vertex-visit step is recorded on
    /// first visit and an edge-traversal step for each edge used to reach an
    /// unvisited neighbor.
    pub fn traverse(graph: &Graph, start: &str) -> GraphResult<Vec<Step>> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut visited = HashSet::new();
        let mut steps = Vec::new();
        Self::visit(graph, start, &mut visited, &mut steps);
        debug!("dfs from {}: {} steps", start, steps.len());
        Ok(steps)
    }

    fn visit(graph: &Graph, current: &str, visited: &mut HashSet<String>, steps: &mut Vec<Step>) {
        visited.insert(current.to_string());
        steps.push(Step::vertex(current));

        for edge in graph.edges().iter().filter(|e| e.leaves(current)) {
            let next = edge.other_end(current);
            if !visited.contains(next) {
                steps.push(Step::edge(current, next));
                Self::visit(graph, next, visited, steps);
            }
        }
    }
}
