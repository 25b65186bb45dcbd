//! Breadth-first traversal

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::Step;
use crate::graph::Graph;

/// Queue-based breadth-first search producing an ordered step sequence.
pub struct Bfs;

impl Bfs {
    /// Visit everything reachable from `start` level by level. An edge
    /// step is recorded the first time an edge discovers a not-yet-queued
    /// vertex; a vertex step is recorded when the vertex is dequeued.
    pub fn traverse(graph: &Graph, start: &str) -> GraphResult<Vec<Step>> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut steps = Vec::new();

        visited.insert(start.to_string());
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            steps.push(Step::vertex(current.clone()));

            for edge in graph.edges().iter().filter(|e| e.leaves(&current)) {
                let next = edge.other_end(&current);
                if !visited.contains(next) {
                    visited.insert(next.to_string());
                    steps.push(Step::edge(current.clone(), next));
                    queue.push_back(next.to_string());
                }
            }
        }

        debug!("bfs from {}: {} steps", start, steps.len());
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::text_codec::parse;

    #[test]
    fn test_bfs_goes_wide_before_deep() {
        let graph = parse("V={A,B,C,D}\nE={(A,1,B),(A,1,C),(B,1,D)}")
            .expect("parse should succeed");
        let steps = Bfs::traverse(&graph, "A").expect("traversal should succeed");
        assert_eq!(
            steps,
            vec![
                Step::vertex("A"),
                Step::edge("A", "B"),
                Step::edge("A", "C"),
                Step::vertex("B"),
                Step::edge("B", "D"),
                Step::vertex("C"),
                Step::vertex("D"),
            ]
        );
    }

    #[test]
    fn test_bfs_visits_each_reachable_vertex_once() {
        let graph = parse("V={A,B,C}\nE={(A,1,B),(B,1,A),(B,1,C),(C,1,B),(A,2,C)}")
            .expect("parse should succeed");
        let steps = Bfs::traverse(&graph, "A").expect("traversal should succeed");
        let visits: Vec<&Step> = steps.iter().filter(|s| !s.is_edge()).collect();
        assert_eq!(visits.len(), 3);
        let edges: Vec<&Step> = steps.iter().filter(|s| s.is_edge()).collect();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_bfs_skips_disconnected_vertices() {
        let graph = parse("V={A,B,C}\nE={(A,1,B)}").expect("parse should succeed");
        let steps = Bfs::traverse(&graph, "A").expect("traversal should succeed");
        assert!(!steps.contains(&Step::vertex("C")));
    }

    #[test]
    fn test_bfs_unknown_start_fails_fast() {
        let graph = parse("V={A}").expect("parse should succeed");
        assert!(matches!(
            Bfs::traverse(&graph, "Z"),
            Err(GraphError::UnknownVertex(_))
        ));
    }
}
