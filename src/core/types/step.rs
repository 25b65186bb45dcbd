//! Algorithm step sequences and renderer highlight events

use serde::{Deserialize, Serialize};

use super::Edge;

/// One item of an algorithm's ordered output: either the first visit of a
/// vertex or the traversal of an edge. A step sequence is transient; it is
/// consumed once by the playback scheduler and then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    Vertex(String),
    Edge { source: String, target: String },
}

impl Step {
    pub fn vertex(id: impl Into<String>) -> Self {
        Step::Vertex(id.into())
    }

    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        Step::Edge {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Step::Edge { .. })
    }
}

/// Highlight action delivered to the renderer during playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HighlightEvent {
    Vertex(String),
    Edge { source: String, target: String },
    /// Clear all highlights back to the default state.
    Reset,
}

impl From<&Step> for HighlightEvent {
    fn from(step: &Step) -> Self {
        match step {
            Step::Vertex(id) => HighlightEvent::Vertex(id.clone()),
            Step::Edge { source, target } => HighlightEvent::Edge {
                source: source.clone(),
                target: target.clone(),
            },
        }
    }
}

/// Adapt an edge subset (MST, shortest path tree) into a playable step
/// sequence, one edge-traversal step per edge in the given order.
pub fn steps_from_edges(edges: &[Edge]) -> Vec<Step> {
    edges
        .iter()
        .map(|e| Step::edge(e.source.clone(), e.target.clone()))
        .collect()
}
