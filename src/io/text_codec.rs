//! Explicit graph text format
//!
//! ```text
//! V={A,B,C}
//! E={(A,1,B),(B,2,C)}
//! ```
//!
//! Ids inside `V={}` are trimmed of surrounding whitespace; an edge record is
//! `(source,weight,target)` with a decimal weight. A missing section parses
//! to an empty list, never an error; a non-numeric weight is an explicit
//! parse failure. Raw edges are reconciled on the way in, so a reciprocal
//! same-weight pair arrives as a single undirected edge.

use log::info;
use regex::Regex;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{Edge, Vertex};
use crate::graph::reconcile::reconcile;
use crate::graph::Graph;

/// Content beginning with the literal prefix `V={` is the explicit format;
/// anything else is free text for the similarity builder.
pub fn is_explicit(text: &str) -> bool {
    text.starts_with("V={")
}

/// Parse explicit-format text into a reconciled graph.
pub fn parse(text: &str) -> GraphResult<Graph> {
    let vertex_re = Regex::new(r"V=\{([^}]+)\}").unwrap();
    let edge_re = Regex::new(r"E=\{([^}]+)\}").unwrap();

    let vertices: Vec<Vertex> = match vertex_re.captures(text) {
        Some(caps) => caps[1]
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Vertex::new)
            .collect(),
        None => Vec::new(),
    };

    let mut edges = Vec::new();
    if let Some(caps) = edge_re.captures(text) {
        for record in caps[1].split("),") {
            edges.push(parse_edge_record(record)?);
        }
    }

    let graph = Graph::from_parts(vertices, reconcile(edges))?;
    info!(
        "parsed graph: {} vertices, {} edges",
        graph.vertices().len(),
        graph.edges().len()
    );
    Ok(graph)
}

/// One `(source,weight,target)` record, parentheses optional since the list
/// is split on `),`.
fn parse_edge_record(record: &str) -> GraphResult<Edge> {
    let inner = record.trim().trim_matches(|c| c == '(' || c == ')');
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [source, raw_weight, target] = parts.as_slice() else {
        return Err(GraphError::Parse(format!("malformed edge record: {record:?}")));
    };
    let weight: f64 = raw_weight
        .parse()
        .map_err(|_| GraphError::InvalidWeight(raw_weight.to_string()))?;
    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight(raw_weight.to_string()));
    }
    Ok(Edge::directed(*source, weight, *target))
}

/// Render a graph back into the explicit format. Every stored edge is
/// written exactly once; an undirected edge is not duplicated in both
/// orientations.
pub fn serialize(graph: &Graph) -> String {
    let ids: Vec<&str> = graph.vertices().iter().map(|v| v.id.as_str()).collect();
    let records: Vec<String> = graph
        .edges()
        .iter()
        .map(|e| format!("({},{},{})", e.source, e.weight, e.target))
        .collect();
    format!("V={{{}}}\nE={{{}}}", ids.join(","), records.join(","))
}

/// Serialization for a downloadable artifact: the explicit format plus a
/// write-only `Last_modified: DD/MM/YYYY` trailer line.
pub fn serialize_download(graph: &Graph) -> String {
    let date = chrono::Local::now().format("%d/%m/%Y");
    format!("{}\nLast_modified: {}\n", serialize(graph), date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_merges_reciprocal_pair() {
        let graph = parse("V={A,B,C}\nE={(A,1,B),(B,1,A)}").expect("parse should succeed");
        assert_eq!(graph.vertices().len(), 3);
        assert_eq!(graph.edges().len(), 1);
        assert!(!graph.edges()[0].directed);
        assert_eq!(graph.edges()[0].weight, 1.0);
    }

    #[test]
    fn test_parse_keeps_different_weight_pair_directed() {
        let graph = parse("V={A,B}\nE={(A,2,B),(B,3,A)}").expect("parse should succeed");
        assert_eq!(graph.edges().len(), 2);
        assert!(graph.edges().iter().all(|e| e.directed));
    }

    #[test]
    fn test_parse_trims_ids_and_weights() {
        let graph = parse("V={ A , B }\nE={( A , 1.5 , B )}").expect("parse should succeed");
        assert_eq!(graph.vertices()[0].id, "A");
        assert_eq!(graph.edges()[0].weight, 1.5);
    }

    #[test]
    fn test_missing_sections_parse_to_empty_graph() {
        let graph = parse("V={A,B}").expect("parse should succeed");
        assert_eq!(graph.vertices().len(), 2);
        assert!(graph.edges().is_empty());

        let empty = parse("").expect("parse should succeed");
        assert!(empty.vertices().is_empty());
        assert!(empty.edges().is_empty());
    }

    #[test]
    fn test_non_numeric_weight_is_explicit_failure() {
        let result = parse("V={A,B}\nE={(A,heavy,B)}");
        assert!(matches!(result, Err(GraphError::InvalidWeight(_))));
        let nan = parse("V={A,B}\nE={(A,NaN,B)}");
        assert!(matches!(nan, Err(GraphError::InvalidWeight(_))));
    }

    #[test]
    fn test_edge_to_unknown_vertex_is_rejected() {
        let result = parse("V={A}\nE={(A,1,B)}");
        assert!(matches!(result, Err(GraphError::UnknownVertex(_))));
    }

    #[test]
    fn test_serialize_round_trip_preserves_graph() {
        let graph = parse("V={A,B,C,D}\nE={(A,1,B),(B,1,A),(C,2,D),(D,3,C)}")
            .expect("parse should succeed");
        let text = serialize(&graph);
        let reparsed = parse(&text).expect("serialized output should parse");

        assert_eq!(graph.vertices(), reparsed.vertices());
        assert_eq!(graph.edges(), reparsed.edges());
    }

    #[test]
    fn test_serialize_writes_undirected_edge_once() {
        let graph = parse("V={A,B}\nE={(A,1,B),(B,1,A)}").expect("parse should succeed");
        let text = serialize(&graph);
        assert_eq!(text.matches("(A,1,B)").count(), 1);
        assert!(!text.contains("(B,1,A)"));
    }

    #[test]
    fn test_download_artifact_carries_trailer() {
        let graph = parse("V={A}").expect("parse should succeed");
        let text = serialize_download(&graph);
        let trailer = text
            .lines()
            .last()
            .expect("artifact should have a trailer line");
        let re = Regex::new(r"^Last_modified: \d{2}/\d{2}/\d{4}$").unwrap();
        assert!(re.is_match(trailer));
    }

    #[test]
    fn test_is_explicit_prefix_classification() {
        assert!(is_explicit("V={A,B}"));
        assert!(!is_explicit("Cats chase mice."));
        assert!(!is_explicit(" V={A}"));
    }
}
