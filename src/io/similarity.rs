//! Sentence similarity graph builder
//!
//! Free text is split into sentences; each sentence becomes one vertex
//! `v0, v1, ...` in order of appearance, and two sentences are connected by
//! an undirected edge weighted by the number of significant words they
//! share. Significance is a word-character run of at least the configured
//! minimum length (default 4), compared case-sensitively with set semantics.

use std::collections::HashSet;

use log::info;
use regex::Regex;

use crate::core::error::GraphResult;
use crate::core::types::{Edge, Vertex};
use crate::graph::Graph;

/// Default minimum length for a word to count toward similarity.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

pub struct SimilarityBuilder {
    min_word_len: usize,
}

impl Default for SimilarityBuilder {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

impl SimilarityBuilder {
    pub fn new(min_word_len: usize) -> Self {
        Self { min_word_len }
    }

    /// Derive a similarity graph from free text. The sentence side table of
    /// the returned graph maps each generated vertex id to the literal
    /// sentence it stands for.
    pub fn build(&self, text: &str) -> GraphResult<Graph> {
        let sentences = split_sentences(text);

        let vertices: Vec<Vertex> = (0..sentences.len())
            .map(|i| Vertex::new(format!("v{i}")))
            .collect();

        let word_sets: Vec<HashSet<&str>> = sentences
            .iter()
            .map(|s| significant_words(s, self.min_word_len))
            .collect();

        let mut edges = Vec::new();
        for i in 0..sentences.len() {
            for j in (i + 1)..sentences.len() {
                let shared = word_sets[i].intersection(&word_sets[j]).count();
                if shared > 0 {
                    edges.push(Edge::undirected(
                        format!("v{i}"),
                        shared as f64,
                        format!("v{j}"),
                    ));
                }
            }
        }

        let mut graph = Graph::from_parts(vertices, edges)?;
        for (i, sentence) in sentences.iter().enumerate() {
            graph.attach_sentence(format!("v{i}"), sentence.clone());
        }
        info!(
            "similarity graph: {} sentences, {} edges",
            graph.vertices().len(),
            graph.edges().len()
        );
        Ok(graph)
    }
}

/// Sentence boundary: terminal punctuation followed by whitespace. A
/// trailing fragment without terminal punctuation is still a sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let boundary = Regex::new(r"[.?!]\s+").unwrap();
    boundary
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct word-character runs of at least `min_len` characters,
/// case-sensitive.
fn significant_words(sentence: &str, min_len: usize) -> HashSet<&str> {
    let word = Regex::new(r"\w+").unwrap();
    word.find_iter(sentence)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() >= min_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_become_ordered_vertices() {
        let graph = SimilarityBuilder::default()
            .build("Cats chase mice. Mice eat cheese. Dogs chase cats.")
            .expect("build should succeed");
        let ids: Vec<&str> = graph.vertices().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v0", "v1", "v2"]);
        assert_eq!(graph.sentence_of("v0"), Some("Cats chase mice"));
        assert_eq!(graph.sentence_of("v1"), Some("Mice eat cheese"));
    }

    #[test]
    fn test_shared_words_are_counted_case_sensitively() {
        let graph = SimilarityBuilder::default()
            .build("Cats chase mice. Mice eat cheese. Dogs chase cats.")
            .expect("build should succeed");
        // only "chase" (length 5) is shared, between v0 and v2; "mice"/"Mice"
        // and "cats"/"Cats" differ by case
        assert_eq!(graph.edges().len(), 1);
        let edge = &graph.edges()[0];
        assert!(edge.connects("v0", "v2"));
        assert_eq!(edge.weight, 1.0);
        assert!(!edge.directed);
    }

    #[test]
    fn test_duplicate_words_count_once() {
        let graph = SimilarityBuilder::default()
            .build("wolves wolves wolves howl. wolves gather.")
            .expect("build should succeed");
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].weight, 1.0);
    }

    #[test]
    fn test_trailing_fragment_is_a_sentence() {
        let graph = SimilarityBuilder::default()
            .build("Ships sail north. Ships anchor")
            .expect("build should succeed");
        assert_eq!(graph.vertices().len(), 2);
        assert_eq!(graph.sentence_of("v1"), Some("Ships anchor"));
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_short_words_do_not_connect() {
        let graph = SimilarityBuilder::default()
            .build("The cat sat. The dog ran.")
            .expect("build should succeed");
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_min_word_len_is_tunable() {
        let graph = SimilarityBuilder::new(3)
            .build("The cat sat. The cat ran.")
            .expect("build should succeed");
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].weight, 2.0);
    }

    #[test]
    fn test_explicit_format_graph_has_empty_sentence_table() {
        let graph = crate::io::text_codec::parse("V={A,B}\nE={(A,1,B)}")
            .expect("parse should succeed");
        assert!(graph.sentences().is_empty());
    }
}
