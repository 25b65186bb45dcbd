//! Reading and writing graphs
//!
//! Two input front ends produce the same model: the explicit
//! `V={...}` / `E={...}` text codec, and the sentence-similarity builder for
//! free text. Classification between the two is by the literal `V={` prefix.

pub mod similarity;
pub mod text_codec;

use crate::config::Config;
use crate::core::error::GraphResult;
use crate::graph::Graph;

pub use similarity::SimilarityBuilder;

/// Build a graph from raw input text, dispatching on the explicit-format
/// prefix: `V={...}` content goes through the codec, anything else through
/// the similarity builder.
pub fn load_graph(text: &str, config: &Config) -> GraphResult<Graph> {
    if text_codec::is_explicit(text) {
        text_codec::parse(text)
    } else {
        SimilarityBuilder::new(config.similarity_min_word_len).build(text)
    }
}
