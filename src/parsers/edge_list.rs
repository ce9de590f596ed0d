//! Line-oriented edge list.
//!
//! ```text
//! # comment
//! A -> B
//! B -> C -> A
//! Lonely
//! Two\nlines -> A
//! ```
//!
//! Each line is a vertex or a chain of `->` edges. Vertices appear in order of
//! first mention and `\n` inside a label starts a new label line.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Parser;
use crate::error::{Error, Result};
use crate::layout::graph::{Graph, GraphBuilder};

static ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*->\s*").unwrap());

pub struct EdgeListParser;

fn unescape(label: &str) -> String {
    label.replace("\\n", "\n")
}

impl Parser for EdgeListParser {
    fn parse(&self, src: &str) -> Result<Graph> {
        let mut builder = GraphBuilder::new();
        for (idx, raw) in src.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let labels: Vec<String> = ARROW.split(line).map(|s| unescape(s.trim())).collect();
            if let Some(pos) = labels.iter().position(|l| l.is_empty()) {
                return Err(Error::Parse {
                    line: idx + 1,
                    message: format!("missing vertex label at position {}", pos + 1),
                });
            }
            match labels.as_slice() {
                [single] => {
                    builder.add_vertex(single);
                }
                chain => {
                    for pair in chain.windows(2) {
                        builder.add_edge(&pair[0], &pair[1]);
                    }
                }
            }
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_edge_list.rs"]
mod tests;
