//! Graph model: an immutable directed graph of labelled vertices.
//!
//! Wraps a petgraph `DiGraph`. Vertex and edge indices follow insertion order and
//! are the stable keys every later layout stage uses for tie-breaking. Parallel
//! edges and self-loops are kept as distinct edges.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::GraphError;

/// A vertex. The label doubles as its identity; `\n` separates label lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Label text split into display lines.
    pub fn lines(&self) -> Vec<&str> {
        self.label.split('\n').collect()
    }

    /// (widest line, line count) in characters.
    pub fn label_size(&self) -> (i64, i64) {
        let lines = self.lines();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        (width as i64, lines.len() as i64)
    }
}

/// A directed edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Immutable directed graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    digraph: DiGraph<Vertex, ()>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    /// A graph with no vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from a vertex set and an ordered edge list.
    ///
    /// Duplicate vertex labels collapse into one vertex. Every edge endpoint must
    /// name a vertex from `vertices`.
    pub fn new<V, E, S>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::empty();
        for v in vertices {
            graph.insert_vertex(v.as_ref());
        }
        for (edge_index, (from, to)) in edges.into_iter().enumerate() {
            let source = graph.require(from.as_ref(), edge_index)?;
            let target = graph.require(to.as_ref(), edge_index)?;
            graph.digraph.add_edge(source, target, ());
        }
        Ok(graph)
    }

    fn require(&self, label: &str, edge_index: usize) -> Result<NodeIndex, GraphError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                edge_index,
                label: label.to_string(),
            })
    }

    fn insert_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.digraph.add_node(Vertex::new(label));
        self.index.insert(label.to_string(), idx);
        idx
    }

    pub fn vertex_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Vertex by insertion index. Panics if out of range, like slice indexing.
    pub fn vertex(&self, idx: usize) -> &Vertex {
        &self.digraph[NodeIndex::new(idx)]
    }

    pub fn label(&self, idx: usize) -> &str {
        &self.vertex(idx).label
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.digraph.raw_nodes().iter().map(|n| &n.weight)
    }

    /// Edge by insertion index. Panics if out of range, like slice indexing.
    pub fn edge(&self, idx: usize) -> Edge {
        let raw = &self.digraph.raw_edges()[idx];
        Edge::new(raw.source().index(), raw.target().index())
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| Edge::new(e.source().index(), e.target().index()))
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|idx| idx.index())
    }

    /// True when the graph has no directed cycle (self-loops count as cycles).
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    pub fn in_degree(&self, idx: usize) -> usize {
        self.digraph
            .edges_directed(NodeIndex::new(idx), Direction::Incoming)
            .count()
    }

    pub fn out_degree(&self, idx: usize) -> usize {
        self.digraph
            .edges_directed(NodeIndex::new(idx), Direction::Outgoing)
            .count()
    }
}

/// Incremental graph construction: vertices are idempotent, edges additive.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, label: impl AsRef<str>) -> &mut Self {
        self.graph.insert_vertex(label.as_ref());
        self
    }

    /// Adds the edge, creating either endpoint if it does not exist yet.
    pub fn add_edge(&mut self, from: impl AsRef<str>, to: impl AsRef<str>) -> &mut Self {
        let source = self.graph.insert_vertex(from.as_ref());
        let target = self.graph.insert_vertex(to.as_ref());
        self.graph.digraph.add_edge(source, target, ());
        self
    }

    /// Snapshot the graph built so far.
    pub fn build(&self) -> Graph {
        self.graph.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
