//! Layering: connected components, cycle removal, longest-path layer
//! assignment and dummy insertion for edges that span several layers.
//!
//! Everything here works on one weakly connected component at a time. Node ids
//! in a [`Layering`] double as the stable tie-break key: real vertices come
//! first in graph order, then dummies in edge order.

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use super::graph::Graph;
use crate::error::LayoutError;

// ─── Components ──────────────────────────────────────────────────────────────

/// Weakly connected components, each sorted by vertex index and listed in
/// order of their smallest vertex.
pub fn components(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut uf = UnionFind::<usize>::new(n);
    for edge in graph.edges() {
        uf.union(edge.source, edge.target);
    }
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut slot: HashMap<usize, usize> = HashMap::new();
    for v in 0..n {
        let root = uf.find(v);
        let idx = *slot.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[idx].push(v);
    }
    groups
}

// ─── Cycle Removal (Greedy-FAS) ──────────────────────────────────────────────

/// Vertex sequence from the Eades-Lin-Smyth heuristic: edges pointing backwards
/// in this sequence form a small feedback arc set.
///
/// Works on local indices `0..node_count`. Ties go to the lowest index.
fn greedy_fas_ordering(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut out_deg = vec![0i64; node_count];
    let mut in_deg = vec![0i64; node_count];
    for &(s, t) in edges {
        succs[s].push(t);
        preds[t].push(s);
        out_deg[s] += 1;
        in_deg[t] += 1;
    }

    let mut active: BTreeSet<usize> = (0..node_count).collect();
    let mut s1: Vec<usize> = Vec::new();
    let mut s2: Vec<usize> = Vec::new();

    while !active.is_empty() {
        loop {
            let sinks: Vec<usize> = active.iter().copied().filter(|&n| out_deg[n] == 0).collect();
            if sinks.is_empty() {
                break;
            }
            for sink in sinks {
                active.remove(&sink);
                s2.push(sink);
                for &pred in &preds[sink] {
                    if active.contains(&pred) {
                        out_deg[pred] -= 1;
                    }
                }
            }
        }

        loop {
            let sources: Vec<usize> = active.iter().copied().filter(|&n| in_deg[n] == 0).collect();
            if sources.is_empty() {
                break;
            }
            for source in sources {
                active.remove(&source);
                s1.push(source);
                for &succ in &succs[source] {
                    if active.contains(&succ) {
                        in_deg[succ] -= 1;
                    }
                }
            }
        }

        let mut best: Option<(usize, i64)> = None;
        for &n in &active {
            let delta = out_deg[n] - in_deg[n];
            if best.is_none_or(|(_, d)| delta > d) {
                best = Some((n, delta));
            }
        }
        if let Some((n, _)) = best {
            active.remove(&n);
            s1.push(n);
            for &succ in &succs[n] {
                if active.contains(&succ) {
                    in_deg[succ] -= 1;
                }
            }
            for &pred in &preds[n] {
                if active.contains(&pred) {
                    out_deg[pred] -= 1;
                }
            }
        }
    }

    s2.reverse();
    s1.extend(s2);
    s1
}

// ─── Layer Assignment ────────────────────────────────────────────────────────

/// Layer per vertex of one component, after breaking cycles.
#[derive(Debug, Clone)]
pub struct LayerAssignment {
    /// Graph vertex indices of the component, ascending.
    pub vertices: Vec<usize>,
    /// Layer of `vertices[i]`.
    pub layers: Vec<usize>,
    pub layer_count: usize,
    /// Non-loop graph edges of the component, ascending.
    pub edges: Vec<usize>,
    /// Graph edges drawn against their declared direction to break a cycle.
    pub reversed: BTreeSet<usize>,
    /// Self-loop graph edges of the component, ascending.
    pub self_loops: Vec<usize>,
}

impl LayerAssignment {
    /// Longest-path layering of the component's acyclic reduction: every
    /// non-loop edge ends at least one layer below where it starts.
    pub fn assign(graph: &Graph, vertices: &[usize]) -> Result<Self, LayoutError> {
        let local: HashMap<usize, usize> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let mut edges = Vec::new();
        let mut self_loops = Vec::new();
        let mut local_edges = Vec::new();
        for (idx, edge) in graph.edges().enumerate() {
            let (Some(&s), Some(&t)) = (local.get(&edge.source), local.get(&edge.target)) else {
                continue;
            };
            if s == t {
                self_loops.push(idx);
            } else {
                edges.push(idx);
                local_edges.push((s, t));
            }
        }

        let ordering = greedy_fas_ordering(vertices.len(), &local_edges);
        let mut position = vec![0usize; vertices.len()];
        for (pos, &n) in ordering.iter().enumerate() {
            position[n] = pos;
        }

        let mut dag: DiGraph<usize, ()> = DiGraph::with_capacity(vertices.len(), local_edges.len());
        for i in 0..vertices.len() {
            dag.add_node(i);
        }
        let mut reversed = BTreeSet::new();
        for (&idx, &(s, t)) in edges.iter().zip(&local_edges) {
            if position[s] > position[t] {
                reversed.insert(idx);
                dag.add_edge(NodeIndex::new(t), NodeIndex::new(s), ());
            } else {
                dag.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
            }
        }

        let topo = toposort(&dag, None).map_err(|_| LayoutError::CyclicReduction)?;
        let mut layers = vec![0usize; vertices.len()];
        for node in topo {
            let here = layers[node.index()];
            for e in dag.edges(node) {
                let t = e.target().index();
                layers[t] = layers[t].max(here + 1);
            }
        }
        let layer_count = layers.iter().copied().max().map_or(1, |m| m + 1);

        tracing::trace!(
            vertices = vertices.len(),
            layer_count,
            reversed = reversed.len(),
            "assigned layers"
        );

        Ok(Self {
            vertices: vertices.to_vec(),
            layers,
            layer_count,
            edges,
            reversed,
            self_loops,
        })
    }

    pub fn layer_of(&self, vertex: usize) -> Option<usize> {
        self.vertices
            .binary_search(&vertex)
            .ok()
            .map(|i| self.layers[i])
    }
}

// ─── Dummy Node Insertion ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A real vertex, by graph index.
    Vertex(usize),
    /// One layer crossing of a long edge, by graph edge index.
    Dummy { edge: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerNode {
    pub kind: NodeKind,
    pub layer: usize,
}

impl LayerNode {
    pub fn is_dummy(&self) -> bool {
        matches!(self.kind, NodeKind::Dummy { .. })
    }
}

/// A piece of an edge between two adjacent layers, always pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub edge: usize,
}

/// All nodes and segments that make up one non-loop edge, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub edge: usize,
    pub nodes: Vec<usize>,
    pub segments: Vec<usize>,
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfLoop {
    pub edge: usize,
    pub node: usize,
}

/// The proper layered graph: every segment joins adjacent layers.
#[derive(Debug, Clone)]
pub struct Layering {
    pub nodes: Vec<LayerNode>,
    pub layer_count: usize,
    pub segments: Vec<Segment>,
    pub chains: Vec<Chain>,
    pub self_loops: Vec<SelfLoop>,
    down: Vec<Vec<usize>>,
    up: Vec<Vec<usize>>,
}

impl Layering {
    pub fn build(graph: &Graph, assignment: &LayerAssignment) -> Self {
        let mut nodes: Vec<LayerNode> = assignment
            .vertices
            .iter()
            .zip(&assignment.layers)
            .map(|(&v, &layer)| LayerNode {
                kind: NodeKind::Vertex(v),
                layer,
            })
            .collect();
        let node_of = |v: usize| assignment.vertices.binary_search(&v).ok();

        let mut segments = Vec::new();
        let mut chains = Vec::new();
        for &edge in &assignment.edges {
            let e = graph.edge(edge);
            let reversed = assignment.reversed.contains(&edge);
            let (top, bottom) = if reversed {
                (e.target, e.source)
            } else {
                (e.source, e.target)
            };
            let (Some(top), Some(bottom)) = (node_of(top), node_of(bottom)) else {
                continue;
            };

            let mut chain_nodes = vec![top];
            for layer in (nodes[top].layer + 1)..nodes[bottom].layer {
                nodes.push(LayerNode {
                    kind: NodeKind::Dummy { edge },
                    layer,
                });
                chain_nodes.push(nodes.len() - 1);
            }
            chain_nodes.push(bottom);

            let mut chain_segments = Vec::with_capacity(chain_nodes.len() - 1);
            for w in chain_nodes.windows(2) {
                segments.push(Segment {
                    from: w[0],
                    to: w[1],
                    edge,
                });
                chain_segments.push(segments.len() - 1);
            }
            chains.push(Chain {
                edge,
                nodes: chain_nodes,
                segments: chain_segments,
                reversed,
            });
        }

        let self_loops = assignment
            .self_loops
            .iter()
            .filter_map(|&edge| {
                node_of(graph.edge(edge).source).map(|node| SelfLoop { edge, node })
            })
            .collect();

        let mut down = vec![Vec::new(); nodes.len()];
        let mut up = vec![Vec::new(); nodes.len()];
        for (idx, seg) in segments.iter().enumerate() {
            down[seg.from].push(idx);
            up[seg.to].push(idx);
        }

        Self {
            nodes,
            layer_count: assignment.layer_count,
            segments,
            chains,
            self_loops,
            down,
            up,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn dummy_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_dummy()).count()
    }

    /// Segments leaving `node` towards the next layer.
    pub fn downward(&self, node: usize) -> &[usize] {
        &self.down[node]
    }

    /// Segments arriving at `node` from the previous layer.
    pub fn upward(&self, node: usize) -> &[usize] {
        &self.up[node]
    }

    pub fn node_of_vertex(&self, vertex: usize) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.kind == NodeKind::Vertex(vertex))
    }

    /// Self-loop edges on `node`, in edge order.
    pub fn loops_on(&self, node: usize) -> impl Iterator<Item = &SelfLoop> + '_ {
        self.self_loops.iter().filter(move |l| l.node == node)
    }

    /// Nodes grouped by layer, each layer in id order.
    pub fn initial_order(&self) -> Vec<Vec<usize>> {
        let mut layers = vec![Vec::new(); self.layer_count];
        for (id, node) in self.nodes.iter().enumerate() {
            layers[node.layer].push(id);
        }
        layers
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_layering.rs"]
mod tests;
