//! Coordinate assignment in the flow frame, where layers stack along +y.
//!
//! Sizes every node, spreads its ports along the bottom (outgoing) and top
//! (incoming) borders, places nodes along x with isotonic regression, then
//! picks a lane for every jogging segment and turns layers and lanes into rows.

use std::collections::{BTreeSet, HashSet};

use super::graph::Graph;
use super::layering::{Layering, NodeKind};
use super::ordering::Ordering;
use crate::config::LayoutPrefs;

// ─── Geometry constants ──────────────────────────────────────────────────────

/// Default columns between two boxes of one layer.
pub const NODE_GAP: i64 = 2;
/// Columns between a dummy and anything next to it.
const DUMMY_GAP: i64 = 1;
/// Down/up alignment rounds before the final down pass.
const ALIGN_ROUNDS: usize = 4;
/// Pull of a dummy relative to a real node when a layer is squeezed.
const DUMMY_WEIGHT: i64 = 2;

// ─── Types ───────────────────────────────────────────────────────────────────

/// What a port on a node border belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortOwner {
    Segment(usize),
    /// Index into [`Layering::self_loops`].
    Loop(usize),
}

/// Geometry of one layering node. Dummies are single cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub dummy: bool,
    /// Self-loops drawn around this box.
    pub loops: i64,
    /// Bottom-border ports as (owner, column offset from `x`), left to right.
    pub out_ports: Vec<(PortOwner, i64)>,
    /// Top-border ports as (owner, column offset from `x`), left to right.
    pub in_ports: Vec<(PortOwner, i64)>,
}

impl NodeBox {
    /// Columns reserved in the layer, including room for self-loops.
    pub fn extent(&self) -> i64 {
        if self.loops > 0 {
            self.width + self.loops + 1
        } else {
            self.width
        }
    }

    /// Rows reserved in the layer band.
    pub fn band_height(&self) -> i64 {
        self.height + self.loops
    }

    fn out_offset(&self, owner: PortOwner) -> i64 {
        port_offset(&self.out_ports, owner)
    }

    fn in_offset(&self, owner: PortOwner) -> i64 {
        port_offset(&self.in_ports, owner)
    }
}

fn port_offset(ports: &[(PortOwner, i64)], owner: PortOwner) -> i64 {
    ports
        .iter()
        .find(|(o, _)| *o == owner)
        .map_or(0, |(_, offset)| *offset)
}

/// How a segment crosses the gap below its upper node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// Source and target columns coincide.
    Straight,
    /// One horizontal run at `row`.
    Jog { row: i64 },
    /// Over to a free `column` at `top`, down it, then across at `bottom`.
    Split { top: i64, bottom: i64, column: i64 },
}

/// Final flow-frame coordinates for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub nodes: Vec<NodeBox>,
    /// (source column, target column) per segment.
    pub segment_columns: Vec<(i64, i64)>,
    pub lanes: Vec<Lane>,
    /// Lanes used in each inter-layer gap.
    pub gap_lanes: Vec<usize>,
}

impl Placement {
    pub fn compute(
        graph: &Graph,
        layering: &Layering,
        ordering: &Ordering,
        prefs: &LayoutPrefs,
        spacing: i64,
    ) -> Self {
        let mut nodes = size_nodes(graph, layering, ordering, prefs);
        place_columns(layering, ordering, &mut nodes, spacing);

        let segment_columns: Vec<(i64, i64)> = layering
            .segments
            .iter()
            .enumerate()
            .map(|(idx, seg)| {
                let owner = PortOwner::Segment(idx);
                let from = &nodes[seg.from];
                let to = &nodes[seg.to];
                (from.x + from.out_offset(owner), to.x + to.in_offset(owner))
            })
            .collect();

        let plans = plan_gaps(layering, ordering, &segment_columns);
        let gap_lanes: Vec<usize> = plans.iter().map(|p| p.lane_count).collect();

        let mut band_top = vec![0i64; layering.layer_count];
        let mut gap_top = vec![0i64; layering.layer_count];
        let mut row = 0;
        for (l, layer) in ordering.layers.iter().enumerate() {
            band_top[l] = row;
            let band = layer
                .iter()
                .map(|&n| nodes[n].band_height())
                .max()
                .unwrap_or(1);
            gap_top[l] = row + band;
            let lanes = gap_lanes.get(l).copied().unwrap_or(0) as i64;
            row = gap_top[l] + lanes + 2;
        }
        for node in 0..nodes.len() {
            nodes[node].y = band_top[layering.nodes[node].layer];
        }

        let mut lanes = vec![Lane::Straight; layering.segments.len()];
        for (l, plan) in plans.iter().enumerate() {
            let lane_row = |lane: usize| gap_top[l] + 1 + lane as i64;
            for (lane, &seg) in plan.ordered.iter().enumerate() {
                lanes[seg] = Lane::Jog {
                    row: lane_row(plan.splits.len() + lane),
                };
            }
            for (i, &(seg, column)) in plan.splits.iter().enumerate() {
                lanes[seg] = Lane::Split {
                    top: lane_row(i),
                    bottom: lane_row(plan.splits.len() + plan.ordered.len() + i),
                    column,
                };
            }
        }

        tracing::trace!(
            nodes = nodes.len(),
            lanes = gap_lanes.iter().sum::<usize>(),
            "assigned coordinates"
        );

        Self {
            nodes,
            segment_columns,
            lanes,
            gap_lanes,
        }
    }
}

// ─── Box sizing and ports ────────────────────────────────────────────────────

/// Column of port `i` of `k` on a border with `inner` free cells.
pub fn spread_port(i: usize, k: usize, inner: i64) -> i64 {
    let (i, k) = (i as i64, k as i64);
    1 + ((2 * i + 1) * inner) / (2 * k)
}

fn size_nodes(graph: &Graph, layering: &Layering, ordering: &Ordering, prefs: &LayoutPrefs) -> Vec<NodeBox> {
    let pad = if prefs.double_vertices { 1 } else { 0 };
    let mut boxes = Vec::with_capacity(layering.node_count());

    for (id, node) in layering.nodes.iter().enumerate() {
        let mut outs: Vec<usize> = layering.downward(id).to_vec();
        outs.sort_by_key(|&s| (ordering.position(layering.segments[s].to), layering.segments[s].edge));
        let mut ins: Vec<usize> = layering.upward(id).to_vec();
        ins.sort_by_key(|&s| (ordering.position(layering.segments[s].from), layering.segments[s].edge));
        let loops: Vec<usize> = layering
            .self_loops
            .iter()
            .enumerate()
            .filter(|(_, l)| l.node == id)
            .map(|(i, _)| i)
            .collect();

        let mut out_owners: Vec<PortOwner> = outs.into_iter().map(PortOwner::Segment).collect();
        out_owners.extend(loops.iter().map(|&i| PortOwner::Loop(i)));
        let in_owners: Vec<PortOwner> = ins.into_iter().map(PortOwner::Segment).collect();

        let b = match node.kind {
            NodeKind::Dummy { .. } => NodeBox {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
                dummy: true,
                loops: 0,
                out_ports: out_owners.into_iter().map(|o| (o, 0)).collect(),
                in_ports: in_owners.into_iter().map(|o| (o, 0)).collect(),
            },
            NodeKind::Vertex(v) => {
                let (label_w, label_h) = graph.vertex(v).label_size();
                let (screen_w, screen_h) = (label_w + 2 * pad, label_h);
                let (flow_w, flow_h) = if prefs.vertical {
                    (screen_w, screen_h)
                } else {
                    (screen_h, screen_w)
                };
                let ports = out_owners.len().max(in_owners.len()) as i64;
                let inner_w = flow_w.max(2 * ports - 1).max(1);
                let inner_h = flow_h.max(loops.len() as i64).max(1);
                let spread = |owners: Vec<PortOwner>| -> Vec<(PortOwner, i64)> {
                    let k = owners.len();
                    owners
                        .into_iter()
                        .enumerate()
                        .map(|(i, o)| (o, spread_port(i, k, inner_w)))
                        .collect()
                };
                NodeBox {
                    x: 0,
                    y: 0,
                    width: inner_w + 2,
                    height: inner_h + 2,
                    dummy: false,
                    loops: loops.len() as i64,
                    out_ports: spread(out_owners),
                    in_ports: spread(in_owners),
                }
            }
        };
        boxes.push(b);
    }
    boxes
}

// ─── Column placement ────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Pass {
    Down,
    Up,
}

fn gap_between(a: &NodeBox, b: &NodeBox, spacing: i64) -> i64 {
    if a.dummy || b.dummy {
        DUMMY_GAP
    } else {
        spacing
    }
}

/// Minimum distance from the first node's x to each node's x.
fn layer_offsets(layer: &[usize], nodes: &[NodeBox], spacing: i64) -> Vec<i64> {
    let mut offsets = Vec::with_capacity(layer.len());
    let mut acc = 0;
    for (i, &n) in layer.iter().enumerate() {
        if i > 0 {
            let prev = &nodes[layer[i - 1]];
            acc += prev.extent() + gap_between(prev, &nodes[n], spacing);
        }
        offsets.push(acc);
    }
    offsets
}

fn median(values: &mut [i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]).div_euclid(2))
    }
}

/// Weighted least-squares fit of a non-decreasing sequence to `targets`.
pub fn isotonic(targets: &[i64], weights: &[i64]) -> Vec<i64> {
    // (weighted sum, total weight, members)
    let mut blocks: Vec<(i64, i64, usize)> = Vec::with_capacity(targets.len());
    for (&t, &w) in targets.iter().zip(weights) {
        blocks.push((t * w, w, 1));
        while blocks.len() >= 2 {
            let (s2, w2, n2) = blocks[blocks.len() - 1];
            let (s1, w1, n1) = blocks[blocks.len() - 2];
            if s1 * w2 <= s2 * w1 {
                break;
            }
            blocks.pop();
            let last = blocks.len() - 1;
            blocks[last] = (s1 + s2, w1 + w2, n1 + n2);
        }
    }
    blocks
        .into_iter()
        .flat_map(|(sum, weight, n)| std::iter::repeat_n(sum.div_euclid(weight), n))
        .collect()
}

fn align_layer(layering: &Layering, layer: &[usize], nodes: &mut [NodeBox], spacing: i64, pass: Pass) {
    let desired: Vec<i64> = layer
        .iter()
        .map(|&n| {
            let node = &nodes[n];
            let mut wants: Vec<i64> = match pass {
                Pass::Down => layering
                    .upward(n)
                    .iter()
                    .map(|&s| {
                        let owner = PortOwner::Segment(s);
                        let from = &nodes[layering.segments[s].from];
                        from.x + from.out_offset(owner) - node.in_offset(owner)
                    })
                    .collect(),
                Pass::Up => layering
                    .downward(n)
                    .iter()
                    .map(|&s| {
                        let owner = PortOwner::Segment(s);
                        let to = &nodes[layering.segments[s].to];
                        to.x + to.in_offset(owner) - node.out_offset(owner)
                    })
                    .collect(),
            };
            median(&mut wants).unwrap_or(node.x)
        })
        .collect();

    let offsets = layer_offsets(layer, nodes, spacing);
    let targets: Vec<i64> = desired.iter().zip(&offsets).map(|(d, o)| d - o).collect();
    let weights: Vec<i64> = layer
        .iter()
        .map(|&n| if nodes[n].dummy { DUMMY_WEIGHT } else { 1 })
        .collect();
    let fitted = isotonic(&targets, &weights);
    for ((&n, y), off) in layer.iter().zip(fitted).zip(offsets) {
        nodes[n].x = y + off;
    }
}

fn place_columns(layering: &Layering, ordering: &Ordering, nodes: &mut [NodeBox], spacing: i64) {
    for layer in &ordering.layers {
        let offsets = layer_offsets(layer, nodes, spacing);
        for (&n, off) in layer.iter().zip(offsets) {
            nodes[n].x = off;
        }
    }
    let count = ordering.layers.len();
    for _round in 0..ALIGN_ROUNDS {
        for l in 1..count {
            align_layer(layering, &ordering.layers[l], nodes, spacing, Pass::Down);
        }
        for l in (0..count.saturating_sub(1)).rev() {
            align_layer(layering, &ordering.layers[l], nodes, spacing, Pass::Up);
        }
    }
    for l in 1..count {
        align_layer(layering, &ordering.layers[l], nodes, spacing, Pass::Down);
    }
}

// ─── Lanes ───────────────────────────────────────────────────────────────────

/// Lane plan for one gap.
#[derive(Debug, Clone, Default)]
struct GapPlan {
    /// Jogging segments, topmost lane first.
    ordered: Vec<usize>,
    /// Segments that detour through a free column, with that column.
    splits: Vec<(usize, i64)>,
    lane_count: usize,
}

/// Order the jogs of every gap so that a segment entering column `c` runs below
/// any segment leaving column `c`.
fn plan_gaps(layering: &Layering, ordering: &Ordering, columns: &[(i64, i64)]) -> Vec<GapPlan> {
    let gaps = ordering.layers.len().saturating_sub(1);
    let mut plans = vec![GapPlan::default(); gaps];
    for (l, plan) in plans.iter_mut().enumerate() {
        let segs: Vec<usize> = ordering.layers[l]
            .iter()
            .flat_map(|&n| layering.downward(n).iter().copied())
            .collect::<BTreeSet<usize>>()
            .into_iter()
            .collect();
        let occupied: HashSet<i64> = segs
            .iter()
            .flat_map(|&s| [columns[s].0, columns[s].1])
            .collect();

        let mut remaining: BTreeSet<usize> = segs
            .iter()
            .copied()
            .filter(|&s| columns[s].0 != columns[s].1)
            .collect();
        let mut taken: HashSet<i64> = HashSet::new();

        while let Some(&lowest) = remaining.iter().next() {
            let ready = remaining.iter().copied().find(|&s| {
                let target = columns[s].1;
                !remaining.iter().any(|&r| r != s && columns[r].0 == target)
            });
            match ready {
                Some(s) => {
                    remaining.remove(&s);
                    plan.ordered.push(s);
                }
                None => {
                    remaining.remove(&lowest);
                    let column = free_column(columns[lowest], &occupied, &taken);
                    taken.insert(column);
                    plan.splits.push((lowest, column));
                }
            }
        }
        plan.lane_count = plan.ordered.len() + 2 * plan.splits.len();
    }
    plans
}

/// Nearest column to the middle of a segment that no port in the gap uses.
fn free_column((sx, tx): (i64, i64), occupied: &HashSet<i64>, taken: &HashSet<i64>) -> i64 {
    let mid = (sx + tx).div_euclid(2);
    let free = |c: i64| !occupied.contains(&c) && !taken.contains(&c);
    let mut step = 0;
    loop {
        if free(mid + step) {
            return mid + step;
        }
        if free(mid - step - 1) {
            return mid - step - 1;
        }
        step += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_coords.rs"]
mod tests;
