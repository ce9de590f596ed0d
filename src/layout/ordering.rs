//! Crossing minimisation: barycenter sweeps plus an adjacent-exchange pass.

use std::cmp::Ordering as CmpOrdering;

use super::layering::Layering;

/// Upper bound on down+up sweep pairs.
pub const MAX_SWEEPS: usize = 24;

/// Left-to-right node order in every layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub layers: Vec<Vec<usize>>,
    position: Vec<usize>,
}

impl Ordering {
    pub fn new(layers: Vec<Vec<usize>>, node_count: usize) -> Self {
        let mut position = vec![0; node_count];
        for layer in &layers {
            for (pos, &node) in layer.iter().enumerate() {
                position[node] = pos;
            }
        }
        Self { layers, position }
    }

    /// Index of `node` within its layer.
    pub fn position(&self, node: usize) -> usize {
        self.position[node]
    }

    pub fn crossings(&self, layering: &Layering) -> usize {
        count_crossings(layering, &self.layers)
    }
}

// ─── Crossing count ──────────────────────────────────────────────────────────

/// Pairs of segments that cross between adjacent layers. Segments sharing an
/// endpoint never count.
pub fn count_crossings(layering: &Layering, layers: &[Vec<usize>]) -> usize {
    let mut position = vec![0usize; layering.node_count()];
    for layer in layers {
        for (pos, &node) in layer.iter().enumerate() {
            position[node] = pos;
        }
    }
    let mut total = 0;
    for layer in layers {
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for &node in layer {
            for &seg in layering.downward(node) {
                let s = &layering.segments[seg];
                pairs.push((position[s.from], position[s.to]));
            }
        }
        for i in 0..pairs.len() {
            for j in (i + 1)..pairs.len() {
                let (a0, a1) = pairs[i];
                let (b0, b1) = pairs[j];
                if (a0 < b0 && a1 > b1) || (a0 > b0 && a1 < b1) {
                    total += 1;
                }
            }
        }
    }
    total
}

// ─── Barycenter sweeps ───────────────────────────────────────────────────────

/// Mean neighbour position as an exact fraction `(sum, count)`.
#[derive(Debug, Clone, Copy)]
struct Barycenter {
    sum: usize,
    count: usize,
}

impl Barycenter {
    fn compare(self, other: Barycenter) -> CmpOrdering {
        (self.sum * other.count).cmp(&(other.sum * self.count))
    }
}

#[derive(Clone, Copy)]
enum Sweep {
    Down,
    Up,
}

fn reorder_layer(layering: &Layering, layers: &mut [Vec<usize>], index: usize, sweep: Sweep) {
    let fixed = match sweep {
        Sweep::Down => &layers[index - 1],
        Sweep::Up => &layers[index + 1],
    };
    let mut fixed_pos = vec![usize::MAX; layering.node_count()];
    for (pos, &node) in fixed.iter().enumerate() {
        fixed_pos[node] = pos;
    }

    let mut scored: Vec<(Barycenter, usize)> = layers[index]
        .iter()
        .enumerate()
        .map(|(current, &node)| {
            let neighbours: Vec<usize> = match sweep {
                Sweep::Down => layering
                    .upward(node)
                    .iter()
                    .map(|&s| fixed_pos[layering.segments[s].from])
                    .collect(),
                Sweep::Up => layering
                    .downward(node)
                    .iter()
                    .map(|&s| fixed_pos[layering.segments[s].to])
                    .collect(),
            };
            let score = if neighbours.is_empty() {
                Barycenter {
                    sum: current,
                    count: 1,
                }
            } else {
                Barycenter {
                    sum: neighbours.iter().sum(),
                    count: neighbours.len(),
                }
            };
            (score, node)
        })
        .collect();
    scored.sort_by(|(a, na), (b, nb)| a.compare(*b).then(na.cmp(nb)));
    layers[index] = scored.into_iter().map(|(_, n)| n).collect();
}

/// Swap neighbours within a layer while that strictly lowers the crossings.
fn adjacent_exchange(layering: &Layering, layers: &mut [Vec<usize>], mut best: usize) -> usize {
    let mut improved = true;
    while improved {
        improved = false;
        for l in 0..layers.len() {
            for i in 0..layers[l].len().saturating_sub(1) {
                layers[l].swap(i, i + 1);
                let c = count_crossings(layering, layers);
                if c < best {
                    best = c;
                    improved = true;
                } else {
                    layers[l].swap(i, i + 1);
                }
            }
        }
    }
    best
}

/// Reorder every layer to reduce crossings, deterministically.
///
/// Starts from node-id order, alternates down and up barycenter sweeps for at
/// most [`MAX_SWEEPS`] rounds and stops at the first round that does not beat
/// the best ordering seen. The best ordering is then polished by swapping
/// adjacent nodes.
pub fn minimise_crossings(layering: &Layering) -> Ordering {
    let mut layers = layering.initial_order();
    let layer_count = layers.len();
    let mut best_layers = layers.clone();
    let mut best = count_crossings(layering, &layers);

    for _sweep in 0..MAX_SWEEPS {
        if best == 0 {
            break;
        }
        for index in 1..layer_count {
            reorder_layer(layering, &mut layers, index, Sweep::Down);
        }
        for index in (0..layer_count.saturating_sub(1)).rev() {
            reorder_layer(layering, &mut layers, index, Sweep::Up);
        }
        let crossings = count_crossings(layering, &layers);
        if crossings >= best {
            break;
        }
        best = crossings;
        best_layers = layers.clone();
    }

    if best > 0 {
        best = adjacent_exchange(layering, &mut best_layers, best);
    }
    tracing::trace!(crossings = best, "ordered layers");

    Ordering::new(best_layers, layering.node_count())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_ordering.rs"]
mod tests;
