//! Layout engine: graph + preferences in, validated [`Drawing`] out.
//!
//! Each weakly connected component goes through the same pipeline in the flow
//! frame (layers top to bottom): layering, ordering, coordinates, routing and
//! the optional post-passes. Components are then placed side by side, the
//! packed drawing is compacted once more and the whole drawing is transposed
//! for left-to-right flow.

pub mod compact;
pub mod coords;
pub mod elevate;
pub mod graph;
pub mod kinks;
pub mod layering;
pub mod ordering;
pub mod routing;
pub mod types;

pub use graph::{Edge, Graph, GraphBuilder, Vertex};
pub use types::{Drawing, Point, Route, Side, VertexBox};

use tracing::{debug, debug_span, warn};

use self::coords::{NODE_GAP, Placement};
use self::layering::{LayerAssignment, Layering, components};
use self::ordering::minimise_crossings;
use crate::config::LayoutPrefs;
use crate::error::LayoutError;

/// Attempts, each with wider spacing, before a layout is declared infeasible.
pub const MAX_LAYOUT_ATTEMPTS: usize = 4;
/// Columns between neighbouring components, before compaction.
pub const COMPONENT_GAP: i64 = 2;

/// Sugiyama-style layered layout engine.
pub struct SugiyamaLayout;

impl SugiyamaLayout {
    /// Lay out the whole graph. An empty graph gives an empty drawing.
    pub fn layout(graph: &Graph, prefs: &LayoutPrefs) -> Result<Drawing, LayoutError> {
        if graph.is_empty() {
            return Ok(Drawing::default());
        }
        let span = debug_span!("layout", vertices = graph.vertex_count(), edges = graph.edge_count());
        let _guard = span.enter();

        widen_until_valid(graph.edge_count(), |spacing| Self::layout_with_spacing(graph, prefs, spacing))
    }

    fn layout_with_spacing(graph: &Graph, prefs: &LayoutPrefs, spacing: i64) -> Result<Drawing, LayoutError> {
        let mut placed = Drawing::default();
        let mut offset = 0;
        for component in components(graph) {
            let drawing = Self::layout_component(graph, &component, prefs, spacing)?;
            let width = drawing.width();
            let moved = drawing.translated(offset, 0);
            placed.boxes.extend(moved.boxes);
            placed.routes.extend(moved.routes);
            offset += width + COMPONENT_GAP;
        }
        placed.boxes.sort_by_key(|b| b.vertex);
        placed.routes.sort_by_key(|r| r.edge);
        if prefs.compactify {
            placed = compact::compact(&placed).normalized();
        }
        if !prefs.vertical {
            placed = placed.transposed();
        }
        Ok(placed)
    }

    /// One component in the flow frame, normalized to start at (0, 0).
    fn layout_component(
        graph: &Graph,
        vertices: &[usize],
        prefs: &LayoutPrefs,
        spacing: i64,
    ) -> Result<Drawing, LayoutError> {
        let assignment = LayerAssignment::assign(graph, vertices)?;
        let layering = Layering::build(graph, &assignment);
        let ordering = minimise_crossings(&layering);
        let placement = Placement::compute(graph, &layering, &ordering, prefs, spacing);
        let mut drawing = routing::route_edges(graph, &layering, &placement);

        if prefs.remove_kinks {
            drawing = kinks::remove_kinks(&drawing);
        }
        if prefs.elevate_edges {
            drawing = elevate::elevate_edges(&drawing);
        }
        if prefs.compactify {
            drawing = compact::compact(&drawing);
        }
        debug!(
            vertices = vertices.len(),
            layers = layering.layer_count,
            dummies = layering.dummy_count(),
            "component laid out"
        );
        Ok(drawing.normalized())
    }
}

/// Call `attempt` with growing spacing until it returns a drawing that routes
/// every edge and passes [`routing::check_drawing`]. A missing route is a bug
/// in the engine, not a spacing problem, so it fails at once.
fn widen_until_valid<F>(edge_count: usize, mut attempt: F) -> Result<Drawing, LayoutError>
where
    F: FnMut(i64) -> Result<Drawing, LayoutError>,
{
    let mut reason = String::new();
    for round in 0..MAX_LAYOUT_ATTEMPTS {
        let spacing = NODE_GAP + round as i64;
        let drawing = attempt(spacing)?;

        let mut covered = vec![false; edge_count];
        for route in &drawing.routes {
            if let Some(slot) = covered.get_mut(route.edge) {
                *slot = true;
            }
        }
        if let Some(edge) = covered.iter().position(|c| !c) {
            return Err(LayoutError::MissingRoute { edge });
        }

        match routing::check_drawing(&drawing) {
            Ok(()) => {
                debug!(round, width = drawing.width(), height = drawing.height(), "layout done");
                return Ok(drawing);
            }
            Err(why) => {
                warn!(round, spacing, reason = %why, "layout rejected, widening spacing");
                reason = why;
            }
        }
    }
    Err(LayoutError::Infeasible {
        attempts: MAX_LAYOUT_ATTEMPTS,
        reason,
    })
}
