//! Edge routing: turns placed chains into orthogonal routes and keeps the
//! occupancy bookkeeping the post-passes use to decide whether a changed route
//! is still acceptable.

use std::collections::HashMap;

use super::coords::{Lane, NodeBox, Placement, PortOwner};
use super::graph::Graph;
use super::layering::{Layering, NodeKind};
use super::types::{CellUse, Drawing, Point, Route, VertexBox, simplify};

// ─── Route construction ──────────────────────────────────────────────────────

/// Boxes for every real vertex and one route per edge of the component.
pub fn route_edges(graph: &Graph, layering: &Layering, placement: &Placement) -> Drawing {
    let mut boxes: Vec<VertexBox> = Vec::new();
    for (node, geom) in layering.nodes.iter().zip(&placement.nodes) {
        if let NodeKind::Vertex(v) = node.kind {
            boxes.push(VertexBox::new(v, graph.label(v), geom.x, geom.y, geom.width, geom.height));
        }
    }

    let mut routes: Vec<Route> = Vec::new();
    for chain in &layering.chains {
        let (Some(&first), Some(&last)) = (chain.nodes.first(), chain.nodes.last()) else {
            continue;
        };
        let (Some(&first_seg), Some(&last_seg)) = (chain.segments.first(), chain.segments.last()) else {
            continue;
        };
        let top = &placement.nodes[first];
        let bottom = &placement.nodes[last];

        let mut points = vec![Point::new(placement.segment_columns[first_seg].0, top.y + top.height - 1)];
        for &seg in &chain.segments {
            let (sx, tx) = placement.segment_columns[seg];
            match placement.lanes[seg] {
                Lane::Straight => {}
                Lane::Jog { row } => {
                    points.push(Point::new(sx, row));
                    points.push(Point::new(tx, row));
                }
                Lane::Split { top, bottom, column } => {
                    points.push(Point::new(sx, top));
                    points.push(Point::new(column, top));
                    points.push(Point::new(column, bottom));
                    points.push(Point::new(tx, bottom));
                }
            }
        }
        points.push(Point::new(placement.segment_columns[last_seg].1, bottom.y));

        let mut points = simplify(&points);
        if chain.reversed {
            points.reverse();
        }
        let edge = graph.edge(chain.edge);
        routes.push(Route {
            edge: chain.edge,
            source: edge.source,
            target: edge.target,
            reversed: chain.reversed,
            points,
        });
    }

    for (idx, self_loop) in layering.self_loops.iter().enumerate() {
        let geom = &placement.nodes[self_loop.node];
        let nth = layering
            .loops_on(self_loop.node)
            .position(|l| l.edge == self_loop.edge)
            .unwrap_or(0) as i64;
        let column = geom
            .out_ports
            .iter()
            .find(|(o, _)| *o == PortOwner::Loop(idx))
            .map_or(geom.x + 1, |(_, offset)| geom.x + offset);
        let vertex = graph.edge(self_loop.edge).source;
        routes.push(Route {
            edge: self_loop.edge,
            source: vertex,
            target: vertex,
            reversed: false,
            points: self_loop_points(geom, column, nth),
        });
    }

    routes.sort_by_key(|r| r.edge);
    Drawing { boxes, routes }
}

/// Loop `nth` of a box: down from its bottom port, right past the box, up and
/// back in through the right border. Lower `nth` loops run outside higher ones.
fn self_loop_points(geom: &NodeBox, column: i64, nth: i64) -> Vec<Point> {
    let outer = geom.loops - 1 - nth;
    let below = geom.y + geom.height + outer;
    let beside = geom.x + geom.width + 1 + outer;
    let entry = geom.y + 1 + nth;
    vec![
        Point::new(column, geom.y + geom.height - 1),
        Point::new(column, below),
        Point::new(beside, below),
        Point::new(beside, entry),
        Point::new(geom.x + geom.width - 1, entry),
    ]
}

// ─── Occupancy ───────────────────────────────────────────────────────────────

/// Which box, if any, covers each cell.
#[derive(Debug, Clone, Default)]
pub struct BoxMap {
    cells: HashMap<Point, usize>,
    by_vertex: HashMap<usize, usize>,
}

impl BoxMap {
    pub fn new(boxes: &[VertexBox]) -> Self {
        let mut map = Self::default();
        for (i, b) in boxes.iter().enumerate() {
            map.by_vertex.insert(b.vertex, i);
            for p in b.cells() {
                map.cells.insert(p, i);
            }
        }
        map
    }

    pub fn box_at(&self, p: Point) -> Option<usize> {
        self.cells.get(&p).copied()
    }

    pub fn box_of(&self, vertex: usize) -> Option<usize> {
        self.by_vertex.get(&vertex).copied()
    }
}

/// Every cell claimed by a route, keyed to the routes using it.
#[derive(Debug, Clone, Default)]
pub struct RouteGrid {
    cells: HashMap<Point, Vec<(usize, CellUse)>>,
}

impl RouteGrid {
    pub fn new(routes: &[Route]) -> Self {
        let mut grid = Self::default();
        for (slot, route) in routes.iter().enumerate() {
            grid.insert(slot, route);
        }
        grid
    }

    pub fn insert(&mut self, slot: usize, route: &Route) {
        for (p, usage) in route.cells() {
            self.cells.entry(p).or_default().push((slot, usage));
        }
    }

    pub fn remove(&mut self, slot: usize, route: &Route) {
        for (p, _) in route.cells() {
            if let Some(marks) = self.cells.get_mut(&p) {
                marks.retain(|(s, _)| *s != slot);
                if marks.is_empty() {
                    self.cells.remove(&p);
                }
            }
        }
    }

    /// True if `route` would clash with a route other than `slot`.
    pub fn conflicts(&self, slot: usize, route: &Route) -> bool {
        route.cells().into_iter().any(|(p, usage)| {
            self.cells.get(&p).is_some_and(|marks| {
                marks
                    .iter()
                    .any(|&(other, theirs)| other != slot && !usage.can_cross(theirs))
            })
        })
    }

    /// Marks on one cell.
    pub fn at(&self, p: Point) -> &[(usize, CellUse)] {
        self.cells.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A route is acceptable if it is well formed, starts and ends on the borders
/// of its own boxes, stays out of every box in between and only crosses other
/// routes at right angles.
pub fn route_fits(route: &Route, slot: usize, boxes: &[VertexBox], box_map: &BoxMap, grid: &RouteGrid) -> bool {
    if !route.is_well_formed() {
        return false;
    }
    let (Some(src), Some(dst)) = (box_map.box_of(route.source), box_map.box_of(route.target)) else {
        return false;
    };
    let (Some(start), Some(end)) = (route.start(), route.end()) else {
        return false;
    };
    if boxes[src].side_of(start).is_none() || boxes[dst].side_of(end).is_none() {
        return false;
    }
    let inside_box = route
        .cells()
        .into_iter()
        .any(|(p, _)| p != start && p != end && box_map.box_at(p).is_some());
    !inside_box && !grid.conflicts(slot, route)
}

/// Why a finished drawing cannot be emitted, or Ok.
pub fn check_drawing(drawing: &Drawing) -> Result<(), String> {
    for (i, a) in drawing.boxes.iter().enumerate() {
        for b in &drawing.boxes[i + 1..] {
            if a.overlaps(b) {
                return Err(format!("boxes of vertices {} and {} overlap", a.vertex, b.vertex));
            }
        }
    }
    let box_map = BoxMap::new(&drawing.boxes);
    let grid = RouteGrid::new(&drawing.routes);
    for (slot, route) in drawing.routes.iter().enumerate() {
        if !route_fits(route, slot, &drawing.boxes, &box_map, &grid) {
            return Err(format!("route of edge {} is not drawable", route.edge));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_routing.rs"]
mod tests;
