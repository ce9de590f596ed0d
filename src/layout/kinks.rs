//! Kink removal: straightens Z-shaped jogs where nothing is in the way.
//!
//! A kink is three segments a-b, b-c, c-d where a-b and c-d run the same way.
//! Either outer leg can slide across onto the other's line, dropping two
//! bends. Routes are visited in edge order and each accepted change is
//! committed before the next route is looked at.

use super::routing::{BoxMap, RouteGrid, route_fits};
use super::types::{Drawing, Heading, Point, Route, simplify};

/// Full passes over all routes before giving up on reaching a fixpoint.
const MAX_PASSES: usize = 8;

pub fn remove_kinks(drawing: &Drawing) -> Drawing {
    let box_map = BoxMap::new(&drawing.boxes);
    let mut routes = drawing.routes.clone();
    let mut grid = RouteGrid::new(&routes);
    let mut removed = 0usize;

    for _pass in 0..MAX_PASSES {
        let mut changed = false;
        for slot in 0..routes.len() {
            while let Some(better) = straighten_once(&routes[slot], slot, drawing, &box_map, &grid) {
                grid.remove(slot, &routes[slot]);
                grid.insert(slot, &better);
                routes[slot] = better;
                removed += 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    tracing::trace!(removed, "removed kinks");

    Drawing {
        boxes: drawing.boxes.clone(),
        routes,
    }
}

fn is_kink(a: Point, b: Point, c: Point, d: Point) -> bool {
    match (Heading::between(a, b), Heading::between(b, c), Heading::between(c, d)) {
        (Some(h1), Some(h2), Some(h3)) => h1 == h3 && h1.is_horizontal() != h2.is_horizontal(),
        _ => false,
    }
}

/// First kink of `route` that can be removed, as the improved route.
fn straighten_once(route: &Route, slot: usize, drawing: &Drawing, box_map: &BoxMap, grid: &RouteGrid) -> Option<Route> {
    let pts = &route.points;
    if pts.len() < 4 {
        return None;
    }
    for i in 0..pts.len() - 3 {
        let (a, b, c, d) = (pts[i], pts[i + 1], pts[i + 2], pts[i + 3]);
        if !is_kink(a, b, c, d) {
            continue;
        }
        let (dx, dy) = (c.x - b.x, c.y - b.y);

        // Slide the first leg onto the second one's line.
        let mut first: Vec<Point> = pts[..i].to_vec();
        first.push(a.translated(dx, dy));
        first.extend_from_slice(&pts[i + 3..]);

        // Slide the second leg onto the first one's line.
        let mut second: Vec<Point> = pts[..=i].to_vec();
        second.push(d.translated(-dx, -dy));
        second.extend_from_slice(&pts[i + 4..]);

        for candidate in [first, second] {
            let candidate = route.with_points(simplify(&candidate));
            if candidate.bends() < route.bends()
                && route_fits(&candidate, slot, &drawing.boxes, box_map, grid)
            {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_kinks.rs"]
mod tests;
