//! Edge elevation: lifts the horizontal runs of staircase-shaped routes as
//! high as they will go, so their old rows can be compacted away.

use super::routing::{BoxMap, RouteGrid, route_fits};
use super::types::{Drawing, Heading, Route};

pub fn elevate_edges(drawing: &Drawing) -> Drawing {
    let box_map = BoxMap::new(&drawing.boxes);
    let mut routes = drawing.routes.clone();
    let mut grid = RouteGrid::new(&routes);

    for slot in 0..routes.len() {
        let n = routes[slot].points.len();
        for i in 1..n.saturating_sub(2) {
            while let Some(raised) = raise_segment(&routes[slot], i) {
                if !route_fits(&raised, slot, &drawing.boxes, &box_map, &grid) {
                    break;
                }
                grid.remove(slot, &routes[slot]);
                grid.insert(slot, &raised);
                routes[slot] = raised;
            }
        }
    }

    Drawing {
        boxes: drawing.boxes.clone(),
        routes,
    }
}

/// `route` with its horizontal segment `i` one row higher, if it is the middle
/// of a staircase and the leg above it would keep a length.
fn raise_segment(route: &Route, i: usize) -> Option<Route> {
    let p = &route.points;
    let (before, a, b, after) = (p[i - 1], p[i], p[i + 1], p[i + 2]);
    let leg_in = Heading::between(before, a)?;
    let run = Heading::between(a, b)?;
    let leg_out = Heading::between(b, after)?;
    if !run.is_horizontal() || leg_in.is_horizontal() || leg_in != leg_out {
        return None;
    }
    let row = a.y - 1;
    if before.y == row || after.y == row {
        return None;
    }
    let mut points = p.clone();
    points[i] = a.translated(0, -1);
    points[i + 1] = b.translated(0, -1);
    Some(route.with_points(points))
}
