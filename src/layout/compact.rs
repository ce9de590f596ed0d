//! Compaction: deletes rows, then columns, that hold no box and where every
//! route just passes straight through.

use super::types::{CellUse, Drawing};

pub fn compact(drawing: &Drawing) -> Drawing {
    let rows = compact_rows(drawing);
    compact_rows(&rows.transposed()).transposed()
}

fn compact_rows(drawing: &Drawing) -> Drawing {
    let mut current = drawing.clone();
    let Some((_, mut row, _, mut last)) = current.bounds() else {
        return current;
    };
    let mut removed = 0usize;
    while row <= last {
        match without_row(&current, row) {
            Some(next) => {
                current = next;
                last -= 1;
                removed += 1;
            }
            None => row += 1,
        }
    }
    tracing::trace!(removed, "compacted");
    current
}

/// `drawing` with `row` cut out, or None if that would change what is drawn.
fn without_row(drawing: &Drawing, row: i64) -> Option<Drawing> {
    if drawing.boxes.iter().any(|b| b.y <= row && row <= b.bottom()) {
        return None;
    }
    let touching = drawing.boxes.iter().any(|upper| {
        upper.bottom() == row - 1
            && drawing.boxes.iter().any(|lower| {
                lower.y == row + 1 && upper.x <= lower.right() && lower.x <= upper.right()
            })
    });
    if touching {
        return None;
    }
    let pass_through = drawing.routes.iter().all(|route| {
        route
            .cells()
            .into_iter()
            .filter(|(p, _)| p.y == row)
            .all(|(_, usage)| usage == CellUse::Vertical)
    });
    if !pass_through {
        return None;
    }

    let shift = |y: i64| if y > row { y - 1 } else { y };
    let mut next = drawing.clone();
    for b in &mut next.boxes {
        b.y = shift(b.y);
    }
    for route in &mut next.routes {
        for p in &mut route.points {
            p.y = shift(p.y);
        }
    }
    if next.routes.iter().all(|r| r.is_well_formed()) {
        Some(next)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_compact.rs"]
mod tests;
