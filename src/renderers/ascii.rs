//! Text renderer: paints a [`Drawing`] with box-drawing characters.

use std::collections::BTreeMap;

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::{Arms, BoxChars, LineStyle};
use crate::config::LayoutPrefs;
use crate::layout::types::{Drawing, Heading, Point, Route, VertexBox};

// ─── Boxes ───────────────────────────────────────────────────────────────────

fn paint_box(canvas: &mut Canvas, b: &VertexBox, bc: &BoxChars) {
    canvas.draw_box(Rect::from(b), bc);

    let lines: Vec<&str> = b.label.split('\n').collect();
    let inner_w = (b.width - 2).max(0);
    let inner_h = (b.height - 2).max(0);
    let top = b.y + 1 + (inner_h - lines.len() as i64).max(0) / 2;
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count() as i64;
        let col = b.x + 1 + (inner_w - len).max(0) / 2;
        let row = top + i as i64;
        if col >= 0 && row >= 0 {
            canvas.write_str(col as usize, row as usize, line);
        }
    }
}

// ─── Routes ──────────────────────────────────────────────────────────────────

/// Accumulate the arms of every route cell except the endpoints on box borders.
fn collect_arms(routes: &[Route]) -> BTreeMap<Point, Arms> {
    let mut arms: BTreeMap<Point, Arms> = BTreeMap::new();
    for route in routes {
        let (Some(start), Some(end)) = (route.start(), route.end()) else {
            continue;
        };
        for (a, b) in route.segments() {
            let Some(heading) = Heading::between(a, b) else {
                continue;
            };
            let mut p = a;
            loop {
                if p != start && p != end {
                    let mut here = Arms::default();
                    if p != b {
                        here = here.merge(Arms::toward(heading));
                    }
                    if p != a {
                        here = here.merge(Arms::toward(heading.opposite()));
                    }
                    let slot = arms.entry(p).or_default();
                    *slot = slot.merge(here);
                }
                if p == b {
                    break;
                }
                p = p.step(heading);
            }
        }
    }
    arms
}

// ─── TextRenderer ────────────────────────────────────────────────────────────

/// Renders a drawing to Unicode or ASCII text according to the preferences.
pub struct TextRenderer {
    pub prefs: LayoutPrefs,
}

impl TextRenderer {
    pub fn new(prefs: LayoutPrefs) -> Self {
        Self { prefs }
    }

    fn line_glyph(&self, arms: Arms, lines: &BoxChars) -> char {
        if arms.is_bend() && !self.prefs.unicode {
            if self.prefs.explicit_ascii_bends {
                lines.cross
            } else {
                lines.horizontal
            }
        } else {
            arms.to_char(lines)
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, drawing: &Drawing) -> String {
        if drawing.is_empty() {
            return String::new();
        }
        let box_chars = BoxChars::for_style(LineStyle::for_boxes(&self.prefs));
        let line_chars = BoxChars::for_style(LineStyle::for_edges(&self.prefs));
        let mut canvas = Canvas::new(drawing.width().max(0) as usize, drawing.height().max(0) as usize);

        for b in &drawing.boxes {
            paint_box(&mut canvas, b, &box_chars);
        }

        for (p, arms) in collect_arms(&drawing.routes) {
            canvas.put(p, self.line_glyph(arms, &line_chars));
        }

        let port_tees = self.prefs.unicode || self.prefs.explicit_ascii_bends;
        for route in &drawing.routes {
            if port_tees {
                let port = route.start().and_then(|start| {
                    let side = drawing.box_of(route.source)?.side_of(start)?;
                    Some((start, side))
                });
                if let Some((start, side)) = port {
                    canvas.put(start, box_chars.tee(side));
                }
            }
            if let (Some(cell), Some(heading)) = (route.arrow_cell(), route.final_heading()) {
                canvas.put(cell, line_chars.arrow(heading));
            }
        }

        canvas.render_to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
