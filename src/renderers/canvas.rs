//! Canvas: 2D character grid that a drawing is painted onto.

use super::charset::BoxChars;
use crate::layout::types::{Point, VertexBox};

// ─── Rect ────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the last column.
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

impl From<&VertexBox> for Rect {
    fn from(b: &VertexBox) -> Self {
        Self::new(b.x, b.y, b.width, b.height)
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        if row < self.height && col < self.width {
            self.cells[row][col]
        } else {
            ' '
        }
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
        }
    }

    /// Set the cell at a drawing point; points left of or above the canvas are ignored.
    pub fn put(&mut self, p: Point, ch: char) {
        if p.x >= 0 && p.y >= 0 {
            self.set(p.x as usize, p.y as usize, ch);
        }
    }

    pub fn at(&self, p: Point) -> char {
        if p.x < 0 || p.y < 0 {
            return ' ';
        }
        self.get(p.x as usize, p.y as usize)
    }

    /// Draw a box outline.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.put(Point::new(x0, y0), bc.top_left);
        self.put(Point::new(x1, y0), bc.top_right);
        self.put(Point::new(x0, y1), bc.bottom_left);
        self.put(Point::new(x1, y1), bc.bottom_right);
        for col in (x0 + 1)..x1 {
            self.put(Point::new(col, y0), bc.horizontal);
            self.put(Point::new(col, y1), bc.horizontal);
        }
        for row in (y0 + 1)..y1 {
            self.put(Point::new(x0, row), bc.vertical);
            self.put(Point::new(x1, row), bc.vertical);
        }
    }

    /// Write a string starting at (col, row), clipped to the canvas.
    pub fn write_str(&mut self, col: usize, row: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let c = col + i;
            if c >= self.width || row >= self.height {
                break;
            }
            self.cells[row][c] = ch;
        }
    }

    /// Lines with trailing whitespace trimmed and trailing blank lines dropped,
    /// joined by `\n` without a final newline.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
