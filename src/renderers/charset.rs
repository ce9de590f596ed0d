//! Box-drawing character sets and junction arms.

use crate::config::LayoutPrefs;
use crate::layout::types::{Heading, Side};

// ─── LineStyle ───────────────────────────────────────────────────────────────

/// Glyph family for box borders or edge lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    Ascii,
    AsciiDouble,
    #[default]
    Light,
    Rounded,
    Double,
}

impl LineStyle {
    /// Style of vertex box borders.
    pub fn for_boxes(prefs: &LayoutPrefs) -> Self {
        match (prefs.unicode, prefs.double_vertices, prefs.rounded) {
            (false, false, _) => Self::Ascii,
            (false, true, _) => Self::AsciiDouble,
            (true, true, _) => Self::Double,
            (true, false, true) => Self::Rounded,
            (true, false, false) => Self::Light,
        }
    }

    /// Style of edge lines and bends.
    pub fn for_edges(prefs: &LayoutPrefs) -> Self {
        match (prefs.unicode, prefs.rounded) {
            (false, _) => Self::Ascii,
            (true, true) => Self::Rounded,
            (true, false) => Self::Light,
        }
    }

    pub fn is_ascii(self) -> bool {
        matches!(self, Self::Ascii | Self::AsciiDouble)
    }
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// One full set of box-drawing characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_right: char, // ├ line leaving a right border
    pub tee_left: char,  // ┤ line leaving a left border
    pub tee_down: char,  // ┬ line leaving a bottom border
    pub tee_up: char,    // ┴ line leaving a top border
    pub cross: char,
    pub arrow_right: char,
    pub arrow_left: char,
    pub arrow_down: char,
    pub arrow_up: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            tee_right: '├',
            tee_left: '┤',
            tee_down: '┬',
            tee_up: '┴',
            cross: '┼',
            arrow_right: '►',
            arrow_left: '◄',
            arrow_down: '▼',
            arrow_up: '▲',
        }
    }

    pub fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            ..Self::unicode()
        }
    }

    /// Double border; tees join a single line to the double border.
    pub fn double() -> Self {
        Self {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
            tee_right: '╟',
            tee_left: '╢',
            tee_down: '╤',
            tee_up: '╧',
            cross: '╬',
            ..Self::unicode()
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            tee_right: '+',
            tee_left: '+',
            tee_down: '+',
            tee_up: '+',
            cross: '+',
            arrow_right: '>',
            arrow_left: '<',
            arrow_down: 'v',
            arrow_up: '^',
        }
    }

    pub fn ascii_double() -> Self {
        Self {
            top_left: '#',
            top_right: '#',
            bottom_left: '#',
            bottom_right: '#',
            horizontal: '=',
            vertical: '#',
            ..Self::ascii()
        }
    }

    pub fn for_style(style: LineStyle) -> Self {
        match style {
            LineStyle::Ascii => Self::ascii(),
            LineStyle::AsciiDouble => Self::ascii_double(),
            LineStyle::Light => Self::unicode(),
            LineStyle::Rounded => Self::rounded(),
            LineStyle::Double => Self::double(),
        }
    }

    /// Border glyph where a line leaves the box through `side`.
    pub fn tee(&self, side: Side) -> char {
        match side {
            Side::Top => self.tee_up,
            Side::Bottom => self.tee_down,
            Side::Left => self.tee_left,
            Side::Right => self.tee_right,
        }
    }

    /// Arrowhead pointing along `heading`.
    pub fn arrow(&self, heading: Heading) -> char {
        match heading {
            Heading::Up => self.arrow_up,
            Heading::Down => self.arrow_down,
            Heading::Left => self.arrow_left,
            Heading::Right => self.arrow_right,
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which arms of a junction cell are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// A single arm pointing along `heading`.
    pub fn toward(heading: Heading) -> Self {
        match heading {
            Heading::Up => Self::new(true, false, false, false),
            Heading::Down => Self::new(false, true, false, false),
            Heading::Left => Self::new(false, false, true, false),
            Heading::Right => Self::new(false, false, false, true),
        }
    }

    /// Merge two Arms by OR-ing each direction.
    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Exactly one vertical and one horizontal arm.
    pub fn is_bend(self) -> bool {
        (self.up != self.down) && (self.left != self.right)
    }

    pub fn to_char(self, bc: &BoxChars) -> char {
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, true, true) => bc.horizontal,
            (true, true, false, false) => bc.vertical,
            (false, true, false, true) => bc.top_left,
            (false, true, true, false) => bc.top_right,
            (true, false, false, true) => bc.bottom_left,
            (true, false, true, false) => bc.bottom_right,
            (true, true, false, true) => bc.tee_right,
            (true, true, true, false) => bc.tee_left,
            (false, true, true, true) => bc.tee_down,
            (true, false, true, true) => bc.tee_up,
            (true, true, true, true) => bc.cross,
            (true, false, false, false) | (false, true, false, false) => bc.vertical,
            (false, false, true, false) | (false, false, false, true) => bc.horizontal,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
