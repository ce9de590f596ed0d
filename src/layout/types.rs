//! Layout types: Point, VertexBox, Route, Drawing.
//!
//! All coordinates are character cells: `x` is the column, `y` the row.

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }

    pub fn translated(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// One cell further in the given heading.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.translated(dx, dy)
    }
}

// ─── Heading / Side ──────────────────────────────────────────────────────────

/// Direction of travel along an orthogonal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Heading from `a` to `b`, or None if they coincide or are not axis-aligned.
    pub fn between(a: Point, b: Point) -> Option<Self> {
        if a == b {
            None
        } else if a.x == b.x {
            Some(if b.y > a.y { Self::Down } else { Self::Up })
        } else if a.y == b.y {
            Some(if b.x > a.x { Self::Right } else { Self::Left })
        } else {
            None
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn transposed(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Down => Self::Right,
            Self::Left => Self::Up,
            Self::Right => Self::Down,
        }
    }
}

/// Side of a box a border cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Heading that leaves the box through this side.
    pub fn outward(self) -> Heading {
        match self {
            Self::Top => Heading::Up,
            Self::Bottom => Heading::Down,
            Self::Left => Heading::Left,
            Self::Right => Heading::Right,
        }
    }
}

// ─── VertexBox ───────────────────────────────────────────────────────────────

/// The rectangle drawn for one vertex, border included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexBox {
    pub vertex: usize,
    pub label: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl VertexBox {
    pub fn new(vertex: usize, label: impl Into<String>, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            vertex,
            label: label.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Last column covered by the box.
    pub fn right(&self) -> i64 {
        self.x + self.width - 1
    }

    /// Last row covered by the box.
    pub fn bottom(&self) -> i64 {
        self.y + self.height - 1
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// The side `p` lies on, for border cells that are not corners.
    pub fn side_of(&self, p: Point) -> Option<Side> {
        let inner_x = p.x > self.x && p.x < self.right();
        let inner_y = p.y > self.y && p.y < self.bottom();
        if inner_x && p.y == self.y {
            Some(Side::Top)
        } else if inner_x && p.y == self.bottom() {
            Some(Side::Bottom)
        } else if inner_y && p.x == self.x {
            Some(Side::Left)
        } else if inner_y && p.x == self.right() {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn overlaps(&self, other: &VertexBox) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.y..=self.bottom()).flat_map(move |y| (self.x..=self.right()).map(move |x| Point::new(x, y)))
    }

    pub fn transposed(&self) -> Self {
        Self {
            vertex: self.vertex,
            label: self.label.clone(),
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
}

// ─── Route ───────────────────────────────────────────────────────────────────

/// How a route uses one of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellUse {
    Endpoint,
    Arrow,
    Corner,
    Horizontal,
    Vertical,
}

impl CellUse {
    /// Two different routes may share a cell only as a perpendicular crossing.
    pub fn can_cross(self, other: CellUse) -> bool {
        matches!(
            (self, other),
            (CellUse::Horizontal, CellUse::Vertical) | (CellUse::Vertical, CellUse::Horizontal)
        )
    }
}

/// The drawn path of one edge: corner points from the source box border to the
/// target box border, in the edge's own direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub edge: usize,
    pub source: usize,
    pub target: usize,
    /// The edge was reversed to break a cycle; its points still run source to target.
    pub reversed: bool,
    pub points: Vec<Point>,
}

impl Route {
    /// First point, on the source border. None for a route with no points.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn bends(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Heading of the final segment, which orients the arrowhead.
    pub fn final_heading(&self) -> Option<Heading> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        Heading::between(self.points[n - 2], self.points[n - 1])
    }

    /// The cell just outside the target box where the arrowhead is drawn.
    pub fn arrow_cell(&self) -> Option<Point> {
        let end = self.end()?;
        self.final_heading().map(|h| end.step(h.opposite()))
    }

    /// Every cell on the route, in order, with how it is used.
    pub fn cells(&self) -> Vec<(Point, CellUse)> {
        let mut out: Vec<(Point, CellUse)> = Vec::new();
        let last = self.points.len().saturating_sub(1);
        let arrow = self.arrow_cell();
        for (i, (a, b)) in self.segments().enumerate() {
            let Some(heading) = Heading::between(a, b) else {
                continue;
            };
            let mut p = a;
            if i > 0 {
                p = p.step(heading);
            }
            loop {
                let usage = if p == self.points[0] || p == self.points[last] {
                    CellUse::Endpoint
                } else if Some(p) == arrow {
                    CellUse::Arrow
                } else if p == b || p == a {
                    CellUse::Corner
                } else if heading.is_horizontal() {
                    CellUse::Horizontal
                } else {
                    CellUse::Vertical
                };
                out.push((p, usage));
                if p == b {
                    break;
                }
                p = p.step(heading);
            }
        }
        out
    }

    /// Orthogonal, simplified, no folds, no repeated cells, and a final segment
    /// long enough to give the arrowhead its own cell.
    pub fn is_well_formed(&self) -> bool {
        let n = self.points.len();
        if n < 2 {
            return false;
        }
        let mut previous: Option<Heading> = None;
        for (a, b) in self.segments() {
            let Some(h) = Heading::between(a, b) else {
                return false;
            };
            if let Some(prev) = previous {
                if prev.is_horizontal() == h.is_horizontal() {
                    return false;
                }
            }
            previous = Some(h);
        }
        let final_len = manhattan(self.points[n - 2], self.points[n - 1]);
        let min_final = if n == 2 { 3 } else { 2 };
        if final_len < min_final {
            return false;
        }
        let cells = self.cells();
        let mut seen = std::collections::HashSet::with_capacity(cells.len());
        cells.iter().all(|(p, _)| seen.insert(*p))
    }

    pub fn transposed(&self) -> Self {
        Self {
            points: self.points.iter().map(|p| p.transposed()).collect(),
            ..self.clone()
        }
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
            ..self.clone()
        }
    }

    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            ..self.clone()
        }
    }
}

pub fn manhattan(a: Point, b: Point) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Drop repeated points and merge consecutive segments running the same way.
///
/// Segments running in opposite directions are left alone so that
/// [`Route::is_well_formed`] can reject the fold.
pub fn simplify(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() == Some(&p) {
            continue;
        }
        while out.len() >= 2 {
            let n = out.len();
            let h1 = Heading::between(out[n - 2], out[n - 1]);
            let h2 = Heading::between(out[n - 1], p);
            if h1.is_some() && h1 == h2 {
                out.pop();
            } else {
                break;
            }
        }
        out.push(p);
    }
    out
}

// ─── Drawing ─────────────────────────────────────────────────────────────────

/// Boxes and routes placed on the character grid; the renderer's input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawing {
    pub boxes: Vec<VertexBox>,
    pub routes: Vec<Route>,
}

impl Drawing {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn box_of(&self, vertex: usize) -> Option<&VertexBox> {
        self.boxes.iter().find(|b| b.vertex == vertex)
    }

    /// (min_x, min_y, max_x, max_y) over boxes and route points.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let corners = self
            .boxes
            .iter()
            .flat_map(|b| [Point::new(b.x, b.y), Point::new(b.right(), b.bottom())]);
        let points = self.routes.iter().flat_map(|r| r.points.iter().copied());
        corners.chain(points).fold(None, |acc, p| match acc {
            None => Some((p.x, p.y, p.x, p.y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))),
        })
    }

    /// Columns needed to show everything, assuming a normalized drawing.
    pub fn width(&self) -> i64 {
        self.bounds().map(|(_, _, x1, _)| x1 + 1).unwrap_or(0)
    }

    /// Rows needed to show everything, assuming a normalized drawing.
    pub fn height(&self) -> i64 {
        self.bounds().map(|(_, _, _, y1)| y1 + 1).unwrap_or(0)
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self {
            boxes: self.boxes.iter().map(|b| b.translated(dx, dy)).collect(),
            routes: self.routes.iter().map(|r| r.translated(dx, dy)).collect(),
        }
    }

    /// Shift so the top-left extent sits at (0, 0).
    pub fn normalized(&self) -> Self {
        match self.bounds() {
            Some((x0, y0, _, _)) => self.translated(-x0, -y0),
            None => self.clone(),
        }
    }

    /// Swap rows and columns; turns a top-down layout into a left-right one.
    pub fn transposed(&self) -> Self {
        Self {
            boxes: self.boxes.iter().map(|b| b.transposed()).collect(),
            routes: self.routes.iter().map(|r| r.transposed()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
