use super::*;

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn route(edge: usize, source: usize, target: usize, points: Vec<Point>) -> Route {
    Route {
        edge,
        source,
        target,
        reversed: false,
        points,
    }
}

fn straight() -> Drawing {
    Drawing {
        boxes: vec![
            VertexBox::new(0, "A", 0, 0, 3, 3),
            VertexBox::new(1, "B", 0, 5, 3, 3),
        ],
        routes: vec![route(0, 0, 1, vec![p(1, 2), p(1, 5)])],
    }
}

fn bent() -> Drawing {
    Drawing {
        boxes: vec![
            VertexBox::new(0, "A", 0, 0, 3, 3),
            VertexBox::new(1, "B", 4, 6, 3, 3),
        ],
        routes: vec![route(0, 0, 1, vec![p(1, 2), p(1, 4), p(5, 4), p(5, 6)])],
    }
}

fn render(drawing: &Drawing, prefs: LayoutPrefs) -> String {
    TextRenderer::new(prefs).render(drawing)
}

fn ascii() -> LayoutPrefs {
    LayoutPrefs {
        unicode: false,
        ..LayoutPrefs::default()
    }
}

#[test]
fn test_empty_drawing_renders_nothing() {
    assert_eq!(render(&Drawing::default(), LayoutPrefs::default()), "");
}

#[test]
fn test_route_without_points_draws_nothing() {
    let mut d = straight();
    d.routes[0].points.clear();
    assert_eq!(render(&d, LayoutPrefs::default()), "┌─┐\n│A│\n└─┘\n\n\n┌─┐\n│B│\n└─┘");
}

#[test]
fn test_straight_edge_unicode() {
    assert_eq!(
        render(&straight(), LayoutPrefs::default()),
        "┌─┐\n│A│\n└┬┘\n │\n ▼\n┌─┐\n│B│\n└─┘"
    );
}

#[test]
fn test_straight_edge_ascii_has_no_port_tee() {
    assert_eq!(
        render(&straight(), ascii()),
        "+-+\n|A|\n+-+\n |\n v\n+-+\n|B|\n+-+"
    );
}

#[test]
fn test_bends_unicode() {
    assert_eq!(
        render(&bent(), LayoutPrefs::default()),
        "┌─┐\n│A│\n└┬┘\n │\n └───┐\n     ▼\n    ┌─┐\n    │B│\n    └─┘"
    );
}

#[test]
fn test_bends_rounded() {
    let prefs = LayoutPrefs {
        rounded: true,
        ..LayoutPrefs::default()
    };
    let out = render(&bent(), prefs);
    assert!(out.starts_with("╭─╮\n│A│\n╰┬╯\n │\n ╰───╮\n"));
}

#[test]
fn test_ascii_bends_blend_into_horizontal_run() {
    let out = render(&bent(), ascii());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[3], " |");
    assert_eq!(lines[4], " -----");
    assert_eq!(lines[5], "     v");
}

#[test]
fn test_explicit_ascii_bends() {
    let prefs = LayoutPrefs {
        explicit_ascii_bends: true,
        ..ascii()
    };
    let out = render(&bent(), prefs);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "+++");
    assert_eq!(lines[4], " +---+");
}

#[test]
fn test_double_vertices() {
    let d = Drawing {
        boxes: vec![VertexBox::new(0, "A", 0, 0, 5, 3)],
        routes: vec![],
    };
    let prefs = LayoutPrefs {
        double_vertices: true,
        ..LayoutPrefs::default()
    };
    assert_eq!(render(&d, prefs), "╔═══╗\n║ A ║\n╚═══╝");
    let ascii_double = LayoutPrefs {
        double_vertices: true,
        ..ascii()
    };
    assert_eq!(render(&d, ascii_double), "#===#\n# A #\n#===#");
}

#[test]
fn test_multiline_label() {
    let d = Drawing {
        boxes: vec![VertexBox::new(0, "a\nbc", 0, 0, 4, 4)],
        routes: vec![],
    };
    assert_eq!(
        render(&d, LayoutPrefs::default()),
        "┌──┐\n│a │\n│bc│\n└──┘"
    );
}

#[test]
fn test_self_loop() {
    let d = Drawing {
        boxes: vec![VertexBox::new(0, "A", 0, 0, 3, 3)],
        routes: vec![route(0, 0, 0, vec![p(1, 2), p(1, 3), p(4, 3), p(4, 1), p(2, 1)])],
    };
    assert_eq!(
        render(&d, LayoutPrefs::default()),
        "┌─┐\n│A│◄┐\n└┬┘ │\n └──┘"
    );
}

#[test]
fn test_crossing_routes() {
    let d = Drawing {
        boxes: vec![
            VertexBox::new(0, "A", 2, 0, 3, 3),
            VertexBox::new(1, "B", 2, 7, 3, 3),
            VertexBox::new(2, "C", 0, 3, 3, 3),
            VertexBox::new(3, "D", 6, 3, 3, 3),
        ],
        routes: vec![
            route(0, 0, 1, vec![p(3, 2), p(3, 7)]),
            route(1, 2, 3, vec![p(2, 4), p(6, 4)]),
        ],
    };
    let out = render(&d, LayoutPrefs::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[4], "│C├┼─►│D│");
}

#[test]
fn test_line_glyph() {
    let renderer = TextRenderer::new(ascii());
    let lines = BoxChars::ascii();
    let bend = Arms::new(true, false, false, true);
    assert_eq!(renderer.line_glyph(bend, &lines), '-');
    assert_eq!(renderer.line_glyph(Arms::new(true, true, false, false), &lines), '|');
}
