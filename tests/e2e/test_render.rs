//! End-to-end tests: graph in, rendered text out, through the public API only.

use ascii_graphs::layout::compact::compact;
use ascii_graphs::layout::routing::check_drawing;
use ascii_graphs::{
    Error, Graph, GraphBuilder, GraphError, GraphLayouter, LayoutPrefs, SugiyamaLayout, render_edge_list,
    render_graph,
};

fn graph(vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph::new(vertices.iter().copied(), edges.iter().copied()).unwrap()
}

fn render(g: &Graph) -> String {
    render_graph(g, &LayoutPrefs::default()).unwrap()
}

fn count_arrows(text: &str, arrows: &[char]) -> usize {
    text.chars().filter(|c| arrows.contains(c)).count()
}

const UNICODE_ARROWS: [char; 4] = ['▼', '▲', '►', '◄'];
const ASCII_ARROWS: [char; 4] = ['v', '^', '>', '<'];

fn samples() -> Vec<Graph> {
    vec![
        graph(&["A", "B"], &[("A", "B")]),
        graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]),
        graph(&["A", "B"], &[("A", "B"), ("B", "A")]),
        graph(&["A"], &[("A", "A"), ("A", "A")]),
        graph(
            &["Root", "Left", "Right", "Leaf"],
            &[("Root", "Left"), ("Root", "Right"), ("Left", "Leaf"), ("Right", "Leaf"), ("Root", "Leaf")],
        ),
        graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "D"), ("A", "E"), ("B", "D"), ("C", "E"), ("E", "B"), ("D", "C")],
        ),
        graph(&["P", "Q", "R"], &[("P", "Q"), ("P", "Q"), ("Q", "R"), ("R", "P"), ("R", "R")]),
    ]
}

// ── Exact output ─────────────────────────────────────────────────────────

#[test]
fn test_single_edge() {
    assert_eq!(
        render(&graph(&["A", "B"], &[("A", "B")])),
        "┌─┐\n│A│\n└┬┘\n │\n ▼\n┌─┐\n│B│\n└─┘"
    );
}

#[test]
fn test_isolated_vertex() {
    assert_eq!(render(&graph(&["A"], &[])), "┌─┐\n│A│\n└─┘");
}

#[test]
fn test_empty_graph() {
    assert_eq!(render(&Graph::empty()), "");
}

#[test]
fn test_components_side_by_side() {
    assert_eq!(
        render(&graph(&["Foo", "Bar", "Baz"], &[("Foo", "Bar")])),
        "┌───┐ ┌───┐\n│Foo│ │Baz│\n└─┬─┘ └───┘\n  │\n  ▼\n┌───┐\n│Bar│\n└───┘"
    );
}

#[test]
fn test_two_cycle() {
    assert_eq!(
        render(&graph(&["A", "B"], &[("A", "B"), ("B", "A")])),
        "┌───┐\n│ A │\n└┬──┘\n │ ▲\n ▼ │\n┌──┴┐\n│ B │\n└───┘"
    );
}

#[test]
fn test_horizontal_single_edge() {
    let prefs = LayoutPrefs {
        vertical: false,
        ..LayoutPrefs::default()
    };
    assert_eq!(
        render_graph(&graph(&["A", "B"], &[("A", "B")]), &prefs).unwrap(),
        "┌─┐  ┌─┐\n│A├─►│B│\n└─┘  └─┘"
    );
}

#[test]
fn test_ascii_single_edge() {
    let prefs = LayoutPrefs {
        unicode: false,
        ..LayoutPrefs::default()
    };
    assert_eq!(
        render_graph(&graph(&["A", "B"], &[("A", "B")]), &prefs).unwrap(),
        "+-+\n|A|\n+-+\n |\n v\n+-+\n|B|\n+-+"
    );
}

#[test]
fn test_skip_edge_goes_around_middle_box() {
    let g = graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    for vertical in [true, false] {
        let prefs = LayoutPrefs {
            vertical,
            ..LayoutPrefs::default()
        };
        let d = SugiyamaLayout::layout(&g, &prefs).unwrap();
        let a = d.box_of(0).unwrap();
        let b = d.box_of(1).unwrap();
        let c = d.box_of(2).unwrap();
        if vertical {
            assert!(a.bottom() < b.y && b.bottom() < c.y);
        } else {
            assert!(a.right() < b.x && b.right() < c.x);
        }

        let skip = &d.routes[2];
        assert_eq!((skip.source, skip.target), (0, 2));
        assert!(skip.start().is_some_and(|s| a.side_of(s).is_some()));
        assert!(skip.end().is_some_and(|e| c.side_of(e).is_some()));
        assert!(skip.cells().iter().all(|(p, _)| !b.contains(*p)));
        assert!(check_drawing(&d).is_ok());
    }
}

// ── Properties over a sample of graphs ───────────────────────────────────

#[test]
fn test_every_label_appears() {
    for g in samples() {
        let text = render(&g);
        for v in g.vertices() {
            assert!(text.contains(&v.label), "missing {} in\n{}", v.label, text);
        }
    }
}

#[test]
fn test_one_arrow_per_edge() {
    for g in samples() {
        let text = render(&g);
        assert_eq!(count_arrows(&text, &UNICODE_ARROWS), g.edge_count(), "\n{}", text);
    }
}

#[test]
fn test_drawings_are_valid() {
    for g in samples() {
        let d = SugiyamaLayout::layout(&g, &LayoutPrefs::default()).unwrap();
        assert_eq!(d.boxes.len(), g.vertex_count());
        assert_eq!(d.routes.len(), g.edge_count());
        assert!(check_drawing(&d).is_ok());
        for (i, a) in d.boxes.iter().enumerate() {
            for b in &d.boxes[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }
}

#[test]
fn test_compacted_drawing_is_stable() {
    let mut graphs = samples();
    graphs.push(graph(&["Foo", "Bar", "Baz"], &[("Foo", "Bar")]));
    graphs.push(graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("C", "D"), ("D", "C")],
    ));
    for g in graphs {
        for vertical in [true, false] {
            let prefs = LayoutPrefs {
                vertical,
                ..LayoutPrefs::default()
            };
            let d = SugiyamaLayout::layout(&g, &prefs).unwrap();
            assert_eq!(compact(&d), d);
        }
    }
}

#[test]
fn test_deterministic() {
    for g in samples() {
        assert_eq!(render(&g), render(&g));
    }
}

#[test]
fn test_no_trailing_whitespace() {
    for g in samples() {
        let text = render(&g);
        assert!(!text.ends_with('\n'));
        for line in text.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}

#[test]
fn test_every_preference_combination_lays_out() {
    for g in samples() {
        for bits in 0u32..32 {
            let prefs = LayoutPrefs {
                remove_kinks: bits & 1 != 0,
                compactify: bits & 2 != 0,
                vertical: bits & 4 != 0,
                elevate_edges: bits & 8 != 0,
                double_vertices: bits & 16 != 0,
                ..LayoutPrefs::default()
            };
            let d = SugiyamaLayout::layout(&g, &prefs).unwrap();
            assert!(check_drawing(&d).is_ok());
        }
    }
}

#[test]
fn test_ascii_output_is_ascii() {
    let prefs = LayoutPrefs {
        unicode: false,
        explicit_ascii_bends: true,
        ..LayoutPrefs::default()
    };
    for g in samples() {
        let text = render_graph(&g, &prefs).unwrap();
        assert!(text.is_ascii());
        assert_eq!(count_arrows(&text, &ASCII_ARROWS), g.edge_count(), "\n{}", text);
    }
}

#[test]
fn test_double_and_rounded_styles() {
    let g = graph(&["A", "B"], &[("A", "B")]);
    let double = LayoutPrefs {
        double_vertices: true,
        ..LayoutPrefs::default()
    };
    let text = render_graph(&g, &double).unwrap();
    assert!(text.starts_with('╔'));
    assert!(text.contains('▼'));

    let rounded = LayoutPrefs {
        rounded: true,
        ..LayoutPrefs::default()
    };
    let text = render_graph(&g, &rounded).unwrap();
    assert!(text.starts_with('╭'));
    assert!(text.contains('╯'));
}

#[test]
fn test_multiline_labels() {
    let g = graph(&["two\nlines", "B"], &[("two\nlines", "B")]);
    let text = render(&g);
    assert!(text.contains("two"));
    assert!(text.contains("lines"));
}

// ── Entry points ─────────────────────────────────────────────────────────

#[test]
fn test_builder_and_layouter() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B");
    let g = builder.build();

    let mut layouter = GraphLayouter::new(LayoutPrefs::default());
    assert_eq!(layouter.layout(&g).unwrap(), render(&g));
    layouter.prefs_mut().unicode = false;
    assert!(!layouter.prefs().unicode);
    assert!(layouter.layout(&g).unwrap().is_ascii());
}

#[test]
fn test_render_edge_list() {
    let text = render_edge_list("# demo\nFoo -> Bar\nBaz\n", &LayoutPrefs::default()).unwrap();
    assert_eq!(text, render(&graph(&["Foo", "Bar", "Baz"], &[("Foo", "Bar")])));
}

#[test]
fn test_edge_list_parse_error() {
    let err = render_edge_list("A -> B\nA -> \n", &LayoutPrefs::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_unknown_vertex_is_rejected_up_front() {
    let err = Graph::new(["A"], [("A", "B")]).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownVertex {
            edge_index: 0,
            label: "B".to_string()
        }
    );
}
