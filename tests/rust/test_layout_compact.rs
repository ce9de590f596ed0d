use super::*;
use crate::layout::routing::check_drawing;
use crate::layout::types::{Point, Route, VertexBox};

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn two_boxes(a: VertexBox, b: VertexBox, points: Vec<Point>) -> Drawing {
    Drawing {
        boxes: vec![a, b],
        routes: vec![Route {
            edge: 0,
            source: 0,
            target: 1,
            reversed: false,
            points,
        }],
    }
}

#[test]
fn test_short_edge_keeps_its_rows() {
    let d = two_boxes(
        VertexBox::new(0, "A", 0, 0, 3, 3),
        VertexBox::new(1, "B", 0, 5, 3, 3),
        vec![p(1, 2), p(1, 5)],
    );
    assert_eq!(compact(&d), d);
}

#[test]
fn test_long_edge_shrinks() {
    let d = two_boxes(
        VertexBox::new(0, "A", 0, 0, 3, 3),
        VertexBox::new(1, "B", 0, 8, 3, 3),
        vec![p(1, 2), p(1, 8)],
    );
    let out = compact(&d);
    assert_eq!(out.boxes[1].y, 5);
    assert_eq!(out.routes[0].points, vec![p(1, 2), p(1, 5)]);
}

#[test]
fn test_columns_shrink_too() {
    let d = two_boxes(
        VertexBox::new(0, "A", 0, 0, 3, 3),
        VertexBox::new(1, "B", 8, 0, 3, 3),
        vec![p(2, 1), p(8, 1)],
    );
    let out = compact(&d);
    assert_eq!(out.boxes[1].x, 5);
    assert_eq!(out.routes[0].points, vec![p(2, 1), p(5, 1)]);
}

#[test]
fn test_rows_with_horizontal_runs_survive() {
    let d = two_boxes(
        VertexBox::new(0, "A", 0, 0, 3, 3),
        VertexBox::new(1, "B", 4, 8, 3, 3),
        vec![p(1, 2), p(1, 5), p(5, 5), p(5, 8)],
    );
    let out = compact(&d);
    assert_eq!((out.boxes[1].x, out.boxes[1].y), (3, 5));
    assert_eq!(out.routes[0].points, vec![p(1, 2), p(1, 3), p(4, 3), p(4, 5)]);
    assert!(check_drawing(&out).is_ok());
}

#[test]
fn test_boxes_never_made_to_touch() {
    let d = Drawing {
        boxes: vec![
            VertexBox::new(0, "A", 0, 0, 3, 3),
            VertexBox::new(1, "B", 0, 4, 3, 3),
        ],
        routes: vec![],
    };
    assert_eq!(compact(&d), d);
}

#[test]
fn test_idempotent() {
    let d = two_boxes(
        VertexBox::new(0, "A", 0, 0, 3, 3),
        VertexBox::new(1, "B", 4, 8, 3, 3),
        vec![p(1, 2), p(1, 5), p(5, 5), p(5, 8)],
    );
    let once = compact(&d);
    assert_eq!(compact(&once), once);
}

#[test]
fn test_empty_drawing() {
    assert_eq!(compact(&Drawing::default()), Drawing::default());
}
