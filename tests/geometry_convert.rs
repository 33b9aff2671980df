//! Purpose: Regression coverage for geometry encode/decode conversions.
//! Exports: Integration tests only.
//! Role: Lock key names and the zero-substitution decode policy.
//! Invariants: Decode never fails; non-number members become zero.
//! Invariants: Well-formed numeric input round-trips exactly.

use jsontree::api::{Document, Point, Rect, Vec2, decode, encode};
use serde_json::json;

#[test]
fn point_decode_tolerates_bad_members() {
    let value = json!({"x": 1, "y": "bad", "z": null});
    let point: Point = decode(&value);
    assert_eq!(point, Point::new(1.0, 0.0, 0.0));
}

#[test]
fn rect_round_trips_exactly() {
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
    let back: Rect = decode(&encode(&rect));
    assert_eq!(back, rect);
}

#[test]
fn fractional_values_round_trip() {
    let point = Point::new(0.1, -1e-9, 123456.789);
    let back: Point = decode(&encode(&point));
    assert_eq!(back, point);
}

#[test]
fn missing_members_default_to_zero() {
    let vec: Vec2 = decode(&json!({"x": 2.5}));
    assert_eq!(vec, Vec2::new(2.5, 0.0));

    let rect: Rect = decode(&json!({}));
    assert_eq!(rect, Rect::default());
}

#[test]
fn extra_members_are_ignored() {
    let value = json!({"x": 1, "y": 2, "z": 3, "w": 4, "label": "p"});
    assert_eq!(decode::<Point>(&value), Point::new(1.0, 2.0, 3.0));
    assert_eq!(decode::<Vec2>(&value), Vec2::new(1.0, 2.0));
}

#[test]
fn encoded_documents_parse_back() {
    let doc = Document::encode(&Rect::new(10.0, 20.0, 30.5, 40.25));
    let text = doc.to_string();
    let parsed = Document::parse(&text).expect("parse");
    assert_eq!(parsed.decode::<Rect>(), Rect::new(10.0, 20.0, 30.5, 40.25));
    assert_eq!(parsed.type_name(), "object");
}
