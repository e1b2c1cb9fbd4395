#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::doc::ObjectKind;

// =============================================================
// Helpers
// =============================================================

fn make_box(kind: ObjectKind, x: f64, y: f64, w: f64, h: f64) -> BoardObject {
    BoardObject {
        id: Uuid::new_v4(),
        board_id: Uuid::new_v4(),
        kind,
        x,
        y,
        width: w,
        height: h,
        rotation: 0.0,
        z_index: 0,
        props: json!({}),
        created_by: None,
        version: 1,
    }
}

fn make_line(x1: f64, y1: f64, x2: f64, y2: f64) -> BoardObject {
    BoardObject {
        props: json!({ "x1": x1, "y1": y1, "x2": x2, "y2": y2 }),
        ..make_box(ObjectKind::Line, 0.0, 0.0, 0.0, 0.0)
    }
}

fn zoom(z: f64) -> Camera {
    Camera { zoom: z, ..Camera::default() }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn begin(obj: &BoardObject, part: HitPart, start: Point, cam: &Camera) -> GestureSession {
    GestureSession::begin(obj, part, start, cam, 1.0).unwrap()
}

// =============================================================
// begin: which gesture each target starts
// =============================================================

#[test]
fn body_of_box_kinds_translates() {
    for kind in [ObjectKind::Rect, ObjectKind::Circle, ObjectKind::Text, ObjectKind::Sticky] {
        let obj = make_box(kind, 0.0, 0.0, 10.0, 10.0);
        let s = begin(&obj, HitPart::Body, pt(0.0, 0.0), &zoom(1.0));
        assert!(matches!(s.kind(), GestureKind::Translate { .. }), "{kind:?}");
        assert_eq!(s.mode(), InteractionMode::Dragging);
        assert_eq!(s.object_id(), obj.id);
    }
}

#[test]
fn handles_pick_resize_and_rotate() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let resize = begin(&obj, HitPart::ResizeHandle(ResizeAnchor::Se), pt(0.0, 0.0), &zoom(1.0));
    assert_eq!(resize.mode(), InteractionMode::Resizing);
    let rotate = begin(&obj, HitPart::RotateHandle, pt(5.0, -20.0), &zoom(1.0));
    assert_eq!(rotate.mode(), InteractionMode::Rotating);
}

#[test]
fn edge_endpoint_drags() {
    let line = make_line(0.0, 0.0, 10.0, 10.0);
    let s = begin(&line, HitPart::EdgeEndpoint(EdgeEnd::B), pt(10.0, 10.0), &zoom(1.0));
    assert_eq!(s.mode(), InteractionMode::Dragging);
    assert_eq!(s.kind(), &GestureKind::Endpoint { end: EdgeEnd::B, origin: pt(10.0, 10.0) });
}

#[test]
fn unsupported_combinations_start_nothing() {
    let line = make_line(0.0, 0.0, 10.0, 10.0);
    let rect = make_box(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let cam = zoom(1.0);
    assert!(GestureSession::begin(&line, HitPart::Body, pt(0.0, 0.0), &cam, 1.0).is_none());
    assert!(GestureSession::begin(&line, HitPart::EdgeBody, pt(0.0, 0.0), &cam, 1.0).is_none());
    assert!(GestureSession::begin(&line, HitPart::RotateHandle, pt(0.0, 0.0), &cam, 1.0).is_none());
    assert!(GestureSession::begin(&rect, HitPart::EdgeEndpoint(EdgeEnd::A), pt(0.0, 0.0), &cam, 1.0).is_none());
}

#[test]
fn edge_without_endpoint_props_starts_nothing() {
    let mut line = make_line(0.0, 0.0, 10.0, 10.0);
    line.props = json!({ "x1": 1.0 });
    assert!(GestureSession::begin(&line, HitPart::EdgeEndpoint(EdgeEnd::A), pt(0.0, 0.0), &zoom(1.0), 1.0).is_none());
}

// =============================================================
// Translate
// =============================================================

#[test]
fn translate_at_zoom_one_follows_pointer() {
    let obj = make_box(ObjectKind::Sticky, 100.0, 50.0, 20.0, 20.0);
    let s = begin(&obj, HitPart::Body, pt(300.0, 300.0), &zoom(1.0));
    assert_eq!(s.resolve(pt(315.0, 290.0), &zoom(1.0)), PartialBoardObject::position(pt(115.0, 40.0)));
}

#[test]
fn translate_delta_is_divided_by_zoom() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 20.0, 20.0);
    let cam = Camera { pan_x: 37.0, pan_y: -12.0, zoom: 4.0 };
    let s = begin(&obj, HitPart::Body, pt(10.0, 10.0), &cam);
    assert_eq!(s.resolve(pt(50.0, 30.0), &cam), PartialBoardObject::position(pt(10.0, 5.0)));
}

#[test]
fn translate_uses_accumulated_delta_from_start() {
    let obj = make_box(ObjectKind::Circle, 0.0, 0.0, 20.0, 20.0);
    let cam = zoom(1.0);
    let mut s = begin(&obj, HitPart::Body, pt(0.0, 0.0), &cam);
    s.update(pt(5.0, 5.0), &cam);
    s.update(pt(50.0, 50.0), &cam);
    let last = s.update(pt(10.0, 0.0), &cam);
    assert_eq!(last, PartialBoardObject::position(pt(10.0, 0.0)));
}

// =============================================================
// Endpoint
// =============================================================

#[test]
fn endpoint_drag_zoom_one_moves_exactly() {
    let line = make_line(10.0, 20.0, 90.0, 90.0);
    let s = begin(&line, HitPart::EdgeEndpoint(EdgeEnd::A), pt(10.0, 20.0), &zoom(1.0));
    let patch = s.resolve(pt(17.0, 11.0), &zoom(1.0));
    assert_eq!(patch, PartialBoardObject::endpoint(EdgeEnd::A, pt(17.0, 11.0)));
}

#[test]
fn endpoint_drag_zoom_two_halves_movement() {
    let line = make_line(10.0, 20.0, 90.0, 90.0);
    let cam = zoom(2.0);
    let s = begin(&line, HitPart::EdgeEndpoint(EdgeEnd::A), pt(200.0, 200.0), &cam);
    let patch = s.resolve(pt(240.0, 240.0), &cam);
    assert_eq!(patch, PartialBoardObject::endpoint(EdgeEnd::A, pt(30.0, 40.0)));
}

#[test]
fn endpoint_drag_never_touches_other_end() {
    let line = make_line(10.0, 20.0, 90.0, 90.0);
    let s = begin(&line, HitPart::EdgeEndpoint(EdgeEnd::B), pt(0.0, 0.0), &zoom(1.0));
    let patch = s.resolve(pt(5.0, 5.0), &zoom(1.0));
    let props = patch.props.unwrap();
    assert!(props.get("x1").is_none());
    assert!(props.get("y1").is_none());
    assert_eq!(props["x2"], json!(95.0));
    assert_eq!(props["y2"], json!(95.0));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_se_grows_width_and_height() {
    let obj = make_box(ObjectKind::Rect, 10.0, 10.0, 100.0, 50.0);
    let s = begin(&obj, HitPart::ResizeHandle(ResizeAnchor::Se), pt(0.0, 0.0), &zoom(1.0));
    assert_eq!(s.resolve(pt(20.0, 10.0), &zoom(1.0)), PartialBoardObject::bounds(10.0, 10.0, 120.0, 60.0));
}

#[test]
fn resize_nw_moves_origin_and_shrinks() {
    let obj = make_box(ObjectKind::Rect, 10.0, 10.0, 100.0, 50.0);
    let s = begin(&obj, HitPart::ResizeHandle(ResizeAnchor::Nw), pt(0.0, 0.0), &zoom(1.0));
    assert_eq!(s.resolve(pt(20.0, 10.0), &zoom(1.0)), PartialBoardObject::bounds(30.0, 20.0, 80.0, 40.0));
}

#[test]
fn resize_side_handle_keeps_other_axis() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 100.0, 50.0);
    let s = begin(&obj, HitPart::ResizeHandle(ResizeAnchor::E), pt(0.0, 0.0), &zoom(1.0));
    assert_eq!(s.resolve(pt(30.0, 999.0), &zoom(1.0)), PartialBoardObject::bounds(0.0, 0.0, 130.0, 50.0));
}

#[test]
fn resize_respects_zoom() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 100.0, 100.0);
    let cam = zoom(2.0);
    let s = begin(&obj, HitPart::ResizeHandle(ResizeAnchor::S), pt(0.0, 0.0), &cam);
    assert_eq!(s.resolve(pt(0.0, 40.0), &cam), PartialBoardObject::bounds(0.0, 0.0, 100.0, 120.0));
}

#[test]
fn resize_clamps_to_min_size_holding_opposite_edge() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 100.0, 100.0);
    let cam = zoom(1.0);
    let s = GestureSession::begin(&obj, HitPart::ResizeHandle(ResizeAnchor::Nw), pt(0.0, 0.0), &cam, 10.0).unwrap();
    assert_eq!(s.resolve(pt(500.0, 500.0), &cam), PartialBoardObject::bounds(90.0, 90.0, 10.0, 10.0));
    let s = GestureSession::begin(&obj, HitPart::ResizeHandle(ResizeAnchor::Se), pt(0.0, 0.0), &cam, 10.0).unwrap();
    assert_eq!(s.resolve(pt(-500.0, -500.0), &cam), PartialBoardObject::bounds(0.0, 0.0, 10.0, 10.0));
}

// =============================================================
// Rotate
// =============================================================

#[test]
fn rotate_quarter_turn_clockwise() {
    // Center (50, 50); start pointer due north, end due east.
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 100.0, 100.0);
    let cam = zoom(1.0);
    let s = begin(&obj, HitPart::RotateHandle, pt(50.0, 0.0), &cam);
    let patch = s.resolve(pt(100.0, 50.0), &cam);
    assert!((patch.rotation.unwrap() - 90.0).abs() < 1e-9);
}

#[test]
fn rotate_uses_board_space_pointer() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 100.0, 100.0);
    let cam = Camera { pan_x: 10.0, pan_y: 10.0, zoom: 2.0 };
    // Board (50, 0) is screen (110, 10); board (0, 50) is screen (10, 110).
    let s = begin(&obj, HitPart::RotateHandle, pt(110.0, 10.0), &cam);
    let patch = s.resolve(pt(10.0, 110.0), &cam);
    assert!((patch.rotation.unwrap() + 90.0).abs() < 1e-9);
}

// =============================================================
// before / finish
// =============================================================

#[test]
fn before_matches_start_geometry() {
    let mut obj = make_box(ObjectKind::Rect, 1.0, 2.0, 3.0, 4.0);
    obj.rotation = 15.0;
    let cam = zoom(1.0);
    assert_eq!(begin(&obj, HitPart::Body, pt(0.0, 0.0), &cam).before(), PartialBoardObject::position(pt(1.0, 2.0)));
    assert_eq!(
        begin(&obj, HitPart::ResizeHandle(ResizeAnchor::N), pt(0.0, 0.0), &cam).before(),
        PartialBoardObject::bounds(1.0, 2.0, 3.0, 4.0)
    );
    assert_eq!(begin(&obj, HitPart::RotateHandle, pt(0.0, 0.0), &cam).before(), PartialBoardObject::rotation(15.0));
}

#[test]
fn finish_without_movement_is_none() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let s = begin(&obj, HitPart::Body, pt(0.0, 0.0), &zoom(1.0));
    assert!(s.finish().is_none());
}

#[test]
fn finish_after_returning_to_start_is_none() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let cam = zoom(1.0);
    let mut s = begin(&obj, HitPart::Body, pt(0.0, 0.0), &cam);
    s.update(pt(30.0, 30.0), &cam);
    s.update(pt(0.0, 0.0), &cam);
    assert!(s.finish().is_none());
}

#[test]
fn finish_reports_before_and_last_patch() {
    let obj = make_box(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let cam = zoom(1.0);
    let mut s = begin(&obj, HitPart::Body, pt(0.0, 0.0), &cam);
    s.update(pt(20.0, 0.0), &cam);
    let out = s.finish().unwrap();
    assert_eq!(out.object_id, obj.id);
    assert_eq!(out.before, PartialBoardObject::position(pt(0.0, 0.0)));
    assert_eq!(out.after, PartialBoardObject::position(pt(20.0, 0.0)));
}
