use invaders::geometry::{clamp, Point, Rect};

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(Point::new(x, y), w, h)
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn overlap_is_symmetric() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn disjoint_rects_do_not_overlap() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(20.0, 20.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn rect_overlaps_itself() {
    let a = rect(3.0, 4.0, 7.0, 2.0);
    assert!(a.overlaps(&a));
}

#[test]
fn touching_vertical_edges_do_not_collide() {
    // b starts exactly where a ends on the x axis
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(10.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn touching_horizontal_edges_do_not_collide() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(0.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn touching_corners_do_not_collide() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(10.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn one_pixel_past_the_edge_collides() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(9.0, 9.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
}

// ── centered_inside ───────────────────────────────────────────────────────────

#[test]
fn centered_inside_smaller_box() {
    let outer = rect(100.0, 200.0, 50.0, 50.0);
    let pos = outer.centered_inside(10.0, 20.0);
    assert_eq!(pos, Point::new(120.0, 215.0));
}

#[test]
fn centered_inside_same_size_is_identity() {
    let outer = rect(30.0, 40.0, 8.0, 19.0);
    let pos = outer.centered_inside(8.0, 19.0);
    assert_eq!(pos, Point::new(30.0, 40.0));
}

// ── clamp ─────────────────────────────────────────────────────────────────────

#[test]
fn clamp_within_bounds_is_identity() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn clamp_below_min() {
    assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
}

#[test]
fn clamp_above_max() {
    assert_eq!(clamp(11.5, 0.0, 10.0), 10.0);
}
