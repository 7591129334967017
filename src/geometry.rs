/// Geometry primitives shared by every entity.
///
/// Each entity stores a position plus a width/height and derives its
/// collider `Rect` on demand — colliders are never stored separately.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Right,
    Left,
    Up,
    Down,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(pos: Point, width: f32, height: f32) -> Self {
        Rect { pos, width, height }
    }

    /// Open-interval overlap on both axes — rects that only share an
    /// edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.width
            && self.pos.x + self.width > other.pos.x
            && self.pos.y < other.pos.y + other.height
            && self.pos.y + self.height > other.pos.y
    }

    /// Top-left corner of a `width` × `height` box centered inside this rect.
    pub fn centered_inside(&self, width: f32, height: f32) -> Point {
        Point::new(
            self.pos.x + (self.width - width) / 2.0,
            self.pos.y + (self.height - height) / 2.0,
        )
    }
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
