//! Geometry for the lighting model
//!
//! Screen coordinates: x grows to the right, y grows downward. Angles are in
//! degrees; a light angle names the direction the light arrives *from*.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, e.g. a target element's bounding box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + (self.right - self.left) / 2.0,
            self.top + (self.bottom - self.top) / 2.0,
        )
    }
}

/// Angle of the vector from `b` to `a`, in degrees within (-180, 180]
pub fn angle_between(a: Point, b: Point) -> f64 {
    (a.y - b.y).atan2(a.x - b.x).to_degrees()
}

/// Light angle implied by a pointer held at `pointer` around `target`
///
/// The pointer marks where the light sits, so the result is rotated by 180°
/// and rounded to whole degrees. A pointer due right of the target yields 360.
pub fn light_angle_from_pointer(target: Point, pointer: Point) -> f64 {
    (angle_between(target, pointer) + 180.0).round()
}

/// Normalize an angle to the half-open range [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// `(sin θ, cos θ)` for an angle in degrees
pub fn unit_vector(degrees: f64) -> (f64, f64) {
    normalize_degrees(degrees).to_radians().sin_cos()
}

/// One side of a rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Offset of a 1px inset shadow that shows along this edge
    pub const fn inset_offset(self) -> (f64, f64) {
        match self {
            Edge::Top => (0.0, 1.0),
            Edge::Right => (-1.0, 0.0),
            Edge::Bottom => (0.0, -1.0),
            Edge::Left => (1.0, 0.0),
        }
    }

    /// Offset added to the light angle to get this edge's phase term
    pub const fn phase_offset_degrees(self) -> u16 {
        match self {
            Edge::Top => 180,
            Edge::Right => 90,
            Edge::Bottom => 0,
            Edge::Left => 270,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// How lit each edge of a rectangle is, in [-1, 1]
///
/// Each term is the sine of the light angle offset by a multiple of 90°:
/// bottom = sin θ, right = sin(θ + 90°), top = sin(θ + 180°),
/// left = sin(θ + 270°). Opposite edges are exact negations of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgePhases {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgePhases {
    pub fn from_angle(degrees: f64) -> Self {
        let (sin, cos) = unit_vector(degrees);
        Self {
            top: -sin,
            right: cos,
            bottom: sin,
            left: -cos,
        }
    }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Phases in edge order: top, right, bottom, left
    pub fn to_array(&self) -> [f64; 4] {
        Edge::ALL.map(|edge| self.get(edge))
    }
}
