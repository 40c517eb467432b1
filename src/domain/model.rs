use serde::Serialize;
use std::fmt;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Three owned vertices. Collinear vertices are representable; see
/// [`Triangle::is_degenerate`] and [`Triangle::metrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub(crate) a: Point,
    pub(crate) b: Point,
    pub(crate) c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn c(&self) -> Point {
        self.c
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "A: {:.*}, B: {:.*}, C: {:.*}", p, self.a, p, self.b, p, self.c),
            None => write!(f, "A: {}, B: {}, C: {}", self.a, self.b, self.c),
        }
    }
}

/// Classification by sides first, then by largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Right,
    Acute,
    Obtuse,
}

impl TriangleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Right => "right",
            TriangleKind::Acute => "acute",
            TriangleKind::Obtuse => "obtuse",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleMetrics {
    pub perimeter: f64,
    pub area: f64,
    pub inscribed_radius: f64,
    pub circumscribed_radius: f64,
    pub kind: TriangleKind,
    pub circum_center: Point,
}
