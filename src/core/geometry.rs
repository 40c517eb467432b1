//! Metric queries on [`Triangle`].
//!
//! Every query recomputes side lengths from the current vertices. Nothing is
//! cached, so repeated calls on an unchanged triangle return identical values.
//!
//! The raw queries follow IEEE arithmetic on degenerate input: a collinear
//! triangle yields an area of `0.0` (or `NaN` when rounding pushes a Heron
//! factor below zero) and an infinite or `NaN` circumscribed radius.
//! [`Triangle::metrics`] is the checked alternative.

use crate::domain::model::{Point, Triangle, TriangleKind, TriangleMetrics};
use crate::utils::error::{Result, TrigonError};

/// Absolute tolerance for side comparisons, the Pythagorean check and the
/// degeneracy check.
pub const EPSILON: f64 = 1e-6;

impl Triangle {
    /// Side lengths `(AB, BC, CA)`.
    pub fn sides(&self) -> (f64, f64, f64) {
        (
            self.a.distance(&self.b),
            self.b.distance(&self.c),
            self.c.distance(&self.a),
        )
    }

    pub fn perimeter(&self) -> f64 {
        let (ab, bc, ca) = self.sides();
        ab + bc + ca
    }

    pub fn semi_perimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Heron's formula. Not clamped: collinear input may produce `NaN`.
    pub fn area(&self) -> f64 {
        let (a, b, c) = self.sides();
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    /// Height onto a side of the given length. The length is not checked
    /// against the actual sides.
    pub fn height(&self, side: f64) -> f64 {
        2.0 * self.area() / side
    }

    /// Length of the median to side `a` of a triangle with sides `a`, `b`, `c`.
    pub fn median(a: f64, b: f64, c: f64) -> f64 {
        0.5 * (2.0 * b * b + 2.0 * c * c - a * a).sqrt()
    }

    /// Bisector to side `a`, computed as `2bc / (b + c) * sqrt(1 - cos²α)` with
    /// α the angle opposite `a`.
    pub fn bisector(a: f64, b: f64, c: f64) -> f64 {
        let cos_alpha = (b * b + c * c - a * a) / (2.0 * b * c);
        (2.0 * b * c) / (b + c) * (1.0 - cos_alpha * cos_alpha).sqrt()
    }

    pub fn inscribed_circle_radius(&self) -> f64 {
        self.area() / self.semi_perimeter()
    }

    pub fn circumscribed_circle_radius(&self) -> f64 {
        let (a, b, c) = self.sides();
        (a * b * c) / (4.0 * self.area())
    }

    /// Equality of sides wins over the angle classification, so an isosceles
    /// right triangle reports [`TriangleKind::Isosceles`].
    pub fn kind(&self) -> TriangleKind {
        let (a, b, c) = self.sides();

        if (a - b).abs() < EPSILON && (b - c).abs() < EPSILON {
            return TriangleKind::Equilateral;
        }

        if (a - b).abs() < EPSILON || (b - c).abs() < EPSILON || (a - c).abs() < EPSILON {
            return TriangleKind::Isosceles;
        }

        let mut sorted = [a, b, c];
        sorted.sort_by(f64::total_cmp);
        let [x, y, z] = sorted;
        let legs = x * x + y * y;
        let hypotenuse = z * z;

        if (legs - hypotenuse).abs() < EPSILON {
            TriangleKind::Right
        } else if legs > hypotenuse {
            TriangleKind::Acute
        } else {
            TriangleKind::Obtuse
        }
    }

    pub fn triangle_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Intersection of the perpendicular bisectors. Collinear vertices make the
    /// determinant zero and the result non-finite.
    pub fn circum_center(&self) -> Point {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;

        let x = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let y = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
        Point::new(x, y)
    }

    /// True when the Heron area is not strictly above [`EPSILON`], `NaN` included.
    pub fn is_degenerate(&self) -> bool {
        let area = self.area();
        area.is_nan() || area <= EPSILON
    }

    /// All derived metrics at once, failing instead of returning non-finite
    /// values when the vertices are (nearly) collinear.
    pub fn metrics(&self) -> Result<TriangleMetrics> {
        let area = self.area();
        if self.is_degenerate() {
            return Err(TrigonError::DegenerateTriangle { area });
        }

        Ok(TriangleMetrics {
            perimeter: self.perimeter(),
            area,
            inscribed_radius: self.inscribed_circle_radius(),
            circumscribed_radius: self.circumscribed_circle_radius(),
            kind: self.kind(),
            circum_center: self.circum_center(),
        })
    }
}
