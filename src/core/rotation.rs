use crate::domain::model::{Point, Triangle};

/// Rotates `p` counter-clockwise about `center` by `radians`.
pub fn rotate_point(p: Point, center: Point, radians: f64) -> Point {
    let (sin, cos) = radians.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
}

impl Triangle {
    /// Rotates all three vertices about `center`, counter-clockwise for
    /// positive angles. New vertices are computed from the old ones before
    /// any is replaced.
    pub fn rotate(&mut self, angle_degrees: f64, center: Point) {
        *self = self.rotated(angle_degrees, center);
        tracing::debug!(angle_degrees, center = %center, triangle = %self, "Rotated triangle");
    }

    pub fn rotated(&self, angle_degrees: f64, center: Point) -> Triangle {
        let radians = angle_degrees.to_radians();
        Triangle::new(
            rotate_point(self.a, center, radians),
            rotate_point(self.b, center, radians),
            rotate_point(self.c, center, radians),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn right_345() -> Triangle {
        Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0))
    }

    fn assert_close(p: Point, q: Point) {
        assert!(
            (p.x - q.x).abs() < TOL && (p.y - q.y).abs() < TOL,
            "{p} is not close to {q}"
        );
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let mut t = right_345();
        t.rotate(0.0, Point::new(7.0, -2.0));
        assert_eq!(t, right_345());
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        let p = rotate_point(Point::new(1.0, 0.0), Point::ORIGIN, 90f64.to_radians());
        assert_close(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_rotation_about_vertex_keeps_that_vertex() {
        let mut t = right_345();
        let pivot = t.a();
        t.rotate(30.0, pivot);

        assert_eq!(t.a(), pivot);
        assert_ne!(t.b(), right_345().b());
        assert_ne!(t.c(), right_345().c());

        let (sin, cos) = 30f64.to_radians().sin_cos();
        assert_close(t.b(), Point::new(4.0 * cos, 4.0 * sin));
        assert_close(t.c(), Point::new(-3.0 * sin, 3.0 * cos));
    }

    #[test]
    fn test_rotate_then_unrotate_restores_vertices() {
        let original = right_345();
        let center = Point::new(1.25, -0.5);
        let mut t = original;
        t.rotate(73.0, center);
        t.rotate(-73.0, center);

        for (got, want) in t.vertices().into_iter().zip(original.vertices()) {
            assert_close(got, want);
        }
    }

    #[test]
    fn test_rotation_preserves_shape() {
        let original = right_345();
        let mut t = original;
        t.rotate(30.0, t.a());
        t.rotate(45.0, t.circum_center());

        assert!((t.perimeter() - original.perimeter()).abs() < TOL);
        assert!((t.area() - original.area()).abs() < TOL);
        assert_eq!(t.kind(), original.kind());
    }

    #[test]
    fn test_rotated_leaves_source_untouched() {
        let t = right_345();
        let r = t.rotated(180.0, Point::ORIGIN);
        assert_eq!(t, right_345());
        assert_close(r.b(), Point::new(-4.0, 0.0));
    }
}
