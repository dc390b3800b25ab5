//! Wall and shape-to-shape contact tests
//!
//! Both shapes share one half-size, which serves as the wall margin and as
//! the collision radius. Nothing here resolves overlap; callers only flip or
//! swap velocities.

use glam::Vec2;

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Whether two shapes of the given half-size are touching (strict)
#[inline]
pub fn shapes_touch(a: Vec2, b: Vec2, half_size: f32) -> bool {
    distance(a, b) < half_size * 2.0
}

/// Whether a square extent along one axis crosses either wall
#[inline]
pub fn outside_bounds(p: f32, half_size: f32, boundary: f32) -> bool {
    p + half_size > boundary || p - half_size < -boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5)), 0.0);
    }

    #[test]
    fn test_touch_threshold_is_strict() {
        let h = 0.1_f32;

        // Exactly 2h apart: not touching
        assert!(!shapes_touch(Vec2::ZERO, Vec2::new(2.0 * h, 0.0), h));
        // Just inside
        assert!(shapes_touch(Vec2::ZERO, Vec2::new(0.19999, 0.0), h));
        // Diagonal, well inside
        assert!(shapes_touch(Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.2), h));
        // Coincident centers
        assert!(shapes_touch(Vec2::ONE, Vec2::ONE, h));
    }

    #[test]
    fn test_outside_bounds() {
        // Right edge
        assert!(outside_bounds(0.95, 0.1, 1.0));
        // Left edge
        assert!(outside_bounds(-0.95, 0.1, 1.0));
        // Well inside
        assert!(!outside_bounds(0.0, 0.1, 1.0));
        // Flush with the wall does not count
        assert!(!outside_bounds(0.5, 0.5, 1.0));
    }
}
