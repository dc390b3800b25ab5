//! World to NDC mapping
//!
//! Orthographic: y covers [-1, 1] and x covers [-aspect, aspect], so squares
//! stay square whatever the window shape.

use glam::Vec2;

/// Orthographic projection for a framebuffer size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Framebuffer width / height
    pub aspect: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self { aspect: 1.0 }
    }
}

impl Projection {
    /// Projection for a framebuffer; a zero-height (minimized) framebuffer
    /// falls back to aspect 1
    pub fn from_framebuffer(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            aspect: width as f32 / height as f32,
        }
    }

    /// Map a world point to normalized device coordinates
    #[inline]
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.aspect, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_window_is_identity() {
        let proj = Projection::from_framebuffer(1000, 1000);
        assert_eq!(proj.to_ndc(Vec2::new(0.3, -0.7)), Vec2::new(0.3, -0.7));
    }

    #[test]
    fn wide_window_squeezes_x() {
        let proj = Projection::from_framebuffer(2000, 1000);
        assert_eq!(proj.aspect, 2.0);
        assert_eq!(proj.to_ndc(Vec2::new(1.0, 1.0)), Vec2::new(0.5, 1.0));
        // Right edge of the ortho volume lands on the NDC edge
        assert_eq!(proj.to_ndc(Vec2::new(2.0, 0.0)).x, 1.0);
    }

    #[test]
    fn tall_window_widens_x() {
        let proj = Projection::from_framebuffer(500, 1000);
        assert_eq!(proj.to_ndc(Vec2::new(0.25, 0.0)), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn minimized_window_stays_finite() {
        for (w, h) in [(0, 0), (800, 0), (0, 600)] {
            let proj = Projection::from_framebuffer(w, h);
            assert!(proj.to_ndc(Vec2::new(0.5, 0.5)).is_finite());
        }
    }
}
