//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Corners of an axis-aligned square, counter-clockwise from bottom-left
pub fn quad_corners(center: Vec2, half_size: f32) -> [Vec2; 4] {
    [
        center + Vec2::new(-half_size, -half_size),
        center + Vec2::new(half_size, -half_size),
        center + Vec2::new(half_size, half_size),
        center + Vec2::new(-half_size, half_size),
    ]
}

/// Generate vertices for a filled square (two triangles)
pub fn quad(center: Vec2, half_size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let [bl, br, tr, tl] = quad_corners(center, half_size);

    vec![
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
    ]
}
