//! Rendering module
//!
//! CPU-side quad generation and projection, plus the WebGPU pipeline that
//! draws flat-colored triangles.

pub mod pipeline;
pub mod projection;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use projection::Projection;
pub use shapes::{quad, quad_corners};
pub use vertex::{Vertex, colors};
