//! Bounce Squares - two squares bouncing inside a window
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall bounce, pair collision)
//! - `renderer`: Quad generation, projection and the WebGPU pipeline
//! - `platform`: Windowing/graphics host abstraction and the native host
//! - `frame`: Per-frame draw/update/present loop over any host
//! - `settings`: Startup configuration

pub mod error;
pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Simulation and window constants
pub mod consts {
    /// Half-extent of the simulation domain (NDC)
    pub const BOUNDARY: f32 = 1.0;

    /// Half-size used when spawning shapes
    pub const SPAWN_HALF_SIZE: f32 = 0.2;
    /// Half-size applied once after spawning
    pub const HALF_SIZE: f32 = 0.1;

    /// Offset of each spawn region from the origin
    pub const SPAWN_OFFSET: f32 = 0.5;
    /// Width of the random spawn spread per axis
    pub const SPAWN_SPREAD: f32 = 0.5;

    /// Base velocity of the first shape (per frame)
    pub const SHAPE_A_VELOCITY: [f32; 2] = [0.01, 0.015];
    /// Base velocity of the second shape (per frame)
    pub const SHAPE_B_VELOCITY: [f32; 2] = [-0.015, -0.01];
    /// Multiplier applied to both base velocities
    pub const SPEED_COEF: f32 = 1.0;

    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 1000;
    pub const WINDOW_HEIGHT: u32 = 1000;
    pub const WINDOW_TITLE: &str = "Bounce Squares";
}
