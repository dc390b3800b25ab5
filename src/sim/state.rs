//! Simulation state and core types
//!
//! Everything that evolves from frame to frame lives in `SimState`, so two
//! states built from the same seed and settings stay identical forever.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// A bouncing square
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Center in normalized device coordinates
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
}

impl Shape {
    pub const fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Half-size shared by both shapes
    pub half_size: f32,
    /// Half-extent of the domain
    pub boundary: f32,
    /// The two shapes, drawn red and blue respectively
    pub shapes: [Shape; 2],
    /// Frames in which the shapes were touching
    pub collisions: u64,
    /// Completed simulation steps
    pub frame: u64,
}

impl SimState {
    /// Create a state with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Spawn both shapes, then apply the running half-size
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        let [a, b] = spawn_positions(&mut rng, settings.spawn_half_size);
        let [va, vb] = initial_velocities(settings.speed_coef);

        let mut state = Self {
            seed,
            half_size: settings.spawn_half_size,
            boundary: settings.boundary,
            shapes: [Shape::new(a, va), Shape::new(b, vb)],
            collisions: 0,
            frame: 0,
        };
        state.set_half_size(settings.half_size);
        state
    }

    /// Change the half-size of both shapes at once
    pub fn set_half_size(&mut self, half_size: f32) {
        self.half_size = half_size;
    }
}

/// Draw the two spawn points: one in the lower-left region, one in the upper-right
pub fn spawn_positions(rng: &mut impl Rng, spawn_half_size: f32) -> [Vec2; 2] {
    let x1 = -SPAWN_OFFSET + spawn_half_size + rng.random::<f32>() * SPAWN_SPREAD;
    let y1 = -SPAWN_OFFSET + spawn_half_size + rng.random::<f32>() * SPAWN_SPREAD;
    let x2 = SPAWN_OFFSET + spawn_half_size - rng.random::<f32>() * SPAWN_SPREAD;
    let y2 = SPAWN_OFFSET + spawn_half_size - rng.random::<f32>() * SPAWN_SPREAD;
    [Vec2::new(x1, y1), Vec2::new(x2, y2)]
}

/// Base velocities scaled by `speed_coef`
pub fn initial_velocities(speed_coef: f32) -> [Vec2; 2] {
    [
        Vec2::from_array(SHAPE_A_VELOCITY) * speed_coef,
        Vec2::from_array(SHAPE_B_VELOCITY) * speed_coef,
    ]
}
