//! Deterministic simulation module
//!
//! All motion and collision logic lives here. This module must be pure and
//! deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only (spawn positions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{distance, outside_bounds, shapes_touch};
pub use state::{RngState, Shape, SimState, initial_velocities, spawn_positions};
pub use tick::{
    BounceAxes, TickReport, detect_and_resolve_collision, integrate, reflect_on_bounds, tick,
};
