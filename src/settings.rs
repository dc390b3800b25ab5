//! Startup settings
//!
//! Fixed at launch; nothing here is read from or written to disk.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Window and simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,

    // === Simulation ===
    /// Half-size used to derive the spawn positions
    pub spawn_half_size: f32,
    /// Half-size applied once after spawning (collision radius + wall margin)
    pub half_size: f32,
    /// Multiplier on the base velocities
    pub speed_coef: f32,
    /// Half-extent of the domain
    pub boundary: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),

            spawn_half_size: SPAWN_HALF_SIZE,
            half_size: HALF_SIZE,
            speed_coef: SPEED_COEF,
            boundary: BOUNDARY,
        }
    }
}

impl Settings {
    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidSettings(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        let positive = [
            ("spawn_half_size", self.spawn_half_size),
            ("half_size", self.half_size),
            ("boundary", self.boundary),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSettings(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }

        if !self.speed_coef.is_finite() {
            return Err(Error::InvalidSettings(format!(
                "speed_coef must be finite, got {}",
                self.speed_coef
            )));
        }

        Ok(())
    }

    /// Settings as one-line JSON (for startup logging)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}
