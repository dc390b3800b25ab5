//! Per-frame simulation step
//!
//! One call to `tick` moves both shapes by their velocity, bounces them off
//! the walls and swaps their velocities if they touch. Positions are never
//! corrected: a fast shape may poke past a wall, or into the other shape,
//! for a frame or more before its velocity carries it back out.

use std::mem;

use super::collision::{outside_bounds, shapes_touch};
use super::state::{Shape, SimState};

/// Velocity components flipped by a wall bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BounceAxes {
    pub x: bool,
    pub y: bool,
}

impl BounceAxes {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Wall bounces per shape
    pub bounces: [BounceAxes; 2],
    /// Whether the shapes swapped velocities
    pub collided: bool,
}

/// Advance a shape by one frame of its own velocity
#[inline]
pub fn integrate(shape: &mut Shape) {
    shape.pos += shape.vel;
}

/// Negate each velocity component whose axis crosses a wall
///
/// Checked against the current (post-integration) position; the position
/// itself is left alone.
pub fn reflect_on_bounds(shape: &mut Shape, half_size: f32, boundary: f32) -> BounceAxes {
    let mut axes = BounceAxes::default();
    if outside_bounds(shape.pos.x, half_size, boundary) {
        shape.vel.x = -shape.vel.x;
        axes.x = true;
    }
    if outside_bounds(shape.pos.y, half_size, boundary) {
        shape.vel.y = -shape.vel.y;
        axes.y = true;
    }
    axes
}

/// Swap the two velocity vectors if the shapes touch
///
/// Returns true on contact. Coincident shapes count as touching.
pub fn detect_and_resolve_collision(a: &mut Shape, b: &mut Shape, half_size: f32) -> bool {
    if shapes_touch(a.pos, b.pos, half_size) {
        mem::swap(&mut a.vel, &mut b.vel);
        true
    } else {
        false
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState) -> TickReport {
    let half_size = state.half_size;
    let boundary = state.boundary;
    let mut report = TickReport::default();

    for (shape, bounce) in state.shapes.iter_mut().zip(report.bounces.iter_mut()) {
        integrate(shape);
        *bounce = reflect_on_bounds(shape, half_size, boundary);
    }

    let [a, b] = &mut state.shapes;
    report.collided = detect_and_resolve_collision(a, b, half_size);
    if report.collided {
        state.collisions += 1;
        log::trace!(
            "frame {}: collision #{} at {:?} / {:?}",
            state.frame,
            state.collisions,
            a.pos,
            b.pos
        );
    }

    for (i, bounce) in report.bounces.iter().enumerate() {
        if bounce.any() {
            log::trace!("frame {}: shape {} bounced {:?}", state.frame, i, bounce);
        }
    }

    state.frame += 1;
    report
}
