//! Pointer smoothing
//!
//! Raw pointer/touch samples only overwrite the raw target; the smoothed
//! fields advance once per tick. The lag between raw and smoothed position
//! is what gives the repulsion field its trailing inertia.

use glam::Vec2;

use crate::consts::{POINTER_MAX_VEL, POINTER_SMOOTHING};

/// Smoothed pointer state in container-local pixel space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    /// Latest raw sample (written asynchronously by the host)
    pub raw: Vec2,
    /// Raw sample from the previous tick
    pub last: Vec2,
    /// Exponentially smoothed position
    pub smoothed: Vec2,
    /// Instantaneous velocity magnitude (px/tick)
    pub vel: f32,
    /// Smoothed velocity magnitude, capped at `POINTER_MAX_VEL`
    pub smoothed_vel: f32,
    /// Direction of the latest raw frame delta (radians)
    pub angle: f32,
}

impl Pointer {
    /// Overwrite the raw target. Safe to call between ticks; derived fields
    /// are only updated by [`Pointer::tick`].
    pub fn set_target(&mut self, pos: Vec2) {
        self.raw = pos;
    }

    /// Advance smoothing by one tick toward the latest raw sample.
    pub fn tick(&mut self) {
        self.smoothed += (self.raw - self.smoothed) * POINTER_SMOOTHING;

        let delta = self.raw - self.last;
        let v = delta.length();
        self.vel = v;
        self.smoothed_vel += (v - self.smoothed_vel) * POINTER_SMOOTHING;
        self.smoothed_vel = self.smoothed_vel.min(POINTER_MAX_VEL);

        self.last = self.raw;
        self.angle = delta.y.atan2(delta.x);
    }
}
