//! Wavefront lifecycle
//!
//! Wavefronts are expanding force rings centered on the grid. The queue is
//! ordered oldest first; spacing between spawns keeps at most one ring
//! dominating the visible center at a time. The whole subsystem freezes
//! while playback is disabled.

use crate::consts::{WAVE_CULL_MARGIN, WAVE_GAP_FACTOR, WAVE_SPAWN_RADIUS};

use super::state::Bounds;

/// One expanding circular force ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wavefront {
    /// Current radius (px); grows monotonically while active
    pub radius: f32,
    /// Creation identifier, unique per simulation
    pub id: u64,
}

/// Spawn, advance, and cull wavefronts for one tick.
///
/// Order matters: a spawn happens before the advance, so one tick from an
/// empty queue leaves a single wavefront at `WAVE_SPAWN_RADIUS + speed`.
pub fn advance(waves: &mut Vec<Wavefront>, next_id: &mut u64, bounds: Bounds, speed: f32) {
    let max_radius = bounds.diagonal() / 2.0 + WAVE_CULL_MARGIN;
    let spawn_gap = bounds.width.max(bounds.height) * WAVE_GAP_FACTOR;

    let should_spawn = match waves.last() {
        None => true,
        Some(last) => last.radius > spawn_gap,
    };
    if should_spawn {
        waves.push(Wavefront {
            radius: WAVE_SPAWN_RADIUS,
            id: *next_id,
        });
        *next_id += 1;
    }

    for wave in waves.iter_mut() {
        wave.radius += speed;
    }

    // A culled ring has fully exited the visible region
    waves.retain(|w| w.radius < max_radius);
}
