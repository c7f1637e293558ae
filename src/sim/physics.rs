//! Per-point force accumulation and integration
//!
//! Every point carries a single velocity accumulator. Both force fields add
//! into it first; spring, friction, integration, and the displacement clamp
//! then run exactly once per point per tick.

use glam::Vec2;

use crate::consts::*;

use super::grid::Grid;
use super::pointer::Pointer;
use super::state::Bounds;
use super::waves::Wavefront;

/// Apply one physics step to every point in the grid.
pub fn step(grid: &mut Grid, pointer: &Pointer, waves: &[Wavefront], bounds: Bounds, strength: f32) {
    let center = bounds.center();
    let influence = POINTER_MIN_RADIUS.max(pointer.smoothed_vel);
    let push = Vec2::from_angle(pointer.angle);
    let clamp = Vec2::splat(MAX_DISP);

    for line in &mut grid.lines {
        for p in &mut line.points {
            // Pointer repulsion: linear falloff inside the influence radius,
            // pushing along the pointer's travel direction
            let d = p.origin.distance(pointer.smoothed);
            if d < influence {
                let f = 1.0 - d / influence;
                p.vel += push * (f * pointer.smoothed_vel * POINTER_FORCE * strength);
            }

            // Ring forces. Membership and push angle use the fixed origin,
            // never the displaced position: wave geometry stays decoupled
            // from transient displacement.
            let rel = p.origin - center;
            let center_dist = rel.length();
            for wave in waves {
                let diff = center_dist - wave.radius;
                if diff.abs() < WAVE_HALF_WIDTH {
                    let f = 1.0 - diff.abs() / WAVE_HALF_WIDTH;
                    let profile = f * f;
                    let growth = (wave.radius / WAVE_RAMP_RADIUS).clamp(0.0, 1.0);
                    let force = WAVE_FORCE * strength * profile * growth;
                    let dir = Vec2::from_angle(rel.y.atan2(rel.x));
                    p.vel += dir * (force * WAVE_FORCE_GAIN);
                }
            }

            // Spring return toward the origin, then friction
            p.vel -= p.disp * SPRING;
            p.vel *= FRICTION;

            p.disp += p.vel * VEL_GAIN;
            p.disp = p.disp.clamp(-clamp, clamp);
        }
    }
}
