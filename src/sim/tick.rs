//! Per-frame simulation step
//!
//! One tick runs: pending-resize swap, pointer smoothing, noise scroll,
//! wave lifecycle, then physics over every point. Pausing playback freezes
//! only the wave subsystem; smoothing and scrolling keep running.

use crate::settings::Settings;

use super::state::Simulation;
use super::{physics, waves};

/// Advance the simulation by one tick.
pub fn tick(sim: &mut Simulation, settings: &Settings) {
    sim.apply_pending_resize();

    sim.pointer.tick();

    // Scroll each line's dash pattern down for the falling illusion
    for line in &mut sim.grid.lines {
        line.scroll_offset -= line.fall_speed;
    }

    if settings.playing {
        waves::advance(
            &mut sim.waves,
            &mut sim.next_wave_id,
            sim.bounds,
            settings.speed,
        );
    }

    physics::step(
        &mut sim.grid,
        &sim.pointer,
        &sim.waves,
        sim.bounds,
        settings.strength(),
    );

    sim.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bounds, Simulation};

    fn sim_800x600() -> Simulation {
        Simulation::new(Bounds::size(800.0, 600.0), 99)
    }

    #[test]
    fn test_first_tick_spawns_wave_at_minus_198() {
        let mut sim = sim_800x600();
        let settings = Settings {
            speed: 2.0,
            ..Settings::default()
        };

        tick(&mut sim, &settings);

        assert_eq!(sim.waves().len(), 1);
        assert_eq!(sim.waves()[0].radius, -198.0);
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn test_paused_freezes_waves_but_not_noise() {
        let mut sim = sim_800x600();
        let playing = Settings::default();
        for _ in 0..5 {
            tick(&mut sim, &playing);
        }
        let snapshot: Vec<_> = sim.waves().to_vec();
        assert!(!snapshot.is_empty());

        let offset_before = sim.grid().lines[0].scroll_offset;
        let smoothed_before = sim.pointer().smoothed;

        sim.point_to(300.0, 200.0);
        let paused = Settings {
            playing: false,
            ..Settings::default()
        };
        for _ in 0..50 {
            tick(&mut sim, &paused);
        }

        // Wave queue identical: same count, same radii
        assert_eq!(sim.waves(), snapshot.as_slice());
        // Noise scrolling and pointer smoothing kept running
        assert!(sim.grid().lines[0].scroll_offset < offset_before);
        assert_ne!(sim.pointer().smoothed, smoothed_before);
    }

    #[test]
    fn test_resize_discards_grid_and_waves() {
        let mut sim = sim_800x600();
        let playing = Settings::default();
        for _ in 0..10 {
            tick(&mut sim, &playing);
        }
        assert!(!sim.waves().is_empty());
        let old_origins: Vec<_> = sim
            .grid()
            .lines
            .iter()
            .map(|l| l.points[0].origin)
            .collect();

        sim.queue_resize(Bounds::size(400.0, 300.0));
        let paused = Settings {
            playing: false,
            ..Settings::default()
        };
        tick(&mut sim, &paused);

        // Previous wave queue is gone and stays empty while paused
        assert!(sim.waves().is_empty());
        // New grid reflects the new dimensions: ceil(600 / 10) + 1 lines
        assert_eq!(sim.grid().lines.len(), 61);
        // No point from the prior grid survives
        let new_first = sim.grid().lines[0].points[0].origin;
        assert!(!old_origins.contains(&new_first));
    }

    #[test]
    fn test_zero_strength_keeps_every_point_at_origin() {
        let mut sim = sim_800x600();
        let settings = Settings {
            interaction_strength: 0,
            ..Settings::default()
        };

        for i in 0..100 {
            sim.point_to((i * 13 % 800) as f32, (i * 7 % 600) as f32);
            tick(&mut sim, &settings);
        }

        assert!(!sim.waves().is_empty());
        for line in &sim.grid().lines {
            for p in &line.points {
                assert_eq!(p.disp, glam::Vec2::ZERO);
            }
        }
    }

    #[test]
    fn test_spawn_spacing_tracks_gap_threshold() {
        // 300x200 puts the gap threshold (450) below the cull radius, so
        // spacing is governed by the spawn gate; gaps must be set by
        // geometry and speed alone
        for strength in [0u32, 300] {
            let mut sim = Simulation::new(Bounds::size(300.0, 200.0), 99);
            let settings = Settings {
                speed: 5.0,
                interaction_strength: strength,
                ..Settings::default()
            };

            let mut spawn_ticks = Vec::new();
            let mut last_newest_id = None;
            for t in 0..1500u64 {
                tick(&mut sim, &settings);
                let newest = sim.waves().last().map(|w| w.id);
                if newest != last_newest_id {
                    spawn_ticks.push(t);
                    last_newest_id = newest;
                }
            }

            // Newest ring must climb from the spawn radius past 1.5 * max(w, h)
            // before the next spawn, so each gap covers that whole span
            let span = crate::consts::WAVE_GAP_FACTOR * 300.0 - crate::consts::WAVE_SPAWN_RADIUS;
            assert!(spawn_ticks.len() >= 3);
            for pair in spawn_ticks.windows(2) {
                let gap_px = (pair[1] - pair[0]) as f32 * settings.speed;
                assert!(gap_px >= span && gap_px <= span + settings.speed);
            }
        }
    }
}
