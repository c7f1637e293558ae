//! Simulation context and container geometry
//!
//! One `Simulation` owns the grid, pointer, and wave queue exclusively.
//! Host collaborators feed it through `point_to` and `queue_resize`, which
//! only overwrite plain fields; all derived state mutates inside the tick,
//! so there is exactly one writer-consumer and no locking.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::pointer::Pointer;
use super::waves::Wavefront;

/// Container bounding box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, left: f32, top: f32) -> Self {
        Self { width, height, left, top }
    }

    /// Bounds anchored at the viewport origin.
    pub fn size(width: f32, height: f32) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }

    /// Geometric center in container-local coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }
}

/// Complete simulation state, owned by the host scheduler and advanced one
/// tick at a time via [`super::tick::tick`].
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) bounds: Bounds,
    pub(crate) grid: Grid,
    pub(crate) pointer: Pointer,
    /// Active wavefronts, oldest first
    pub(crate) waves: Vec<Wavefront>,
    pub(crate) next_wave_id: u64,
    pub(crate) time_ticks: u64,
    /// Bounds from the latest resize event, swapped in atomically at the
    /// start of the next tick
    pub(crate) pending_bounds: Option<Bounds>,
    pub(crate) rebuild_count: u64,
    rng: Pcg32,
    seed: u64,
}

impl Simulation {
    /// Create a simulation with a freshly built grid.
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = Grid::build(bounds.width, bounds.height, &mut rng);
        log::info!(
            "Simulation created: {} lines for {}x{} (seed {})",
            grid.lines.len(),
            bounds.width,
            bounds.height,
            seed
        );
        Self {
            bounds,
            grid,
            pointer: Pointer::default(),
            waves: Vec::new(),
            next_wave_id: 0,
            time_ticks: 0,
            pending_bounds: None,
            rebuild_count: 0,
            rng,
            seed,
        }
    }

    /// Record a raw pointer/touch sample in viewport coordinates.
    ///
    /// Only the raw target moves here; smoothing happens on the next tick.
    pub fn point_to(&mut self, x: f32, y: f32) {
        self.pointer
            .set_target(Vec2::new(x - self.bounds.left, y - self.bounds.top));
    }

    /// Request a rebuild for new container bounds. Applied as an atomic swap
    /// at the start of the next tick; a tick never sees a half-rebuilt grid.
    pub fn queue_resize(&mut self, bounds: Bounds) {
        self.pending_bounds = Some(bounds);
    }

    /// Swap in pending bounds, discarding the grid and wave queue.
    pub(crate) fn apply_pending_resize(&mut self) {
        if let Some(bounds) = self.pending_bounds.take() {
            self.bounds = bounds;
            self.grid = Grid::build(bounds.width, bounds.height, &mut self.rng);
            self.waves.clear();
            self.rebuild_count += 1;
            log::info!(
                "Grid rebuilt: {} lines for {}x{}",
                self.grid.lines.len(),
                bounds.width,
                bounds.height
            );
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn waves(&self) -> &[Wavefront] {
        &self.waves
    }

    /// Ticks advanced since creation.
    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Number of grid rebuilds; lets the host know when to recreate its
    /// per-line drawing resources.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_converts_to_container_space() {
        let mut sim = Simulation::new(Bounds::new(800.0, 600.0, 120.0, 40.0), 1);
        sim.point_to(320.0, 140.0);
        assert_eq!(sim.pointer().raw, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_queue_resize_is_deferred() {
        let mut sim = Simulation::new(Bounds::size(800.0, 600.0), 1);
        let before = sim.grid().lines.len();

        sim.queue_resize(Bounds::size(400.0, 300.0));
        // Nothing changes until the next tick consumes the pending bounds
        assert_eq!(sim.grid().lines.len(), before);

        sim.apply_pending_resize();
        assert_eq!(sim.bounds(), Bounds::size(400.0, 300.0));
        assert_eq!(sim.rebuild_count(), 1);
        // ceil(600 / 10) + 1
        assert_eq!(sim.grid().lines.len(), 61);
    }

    #[test]
    fn test_degenerate_resize_empties_grid() {
        let mut sim = Simulation::new(Bounds::size(800.0, 600.0), 1);
        sim.queue_resize(Bounds::size(0.0, 0.0));
        sim.apply_pending_resize();
        assert!(sim.grid().is_empty());
    }
}
