//! Wavefield - a generative dashed-line background animation
//!
//! A dense grid of vertical point-columns is displaced by two force fields:
//! a cursor-following repulsion field and a sequence of expanding circular
//! wavefronts. Each frame the grid is serialized into dashed path primitives
//! whose gap pattern scrolls to suggest falling texture.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, pointer smoothing, wavefronts, physics)
//! - `render`: Path primitive generation and SVG serialization
//! - `settings`: Runtime parameters supplied by the host

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Bounds, Simulation};

/// Simulation tuning constants
pub mod consts {
    /// Horizontal spacing between lines (px)
    pub const X_GAP: f32 = 10.0;
    /// Vertical spacing between points within a line (px)
    pub const Y_GAP: f32 = 32.0;
    /// Extra horizontal coverage beyond the container (px)
    pub const X_BUFFER: f32 = 200.0;
    /// Extra vertical coverage beyond the container (px)
    pub const Y_BUFFER: f32 = 30.0;

    /// Per-line fall speed range (px/tick)
    pub const FALL_SPEED_MIN: f32 = 0.5;
    pub const FALL_SPEED_MAX: f32 = 2.0;
    /// Upper bound for a line's starting scroll phase
    pub const PHASE_MAX: f32 = 1000.0;

    /// Drawn dash segment length range (px)
    pub const DASH_SEGMENT_MIN: f32 = 50.0;
    pub const DASH_SEGMENT_MAX: f32 = 300.0;
    /// Dash gap length range (px)
    pub const DASH_GAP_MIN: f32 = 2.0;
    pub const DASH_GAP_MAX: f32 = 15.0;
    /// Dash texture covers this multiple of the expanded height
    pub const DASH_COVERAGE: f32 = 1.5;

    /// Exponential smoothing factor for pointer position and velocity
    pub const POINTER_SMOOTHING: f32 = 0.1;
    /// Smoothed pointer velocity cap (px/tick)
    pub const POINTER_MAX_VEL: f32 = 100.0;
    /// Minimum pointer influence radius (px)
    pub const POINTER_MIN_RADIUS: f32 = 175.0;
    /// Pointer push gain
    pub const POINTER_FORCE: f32 = 0.08;

    /// Wavefront spawn radius (negative so the ring enters smoothly)
    pub const WAVE_SPAWN_RADIUS: f32 = -200.0;
    /// Spacing between consecutive wavefronts as a multiple of max(w, h)
    pub const WAVE_GAP_FACTOR: f32 = 1.5;
    /// Extra radius past the half-diagonal before a wavefront is culled (px)
    pub const WAVE_CULL_MARGIN: f32 = 300.0;
    /// Half-width of the ring force band (px)
    pub const WAVE_HALF_WIDTH: f32 = 250.0;
    /// Radius over which a fresh wavefront ramps to full force (px)
    pub const WAVE_RAMP_RADIUS: f32 = 300.0;
    /// Base ring force magnitude
    pub const WAVE_FORCE: f32 = 5.0;
    /// Ring push gain
    pub const WAVE_FORCE_GAIN: f32 = 0.2;

    /// Spring return toward each point's origin
    pub const SPRING: f32 = 0.005;
    /// Velocity damping per tick
    pub const FRICTION: f32 = 0.925;
    /// Velocity-to-displacement integration gain
    pub const VEL_GAIN: f32 = 2.0;
    /// Displacement clamp on each axis (px)
    pub const MAX_DISP: f32 = 100.0;
}
