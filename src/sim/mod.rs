//! Deterministic simulation module
//!
//! All animation state lives here. This module must be pure and deterministic:
//! - One tick per display frame, driven by the host scheduler
//! - Seeded RNG only (per-line randomness is reproducible from the seed)
//! - No rendering or platform dependencies

pub mod grid;
pub mod physics;
pub mod pointer;
pub mod state;
pub mod tick;
pub mod waves;

pub use grid::{Grid, Line, Point};
pub use pointer::Pointer;
pub use state::{Bounds, Simulation};
pub use tick::tick;
pub use waves::Wavefront;
