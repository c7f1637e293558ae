//! Rendering-primitive generation
//!
//! Turns the current grid into path primitives and SVG attribute strings.
//! Pure with respect to history: output depends only on the grid and its
//! scroll offsets. The actual draw call belongs to the host.

pub mod paths;

pub use paths::{PathPrimitive, dash_array, line_paths, path_data};
