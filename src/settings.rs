//! Runtime parameters supplied by the host UI
//!
//! The host owns the controls; the simulation only reads these each tick.
//! The wasm shell accepts them as a JSON blob on the container element,
//! keyed camelCase to match the host component's props.

use serde::{Deserialize, Serialize};

/// Host-controlled runtime parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Whether wavefronts spawn and advance; everything else keeps running
    pub playing: bool,
    /// Wavefront growth rate (px/tick), typically 0-10
    pub speed: f32,
    /// Physics intensity as a percentage, 0-300
    pub interaction_strength: u32,
    /// Stroke style, passed through to the renderer untouched
    pub line_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playing: true,
            speed: 2.0,
            interaction_strength: 100,
            line_color: "rgba(255, 255, 255, 0.3)".to_string(),
        }
    }
}

impl Settings {
    /// Force multiplier shared by both fields.
    pub fn strength(&self) -> f32 {
        self.interaction_strength as f32 / 100.0
    }
}
