use serde::{Deserialize, Serialize};

/// Camera orbit preferences. All angles are in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    pub initial_pitch: f32,
    pub initial_yaw: f32,
    /// Degrees of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Distance in pixels the pointer must travel before a drag rotates the
    /// view.
    pub drag_threshold: f32,
    /// Dragging cannot tilt the view further than this from level.
    pub pitch_limit: f32,
    /// Rotation applied by the view nudge buttons.
    pub nudge_step: f32,
}
impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            initial_pitch: -25.0,
            initial_yaw: -40.0,
            drag_sensitivity: 0.4,
            drag_threshold: 3.0,
            pitch_limit: 90.0,
            nudge_step: 30.0,
        }
    }
}
