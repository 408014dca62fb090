use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Default duration of one quarter turn, in seconds.
pub const DEFAULT_TWIST_DURATION: f32 = 0.2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one quarter turn, in seconds. Zero completes each turn on
    /// the next frame.
    pub twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: DEFAULT_TWIST_DURATION,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}

/// Function that maps progress from 0.0 to 1.0 onto an eased fraction of the
/// twist angle, also from 0.0 to 1.0.
#[derive(Serialize, Deserialize, Display, EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InterpolateFn {
    /// Constant angular speed.
    #[default]
    Linear,
    /// Cosine from 0.0 to PI: slow start, slow finish.
    Cosine,
}
impl InterpolateFn {
    /// Applies the interpolation function. `t` is clamped to `0.0..=1.0`.
    pub fn interpolate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            InterpolateFn::Linear => t,
            InterpolateFn::Cosine => (1.0 - (t * PI).cos()) / 2.0,
        }
    }
}
