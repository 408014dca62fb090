//! User preferences.
//!
//! Built-in defaults live in `default.yaml`. A user file, if any, is layered
//! on top of them, so it only needs to mention the values it changes.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod engine;
mod view;

pub use animation::*;
pub use colors::*;
pub use engine::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub engine: EnginePreferences,
    pub view: ViewPreferences,
    pub colors: ColorPreferences,
}

impl Preferences {
    /// Loads preferences from the YAML file at `path`, layered over the
    /// defaults. If loading fails, logs a warning and returns the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences from the YAML file at `path`, layered over the
    /// defaults.
    pub fn try_load(path: Option<&Path>) -> eyre::Result<Self> {
        let mut config = Self::default_config();
        if let Some(path) = path {
            log::info!("Loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        Self::build(config)
    }

    /// Parses preferences from a YAML string, layered over the defaults.
    pub fn from_yaml_str(yaml: &str) -> eyre::Result<Self> {
        let config = Self::default_config().add_source(config::File::from_str(yaml, PREFS_FILE_FORMAT));
        Self::build(config)
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    fn default_config() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
    }

    fn build(config: ConfigBuilder<DefaultState>) -> eyre::Result<Self> {
        let prefs: Self = config.build()?.try_deserialize()?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), PrefsError> {
        let check = |ok: bool, field: &'static str, reason: &'static str| match ok {
            true => Ok(()),
            false => Err(PrefsError::OutOfRange { field, reason }),
        };

        let duration = self.animation.twist_duration;
        check(
            duration.is_finite() && duration >= 0.0,
            "animation.twist_duration",
            "must be a non-negative number of seconds",
        )?;

        check(
            self.engine.scramble_length > 0,
            "engine.scramble_length",
            "must be at least 1",
        )?;
        let threshold = self.engine.solved_threshold;
        check(
            threshold > 0.0 && threshold < 1.0,
            "engine.solved_threshold",
            "must be strictly between 0 and 1",
        )?;

        let view = &self.view;
        check(
            view.drag_sensitivity.is_finite(),
            "view.drag_sensitivity",
            "must be finite",
        )?;
        check(
            view.drag_threshold.is_finite() && view.drag_threshold >= 0.0,
            "view.drag_threshold",
            "must be a non-negative number of pixels",
        )?;
        check(
            (0.0..=180.0).contains(&view.pitch_limit),
            "view.pitch_limit",
            "must be between 0 and 180 degrees",
        )?;
        check(
            view.nudge_step.is_finite()
                && view.initial_pitch.is_finite()
                && view.initial_yaw.is_finite(),
            "view",
            "angles must be finite",
        )?;

        Ok(())
    }
}

/// Error in a preference value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("invalid color {0:?}; expected #rrggbb")]
    InvalidColor(String),
    #[error("{field} {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests;
