use cubeprefs::AnimationPreferences;
use cubepuzzle::{Twist, TwistGroup};
use web_time::Duration;

/// Twist in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwistAnimation {
    /// Twist being animated.
    pub twist: Twist,
    /// Indices of the cubies that move with the twist, selected when the
    /// twist started.
    pub group: TwistGroup,
}

/// State machine for the twist animation. At most one twist is in flight.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    /// Twist being animated, or `None` if idle.
    current: Option<TwistAnimation>,
    /// Progress of the animation in the current twist, from 0.0 to 1.0.
    progress: f32,
}
impl TwistAnimationState {
    /// Returns whether no twist is in flight.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Starts animating a twist. Must only be called when idle.
    pub fn start(&mut self, anim: TwistAnimation) {
        if let Some(old) = &self.current {
            log::error!("starting twist {} while {} is in flight", anim.twist, old.twist);
        }
        self.current = Some(anim);
        self.progress = 0.0;
    }

    /// Steps the animation forward. Returns the twist if this step completed
    /// it.
    pub fn proceed(
        &mut self,
        delta: Duration,
        prefs: &AnimationPreferences,
    ) -> Option<TwistAnimation> {
        self.current.as_ref()?;

        // `twist_duration` is in seconds (per one twist); `twist_delta` is
        // fraction of twist per frame.
        let mut twist_delta = delta.as_secs_f32() / prefs.twist_duration;
        // Handle the case where something went wrong with the calculation
        // (e.g., division by zero).
        if !twist_delta.is_finite() || twist_delta < 0.0 {
            twist_delta = 1.0; // Instantly complete the twist.
        }

        self.progress += twist_delta;
        match self.progress >= 1.0 {
            true => self.finish(),
            false => None,
        }
    }

    /// Completes the current twist regardless of progress. Returns `None` if
    /// there is no twist in flight, so a twist is only ever finished once.
    pub fn finish(&mut self) -> Option<TwistAnimation> {
        self.progress = 0.0;
        self.current.take()
    }

    /// Returns the current twist and its raw progress from 0.0 to 1.0.
    pub fn current(&self) -> Option<(&TwistAnimation, f32)> {
        Some((self.current.as_ref()?, self.progress))
    }
}
