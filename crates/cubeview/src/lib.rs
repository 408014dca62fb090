//! Animated cube controller and view state, to ensure consistent feel across
//! frontends.
//!
//! [`CubeController`] owns a [`cubepuzzle::CubeState`] and plays twists one
//! at a time. Hosts feed it input, call [`CubeController::step()`] or
//! [`CubeController::proceed()`] each frame, draw the cubies using
//! [`CubeController::cubie_transforms()`], and drain [`CubeEvent`]s.

pub use cubeprefs;
pub use cubepuzzle;

mod animation;
mod controller;
mod event;
mod input;
mod view;

pub use animation::{TwistAnimation, TwistAnimationState};
pub use controller::CubeController;
pub use event::CubeEvent;
pub use input::{InputCommand, key_to_move};
pub use view::{DragTracker, ViewNudge, ViewOrbit};
