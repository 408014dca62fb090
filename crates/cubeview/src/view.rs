use cgmath::{Deg, Matrix3};
use cubeprefs::ViewPreferences;

/// Direction of a view nudge button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewNudge {
    /// Decrease yaw.
    Left,
    /// Increase yaw.
    Right,
    /// Decrease pitch.
    Up,
    /// Increase pitch.
    Down,
}

/// Orientation of the whole cube on screen, as pitch and yaw in degrees.
///
/// The view is applied as a rotation about X by `pitch` followed by a
/// rotation about Y by `yaw`, in the same Y-down frame as the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewOrbit {
    /// Rotation about the screen's horizontal axis.
    pub pitch: f32,
    /// Rotation about the screen's vertical axis.
    pub yaw: f32,
}
impl ViewOrbit {
    /// Returns the initial view.
    pub fn new(prefs: &ViewPreferences) -> Self {
        Self {
            pitch: prefs.initial_pitch,
            yaw: prefs.initial_yaw,
        }
    }

    /// Rotates the view by a pointer drag of `(dx, dy)` pixels.
    ///
    /// Dragging right increases yaw and dragging down decreases pitch. Pitch
    /// stays within `pitch_limit` of level.
    pub fn drag(&mut self, [dx, dy]: [f32; 2], prefs: &ViewPreferences) {
        self.yaw += dx * prefs.drag_sensitivity;
        self.pitch -= dy * prefs.drag_sensitivity;
        self.pitch = self.pitch.clamp(-prefs.pitch_limit, prefs.pitch_limit);
    }

    /// Rotates the view by one nudge step. Unlike dragging, this does not
    /// clamp pitch.
    pub fn nudge(&mut self, direction: ViewNudge, prefs: &ViewPreferences) {
        let step = prefs.nudge_step;
        match direction {
            ViewNudge::Left => self.yaw -= step,
            ViewNudge::Right => self.yaw += step,
            ViewNudge::Up => self.pitch -= step,
            ViewNudge::Down => self.pitch += step,
        }
    }

    /// Returns the rotation matrix for the view.
    pub fn rotation(&self) -> Matrix3<f32> {
        Matrix3::from_angle_x(Deg(self.pitch)) * Matrix3::from_angle_y(Deg(self.yaw))
    }
}

/// Pointer drag in progress.
///
/// A press does not rotate the view until the pointer has moved far enough
/// from where it was pressed, so that clicks do not jitter the view.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DragTracker {
    state: Option<DragState>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct DragState {
    start: [f32; 2],
    last: [f32; 2],
    has_moved: bool,
}

impl DragTracker {
    /// Returns whether a pointer is pressed.
    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    /// Starts a drag at `pos`.
    pub fn press(&mut self, pos: [f32; 2]) {
        self.state = Some(DragState {
            start: pos,
            last: pos,
            has_moved: false,
        });
    }

    /// Moves the pointer to `pos`. Returns the delta by which to rotate the
    /// view, if any.
    pub fn move_to(&mut self, pos: [f32; 2], prefs: &ViewPreferences) -> Option<[f32; 2]> {
        let drag = self.state.as_mut()?;
        if !drag.has_moved {
            let manhattan = (pos[0] - drag.start[0]).abs() + (pos[1] - drag.start[1]).abs();
            if manhattan < prefs.drag_threshold {
                return None;
            }
            drag.has_moved = true;
        }
        let delta = [pos[0] - drag.last[0], pos[1] - drag.last[1]];
        drag.last = pos;
        Some(delta)
    }

    /// Ends the drag.
    pub fn release(&mut self) {
        self.state = None;
    }
}
