use std::collections::VecDeque;

use cgmath::Matrix4;
use cubemath::matrix::partial_rotation;
use cubeprefs::Preferences;
use cubepuzzle::prelude::*;
use rand::Rng;
use web_time::{Duration, Instant};

use crate::animation::{TwistAnimation, TwistAnimationState};
use crate::{CubeEvent, DragTracker, InputCommand, ViewOrbit, key_to_move};

const ASSUMED_FPS: f32 = 60.0;

/// Cube simulation, which owns the cube state, the twist animation, the move
/// queue, and the view.
///
/// The cube state only changes when a twist completes, either because
/// [`Self::proceed()`] advanced it far enough or because the host called
/// [`Self::finish_twist()`].
#[derive(Debug, Clone)]
pub struct CubeController {
    /// Committed cube state, not including the twist in flight.
    state: CubeState,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
    /// Twists waiting for the current one to finish.
    pending: VecDeque<Twist>,
    /// Number of moves committed since the last reset or scramble, not
    /// counting scramble moves.
    move_count: u32,
    /// Whether scramble moves are still being played back.
    is_scrambling: bool,
    /// Most recent scramble.
    last_scramble: Option<Scramble>,
    /// Events not yet drained by the host.
    events: Vec<CubeEvent>,

    /// Orientation of the whole cube on screen.
    view: ViewOrbit,
    drag: DragTracker,

    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,

    prefs: Preferences,
}

impl Default for CubeController {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl CubeController {
    /// Constructs a controller with a solved cube.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            state: CubeState::new(),
            twist_anim: TwistAnimationState::default(),
            pending: VecDeque::new(),
            move_count: 0,
            is_scrambling: false,
            last_scramble: None,
            events: vec![],

            view: ViewOrbit::new(&prefs.view),
            drag: DragTracker::default(),

            last_frame_time: None,

            prefs,
        }
    }

    /// Returns the committed cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Replaces the preferences. Takes effect from the next frame.
    pub fn set_prefs(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    /// Returns the number of counted moves since the last reset or scramble.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    /// Returns whether a twist is in flight.
    pub fn is_animating(&self) -> bool {
        !self.twist_anim.is_idle()
    }
    /// Returns whether scramble moves are still being played back.
    pub fn is_scrambling(&self) -> bool {
        self.is_scrambling
    }
    /// Returns the number of twists waiting behind the one in flight.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
    /// Returns the most recent scramble, or `None` if the cube has not been
    /// scrambled since the controller was created.
    pub fn last_scramble(&self) -> Option<&Scramble> {
        self.last_scramble.as_ref()
    }
    /// Returns the twist in flight and its eased progress from 0.0 to 1.0.
    pub fn current_twist(&self) -> Option<(Twist, f32)> {
        let (anim, t) = self.twist_anim.current()?;
        let t = self.prefs.animation.twist_interpolation.interpolate(t);
        Some((anim.twist, t))
    }

    /// Returns the orientation of the whole cube on screen.
    pub fn view(&self) -> &ViewOrbit {
        &self.view
    }
    /// Returns the orientation of the whole cube on screen.
    pub fn view_mut(&mut self) -> &mut ViewOrbit {
        &mut self.view
    }

    /// Removes and returns all events since the last call.
    ///
    /// Events accumulate until drained, so a host should call this once per
    /// frame even if it only reads [`Self::move_count()`].
    pub fn drain_events(&mut self) -> impl Iterator<Item = CubeEvent> + '_ {
        self.events.drain(..)
    }

    /// Applies a move given in notation such as `R` or `U'`. Unknown notation
    /// is ignored.
    pub fn apply_move(&mut self, notation: &str) {
        match Move::lookup(notation) {
            Some(twist) => self.push_twist(twist),
            None => log::trace!("ignoring unknown move {notation:?}"),
        }
    }
    /// Applies a move.
    pub fn apply_twist(&mut self, m: Move) {
        self.push_twist(m.twist());
    }

    /// Starts a twist immediately if idle, or else queues it. If the queue is
    /// full, the twist is dropped.
    fn push_twist(&mut self, twist: Twist) {
        if self.twist_anim.is_idle() {
            self.start_twist(twist);
        } else if self.pending.len() < self.prefs.engine.queue_capacity {
            self.pending.push_back(twist);
        } else {
            log::trace!("move queue is full; dropping {twist}");
        }
    }

    fn start_twist(&mut self, twist: Twist) {
        let group = self.state.select_group(twist);
        self.twist_anim.start(TwistAnimation { twist, group });
        self.events.push(CubeEvent::TwistStarted(twist));
    }

    fn complete_twist(&mut self, anim: TwistAnimation) {
        let TwistAnimation { twist, group } = anim;
        self.state.commit_group(&group, twist);
        self.events.push(CubeEvent::TwistCommitted(twist));

        if !self.is_scrambling {
            self.move_count += 1;
            self.events.push(CubeEvent::MoveCountChanged(self.move_count));
        }

        if let Some(next) = self.pending.pop_front() {
            self.start_twist(next);
            return;
        }

        if self.is_scrambling {
            self.is_scrambling = false;
            log::debug!("scramble finished");
            self.events.push(CubeEvent::ScrambleFinished);
        }
        if self.move_count > 0 && self.state.is_solved(self.prefs.engine.solved_threshold) {
            log::info!("cube solved in {} moves", self.move_count);
            self.events.push(CubeEvent::Solved);
        }
    }

    /// Scrambles the cube using the thread-local RNG. Does nothing while a
    /// twist is in flight.
    pub fn scramble(&mut self) {
        self.scramble_with_rng(&mut rand::rng());
    }
    /// Scrambles the cube using `rng`. Does nothing while a twist is in
    /// flight.
    pub fn scramble_with_rng(&mut self, rng: &mut impl Rng) {
        if self.can_scramble() {
            let len = self.prefs.engine.scramble_length;
            self.start_scramble(Scramble::random(rng, len));
        }
    }
    /// Scrambles the cube reproducibly from `seed`. Does nothing while a twist
    /// is in flight.
    pub fn scramble_seeded(&mut self, seed: u64) {
        if self.can_scramble() {
            let len = self.prefs.engine.scramble_length;
            self.start_scramble(Scramble::from_seed(seed, len));
        }
    }

    fn can_scramble(&self) -> bool {
        let idle = self.twist_anim.is_idle();
        if !idle {
            log::trace!("ignoring scramble while a twist is in flight");
        }
        idle
    }

    /// Queues every scramble move, ignoring the queue capacity, and starts
    /// the first one.
    fn start_scramble(&mut self, scramble: Scramble) {
        log::debug!("scrambling: {scramble}");
        self.pending.extend(scramble.moves.iter().map(|m| m.twist()));
        self.move_count = 0;
        self.events.push(CubeEvent::MoveCountChanged(0));
        self.is_scrambling = true;
        self.last_scramble = Some(scramble);

        match self.pending.pop_front() {
            Some(first) => self.start_twist(first),
            None => self.is_scrambling = false,
        }
    }

    /// Abandons the twist in flight and any queued twists and restores a
    /// solved cube. The view is kept.
    ///
    /// Undrained events are discarded, so a host never sees a
    /// [`CubeEvent::TwistStarted`] without its [`CubeEvent::TwistCommitted`].
    pub fn reset(&mut self) {
        self.events.clear();
        self.pending.clear();
        self.twist_anim = TwistAnimationState::default();
        self.state = CubeState::new();
        self.move_count = 0;
        self.is_scrambling = false;
        self.last_frame_time = None;
        self.events.push(CubeEvent::MoveCountChanged(0));
    }

    /// Advances the twist animation by `delta`. Completes at most one twist.
    /// Returns whether the cube must be redrawn.
    pub fn proceed(&mut self, delta: Duration) -> bool {
        if self.twist_anim.is_idle() {
            return false;
        }
        if let Some(anim) = self.twist_anim.proceed(delta, &self.prefs.animation) {
            self.complete_twist(anim);
        }
        true
    }

    /// Completes the twist in flight immediately, for hosts that run their
    /// own transition and report when it ends. Returns `false` if there was
    /// no twist in flight.
    pub fn finish_twist(&mut self) -> bool {
        match self.twist_anim.finish() {
            Some(anim) => {
                self.complete_twist(anim);
                true
            }
            None => false,
        }
    }

    /// Completes the twist in flight and every queued twist.
    pub fn catch_up(&mut self) {
        while self.finish_twist() {}
    }

    /// Advances the animation using the time since the last frame. Returns
    /// whether the cube must be redrawn.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.proceed(delta);

        if self.is_animating() {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    /// Returns the model transform of each cubie, in the same order as
    /// [`CubeState::cubies()`], including the partial rotation of the twist
    /// in flight. Translations are in units of one cubie.
    pub fn cubie_transforms(&self) -> Vec<Matrix4<f32>> {
        let mut transforms: Vec<Matrix4<f32>> = self
            .state
            .cubies()
            .iter()
            .map(|cubie| {
                Matrix4::from_translation(cubie.position().to_cgmath())
                    * Matrix4::from(cubie.orientation().to_cgmath())
            })
            .collect();

        if let Some((anim, t)) = self.twist_anim.current() {
            let t = self.prefs.animation.twist_interpolation.interpolate(t);
            let degrees = anim.twist.degrees() as f32 * t;
            let rot = Matrix4::from(partial_rotation(anim.twist.axis, degrees));
            for &i in &anim.group {
                if let Some(transform) = transforms.get_mut(i) {
                    *transform = rot * *transform;
                }
            }
        }

        transforms
    }

    /// Handles one input command from the host.
    pub fn handle_command(&mut self, command: InputCommand) {
        let view_prefs = &self.prefs.view;
        match command {
            InputCommand::Move(m) => self.apply_twist(m),
            InputCommand::Key { key, shift } => match key_to_move(key, shift) {
                Some(m) => self.apply_twist(m),
                None => log::trace!("ignoring key {key:?}"),
            },
            InputCommand::Scramble => self.scramble(),
            InputCommand::Reset => self.reset(),
            InputCommand::Nudge(direction) => self.view.nudge(direction, view_prefs),
            InputCommand::DragStart(pos) => self.drag.press(pos),
            InputCommand::DragMove(pos) => {
                if let Some(delta) = self.drag.move_to(pos, view_prefs) {
                    self.view.drag(delta, view_prefs);
                }
            }
            InputCommand::DragEnd => self.drag.release(),
        }
    }
}
