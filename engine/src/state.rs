//! Clock state and the per-tick update
//!
//! Each tick drains pending input, picks the active motion source (pointer
//! drag or held key), turns the hand, wraps it, checks for a crossing of
//! twelve and moves the photo index.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::angle::{normalize_degrees, pointer_angle, to_time_angle};
use crate::crossing::{self, Crossing};
use crate::drag::DragTracker;
use crate::input::{Direction, InputEvent, InputSource, Modifiers};
use crate::motion::{MotionParams, RampMode};
use crate::ramp::KeyHold;

/// Which input currently drives the hand
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Idle,
    Dragging(DragTracker),
    KeyHeld(KeyHold),
}

impl InputMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InputMode::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InputMode::Dragging(_))
    }

    pub fn is_key_held(&self) -> bool {
        matches!(self, InputMode::KeyHeld(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Idle => "Idle",
            InputMode::Dragging(_) => "Dragging",
            InputMode::KeyHeld(_) => "Key held",
        }
    }
}

/// Everything the clock knows between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockState {
    /// Hand rotation, counter-clockwise from +x, in `[0, 360)`
    pub hand_angle: f64,
    /// Hand position with 0° at twelve, clockwise
    pub time_angle: f64,
    /// Time angle as of the previous tick
    pub prev_time_angle: f64,
    /// Latest pointer offset from the pivot (screen coordinates)
    pub pointer: (f64, f64),
    /// Signed angular velocity, `|velocity| <= max_velocity`
    pub velocity: f64,
    /// Net crossings since the input was last released
    pub revolutions: i64,
    /// Index of the photo on display
    pub photo_index: usize,
    /// Active input source
    pub mode: InputMode,
    /// Cleared once a quit is requested
    pub running: bool,
}

impl ClockState {
    /// Create the state at startup.
    ///
    /// `start_index` is clamped into the sequence.
    pub fn new(initial_hand_angle: f64, start_index: usize, photo_count: usize) -> Self {
        let hand_angle = normalize_degrees(initial_hand_angle);
        let time_angle = to_time_angle(hand_angle);
        Self {
            hand_angle,
            time_angle,
            prev_time_angle: time_angle,
            pointer: (0.0, 0.0),
            velocity: 0.0,
            revolutions: 0,
            photo_index: start_index.min(photo_count.saturating_sub(1)),
            mode: InputMode::Idle,
            running: true,
        }
    }

    /// Current pointer angle in the hand convention
    pub fn pointer_angle(&self) -> f64 {
        pointer_angle(self.pointer.0, self.pointer.1)
    }

    /// Pointer angle captured on the previous drag tick, if dragging
    pub fn prev_pointer_angle(&self) -> Option<f64> {
        match &self.mode {
            InputMode::Dragging(tracker) => Some(tracker.prev_angle()),
            _ => None,
        }
    }

    /// Run one full tick: drain `input`, then advance.
    pub fn tick<S>(&mut self, input: &mut S, photo_count: usize, params: &MotionParams)
    where
        S: InputSource + ?Sized,
    {
        while let Some(event) = input.poll_event() {
            self.handle_event(event, params);
        }
        self.advance(photo_count, params);
    }

    /// Apply a single input notification.
    ///
    /// The pointer wins over the keyboard: a key press during a drag is
    /// ignored, and a pointer press during a key hold takes over.
    pub fn handle_event(&mut self, event: InputEvent, params: &MotionParams) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = (x, y);
            }
            InputEvent::PointerDown => {
                if !self.mode.is_dragging() {
                    self.reset_motion();
                    let tracker = DragTracker::begin(self.pointer_angle());
                    self.mode = InputMode::Dragging(tracker);
                    debug!(angle = tracker.prev_angle(), "drag started");
                }
            }
            InputEvent::PointerUp => {
                if self.mode.is_dragging() {
                    self.release();
                }
            }
            InputEvent::KeyDown {
                direction,
                modifiers,
            } => self.key_down(direction, modifiers, params),
            InputEvent::KeyUp { .. } => {
                if self.mode.is_key_held() {
                    self.release();
                }
            }
            InputEvent::QuitRequested => {
                debug!("quit requested");
                self.running = false;
            }
        }
    }

    fn key_down(&mut self, direction: Direction, modifiers: Modifiers, params: &MotionParams) {
        if self.mode.is_dragging() {
            trace!(?direction, "key ignored while dragging");
            return;
        }

        // Auto-repeat of the held key keeps the ramp going
        if let InputMode::KeyHeld(hold) = &mut self.mode {
            if hold.direction == direction {
                if params.ramp_mode == RampMode::Ladder && modifiers.shift {
                    hold.climb(params);
                    self.velocity = hold.velocity(self.revolutions, params);
                    debug!(rung = hold.rung, velocity = self.velocity, "ladder climbed");
                }
                return;
            }
        }

        self.reset_motion();
        let (hold, velocity) = KeyHold::press(direction, modifiers, params);
        self.velocity = velocity;
        self.mode = InputMode::KeyHeld(hold);
        debug!(?direction, velocity, "key hold started");
    }

    fn release(&mut self) {
        debug!(
            mode = self.mode.label(),
            revolutions = self.revolutions,
            "input released"
        );
        self.mode = InputMode::Idle;
        self.reset_motion();
    }

    fn reset_motion(&mut self) {
        self.velocity = 0.0;
        self.revolutions = 0;
    }

    /// Turn the hand for this tick and update the photo index.
    pub fn advance(&mut self, photo_count: usize, params: &MotionParams) {
        let delta = match &mut self.mode {
            InputMode::Dragging(tracker) => tracker.sample(pointer_angle(self.pointer.0, self.pointer.1)),
            InputMode::KeyHeld(hold) => {
                self.velocity = hold.velocity(self.revolutions, params);
                self.velocity * params.tick_scale
            }
            InputMode::Idle => {
                self.velocity = params.clamp_velocity(self.velocity);
                self.velocity * params.tick_scale
            }
        };

        self.hand_angle = normalize_degrees(self.hand_angle + delta);
        self.time_angle = to_time_angle(self.hand_angle);

        if let Some(crossing) = crossing::detect(self.prev_time_angle, self.time_angle) {
            self.on_crossing(crossing, photo_count);
        }
        self.prev_time_angle = self.time_angle;

        trace!(
            hand = self.hand_angle,
            time = self.time_angle,
            velocity = self.velocity,
            index = self.photo_index,
            "tick"
        );
    }

    fn on_crossing(&mut self, crossing: Crossing, photo_count: usize) {
        let before = self.photo_index;
        self.photo_index = crossing::apply(self.photo_index, crossing, photo_count);
        self.revolutions += crossing.step();
        debug!(
            ?crossing,
            from = before,
            to = self.photo_index,
            revolutions = self.revolutions,
            "crossed twelve"
        );
    }
}

/// Consume a state and return it one tick later.
pub fn update<S>(
    mut state: ClockState,
    input: &mut S,
    photo_count: usize,
    params: &MotionParams,
) -> ClockState
where
    S: InputSource + ?Sized,
{
    state.tick(input, photo_count, params);
    state
}
