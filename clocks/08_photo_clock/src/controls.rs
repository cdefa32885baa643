//! Controls - translates nannou keyboard and mouse callbacks into clock input
//!
//! nannou reports OS key auto-repeat as fresh presses; the clock wants one
//! press per hold, so held arrow keys are tracked here.

use clock_engine::{Direction, InputEvent, Modifiers};
use nannou::prelude::*;

/// Extra grab distance around the clock face, in points
const FACE_GRAB_MARGIN: f32 = 40.0;

/// Direction bound to a key, if any
pub fn key_direction(key: Key) -> Option<Direction> {
    match key {
        Key::Right | Key::Up => Some(Direction::Forward),
        Key::Left | Key::Down => Some(Direction::Reverse),
        _ => None,
    }
}

fn is_shift(key: Key) -> bool {
    matches!(key, Key::LShift | Key::RShift)
}

/// Pointer offset from the pivot in screen orientation (y grows downwards)
pub fn pointer_offset(pos: Point2, pivot: Point2) -> (f64, f64) {
    ((pos.x - pivot.x) as f64, -(pos.y - pivot.y) as f64)
}

/// Whether a press at `pos` should grab the hand
pub fn grabs_face(pos: Point2, pivot: Point2, radius: f32) -> bool {
    pos.distance(pivot) <= radius + FACE_GRAB_MARGIN
}

/// Arrow keys currently held, oldest first
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: Vec<Key>,
}

impl KeyboardState {
    /// Handle a key press; returns the clock event to queue, if any.
    pub fn pressed(&mut self, key: Key, shift: bool) -> Option<InputEvent> {
        if is_shift(key) {
            // Shift while an arrow is down climbs the speed ladder
            let direction = self.held.last().copied().and_then(key_direction)?;
            return Some(InputEvent::KeyDown {
                direction,
                modifiers: Modifiers { shift: true },
            });
        }

        let direction = key_direction(key)?;
        if self.held.contains(&key) {
            return None;
        }
        self.held.push(key);
        Some(InputEvent::KeyDown {
            direction,
            modifiers: Modifiers { shift },
        })
    }

    /// Handle a key release; returns the clock event to queue, if any.
    ///
    /// Letting go of one arrow while another is still down hands control back
    /// to the remaining key. The hand-back never carries shift, so it cannot
    /// climb the ladder.
    pub fn released(&mut self, key: Key, shift: bool) -> Option<InputEvent> {
        key_direction(key)?;
        let pos = self.held.iter().position(|&k| k == key)?;
        self.held.remove(pos);

        match self.held.last().copied().and_then(key_direction) {
            Some(direction) => Some(InputEvent::KeyDown {
                direction,
                modifiers: Modifiers::default(),
            }),
            None => Some(InputEvent::KeyUp {
                modifiers: Modifiers { shift },
            }),
        }
    }

    /// Forget all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) -> Option<InputEvent> {
        if self.held.is_empty() {
            return None;
        }
        self.held.clear();
        Some(InputEvent::KeyUp {
            modifiers: Modifiers::default(),
        })
    }
}
