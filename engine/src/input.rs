//! Toolkit-independent input notifications
//!
//! The windowing layer translates its own events into [`InputEvent`]s and
//! pushes them into an [`InputQueue`]; the tick drains whatever arrived since
//! the previous tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Direction of a held key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Advance through the photos
    Forward,
    /// Rewind through the photos
    Reverse,
}

impl Direction {
    /// +1 for forward, -1 for reverse
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Modifier keys held alongside a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
}

/// One discrete input notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown,
    PointerUp,
    /// Pointer offset from the pivot, screen coordinates (y grows downwards)
    PointerMoved { x: f64, y: f64 },
    KeyDown {
        direction: Direction,
        modifiers: Modifiers,
    },
    KeyUp { modifiers: Modifiers },
    QuitRequested,
}

/// Anything that can hand out pending input without blocking
pub trait InputSource {
    /// Next pending event, or `None` once this tick's input is exhausted
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// FIFO of input events waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl InputSource for InputQueue {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

impl From<Vec<InputEvent>> for InputQueue {
    fn from(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::PointerDown);
        queue.push(InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        queue.push(InputEvent::PointerUp);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.poll_event(), Some(InputEvent::PointerDown));
        assert_eq!(
            queue.poll_event(),
            Some(InputEvent::PointerMoved { x: 1.0, y: 2.0 })
        );
        assert_eq!(queue.poll_event(), Some(InputEvent::PointerUp));
        assert_eq!(queue.poll_event(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Reverse.sign(), -1.0);
    }
}
