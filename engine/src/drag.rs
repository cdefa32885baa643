//! Pointer drag tracking
//!
//! Dragging maps pointer rotation around the pivot 1:1 onto the hand.

use serde::{Deserialize, Serialize};

use crate::angle::pointer_angle;

/// Tracks the pointer angle between ticks while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragTracker {
    /// Pointer angle (hand convention) sampled on the previous tick
    prev_angle: f64,
}

impl DragTracker {
    /// Start a drag at the given pointer angle.
    ///
    /// The first tick after this contributes no rotation.
    pub fn begin(angle: f64) -> Self {
        Self { prev_angle: angle }
    }

    /// Start a drag from a pointer offset relative to the pivot.
    pub fn begin_at(x: f64, y: f64) -> Self {
        Self::begin(pointer_angle(x, y))
    }

    /// The pointer angle recorded on the last sample
    pub fn prev_angle(&self) -> f64 {
        self.prev_angle
    }

    /// Record a new pointer angle and return the delta to apply to the hand.
    ///
    /// The delta is the raw difference, so it can be ±360° off the shortest
    /// arc when the pointer passes the 0° ray. The hand wraps afterwards, which
    /// makes both forms land on the same angle.
    pub fn sample(&mut self, angle: f64) -> f64 {
        let delta = angle - self.prev_angle;
        self.prev_angle = angle;
        delta
    }
}
