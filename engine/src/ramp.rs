//! Key-hold velocity ramp
//!
//! Holding a direction key spins the hand. In continuous mode the speed grows
//! with the number of revolutions completed during the hold; in ladder mode it
//! steps through a fixed table as shift is pressed.

use serde::{Deserialize, Serialize};

use crate::input::{Direction, Modifiers};
use crate::motion::{MotionParams, RampMode};

/// Speed set by a fresh key press
pub const BASE_SPEED: f64 = 1.25;

/// Growth factor applied to the revolution term
pub const RAMP_GAIN: f64 = 0.05;

/// Exponent applied to the revolution term
pub const RAMP_EXPONENT: f64 = 1.4;

/// Velocity for a key press in `direction`, before any ramping.
///
/// Negative velocity turns the hand clockwise, which advances the photos.
pub fn press_velocity(direction: Direction) -> f64 {
    -direction.sign() * BASE_SPEED
}

/// Continuous ramp velocity for the current revolution count.
///
/// The sign follows the accumulator; when it is zero the held key decides.
pub fn ramp_velocity(revolutions: i64, held: Direction, params: &MotionParams) -> f64 {
    let sign = match revolutions.signum() {
        0 => held.sign(),
        s => s as f64,
    };
    let turns = (revolutions.unsigned_abs() + 1) as f64;
    let speed = BASE_SPEED + RAMP_GAIN * turns.powf(RAMP_EXPONENT);
    params.clamp_velocity(-sign * speed)
}

/// Ladder velocity for `rung` in `direction`.
pub fn ladder_velocity(rung: usize, direction: Direction, params: &MotionParams) -> f64 {
    let speed = match params.ladder.len() {
        0 => BASE_SPEED,
        n => params.ladder[rung.min(n - 1)],
    };
    params.clamp_velocity(-direction.sign() * speed)
}

/// The key currently held and the ladder rung it has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHold {
    /// Direction of the held key
    pub direction: Direction,
    /// Ladder rung, only meaningful in [`RampMode::Ladder`]
    pub rung: usize,
}

impl KeyHold {
    /// Begin a hold; returns the hold and the initial velocity.
    pub fn press(direction: Direction, modifiers: Modifiers, params: &MotionParams) -> (Self, f64) {
        let hold = Self {
            direction,
            rung: usize::from(modifiers.shift),
        };
        let velocity = match params.ramp_mode {
            RampMode::Continuous => params.clamp_velocity(press_velocity(direction)),
            RampMode::Ladder => ladder_velocity(hold.rung, direction, params),
        };
        (hold, velocity)
    }

    /// Climb one ladder rung, capped at the top of the table
    pub fn climb(&mut self, params: &MotionParams) {
        let top = params.ladder.len().saturating_sub(1);
        self.rung = (self.rung + 1).min(top);
    }

    /// Velocity for this tick
    pub fn velocity(&self, revolutions: i64, params: &MotionParams) -> f64 {
        match params.ramp_mode {
            RampMode::Continuous => ramp_velocity(revolutions, self.direction, params),
            RampMode::Ladder => ladder_velocity(self.rung, self.direction, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_velocity_signs() {
        assert_eq!(press_velocity(Direction::Forward), -1.25);
        assert_eq!(press_velocity(Direction::Reverse), 1.25);
    }

    #[test]
    fn test_ramp_first_tick() {
        let params = MotionParams::default();
        let v = ramp_velocity(0, Direction::Forward, &params);
        assert!((v + 1.30).abs() < 1e-12);
        let v = ramp_velocity(0, Direction::Reverse, &params);
        assert!((v - 1.30).abs() < 1e-12);
    }

    #[test]
    fn test_ramp_follows_accumulator_sign() {
        let params = MotionParams::default();
        assert!(ramp_velocity(3, Direction::Reverse, &params) < 0.0);
        assert!(ramp_velocity(-3, Direction::Forward, &params) > 0.0);
    }

    #[test]
    fn test_ramp_is_monotonic_then_clamped() {
        let params = MotionParams::default();
        let mut last = 0.0;
        for revs in 0..200 {
            let speed = ramp_velocity(revs, Direction::Forward, &params).abs();
            assert!(speed >= last, "speed dropped at {} revolutions", revs);
            assert!(speed <= params.max_velocity);
            last = speed;
        }
        assert_eq!(last, params.max_velocity);
    }

    #[test]
    fn test_ladder_climb_caps() {
        let params = MotionParams {
            ramp_mode: RampMode::Ladder,
            ..MotionParams::default()
        };
        let (mut hold, v) = KeyHold::press(Direction::Forward, Modifiers::default(), &params);
        assert_eq!(v, -1.25);
        for _ in 0..10 {
            hold.climb(&params);
        }
        assert_eq!(hold.rung, 3);
        assert_eq!(hold.velocity(0, &params), -10.0);
    }

    #[test]
    fn test_ladder_shift_press_starts_one_rung_up() {
        let params = MotionParams {
            ramp_mode: RampMode::Ladder,
            ..MotionParams::default()
        };
        let (hold, v) = KeyHold::press(Direction::Reverse, Modifiers { shift: true }, &params);
        assert_eq!(hold.rung, 1);
        assert_eq!(v, 2.5);
    }

    #[test]
    fn test_ladder_respects_cap() {
        let params = MotionParams {
            ramp_mode: RampMode::Ladder,
            max_velocity: 4.0,
            ..MotionParams::default()
        };
        assert_eq!(ladder_velocity(3, Direction::Forward, &params), -4.0);
    }

    #[test]
    fn test_empty_ladder_uses_base_speed() {
        let params = MotionParams {
            ramp_mode: RampMode::Ladder,
            ladder: Vec::new(),
            ..MotionParams::default()
        };
        assert_eq!(ladder_velocity(2, Direction::Forward, &params), -1.25);
    }
}
