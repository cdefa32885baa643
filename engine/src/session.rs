//! Session wiring: state, pending input, motion parameters and pacing

use std::time::Duration;

use crate::input::{InputEvent, InputQueue};
use crate::motion::MotionParams;
use crate::pacer::FixedStep;
use crate::state::ClockState;

/// One running clock
#[derive(Debug, Clone)]
pub struct Session {
    state: ClockState,
    queue: InputQueue,
    params: MotionParams,
    pacer: FixedStep,
}

impl Session {
    pub fn new(state: ClockState, params: MotionParams, pacer: FixedStep) -> Self {
        let params = checked(params);
        Self {
            state,
            queue: InputQueue::new(),
            params,
            pacer,
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Swap motion parameters; takes effect on the next tick
    pub fn set_params(&mut self, params: MotionParams) {
        self.params = checked(params);
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Queue an input notification for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one tick now, independent of pacing
    pub fn step(&mut self, photo_count: usize) {
        self.state.tick(&mut self.queue, photo_count, &self.params);
    }

    /// Let `elapsed` pass and run every tick that became due.
    ///
    /// Input waits in the queue until a tick runs. Once the clock stops, no
    /// further ticks run. Returns the number of ticks executed.
    pub fn pump(&mut self, elapsed: Duration, photo_count: usize) -> u32 {
        let due = self.pacer.accumulate(elapsed);
        let mut ran = 0;
        while ran < due && self.state.running {
            self.step(photo_count);
            ran += 1;
        }
        ran
    }
}

fn checked(params: MotionParams) -> MotionParams {
    let params = params.sanitized();
    if !params.crossing_safe() {
        tracing::warn!(
            step = params.max_step_degrees(),
            "max velocity times tick scale reaches 180 degrees; crossings may be missed"
        );
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Direction, Modifiers};

    fn session() -> Session {
        Session::new(
            ClockState::new(90.0, 0, 5),
            MotionParams::default(),
            FixedStep::from_rate(50.0),
        )
    }

    #[test]
    fn test_input_waits_for_tick() {
        let mut session = session();
        session.push(InputEvent::KeyDown {
            direction: Direction::Forward,
            modifiers: Modifiers::default(),
        });
        assert_eq!(session.pump(Duration::from_millis(5), 5), 0);
        assert!(session.state().mode.is_idle());
        assert_eq!(session.pump(Duration::from_millis(15), 5), 1);
        assert!(session.state().mode.is_key_held());
    }

    #[test]
    fn test_quit_stops_ticking() {
        let mut session = session();
        session.push(InputEvent::QuitRequested);
        assert_eq!(session.pump(Duration::from_millis(60), 5), 1);
        assert!(!session.is_running());
        assert_eq!(session.pump(Duration::from_millis(60), 5), 0);
    }

    #[test]
    fn test_params_can_change_mid_session() {
        let mut session = session();
        session.set_params(MotionParams {
            max_velocity: 1.0,
            ..MotionParams::default()
        });
        session.push(InputEvent::KeyDown {
            direction: Direction::Forward,
            modifiers: Modifiers::default(),
        });
        session.step(5);
        assert_eq!(session.state().velocity, -1.0);
    }

    #[test]
    fn test_nan_config_still_ticks() {
        let params: MotionParams = toml::from_str("max_velocity = nan\ntick_scale = nan").unwrap();
        let mut session = Session::new(ClockState::new(90.0, 0, 5), params, FixedStep::from_rate(50.0));
        session.step(5);
        session.push(InputEvent::KeyDown {
            direction: Direction::Forward,
            modifiers: Modifiers::default(),
        });
        for _ in 0..200 {
            session.step(5);
        }
        let state = session.state();
        assert!(state.hand_angle.is_finite());
        assert!((0.0..360.0).contains(&state.hand_angle));
        assert!(state.photo_index > 0);
    }

    #[test]
    fn test_set_params_sanitizes() {
        let mut session = session();
        session.set_params(MotionParams {
            tick_scale: f64::NAN,
            ..MotionParams::default()
        });
        assert_eq!(session.params().tick_scale, crate::motion::DEFAULT_TICK_SCALE);
    }
}
