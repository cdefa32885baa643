//! Motion parameters shared by the ramp and the tick update

use serde::{Deserialize, Serialize};

/// Default cap on angular velocity
pub const DEFAULT_MAX_VELOCITY: f64 = 10.0;

/// Default multiplier from velocity to degrees per tick
pub const DEFAULT_TICK_SCALE: f64 = 5.0;

/// Default discrete speeds for the ladder ramp
pub const DEFAULT_LADDER: [f64; 4] = [1.25, 2.5, 5.0, 10.0];

/// Largest per-tick hand step for which crossing detection stays exact
pub const CROSSING_SAFE_STEP: f64 = 180.0;

/// How a held key turns into velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampMode {
    /// Accelerates with every revolution while the key stays down
    #[default]
    Continuous,
    /// Fixed speeds, climbed one rung per shift+arrow press
    Ladder,
}

impl std::fmt::Display for RampMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RampMode::Continuous => write!(f, "Continuous"),
            RampMode::Ladder => write!(f, "Ladder"),
        }
    }
}

/// Velocity limits and scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Cap on `|velocity|`
    pub max_velocity: f64,
    /// Degrees of hand rotation per unit of velocity per tick
    pub tick_scale: f64,
    /// Which keyboard ramp is active
    pub ramp_mode: RampMode,
    /// Speeds used by [`RampMode::Ladder`], slowest first
    pub ladder: Vec<f64>,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            max_velocity: DEFAULT_MAX_VELOCITY,
            tick_scale: DEFAULT_TICK_SCALE,
            ramp_mode: RampMode::default(),
            ladder: DEFAULT_LADDER.to_vec(),
        }
    }
}

impl MotionParams {
    /// Largest hand step a held key can produce in one tick
    pub fn max_step_degrees(&self) -> f64 {
        self.max_velocity.abs() * self.tick_scale.abs()
    }

    /// Whether keyboard motion stays under the crossing detector's 180° limit.
    ///
    /// Configurations that fail this still run; crossings may be missed or
    /// counted twice at top speed.
    pub fn crossing_safe(&self) -> bool {
        self.max_step_degrees() < CROSSING_SAFE_STEP
    }

    /// Clamp a velocity to the configured cap
    pub fn clamp_velocity(&self, velocity: f64) -> f64 {
        let cap = self.max_velocity.abs();
        velocity.clamp(-cap, cap)
    }

    /// Replace non-finite values with their defaults.
    ///
    /// TOML accepts `nan` and `inf`; neither can drive the hand.
    pub fn sanitized(mut self) -> Self {
        if !self.max_velocity.is_finite() {
            tracing::warn!(value = self.max_velocity, "max_velocity is not finite; using default");
            self.max_velocity = DEFAULT_MAX_VELOCITY;
        }
        if !self.tick_scale.is_finite() {
            tracing::warn!(value = self.tick_scale, "tick_scale is not finite; using default");
            self.tick_scale = DEFAULT_TICK_SCALE;
        }
        let before = self.ladder.len();
        self.ladder.retain(|step| step.is_finite());
        if self.ladder.len() != before {
            tracing::warn!(dropped = before - self.ladder.len(), "ignoring non-finite ladder steps");
        }
        if self.ladder.is_empty() && before > 0 {
            self.ladder = DEFAULT_LADDER.to_vec();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_crossing_safe() {
        let params = MotionParams::default();
        assert_eq!(params.max_step_degrees(), 50.0);
        assert!(params.crossing_safe());
    }

    #[test]
    fn test_fast_config_is_flagged() {
        let params = MotionParams {
            max_velocity: 40.0,
            ..MotionParams::default()
        };
        assert!(!params.crossing_safe());
    }

    #[test]
    fn test_clamp_velocity() {
        let params = MotionParams::default();
        assert_eq!(params.clamp_velocity(12.0), 10.0);
        assert_eq!(params.clamp_velocity(-12.0), -10.0);
        assert_eq!(params.clamp_velocity(-3.0), -3.0);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let params: MotionParams =
            toml::from_str("max_velocity = nan\ntick_scale = inf\nladder = [1.0, nan, 3.0]").unwrap();
        let params = params.sanitized();
        assert_eq!(params.max_velocity, DEFAULT_MAX_VELOCITY);
        assert_eq!(params.tick_scale, DEFAULT_TICK_SCALE);
        assert_eq!(params.ladder, vec![1.0, 3.0]);
    }

    #[test]
    fn test_sanitized_all_bad_ladder_falls_back() {
        let params = MotionParams {
            ladder: vec![f64::NAN, f64::INFINITY],
            ..MotionParams::default()
        }
        .sanitized();
        assert_eq!(params.ladder, DEFAULT_LADDER.to_vec());
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let params = MotionParams {
            max_velocity: 4.0,
            tick_scale: 2.0,
            ..MotionParams::default()
        };
        assert_eq!(params.clone().sanitized(), params);
    }

    #[test]
    fn test_ramp_mode_toml_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: RampMode,
        }
        let text = toml::to_string(&Wrapper { mode: RampMode::Ladder }).unwrap();
        assert!(text.contains("ladder"));
        let back: Wrapper = toml::from_str("mode = \"continuous\"").unwrap();
        assert_eq!(back.mode, RampMode::Continuous);
    }
}
