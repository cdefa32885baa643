//! Photo clock engine
//!
//! Tracks a clock hand driven by pointer drags or held keys and turns its
//! passes through twelve o'clock into steps through a photo sequence. Nothing
//! here draws, decodes images or touches the window system.

pub mod angle;
pub mod config;
pub mod crossing;
pub mod drag;
pub mod input;
pub mod motion;
pub mod pacer;
pub mod photos;
pub mod ramp;
pub mod session;
pub mod state;

pub use angle::{normalize_degrees, pointer_angle, pointer_time_angle, to_hand_angle, to_time_angle};
pub use config::{
    config_dir, config_path, delete_config, load_config, load_config_from, save_config,
    save_config_to, ConfigError,
};
pub use crossing::Crossing;
pub use drag::DragTracker;
pub use input::{Direction, InputEvent, InputQueue, InputSource, Modifiers};
pub use motion::{MotionParams, RampMode};
pub use pacer::FixedStep;
pub use photos::PhotoSequence;
pub use ramp::KeyHold;
pub use session::Session;
pub use state::{update, ClockState, InputMode};
