//=========================================================================
// Camera
//=========================================================================
//
// Two-target framing camera.
//
// Components:
// - `config`: distance limits, padding, screen placement
// - `framing`: the controller and its lifecycle
// - `target`: the output interface written each tick
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod framing;
pub mod target;

//=== Public API ==========================================================

pub use config::{Axis, ConfigError, FramingConfig};
pub use framing::{FramingCamera, FramingError, FramingState};
pub use target::{FramingBody, FramingTarget};
