//=========================================================================
// Framing Configuration
//=========================================================================
//
// Tunables for the two-target framing camera and their validation.
//
// Validation only reports. The camera keeps running with whatever it is
// given, so an out-of-range padding still produces the raw (possibly
// infinite or negative) distance.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== FramingConfig =======================================================

/// Distance limits, scaling and screen placement for [`FramingCamera`].
///
/// [`FramingCamera`]: super::FramingCamera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingConfig {
    /// Lower bound of the clamped distance.
    pub min_distance: f32,

    /// Upper bound of the clamped distance.
    pub max_distance: f32,

    /// Scale applied to the padded target span before clamping.
    pub distance_multiplier: f32,

    /// Added after clamping. May push the final distance outside
    /// `[min_distance, max_distance]`.
    pub cinematic_offset: f32,

    /// Screen-space margin per axis, in `[0, 1)`.
    pub padding: Vec2,

    /// Where the rig sits on screen, per axis, in `[0, 1]`.
    pub screen_offset: Vec2,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 20.0,
            distance_multiplier: 1.0,
            cinematic_offset: 0.0,
            padding: Vec2::new(0.1, 0.1),
            screen_offset: Vec2::new(0.5, 0.5),
        }
    }
}

impl FramingConfig {
    /// Checks the documented ranges. Reports the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_distance <= self.max_distance) {
            return Err(ConfigError::InvertedDistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }

        for (axis, value) in [(Axis::X, self.padding.x), (Axis::Y, self.padding.y)] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::PaddingOutOfRange { axis, value });
            }
        }

        for (axis, value) in [(Axis::X, self.screen_offset.x), (Axis::Y, self.screen_offset.y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ScreenOffsetOutOfRange { axis, value });
            }
        }

        Ok(())
    }
}

//=== ConfigError =========================================================

/// Screen axis a configuration value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A [`FramingConfig`] value outside its documented range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `min_distance > max_distance` (or either is NaN).
    InvertedDistanceRange { min: f32, max: f32 },

    /// Padding outside `[0, 1)`. At 1 the padded span divides by zero.
    PaddingOutOfRange { axis: Axis, value: f32 },

    /// Screen offset outside `[0, 1]`.
    ScreenOffsetOutOfRange { axis: Axis, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedDistanceRange { min, max } => {
                write!(f, "min distance {} exceeds max distance {}", min, max)
            }
            Self::PaddingOutOfRange { axis, value } => {
                write!(f, "padding {:?} = {} is outside [0, 1)", axis, value)
            }
            Self::ScreenOffsetOutOfRange { axis, value } => {
                write!(f, "screen offset {:?} = {} is outside [0, 1]", axis, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=========================================================================
// Unit Tests
//=========================================================================
