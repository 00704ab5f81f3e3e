//=========================================================================
// Framing Camera
//=========================================================================
//
// Keeps two targets in view: the rig transform sits at their midpoint and
// the camera distance grows with their separation.
//
// State machine:
// ```text
//   Uninitialized ──initialize(Some)──► Ready ──late_update()──┐
//         │                               ▲                    │
//         │                               └────────────────────┘
//         └──initialize(None)──► Disabled (terminal)
// ```
//
// Distance pipeline (per tick):
// ```text
//   delta = a - b
//   span  = max(|delta.x| / (1 - pad.x), |delta.z| / (1 - pad.y))
//   dist  = clamp(span * multiplier, min, max) + cinematic_offset
// ```
// The depth span uses world Z as forward.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec3;
use log::{error, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::config::FramingConfig;
use super::target::FramingTarget;
use crate::core::transform::{TransformId, Transforms};

//=== FramingState ========================================================

/// Lifecycle of a [`FramingCamera`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingState {
    /// Created, framing target not yet resolved.
    Uninitialized,

    /// Framing target resolved; updates run every tick.
    Ready,

    /// Framing target was missing at initialization. Never recovers.
    Disabled,
}

//=== FramingError ========================================================

/// Failures reported by [`FramingCamera::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    /// No framing target was available. The camera is now disabled.
    MissingDependency,

    /// `initialize` was called after the camera left `Uninitialized`.
    AlreadyInitialized(FramingState),
}

impl std::fmt::Display for FramingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDependency => write!(f, "Framing target is required"),
            Self::AlreadyInitialized(state) => {
                write!(f, "Framing camera already initialized (state: {:?})", state)
            }
        }
    }
}

impl std::error::Error for FramingError {}

//=== FramingCamera =======================================================

/// Two-target framing camera controller.
///
/// Owns its framing target once resolved and writes it from
/// [`late_update`](Self::late_update), after the targets have moved for
/// the tick.
pub struct FramingCamera<T: FramingTarget> {
    config: FramingConfig,
    rig: TransformId,
    target_a: Option<TransformId>,
    target_b: Option<TransformId>,
    framing: Option<T>,
    state: FramingState,
}

impl<T: FramingTarget> FramingCamera<T> {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized camera following `rig`.
    pub fn new(rig: TransformId, config: FramingConfig) -> Self {
        warn_if_invalid(&config);
        Self {
            config,
            rig,
            target_a: None,
            target_b: None,
            framing: None,
            state: FramingState::Uninitialized,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Resolves the framing target.
    ///
    /// With `None` the camera logs the failure and moves to
    /// [`FramingState::Disabled`] for good. With `Some`, screen offsets are
    /// pushed immediately and the camera becomes ready.
    pub fn initialize(&mut self, framing: Option<T>) -> Result<(), FramingError> {
        if self.state != FramingState::Uninitialized {
            return Err(FramingError::AlreadyInitialized(self.state));
        }

        match framing {
            Some(framing) => {
                self.framing = Some(framing);
                self.state = FramingState::Ready;
                self.apply_framing_settings();
                info!(target: "camera", "Framing camera ready");
                Ok(())
            }
            None => {
                self.state = FramingState::Disabled;
                error!(target: "camera", "{}; framing camera disabled", FramingError::MissingDependency);
                Err(FramingError::MissingDependency)
            }
        }
    }

    pub fn state(&self) -> FramingState {
        self.state
    }

    //--- Configuration ----------------------------------------------------

    pub fn config(&self) -> &FramingConfig {
        &self.config
    }

    /// Replaces the configuration and reapplies screen offsets.
    pub fn set_config(&mut self, config: FramingConfig) {
        self.config = config;
        self.on_configuration_changed();
    }

    /// Hook for edits made to the configuration in place.
    pub fn on_configuration_changed(&mut self) {
        warn_if_invalid(&self.config);
        self.apply_framing_settings();
    }

    /// Pushes configured screen offsets into the framing target, if any.
    pub fn apply_framing_settings(&mut self) {
        if let Some(framing) = self.framing.as_mut() {
            framing.set_screen_offset(self.config.screen_offset.x, self.config.screen_offset.y);
        }
    }

    //--- Targets ----------------------------------------------------------

    pub fn set_targets(&mut self, a: Option<TransformId>, b: Option<TransformId>) {
        self.target_a = a;
        self.target_b = b;
    }

    pub fn targets(&self) -> (Option<TransformId>, Option<TransformId>) {
        (self.target_a, self.target_b)
    }

    pub fn rig(&self) -> TransformId {
        self.rig
    }

    /// The resolved framing target, if initialization succeeded.
    pub fn framing(&self) -> Option<&T> {
        self.framing.as_ref()
    }

    //--- Per-Tick Update --------------------------------------------------

    /// Moves the rig and updates the camera distance.
    ///
    /// Does nothing unless the camera is ready and both targets resolve to
    /// live transforms.
    pub fn late_update(&mut self, transforms: &mut Transforms) {
        if self.state != FramingState::Ready {
            return;
        }

        let Some((a, b)) = self.target_positions(transforms) else {
            return;
        };

        self.update_midpoint(transforms, a, b);
        self.update_camera_distance(a, b);
    }

    /// Places the rig halfway between `a` and `b`.
    pub fn update_midpoint(&self, transforms: &mut Transforms, a: Vec3, b: Vec3) {
        if !transforms.set_position(self.rig, (a + b) * 0.5) {
            trace!(target: "camera", "Rig transform is gone; midpoint not written");
        }
    }

    /// Writes [`compute_distance`](Self::compute_distance) into the target.
    pub fn update_camera_distance(&mut self, a: Vec3, b: Vec3) {
        let distance = self.compute_distance(a, b);
        if let Some(framing) = self.framing.as_mut() {
            trace!(target: "camera", "Camera distance: {}", distance);
            framing.set_distance(distance);
        }
    }

    //--- Distance Math ----------------------------------------------------

    /// Padded, scaled span between the targets, clamped to the configured
    /// range.
    pub fn clamped_distance(&self, a: Vec3, b: Vec3) -> f32 {
        let delta = a - b;
        let horizontal = delta.x.abs();
        let depth = delta.z.abs();

        let padded_horizontal = horizontal / (1.0 - self.config.padding.x);
        let padded_depth = depth / (1.0 - self.config.padding.y);

        let required = padded_horizontal.max(padded_depth);
        let desired = required * self.config.distance_multiplier;

        // Not f32::clamp: that panics when min > max. NaN passes through.
        if desired < self.config.min_distance {
            self.config.min_distance
        } else if desired > self.config.max_distance {
            self.config.max_distance
        } else {
            desired
        }
    }

    /// Final camera distance: the clamped distance plus the cinematic
    /// offset, which is allowed to leave the configured range.
    pub fn compute_distance(&self, a: Vec3, b: Vec3) -> f32 {
        self.clamped_distance(a, b) + self.config.cinematic_offset
    }

    //--- Internal Helpers -------------------------------------------------

    fn target_positions(&self, transforms: &Transforms) -> Option<(Vec3, Vec3)> {
        let a = transforms.position(self.target_a?)?;
        let b = transforms.position(self.target_b?)?;
        Some((a, b))
    }
}

fn warn_if_invalid(config: &FramingConfig) {
    if let Err(e) = config.validate() {
        warn!(target: "camera", "Framing config out of range: {}", e);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
