//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use twin_frame::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::world::{Gameplay, World, WorldConfig};

// Input
pub use crate::core::input::{
    CharacterInput, CharacterInputSettings, CursorControl, InputIntent, IntentBindings,
    KeyBinding, KeyCode, KeyboardDevice, Modifiers, MouseButton,
};

// Camera
pub use crate::core::camera::{
    FramingBody, FramingCamera, FramingConfig, FramingState, FramingTarget,
};

// Transforms
pub use crate::core::transform::{TransformId, Transforms};
