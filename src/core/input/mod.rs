//=========================================================================
// Input
//=========================================================================
//
// Character input pipeline, from raw platform events to the per-character
// input record.
//
// Architecture:
// ```text
//   InputEvent ──► StateTracker ──► IntentMapper ──► CharacterInput
//                       │                                 ▲
//                       └────── KeyboardDevice (polled) ──┘
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod character_input;
pub mod event;
pub mod intent_mapper;
pub mod state_tracker;

//=== Public API ==========================================================

pub use character_input::{CharacterInput, CharacterInputSettings, CursorControl, KeyboardDevice};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use intent_mapper::{InputIntent, IntentBindings, IntentMapper, KeyBinding};
pub use state_tracker::StateTracker;
