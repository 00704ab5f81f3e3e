//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// unified, engine-friendly format consumed by the state tracker and the
// intent mapper.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Carry window focus changes alongside input (cursor policy needs them)
// - Provide equality and hashing semantics for coalescing
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker ──► IntentMapper ──► CharacterInput
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyW` is always the same physical key regardless of layout.
///
/// Left and right Shift are distinct keys here: arrow-key mode sprints on
/// Right Shift while the default bindings sprint on Left Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------

    ShiftLeft,
    ShiftRight,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt) reported with discrete events.
///
/// Left and right variants are folded together here. Use the
/// `ShiftLeft`/`ShiftRight` key codes when the side matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key held (either side).
    pub shift: bool,

    /// Ctrl key held (either side, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either side, Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Discrete events compare by type + payload. `MouseMoved` and
/// `MouseMotion` compare equal regardless of their data, so a `HashSet`
/// keeps only the latest one (last position wins).
///
/// ```text
/// KeyDown{A, NONE} == KeyDown{A, NONE}       ✓
/// KeyDown{A, NONE} == KeyDown{A, SHIFT}      ✗
/// MouseMoved{...}  == MouseMoved{...}        ✓
/// FocusChanged(true) == FocusChanged(false)  ✗
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor moved to a new position (screen space, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Raw pointer motion since the previous report.
    ///
    /// Unlike `MouseMoved` this keeps arriving while the cursor is locked,
    /// which is what look input needs.
    MouseMotion { dx: f32, dy: f32 },

    /// The window gained (`true`) or lost (`false`) focus.
    FocusChanged(bool),

    /// Unrecognized or unsupported event. Ignored by the input systems.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (MouseMotion { .. }, MouseMotion { .. }) => true,
            (FocusChanged(a), FocusChanged(b)) => a == b,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers. Pointer coordinates are
/// NOT hashed (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            Self::FocusChanged(focused) => focused.hash(state),
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    //=== Equality ========================================================

    #[test]
    fn key_events_compare_by_key_and_modifiers() {
        assert_eq!(key_down(KeyCode::KeyA), key_down(KeyCode::KeyA));
        assert_ne!(key_down(KeyCode::KeyA), key_down(KeyCode::KeyB));
        assert_ne!(
            key_down(KeyCode::KeyA),
            InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT }
        );
    }

    #[test]
    fn shift_sides_are_distinct_keys() {
        assert_ne!(key_down(KeyCode::ShiftLeft), key_down(KeyCode::ShiftRight));
    }

    #[test]
    fn pointer_events_ignore_coordinates() {
        assert_eq!(
            InputEvent::MouseMoved { x: 1.0, y: 2.0 },
            InputEvent::MouseMoved { x: 300.0, y: 400.0 }
        );
        assert_eq!(
            InputEvent::MouseMotion { dx: 1.0, dy: 0.0 },
            InputEvent::MouseMotion { dx: -5.0, dy: 3.0 }
        );
        assert_ne!(
            InputEvent::MouseMoved { x: 0.0, y: 0.0 },
            InputEvent::MouseMotion { dx: 0.0, dy: 0.0 }
        );
    }

    #[test]
    fn focus_events_compare_by_state() {
        assert_eq!(InputEvent::FocusChanged(true), InputEvent::FocusChanged(true));
        assert_ne!(InputEvent::FocusChanged(true), InputEvent::FocusChanged(false));
    }

    //=== Hashing =========================================================

    #[test]
    fn equal_events_hash_equal() {
        assert_eq!(
            hash_of(&InputEvent::MouseMotion { dx: 1.0, dy: 2.0 }),
            hash_of(&InputEvent::MouseMotion { dx: 9.0, dy: 9.0 })
        );
        assert_eq!(hash_of(&key_down(KeyCode::Space)), hash_of(&key_down(KeyCode::Space)));
    }

    #[test]
    fn hashset_keeps_latest_pointer_event() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
