//=========================================================================
// Intent Mapper
//=========================================================================
//
// Maps tracked input state to character intents based on configured
// bindings. This is the push-side input source: it produces the
// move/look/jump/sprint events that `CharacterInput` receives.
//
// Architecture:
//   StateTracker → map_frame() → Vec<InputIntent> → CharacterInput
//
// Intents are edge-driven: a value is emitted only when it differs from
// the last one emitted, including the return to zero/false.
//
// Buttons are latched: a press and release inside one tick still emits
// `true`, and the release follows on the next tick.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== InputIntent =========================================================

/// High-level character intent produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputIntent {
    /// Normalized movement direction (x = right, y = forward).
    Move(Vec2),

    /// Pointer motion scaled by look sensitivity.
    Look(Vec2),

    Jump(bool),

    Sprint(bool),
}

//=== IntentBindings ======================================================

/// Key assignments for the intent mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentBindings {
    pub forward: KeyBinding,
    pub back: KeyBinding,
    pub left: KeyBinding,
    pub right: KeyBinding,
    pub jump: KeyBinding,
    pub sprint: KeyBinding,

    /// Multiplier applied to raw pointer motion.
    pub look_sensitivity: f32,
}

/// Serializable wrapper around a [`KeyCode`].
///
/// Stored by name so binding files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBinding(#[serde(with = "key_name")] pub KeyCode);

impl Default for IntentBindings {
    fn default() -> Self {
        Self {
            forward: KeyBinding(KeyCode::KeyW),
            back: KeyBinding(KeyCode::KeyS),
            left: KeyBinding(KeyCode::KeyA),
            right: KeyBinding(KeyCode::KeyD),
            jump: KeyBinding(KeyCode::Space),
            sprint: KeyBinding(KeyCode::ShiftLeft),
            look_sensitivity: 1.0,
        }
    }
}

//=== IntentMapper ========================================================

/// Produces character intents from tracked input, one batch per tick.
pub struct IntentMapper {
    bindings: IntentBindings,
    last_move: Vec2,
    last_look: Vec2,
    jump: ButtonLatch,
    sprint: ButtonLatch,
    intents: Vec<InputIntent>,
}

/// Edge state for one bound button.
#[derive(Debug, Default)]
struct ButtonLatch {
    last: bool,
}

impl ButtonLatch {
    /// Returns the new value when it changed this tick.
    ///
    /// A key pressed this tick counts as down even if it was already
    /// released; the release shows up on the next tick.
    fn update(&mut self, state: &StateTracker, key: KeyCode) -> Option<bool> {
        let value = state.is_key_down(key) || state.is_key_pressed(key);

        if value == self.last {
            return None;
        }
        self.last = value;
        Some(value)
    }
}

impl IntentMapper {
    /// Creates a mapper with the given bindings and nothing emitted yet.
    pub fn new(bindings: IntentBindings) -> Self {
        Self {
            bindings,
            last_move: Vec2::ZERO,
            last_look: Vec2::ZERO,
            jump: ButtonLatch::default(),
            sprint: ButtonLatch::default(),
            intents: Vec::with_capacity(4),
        }
    }

    //--- Binding API ------------------------------------------------------

    pub fn bindings(&self) -> &IntentBindings {
        &self.bindings
    }

    /// Replaces all bindings. Takes effect on the next tick.
    pub fn set_bindings(&mut self, bindings: IntentBindings) {
        self.bindings = bindings;
    }

    //--- Frame Processing -------------------------------------------------

    /// Computes this tick's intents from `state`.
    ///
    /// Returns the intents that changed since the previous tick.
    pub fn map_frame(&mut self, state: &StateTracker) -> &[InputIntent] {
        self.intents.clear();

        let movement = self.movement(state);
        if movement != self.last_move {
            self.last_move = movement;
            self.intents.push(InputIntent::Move(movement));
        }

        let look = state.mouse_motion() * self.bindings.look_sensitivity;
        if look != self.last_look {
            self.last_look = look;
            self.intents.push(InputIntent::Look(look));
        }

        if let Some(jump) = self.jump.update(state, self.bindings.jump.0) {
            self.intents.push(InputIntent::Jump(jump));
        }

        if let Some(sprint) = self.sprint.update(state, self.bindings.sprint.0) {
            self.intents.push(InputIntent::Sprint(sprint));
        }

        &self.intents
    }

    //--- Internal Helpers -------------------------------------------------

    fn movement(&self, state: &StateTracker) -> Vec2 {
        let axis = |negative: KeyBinding, positive: KeyBinding| {
            let mut value = 0.0_f32;
            if state.is_key_down(negative.0) {
                value -= 1.0;
            }
            if state.is_key_down(positive.0) {
                value += 1.0;
            }
            value
        };

        Vec2::new(
            axis(self.bindings.left, self.bindings.right),
            axis(self.bindings.back, self.bindings.forward),
        )
        .normalize_or_zero()
    }
}

impl Default for IntentMapper {
    fn default() -> Self {
        Self::new(IntentBindings::default())
    }
}

//=== Key Names ===========================================================

/// Serde adapter storing key codes by their variant name.
mod key_name {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::input::event::KeyCode;

    const KEYS: &[(&str, KeyCode)] = &[
        ("Digit0", KeyCode::Digit0), ("Digit1", KeyCode::Digit1),
        ("Digit2", KeyCode::Digit2), ("Digit3", KeyCode::Digit3),
        ("Digit4", KeyCode::Digit4), ("Digit5", KeyCode::Digit5),
        ("Digit6", KeyCode::Digit6), ("Digit7", KeyCode::Digit7),
        ("Digit8", KeyCode::Digit8), ("Digit9", KeyCode::Digit9),
        ("KeyA", KeyCode::KeyA), ("KeyB", KeyCode::KeyB), ("KeyC", KeyCode::KeyC),
        ("KeyD", KeyCode::KeyD), ("KeyE", KeyCode::KeyE), ("KeyF", KeyCode::KeyF),
        ("KeyG", KeyCode::KeyG), ("KeyH", KeyCode::KeyH), ("KeyI", KeyCode::KeyI),
        ("KeyJ", KeyCode::KeyJ), ("KeyK", KeyCode::KeyK), ("KeyL", KeyCode::KeyL),
        ("KeyM", KeyCode::KeyM), ("KeyN", KeyCode::KeyN), ("KeyO", KeyCode::KeyO),
        ("KeyP", KeyCode::KeyP), ("KeyQ", KeyCode::KeyQ), ("KeyR", KeyCode::KeyR),
        ("KeyS", KeyCode::KeyS), ("KeyT", KeyCode::KeyT), ("KeyU", KeyCode::KeyU),
        ("KeyV", KeyCode::KeyV), ("KeyW", KeyCode::KeyW), ("KeyX", KeyCode::KeyX),
        ("KeyY", KeyCode::KeyY), ("KeyZ", KeyCode::KeyZ),
        ("ArrowDown", KeyCode::ArrowDown), ("ArrowLeft", KeyCode::ArrowLeft),
        ("ArrowRight", KeyCode::ArrowRight), ("ArrowUp", KeyCode::ArrowUp),
        ("ShiftLeft", KeyCode::ShiftLeft), ("ShiftRight", KeyCode::ShiftRight),
        ("Space", KeyCode::Space), ("Enter", KeyCode::Enter),
        ("Escape", KeyCode::Escape), ("Tab", KeyCode::Tab),
        ("Backspace", KeyCode::Backspace), ("Delete", KeyCode::Delete),
    ];

    pub(super) fn serialize<S: Serializer>(key: &KeyCode, serializer: S) -> Result<S::Ok, S::Error> {
        let name = KEYS
            .iter()
            .find(|(_, k)| k == key)
            .map(|(name, _)| *name)
            .unwrap_or("Unidentified");
        serializer.serialize_str(name)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(deserializer)?;
        KEYS.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, key)| *key)
            .ok_or_else(|| D::Error::custom(format!("unknown key `{}`", name)))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
