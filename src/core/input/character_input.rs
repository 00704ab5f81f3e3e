//=========================================================================
// Character Input
//=========================================================================
//
// Per-character input record: what the player wants to do this tick.
//
// Architecture:
// ```text
//   IntentMapper ──on_move/on_look/on_jump/on_sprint──┐
//                                                     ├──► CharacterInput
//   KeyboardDevice ──update() (arrow-key mode)────────┘      │
//                                                            ▼
//                                          move / look / jump / sprint
// ```
//
// Two mutually exclusive move sources exist: pushed intents and polled
// arrow keys. While arrow-key mode is on, pushed move intents are dropped.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;
use log::trace;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::intent_mapper::InputIntent;

//=== Platform Interfaces =================================================

/// Read-only view of a keyboard that can be polled each tick.
///
/// Implemented by [`StateTracker`](super::StateTracker). Callers pass
/// `None` when no keyboard is available.
pub trait KeyboardDevice {
    /// Returns `true` while `key` is held.
    fn is_key_down(&self, key: KeyCode) -> bool;
}

/// Platform cursor control used to apply the cursor-lock policy.
pub trait CursorControl {
    /// Locks (and hides) the cursor when `locked`, releases it otherwise.
    fn set_cursor_locked(&mut self, locked: bool);
}

//=== Arrow-Key Layout ====================================================

const LEFT_KEY: KeyCode = KeyCode::ArrowLeft;
const RIGHT_KEY: KeyCode = KeyCode::ArrowRight;
const UP_KEY: KeyCode = KeyCode::ArrowUp;
const DOWN_KEY: KeyCode = KeyCode::ArrowDown;
const SPRINT_KEY: KeyCode = KeyCode::ShiftRight;

//=== CharacterInputSettings ==============================================

/// Behaviour switches for [`CharacterInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterInputSettings {
    /// Move vector is analog (read by movement code, not by this component).
    pub analog_movement: bool,

    /// Poll the arrow keys for movement instead of accepting move intents.
    pub use_arrow_keys: bool,

    /// Cursor-lock policy reapplied on every focus change.
    pub cursor_locked: bool,

    /// Accept look intents.
    pub cursor_input_for_look: bool,
}

impl Default for CharacterInputSettings {
    fn default() -> Self {
        Self {
            analog_movement: false,
            use_arrow_keys: false,
            cursor_locked: true,
            cursor_input_for_look: true,
        }
    }
}

//=== CharacterInput ======================================================

/// Input values a character controller reads each tick.
///
/// Fields are public: movement code reads them directly, the same way it
/// would read any other plain record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterInput {
    pub move_vector: Vec2,
    pub look_vector: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub settings: CharacterInputSettings,
}

impl CharacterInput {
    //--- Construction -----------------------------------------------------

    pub fn new(settings: CharacterInputSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    //--- Setters ----------------------------------------------------------

    pub fn set_move(&mut self, direction: Vec2) {
        self.move_vector = direction;
    }

    pub fn set_look(&mut self, direction: Vec2) {
        self.look_vector = direction;
    }

    pub fn set_jump(&mut self, pressed: bool) {
        self.jump = pressed;
    }

    pub fn set_sprint(&mut self, pressed: bool) {
        self.sprint = pressed;
    }

    //--- Pushed Input -----------------------------------------------------

    /// Move intent. Dropped while arrow-key mode owns movement.
    pub fn on_move(&mut self, direction: Vec2) {
        if !self.settings.use_arrow_keys {
            self.set_move(direction);
        }
    }

    /// Look intent. Dropped unless look input is enabled.
    pub fn on_look(&mut self, direction: Vec2) {
        if self.settings.cursor_input_for_look {
            self.set_look(direction);
        }
    }

    pub fn on_jump(&mut self, pressed: bool) {
        self.set_jump(pressed);
    }

    pub fn on_sprint(&mut self, pressed: bool) {
        self.set_sprint(pressed);
    }

    /// Routes a mapped intent to the matching handler.
    pub fn apply_intent(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Move(v) => self.on_move(v),
            InputIntent::Look(v) => self.on_look(v),
            InputIntent::Jump(pressed) => self.on_jump(pressed),
            InputIntent::Sprint(pressed) => self.on_sprint(pressed),
        }
    }

    //--- Per-Tick Update --------------------------------------------------

    /// Polls the arrow keys when arrow-key mode is on.
    pub fn update(&mut self, keyboard: Option<&dyn KeyboardDevice>) {
        if self.settings.use_arrow_keys {
            self.poll_discrete_directional(keyboard);
        }
    }

    /// Reads the four arrow keys and Right Shift.
    ///
    /// Movement is normalized, so diagonals have unit length. Sprint is
    /// overwritten with the key state every call.
    pub fn poll_discrete_directional(&mut self, keyboard: Option<&dyn KeyboardDevice>) {
        let Some(keyboard) = keyboard else {
            return;
        };

        let mut input = Vec2::ZERO;
        if keyboard.is_key_down(LEFT_KEY) {
            input.x -= 1.0;
        }
        if keyboard.is_key_down(RIGHT_KEY) {
            input.x += 1.0;
        }
        if keyboard.is_key_down(UP_KEY) {
            input.y += 1.0;
        }
        if keyboard.is_key_down(DOWN_KEY) {
            input.y -= 1.0;
        }

        self.set_move(input.normalize_or_zero());
        self.set_sprint(keyboard.is_key_down(SPRINT_KEY));
    }

    //--- Focus ------------------------------------------------------------

    /// Reapplies the cursor-lock policy. Called on every focus change.
    pub fn on_focus_changed(&mut self, has_focus: bool, cursor: &mut dyn CursorControl) {
        trace!(
            target: "input",
            "Focus {} → cursor locked: {}",
            if has_focus { "gained" } else { "lost" },
            self.settings.cursor_locked
        );
        cursor.set_cursor_locked(self.settings.cursor_locked);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
