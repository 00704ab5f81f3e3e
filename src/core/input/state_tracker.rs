//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-tick delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Tick lifecycle: clear() → process_events() → query
//
// Events apply in order. Focus loss releases everything held at that
// point, since keys let go while unfocused never report `KeyUp`.
//
// The tracker is the polled keyboard device seen by `CharacterInput`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::character_input::KeyboardDevice;
use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-tick deltas (keys pressed,
/// keys released, pointer motion).
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,
    modifiers: Modifiers,
    focused: bool,

    //--- Tick Deltas (reset each tick via clear()) -----------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_motion: Vec2,
    focus_change: Option<bool>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    ///
    /// The window is assumed focused until told otherwise.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: Vec2::ZERO,
            modifiers: Modifiers::NONE,
            focused: true,
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_motion: Vec2::ZERO,
            focus_change: None,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears tick-specific deltas.
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_motion = Vec2::ZERO;
        self.focus_change = None;
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Drops all held keys and buttons, reporting the keys as released.
    fn release_all(&mut self) {
        self.keys_released_this_frame.extend(self.keys_down.drain());
        self.mouse_buttons_down.clear();
        self.modifiers = Modifiers::NONE;
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                self.mouse_buttons_down.insert(*button);
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                self.mouse_buttons_down.remove(button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = Vec2::new(*x, *y);
            }

            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_motion += Vec2::new(*dx, *dy);
            }

            InputEvent::FocusChanged(focused) => {
                self.focused = *focused;
                self.focus_change = Some(*focused);
                if !*focused {
                    self.release_all();
                }
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns the current modifier key state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Returns `true` while the mouse button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Returns cursor position in screen coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Returns raw pointer motion accumulated this tick (zero if none).
    pub fn mouse_motion(&self) -> Vec2 {
        self.mouse_motion
    }

    //=====================================================================
    // Query API - Focus
    //=====================================================================

    /// Returns `true` while the window has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the last focus change seen this tick, if any.
    pub fn focus_change(&self) -> Option<bool> {
        self.focus_change
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardDevice for StateTracker {
    fn is_key_down(&self, key: KeyCode) -> bool {
        StateTracker::is_key_down(self, key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn tick(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    //=== Keyboard ========================================================

    #[test]
    fn key_press_then_hold_then_release() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[key_down(KeyCode::ArrowUp)]);
        assert!(tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        tick(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        tick(&mut tracker, &[key_up(KeyCode::ArrowUp)]);
        assert!(tracker.is_key_released(KeyCode::ArrowUp));
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn repeated_key_down_is_not_a_new_press() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[key_down(KeyCode::Space)]);
        tick(&mut tracker, &[key_down(KeyCode::Space)]);

        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_up(KeyCode::KeyA)]);
        assert!(!tracker.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn keyboard_device_reports_held_keys() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::ShiftRight)]);

        let device: &dyn KeyboardDevice = &tracker;
        assert!(device.is_key_down(KeyCode::ShiftRight));
        assert!(!device.is_key_down(KeyCode::ShiftLeft));
    }

    //=== Mouse ===========================================================

    #[test]
    fn mouse_motion_accumulates_within_a_tick() {
        let mut tracker = StateTracker::new();

        tick(
            &mut tracker,
            &[
                InputEvent::MouseMotion { dx: 1.0, dy: 2.0 },
                InputEvent::MouseMotion { dx: 3.0, dy: -1.0 },
            ],
        );
        assert_eq!(tracker.mouse_motion(), Vec2::new(4.0, 1.0));

        tick(&mut tracker, &[]);
        assert_eq!(tracker.mouse_motion(), Vec2::ZERO);
    }

    #[test]
    fn mouse_position_follows_last_move() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::MouseMoved { x: 100.0, y: 200.0 }]);
        assert_eq!(tracker.mouse_position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn mouse_buttons_are_tracked() {
        let mut tracker = StateTracker::new();
        tick(
            &mut tracker,
            &[InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );
        assert!(tracker.is_button_down(MouseButton::Left));

        tick(
            &mut tracker,
            &[InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    //=== Focus ===========================================================

    #[test]
    fn focus_change_is_reported_for_one_tick() {
        let mut tracker = StateTracker::new();
        assert!(tracker.is_focused());

        tick(&mut tracker, &[InputEvent::FocusChanged(false)]);
        assert_eq!(tracker.focus_change(), Some(false));
        assert!(!tracker.is_focused());

        tick(&mut tracker, &[]);
        assert_eq!(tracker.focus_change(), None);
        assert!(!tracker.is_focused());
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::ArrowLeft)]);

        tick(&mut tracker, &[InputEvent::FocusChanged(false)]);
        assert!(!tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_released(KeyCode::ArrowLeft));
    }

    #[test]
    fn focus_bounce_within_a_tick_still_releases_held_keys() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::ArrowLeft), key_down(KeyCode::KeyW)]);

        tick(
            &mut tracker,
            &[
                InputEvent::FocusChanged(false),
                InputEvent::FocusChanged(true),
                key_down(KeyCode::KeyW),
            ],
        );

        assert_eq!(tracker.focus_change(), Some(true));
        assert!(!tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::KeyW), "keys pressed after refocus stay held");
    }
}
