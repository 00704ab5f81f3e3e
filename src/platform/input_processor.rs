//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit window events into engine `InputEvent`s and sorts them
// into the buffer category they belong to.
//
// Architecture:
//   WindowEvent → InputProcessor::translate() → Translated → InputBuffer
//
// Modifier state is cached from ModifiersChanged and stamped onto every
// following key/button event. Shift is reported both as the `shift` flag
// and as a ShiftLeft/ShiftRight key; sprint bindings need the side.
// Unmapped keys (F13-F24, media keys) are dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== Translated ==========================================================

/// Where a translated event goes in the frame buffer.
#[derive(Debug, PartialEq)]
pub(crate) enum Translated {
    /// Ordered one-shot input (keys, buttons, focus).
    Discrete(InputEvent),

    /// Latest-wins input (cursor position).
    Continuous(InputEvent),

    /// Consumed internally or not an input event.
    Nothing,
}

//=== InputProcessor ======================================================

/// Stateful winit → engine translator.
pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    #[cfg(test)]
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Translates one window event.
    pub(crate) fn translate(&mut self, event: &WindowEvent) -> Translated {
        match event {
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = Modifiers::from(state.state());
                Translated::Nothing
            }

            WindowEvent::KeyboardInput { event, .. } => match self.key(event) {
                Some(input) => Translated::Discrete(input),
                None => {
                    trace!(target: "platform::input", "Unmapped key ignored");
                    Translated::Nothing
                }
            },

            WindowEvent::MouseInput { state, button, .. } => {
                Translated::Discrete(self.button(*button, *state))
            }

            WindowEvent::CursorMoved { position, .. } => Translated::Continuous(
                InputEvent::MouseMoved { x: position.x as f32, y: position.y as f32 },
            ),

            WindowEvent::Focused(focused) => {
                Translated::Discrete(InputEvent::FocusChanged(*focused))
            }

            _ => Translated::Nothing,
        }
    }

    //--- Helpers ----------------------------------------------------------

    fn key(&self, event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };

        match KeyCode::from(code) {
            KeyCode::Unidentified => None,
            key => Some(self.key_input(key, event.state)),
        }
    }

    fn key_input(&self, key: KeyCode, state: ElementState) -> InputEvent {
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        }
    }

    fn button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

// Same-named variants on both sides; anything not listed is Unidentified.
macro_rules! key_table {
    ($($name:ident),* $(,)?) => {
        impl From<WinitKeyCode> for KeyCode {
            fn from(code: WinitKeyCode) -> Self {
                match code {
                    $(WinitKeyCode::$name => KeyCode::$name,)*
                    _ => KeyCode::Unidentified,
                }
            }
        }
    };
}

key_table! {
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ArrowDown, ArrowLeft, ArrowRight, ArrowUp,
    ShiftLeft, ShiftRight,
    Space, Enter, Escape, Tab, Backspace, Delete,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, Modifiers as WinitModifiers};

    fn device() -> DeviceId {
        // SAFETY: only compared against itself in these tests.
        unsafe { DeviceId::dummy() }
    }

    fn modifiers_changed(state: ModifiersState) -> WindowEvent {
        WindowEvent::ModifiersChanged(WinitModifiers::from(state))
    }

    fn mouse_input(button: WinitMouseButton, state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput { device_id: device(), state, button }
    }

    #[test]
    fn starts_with_no_modifiers() {
        assert_eq!(InputProcessor::new().modifiers(), Modifiers::NONE);
    }

    #[test]
    fn modifiers_changed_is_consumed_and_cached() {
        let mut processor = InputProcessor::new();
        let event = modifiers_changed(ModifiersState::SHIFT | ModifiersState::ALT);

        assert_eq!(processor.translate(&event), Translated::Nothing);
        let mods = processor.modifiers();
        assert!(mods.shift && mods.alt && !mods.ctrl);
    }

    #[test]
    fn buttons_carry_cached_modifiers() {
        let mut processor = InputProcessor::new();
        processor.translate(&modifiers_changed(ModifiersState::CONTROL));

        let pressed = processor.translate(&mouse_input(WinitMouseButton::Left, ElementState::Pressed));
        let released = processor.translate(&mouse_input(WinitMouseButton::Back, ElementState::Released));

        let ctrl = Modifiers { ctrl: true, ..Modifiers::NONE };
        assert_eq!(
            pressed,
            Translated::Discrete(InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: ctrl })
        );
        assert_eq!(
            released,
            Translated::Discrete(InputEvent::MouseButtonUp { button: MouseButton::Other, modifiers: ctrl })
        );
    }

    #[test]
    fn key_input_follows_element_state() {
        let mut processor = InputProcessor::new();
        processor.translate(&modifiers_changed(ModifiersState::SHIFT));

        assert_eq!(
            processor.key_input(KeyCode::ShiftRight, ElementState::Pressed),
            InputEvent::KeyDown { key: KeyCode::ShiftRight, modifiers: Modifiers::SHIFT }
        );
        assert_eq!(
            processor.key_input(KeyCode::KeyA, ElementState::Released),
            InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT }
        );
    }

    #[test]
    fn cursor_moves_are_continuous() {
        let mut processor = InputProcessor::new();
        let event = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.5, 40.0),
        };

        assert_eq!(
            processor.translate(&event),
            Translated::Continuous(InputEvent::MouseMoved { x: 12.5, y: 40.0 })
        );
    }

    #[test]
    fn focus_is_discrete() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.translate(&WindowEvent::Focused(false)),
            Translated::Discrete(InputEvent::FocusChanged(false))
        );
    }

    #[test]
    fn unrelated_window_events_are_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.translate(&WindowEvent::RedrawRequested), Translated::Nothing);
    }

    #[test]
    fn keycode_table() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::KeyW);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::ShiftLeft), KeyCode::ShiftLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::ShiftRight), KeyCode::ShiftRight);
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
    }
}
