//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform ⇄ core interface types (events, requests and errors).
//
// Defines the contract for communication between platform and core
// threads. Input flows platform → core; cursor requests flow back.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a frame.
    ///
    /// Focus changes travel in `discrete`, in order with key events.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== CoreRequest =========================================================

/// Requests sent from core to platform.
///
/// Window state lives on the platform thread, so the core asks for
/// changes instead of making them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoreRequest {
    /// Lock (and hide) or release the cursor.
    SetCursorLocked(bool),
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal for the platform: if the event loop can't be created,
/// the engine cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "Event loop creation failed: no display");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_event_is_debug() {
        let debug_str = format!("{:?}", PlatformEvent::WindowClosed);
        assert!(debug_str.contains("WindowClosed"));
    }
}
