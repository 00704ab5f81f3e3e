//=========================================================================
// Cursor Requests
//=========================================================================
//
// Core-side `CursorControl` that forwards lock changes to the platform
// thread, which owns the window.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::CoreRequest;
use crate::core::input::CursorControl;

//=== CursorRequests ======================================================

/// Sends cursor-lock requests to the platform.
///
/// A disconnected platform drops the request with a warning; cursor state
/// is cosmetic and never worth stopping the core for.
pub(crate) struct CursorRequests {
    sender: Sender<CoreRequest>,
}

impl CursorRequests {
    pub(crate) fn new(sender: Sender<CoreRequest>) -> Self {
        Self { sender }
    }
}

impl CursorControl for CursorRequests {
    fn set_cursor_locked(&mut self, locked: bool) {
        if self.sender.send(CoreRequest::SetCursorLocked(locked)).is_err() {
            warn!(target: "input", "Platform disconnected, dropping cursor request");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn lock_request_is_forwarded() {
        let (tx, rx) = unbounded();
        let mut cursor = CursorRequests::new(tx);

        cursor.set_cursor_locked(true);
        cursor.set_cursor_locked(false);

        assert_eq!(rx.try_recv(), Ok(CoreRequest::SetCursorLocked(true)));
        assert_eq!(rx.try_recv(), Ok(CoreRequest::SetCursorLocked(false)));
    }

    #[test]
    fn disconnected_platform_does_not_panic() {
        let (tx, rx) = unbounded();
        let mut cursor = CursorRequests::new(tx);
        drop(rx);

        cursor.set_cursor_locked(true);
    }
}
