//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the core thread via channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  World           │
//  │   ↓                      │    │   StateTracker   │
//  │  InputProcessor          │    │   IntentMapper   │
//  │   ↓                      │    │   CharacterInput │
//  │  InputBuffer             │    │   Gameplay       │
//  │   ├─ discrete            │    │   FramingCamera  │
//  │   ├─ continuous          │    └──────────────────┘
//  │   └─ motion (summed)     │         ↑       │
//  │   ↓ RedrawRequested      │         │       │
//  │  Channel ────────────────┼─────────┘       │
//  │  Cursor grab ◄───────────┼─────────────────┘
//  └──────────────────────────┘   CoreRequest
// ```
//
// Notes:
// - RedrawRequested is the frame boundary: buffered input is sent as one
//   batch and pending cursor requests are applied.
// - Raw pointer motion arrives as a device event and keeps flowing while
//   the cursor is locked.
// - If the core thread dies, the platform logs and keeps running so the
//   window can still be closed.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{CoreRequest, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::{InputProcessor, Translated};

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (winit requirement on macOS/iOS). Not
/// Send/Sync; all communication with the core goes through channels.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    event_sender: Sender<PlatformEvent>,
    requests: Receiver<CoreRequest>,

    /// Latest lock request not yet applied to a window.
    pending_cursor_lock: Option<bool>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, requests: Receiver<CoreRequest>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            requests,
            pending_cursor_lock: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Frame Boundary ---------------------------------------------------

    /// Sends this frame's buffered input to the core thread.
    ///
    /// A disconnected channel drops the events with a warning.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    /// Drains core requests, keeping only the latest cursor state.
    fn drain_requests(&mut self) {
        for request in self.requests.try_iter() {
            match request {
                CoreRequest::SetCursorLocked(locked) => self.pending_cursor_lock = Some(locked),
            }
        }
    }

    /// Applies a pending cursor lock to the window, if both exist.
    fn apply_cursor_lock(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let Some(locked) = self.pending_cursor_lock.take() else {
            return;
        };

        let mode = if locked { CursorGrabMode::Locked } else { CursorGrabMode::None };

        match window.set_cursor_grab(mode) {
            Ok(()) => {
                window.set_cursor_visible(!locked);
                debug!(target: "platform", "Cursor {}", if locked { "locked" } else { "released" });
            }
            Err(e) if locked => {
                // Some platforms (X11, web) only support confining.
                debug!(target: "platform", "Cursor lock failed: {:?}, trying confine", e);
                match window.set_cursor_grab(CursorGrabMode::Confined) {
                    Ok(()) => window.set_cursor_visible(false),
                    Err(e) => {
                        debug!(target: "platform", "Cursor confine failed: {:?}", e);
                        window.set_cursor_visible(true);
                    }
                }
            }
            Err(e) => {
                debug!(target: "platform", "Cursor release failed: {:?}", e);
                window.set_cursor_visible(true);
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("twin_frame")
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                self.drain_requests();
                self.apply_cursor_lock();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            event => match self.input_processor.translate(&event) {
                Translated::Discrete(input) => self.buffer.push_discrete(input),
                Translated::Continuous(input) => self.buffer.push_continuous(input),
                Translated::Nothing => {}
            },
        }
    }

    /// Raw pointer motion, independent of cursor position and lock.
    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.buffer.push_motion(dx as f32, dy as f32);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
