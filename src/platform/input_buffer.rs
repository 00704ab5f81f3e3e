//=========================================================================
// Input Buffer
//
// Collects raw input events between frame boundaries, split into two
// categories: discrete and continuous.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Deduplicate repeated discrete inputs (e.g., OS key repeat)
// - Coalesce cursor positions (latest wins)
// - Accumulate raw pointer motion (deltas add up)
// - Hand the frame over via `drain()`
//
// Notes:
// Focus changes are discrete so they stay ordered with key events.
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one frame of input.
//
// Internally maintains:
// - `discrete`: ordered one-shot inputs (KeyDown, FocusChanged, ...)
// - `continuous`: last-known cursor position (MouseMoved)
// - `motion`: summed pointer deltas, emitted as a single MouseMotion
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
    motion: Option<Vec2>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
            motion: None,
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // Inserts or replaces a continuous input. The latest event replaces
    // any previous one of the same kind.
    //
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Pointer Motion ---------------------------------------------------
    //
    // Unlike positions, deltas are summed: dropping one would lose look
    // distance.
    //
    pub(crate) fn push_motion(&mut self, dx: f32, dy: f32) {
        *self.motion.get_or_insert(Vec2::ZERO) += Vec2::new(dx, dy);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Appends a discrete input. Duplicate consecutive events are ignored.
    //
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's (discrete, continuous) events and clears the
    // buffer, or `None` when nothing was collected.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let mut continuous: Vec<InputEvent> = self.continuous.drain().collect();
        if let Some(delta) = self.motion.take() {
            continuous.push(InputEvent::MouseMotion { dx: delta.x, dy: delta.y });
        }

        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty() && self.motion.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
