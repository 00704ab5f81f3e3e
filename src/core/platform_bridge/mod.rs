//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with core systems.
//
// This module defines the contract between platform implementations and
// core logic, so a platform backend can be swapped without changing core
// code.
//
// Components:
// - `interface`: Event, request and error types (the contract)
// - `event_collector`: Core-side event collection and buffering
// - `cursor`: Core-side cursor control forwarding to the platform
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod cursor;
pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use cursor::CursorRequests;
pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreRequest, PlatformEvent};

//=== Public API ==========================================================

pub use interface::PlatformError;
