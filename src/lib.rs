//=========================================================================
// twin_frame: Library Root
//
// Character input and a two-target framing camera, driven by a windowed
// runtime.
//
// Responsibilities:
// - Expose the runtime entry point (`Engine` / `EngineBuilder`)
// - Expose the input and camera components for direct use and testing
// - Keep the winit platform layer hidden from users
//
// Typical usage:
// ```no_run
// use twin_frame::{EngineBuilder, FramingBody};
//
// fn main() {
//     EngineBuilder::<FramingBody>::new()
//         .with_framing_target(FramingBody::default())
//         .build()
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread: input pipeline,
// transforms, framing camera and the world that ticks them. Components
// work without a window, so tests and embedders can drive them directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop.
// `engine` wires the platform to the logic thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::camera::{FramingBody, FramingConfig};
pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
