//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the `World` (input pipeline, transforms, framing camera)
// - Receive platform events through the event collector
// - Tick the world at a fixed rate (TPS)
// - Forward cursor requests back to the platform
//
// Notes:
// The orchestrator runs independently from the platform layer. All
// component mutation happens on its thread, synchronously, once per tick.
// Communication with the platform occurs only through channels.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::info;

//=== Module Declarations =================================================

pub mod camera;
pub mod input;
pub(crate) mod platform_bridge;
pub mod transform;
pub mod world;

//=== Internal Imports ====================================================

use camera::FramingTarget;
use platform_bridge::{CoreRequest, CursorRequests, EventCollector, PlatformEvent, TickControl};
use world::{Gameplay, World};

//=== CoreSystemsOrchestrator =============================================

/// Owns the world and the game logic until the core thread takes them.
pub(crate) struct CoreSystemsOrchestrator<T: FramingTarget> {
    world: World<T>,
    gameplay: Box<dyn Gameplay<T>>,
}

impl<T: FramingTarget + Send + 'static> CoreSystemsOrchestrator<T> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(world: World<T>, gameplay: Box<dyn Gameplay<T>>) -> Self {
        Self { world, gameplay }
    }

    pub(crate) fn world_mut(&mut self) -> &mut World<T> {
        &mut self.world
    }

    pub(crate) fn set_gameplay(&mut self, gameplay: Box<dyn Gameplay<T>>) {
        self.gameplay = gameplay;
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread that ticks the world at a fixed frequency.
    //
    // Each tick:
    //  1. Collects input batches from the platform
    //  2. Runs one world tick
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly on window close or channel disconnect
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        requests: Sender<CoreRequest>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let Self { mut world, mut gameplay } = self;
            let mut collector = EventCollector::new(receiver);
            let mut cursor = CursorRequests::new(requests);

            gameplay.on_start(&mut world);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", world.tick_count());
                    break;
                }

                //--- Step 2: Tick the world --------------------------------
                world.tick(collector.batches(), &mut cursor, gameplay.as_mut());

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::FramingBody;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crate::core::world::WorldConfig;
    use crossbeam_channel::unbounded;
    use glam::Vec2;
    use std::sync::mpsc;

    #[test]
    fn core_thread_ticks_until_window_closed() {
        let (event_tx, event_rx) = unbounded();
        let (request_tx, request_rx) = unbounded();
        let (report_tx, report_rx) = mpsc::channel();

        let world: World<FramingBody> = World::new(WorldConfig::default());
        let gameplay = move |world: &mut World<FramingBody>| {
            let _ = report_tx.send(world.input.move_vector);
        };
        let orchestrator = CoreSystemsOrchestrator::new(world, Box::new(gameplay));
        let handle = orchestrator.spawn_core_thread(event_rx, request_tx, 240.0);

        event_tx
            .send(PlatformEvent::Inputs {
                discrete: vec![
                    InputEvent::FocusChanged(true),
                    InputEvent::KeyDown { key: KeyCode::KeyD, modifiers: Modifiers::NONE },
                ],
                continuous: vec![],
            })
            .unwrap();

        let moved = report_rx
            .iter()
            .take(1000)
            .any(|v| v == Vec2::X);
        assert!(moved, "core thread never applied the move intent");

        event_tx.send(PlatformEvent::WindowClosed).unwrap();
        handle.join().unwrap();

        assert_eq!(request_rx.try_recv(), Ok(CoreRequest::SetCursorLocked(true)));
    }

    #[test]
    fn core_thread_exits_when_platform_disconnects() {
        let (event_tx, event_rx) = unbounded::<PlatformEvent>();
        let (request_tx, _request_rx) = unbounded();

        let world: World<FramingBody> = World::new(WorldConfig::default());
        let idle = |_: &mut World<FramingBody>| {};
        let orchestrator = CoreSystemsOrchestrator::new(world, Box::new(idle));
        let handle = orchestrator.spawn_core_thread(event_rx, request_tx, 120.0);

        drop(event_tx);
        handle.join().unwrap();
    }
}
