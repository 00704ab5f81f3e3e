//=========================================================================
// Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init()       configure the World
//         ├─ with_channel_capacity() ├─ gameplay()   per-tick game logic
//         ├─ with_framing()          └─ run()        spawns core thread,
//         ├─ with_input()                            runs platform,
//         ├─ with_bindings()                         blocks until exit
//         └─ with_framing_target()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded};
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::camera::{FramingBody, FramingConfig, FramingTarget};
use crate::core::input::{CharacterInputSettings, IntentBindings};
use crate::core::world::{Gameplay, World, WorldConfig};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Framing / input / bindings**: their `Default` impls
/// - **Framing target**: none (the camera disables itself at build)
///
/// # Examples
///
/// ```no_run
/// use twin_frame::{EngineBuilder, FramingBody, FramingConfig};
///
/// EngineBuilder::<FramingBody>::new()
///     .with_tps(120.0)
///     .with_framing(FramingConfig { max_distance: 40.0, ..FramingConfig::default() })
///     .with_framing_target(FramingBody::default())
///     .build()
///     .run();
/// ```
pub struct EngineBuilder<T: FramingTarget = FramingBody> {
    tps: f64,
    channel_capacity: usize,
    world: WorldConfig,
    framing_target: Option<T>,
}

impl<T: FramingTarget + Send + 'static> EngineBuilder<T> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            world: WorldConfig::default(),
            framing_target: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the framing camera configuration.
    pub fn with_framing(mut self, config: FramingConfig) -> Self {
        self.world.framing = config;
        self
    }

    /// Sets the character input switches.
    pub fn with_input(mut self, settings: CharacterInputSettings) -> Self {
        self.world.input = settings;
        self
    }

    /// Sets the key bindings for pushed input.
    pub fn with_bindings(mut self, bindings: IntentBindings) -> Self {
        self.world.bindings = bindings;
        self
    }

    /// Supplies the framing target the camera writes into.
    pub fn with_framing_target(mut self, target: T) -> Self {
        self.framing_target = Some(target);
        self
    }

    /// Builds the engine instance.
    ///
    /// Resolves the framing target here. Without one the camera logs an
    /// error and stays disabled; the engine itself still builds and runs.
    pub fn build(self) -> Engine<T> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let mut world = World::new(self.world);
        if let Err(e) = world.camera.initialize(self.framing_target) {
            debug!("Continuing without framing: {}", e);
        }

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(world, Box::new(|_: &mut World<T>| {})),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<T: FramingTarget + Send + 'static> Default for EngineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime: platform event loop on the calling thread, world on a fixed
/// rate logic thread.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► World: input → gameplay → framing camera
///   │
///   └─► Platform (Event Loop)
///         └─► Window, input batching, cursor lock
///
/// Communication: PlatformEvent ──►  ◄── CoreRequest
/// ```
pub struct Engine<T: FramingTarget = FramingBody> {
    orchestrator: CoreSystemsOrchestrator<T>,
    tps: f64,
    channel_capacity: usize,
}

impl<T: FramingTarget + Send + 'static> Engine<T> {
    //--- Initialization ---------------------------------------------------

    /// Configures the world before execution (spawn targets, assign them
    /// to the camera, tweak settings).
    ///
    /// ```no_run
    /// use glam::Vec3;
    /// use twin_frame::{EngineBuilder, FramingBody};
    ///
    /// EngineBuilder::<FramingBody>::new()
    ///     .with_framing_target(FramingBody::default())
    ///     .build()
    ///     .init(|world| {
    ///         let a = world.transforms.spawn(Vec3::new(-3.0, 0.0, 0.0));
    ///         let b = world.transforms.spawn(Vec3::new(3.0, 0.0, 0.0));
    ///         world.camera.set_targets(Some(a), Some(b));
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut World<T>),
    {
        info!("Initializing world");
        init_fn(self.orchestrator.world_mut());
        self
    }

    /// Sets the game logic run every tick before the camera update.
    pub fn gameplay<G>(mut self, gameplay: G) -> Self
    where
        G: Gameplay<T> + 'static,
    {
        self.orchestrator.set_gameplay(Box::new(gameplay));
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → channel disconnects → logic
    ///    thread terminates
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels -----------------------------
        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (request_tx, request_rx) = unbounded();

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(event_rx, request_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(event_tx, request_rx);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::FramingState;
    use glam::{Vec2, Vec3};

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<FramingBody>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.world.framing, FramingConfig::default());
        assert!(builder.framing_target.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<FramingBody>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<FramingBody>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<FramingBody>::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<FramingBody>::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }

    //=====================================================================
    // Framing Resolution
    //=====================================================================

    #[test]
    fn build_without_target_disables_camera() {
        let mut engine = EngineBuilder::<FramingBody>::new().build();
        assert_eq!(engine.orchestrator.world_mut().camera.state(), FramingState::Disabled);
    }

    #[test]
    fn build_with_target_applies_screen_offset() {
        let mut engine = EngineBuilder::<FramingBody>::new()
            .with_framing(FramingConfig {
                screen_offset: Vec2::new(0.25, 0.6),
                ..FramingConfig::default()
            })
            .with_framing_target(FramingBody::default())
            .build();

        let camera = &engine.orchestrator.world_mut().camera;
        assert_eq!(camera.state(), FramingState::Ready);
        let body = camera.framing().unwrap();
        assert_eq!((body.screen_x, body.screen_y), (0.25, 0.6));
    }

    #[test]
    fn init_configures_world() {
        let mut engine = EngineBuilder::<FramingBody>::new()
            .with_input(CharacterInputSettings {
                use_arrow_keys: true,
                ..CharacterInputSettings::default()
            })
            .build()
            .init(|world| {
                let a = world.transforms.spawn(Vec3::ZERO);
                let b = world.transforms.spawn(Vec3::X);
                world.camera.set_targets(Some(a), Some(b));
            });

        let world = engine.orchestrator.world_mut();
        assert!(world.input.settings.use_arrow_keys);
        assert!(matches!(world.camera.targets(), (Some(_), Some(_))));
    }
}
