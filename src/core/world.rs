//=========================================================================
// World
//=========================================================================
//
// Everything the core thread owns, and the order it runs in.
//
// Tick order:
// ```text
//   1. StateTracker      ← this tick's input batches
//   2. IntentMapper      → CharacterInput (pushed move/look/jump/sprint)
//   3. Focus change      → CharacterInput::on_focus_changed (cursor policy)
//   4. CharacterInput::update      (arrow-key polling)
//   5. Gameplay::update            (moves targets)
//   6. FramingCamera::late_update  (midpoint + distance)
// ```
// The camera runs last so it sees target positions final for the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::camera::{FramingCamera, FramingConfig, FramingTarget};
use crate::core::input::{
    CharacterInput, CharacterInputSettings, CursorControl, InputEvent, IntentBindings,
    IntentMapper, StateTracker,
};
use crate::core::transform::Transforms;

//=== Gameplay ============================================================

/// Game-side logic run once per tick, between input and camera.
///
/// Closures `FnMut(&mut World<T>)` implement this directly.
pub trait Gameplay<T: FramingTarget>: Send {
    /// Called once on the core thread before the first tick.
    fn on_start(&mut self, _world: &mut World<T>) {}

    /// Called every tick after input has been applied.
    fn update(&mut self, world: &mut World<T>);
}

impl<T, F> Gameplay<T> for F
where
    T: FramingTarget,
    F: FnMut(&mut World<T>) + Send,
{
    fn update(&mut self, world: &mut World<T>) {
        self(world)
    }
}

//=== WorldConfig =========================================================

/// Initial settings for a [`World`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldConfig {
    pub framing: FramingConfig,
    pub input: CharacterInputSettings,
    pub bindings: IntentBindings,
}

//=== World ===============================================================

/// Core-thread state: input pipeline, transforms and framing camera.
pub struct World<T: FramingTarget> {
    /// Raw keyboard/mouse state; also the polled keyboard device.
    pub keyboard: StateTracker,

    /// Push-side input source.
    pub intents: IntentMapper,

    /// The character's input record.
    pub input: CharacterInput,

    pub transforms: Transforms,

    /// Follows its own rig transform, spawned at the origin.
    pub camera: FramingCamera<T>,

    tick: u64,
}

impl<T: FramingTarget> World<T> {
    /// Creates a world with an uninitialized camera.
    pub fn new(config: WorldConfig) -> Self {
        let mut transforms = Transforms::new();
        let rig = transforms.spawn(Vec3::ZERO);

        Self {
            keyboard: StateTracker::new(),
            intents: IntentMapper::new(config.bindings),
            input: CharacterInput::new(config.input),
            transforms,
            camera: FramingCamera::new(rig, config.framing),
            tick: 0,
        }
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick over this tick's input batches.
    pub fn tick(
        &mut self,
        batches: &[Vec<InputEvent>],
        cursor: &mut dyn CursorControl,
        gameplay: &mut dyn Gameplay<T>,
    ) {
        //--- 1. Raw input -------------------------------------------------
        self.keyboard.clear();
        for batch in batches {
            self.keyboard.process_events(batch);
        }

        //--- 2. Pushed intents --------------------------------------------
        for intent in self.intents.map_frame(&self.keyboard) {
            trace!(target: "input", "Intent: {:?}", intent);
            self.input.apply_intent(*intent);
        }

        //--- 3. Focus -----------------------------------------------------
        if let Some(has_focus) = self.keyboard.focus_change() {
            self.input.on_focus_changed(has_focus, cursor);
        }

        //--- 4. Polled input ----------------------------------------------
        self.input.update(Some(&self.keyboard));

        //--- 5. Game logic ------------------------------------------------
        gameplay.update(self);

        //--- 6. Camera ----------------------------------------------------
        self.camera.late_update(&mut self.transforms);

        self.tick += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
