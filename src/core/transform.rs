//=========================================================================
// Transforms
//=========================================================================
//
// World-space positions addressed by generational handles.
//
// A handle outlives the transform it names: once despawned, lookups on
// the stale handle return `None` and the slot can be reused without the
// old handle aliasing the new occupant.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec3;

//=== TransformId =========================================================

/// Handle to a transform in a [`Transforms`] store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformId {
    index: u32,
    generation: u32,
}

//=== Transforms ==========================================================

struct Slot {
    generation: u32,
    position: Option<Vec3>,
}

/// Owning store of transform positions.
#[derive(Default)]
pub struct Transforms {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Transforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transform at `position` and returns its handle.
    pub fn spawn(&mut self, position: Vec3) -> TransformId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.position = Some(position);
            return TransformId { index, generation: slot.generation };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, position: Some(position) });
        TransformId { index, generation: 0 }
    }

    /// Removes a transform. Returns `false` if the handle was already stale.
    pub fn despawn(&mut self, id: TransformId) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.position = None;
                self.free.push(id.index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: TransformId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: TransformId) -> Option<Vec3> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.position)
    }

    /// Moves a live transform. Returns `false` for stale handles.
    pub fn set_position(&mut self, id: TransformId, position: Vec3) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.position = Some(position);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, id: TransformId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation && slot.position.is_some())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_read_back() {
        let mut transforms = Transforms::new();
        let id = transforms.spawn(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(transforms.position(id), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(transforms.len(), 1);
    }

    #[test]
    fn set_position_moves_live_transform() {
        let mut transforms = Transforms::new();
        let id = transforms.spawn(Vec3::ZERO);

        assert!(transforms.set_position(id, Vec3::X));
        assert_eq!(transforms.position(id), Some(Vec3::X));
    }

    #[test]
    fn despawned_handle_is_stale() {
        let mut transforms = Transforms::new();
        let id = transforms.spawn(Vec3::ZERO);

        assert!(transforms.despawn(id));
        assert!(!transforms.contains(id));
        assert!(!transforms.set_position(id, Vec3::ONE));
        assert!(!transforms.despawn(id));
        assert!(transforms.is_empty());
    }

    #[test]
    fn reused_slot_does_not_alias_old_handle() {
        let mut transforms = Transforms::new();
        let old = transforms.spawn(Vec3::ZERO);
        transforms.despawn(old);

        let new = transforms.spawn(Vec3::Y);

        assert_ne!(old, new);
        assert_eq!(transforms.position(old), None);
        assert_eq!(transforms.position(new), Some(Vec3::Y));
    }
}
