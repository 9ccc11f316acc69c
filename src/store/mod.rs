//! EntityStore - fixed-capacity arena with slot recycling
//!
//! Slots are never freed: `destroy` only clears the `active` flag and the next
//! `allocate` reuses the first inactive slot. Ids come from a monotonic counter,
//! so a recycled slot always gets a fresh id and stale ids simply stop resolving.

mod spawn;

pub use spawn::{load_scene, load_scene_json, spawn_ball, spawn_from_desc, spawn_wall, spawn_world_bounds};

use crate::core::PhysicsError;
use crate::domain::{Entity, EntityId};

/// Default store capacity
pub const DEFAULT_MAX_ENTITIES: usize = 4096;

/// First id handed out. 0 is reserved as "no entity" for the JS facade.
const FIRST_ID: EntityId = 1;

pub struct EntityStore {
    /// Slots `0..count`; `len()` is the high-water mark
    entities: Vec<Entity>,
    max: usize,
    next_id: EntityId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTITIES)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            entities: Vec::with_capacity(max),
            max,
            next_id: FIRST_ID,
        }
    }

    /// Allocate an entity with default values and a new unique id.
    ///
    /// Reuses the first inactive slot; appends otherwise. Fails with
    /// `EntityLimitReached` when the store is full and nothing is recyclable,
    /// and with `IdsExhausted` once the id counter would overflow.
    pub fn allocate(&mut self) -> Result<&mut Entity, PhysicsError> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            log::warn!("entity ids exhausted");
            PhysicsError::IdsExhausted
        })?;

        let slot = match self.entities.iter().position(|e| !e.active) {
            Some(slot) => slot,
            None => {
                if self.entities.len() >= self.max {
                    log::warn!("entity limit reached ({} slots)", self.max);
                    return Err(PhysicsError::EntityLimitReached { capacity: self.max });
                }
                self.entities.push(Entity::new(0));
                self.entities.len() - 1
            }
        };

        self.next_id = next_id;

        let e = &mut self.entities[slot];
        *e = Entity::new(id);
        Ok(e)
    }

    /// Soft delete: the slot stays allocated and becomes recyclable.
    /// Returns false when no active entity has this id.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.get_by_id_mut(id) {
            Some(e) => {
                e.active = false;
                true
            }
            None => false,
        }
    }

    /// First active entity with a matching id.
    pub fn get_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.active && e.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.active && e.id == id)
    }

    /// Slot index of an active entity
    pub fn slot_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.active && e.id == id)
    }

    /// First active entity whose tag shares any bit with `mask`.
    pub fn find_with_tag(&self, mask: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.active && (e.tag & mask) != 0)
    }

    /// Up to `cap` active entities whose tag shares any bit with `mask`,
    /// in slot order. Extra matches are silently left out.
    pub fn find_all_with_tag(&self, mask: u32, cap: usize) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.active && (e.tag & mask) != 0)
            .take(cap)
            .collect()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.active)
    }

    pub fn active_count(&self) -> usize {
        self.entities.iter().filter(|e| e.active).count()
    }

    /// High-water mark of used slots
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn capacity(&self) -> usize {
        self.max
    }

    /// Kill every entity. Slots stay allocated and ids keep counting up.
    pub fn clear(&mut self) {
        for e in self.entities.iter_mut() {
            e.active = false;
        }
    }

    // === Slot access (physics step) ===

    #[inline]
    pub(crate) fn slots(&self) -> &[Entity] {
        &self.entities
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Two distinct slots borrowed mutably at once.
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Entity, &mut Entity) {
        debug_assert_ne!(i, j, "pair_mut: same slot twice");
        if i < j {
            let (lo, hi) = self.entities.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.entities.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocate a new entity, or `EntityLimitReached`.
pub fn entity_alloc(store: &mut EntityStore) -> Result<&mut Entity, PhysicsError> {
    store.allocate()
}

/// Mark an entity dead; its slot becomes recyclable.
pub fn entity_destroy(e: &mut Entity) {
    e.active = false;
}

pub fn get_entity_by_id(store: &EntityStore, id: EntityId) -> Option<&Entity> {
    store.get_by_id(id)
}

pub fn find_entity_with_tag(store: &EntityStore, mask: u32) -> Option<&Entity> {
    store.find_with_tag(mask)
}

pub fn find_all_with_tag(store: &EntityStore, mask: u32, cap: usize) -> Vec<&Entity> {
    store.find_all_with_tag(mask, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut store = EntityStore::with_capacity(2);
        let a = store.allocate().unwrap().id;
        let b = store.allocate().unwrap().id;
        assert!(b > a);

        assert!(store.destroy(a));
        let c = store.allocate().unwrap().id;
        assert!(c > b);
        assert_eq!(store.count(), 2, "recycled slot, no append");
        assert!(store.get_by_id(a).is_none(), "stale id must not resolve");
        assert!(store.get_by_id(c).is_some());
    }

    #[test]
    fn full_store_reports_limit() {
        let mut store = EntityStore::with_capacity(1);
        store.allocate().unwrap();
        let err = store.allocate().unwrap_err();
        assert!(matches!(err, PhysicsError::EntityLimitReached { capacity: 1 }));
    }

    #[test]
    fn recycled_slot_is_reinitialized() {
        let mut store = EntityStore::with_capacity(1);
        let id = {
            let e = store.allocate().unwrap();
            e.pos = Vec2::new(5.0, 5.0);
            e.mass = 0.0;
            e.tag = 3;
            e.collider.is_colliding = true;
            e.id
        };
        store.destroy(id);
        let e = store.allocate().unwrap();
        assert_eq!(e.pos, Vec2::zero());
        assert_eq!(e.mass, 1.0);
        assert_eq!(e.tag, 0);
        assert!(!e.collider.is_colliding);
        assert!(e.active);
    }

    #[test]
    fn recycle_picks_first_inactive_slot() {
        let mut store = EntityStore::with_capacity(3);
        let ids: Vec<_> = (0..3).map(|_| store.allocate().unwrap().id).collect();
        store.destroy(ids[2]);
        store.destroy(ids[1]);
        let fresh = store.allocate().unwrap().id;
        assert_eq!(store.slot_of(fresh), Some(1));
    }

    #[test]
    fn id_counter_never_wraps() {
        let mut store = EntityStore::with_capacity(4);
        store.next_id = EntityId::MAX - 1;
        let last = store.allocate().unwrap().id;
        assert_eq!(last, EntityId::MAX - 1);

        let err = store.allocate().unwrap_err();
        assert!(matches!(err, PhysicsError::IdsExhausted));
        assert_eq!(store.count(), 1);

        // Recycling a slot does not mint ids either
        store.destroy(last);
        assert!(matches!(store.allocate(), Err(PhysicsError::IdsExhausted)));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn destroy_unknown_id_is_noop() {
        let mut store = EntityStore::new();
        assert!(!store.destroy(42));
    }

    #[test]
    fn tag_queries_skip_dead_and_truncate() {
        let mut store = EntityStore::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let e = store.allocate().unwrap();
            e.tag = if i % 2 == 0 { 0b10 } else { 0b01 };
            ids.push(e.id);
        }
        store.destroy(ids[0]);

        assert_eq!(store.find_with_tag(0b10).map(|e| e.id), Some(ids[2]));
        assert!(store.find_with_tag(0b100).is_none());

        let all = store.find_all_with_tag(0b10, 10);
        assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), vec![ids[2], ids[4]]);

        let capped = find_all_with_tag(&store, 0b11, 2);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn free_functions_mirror_store() {
        let mut store = EntityStore::new();
        let id = entity_alloc(&mut store).unwrap().id;
        assert!(get_entity_by_id(&store, id).is_some());
        if let Some(e) = store.get_by_id_mut(id) {
            entity_destroy(e);
        }
        assert!(get_entity_by_id(&store, id).is_none());
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut store = EntityStore::new();
        let a = store.allocate().unwrap().id;
        let b = store.allocate().unwrap().id;
        let (x, y) = store.pair_mut(1, 0);
        assert_eq!((x.id, y.id), (b, a));
    }
}
