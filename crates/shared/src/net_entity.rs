//! Network entity handles and their mapping to local ECS entities.
//!
//! The server addresses entities by a stable `NetEntity` id. The replication
//! layer of the embedding game keeps `NetEntityIndex` up to date as entities
//! are spawned and despawned locally; TTS playback only ever reads it.

use bevy::prelude::*;
use bevy::utils::HashMap;

/// Opaque entity id shared between server and client.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    bitcode::Encode,
    bitcode::Decode,
)]
pub struct NetEntity(pub u32);

impl std::fmt::Display for NetEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "net#{}", self.0)
    }
}

/// Two-way map between network ids and local entities.
#[derive(Resource, Debug, Default)]
pub struct NetEntityIndex {
    by_net: HashMap<NetEntity, Entity>,
    by_local: HashMap<Entity, NetEntity>,
}

impl NetEntityIndex {
    /// Map `net` to `entity`, replacing any previous mapping on either side.
    pub fn insert(&mut self, net: NetEntity, entity: Entity) {
        if let Some(old_entity) = self.by_net.insert(net, entity) {
            self.by_local.remove(&old_entity);
        }
        if let Some(old_net) = self.by_local.insert(entity, net) {
            if old_net != net {
                self.by_net.remove(&old_net);
            }
        }
    }

    /// Forget a network id. Returns the local entity it mapped to.
    pub fn remove(&mut self, net: NetEntity) -> Option<Entity> {
        let entity = self.by_net.remove(&net)?;
        self.by_local.remove(&entity);
        Some(entity)
    }

    /// Forget a local entity (e.g. after it was despawned).
    pub fn remove_entity(&mut self, entity: Entity) -> Option<NetEntity> {
        let net = self.by_local.remove(&entity)?;
        self.by_net.remove(&net);
        Some(net)
    }

    pub fn get(&self, net: NetEntity) -> Option<Entity> {
        self.by_net.get(&net).copied()
    }

    pub fn len(&self) -> usize {
        self.by_net.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_net.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut index = NetEntityIndex::default();
        let e = Entity::from_raw(7);
        index.insert(NetEntity(42), e);
        assert_eq!(index.get(NetEntity(42)), Some(e));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_reinsert_replaces_stale_mapping() {
        let mut index = NetEntityIndex::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        index.insert(NetEntity(5), a);
        index.insert(NetEntity(5), b);
        assert_eq!(index.get(NetEntity(5)), Some(b));
        assert_eq!(index.remove_entity(a), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_entity_clears_both_sides() {
        let mut index = NetEntityIndex::default();
        let e = Entity::from_raw(3);
        index.insert(NetEntity(9), e);
        assert_eq!(index.remove_entity(e), Some(NetEntity(9)));
        assert_eq!(index.get(NetEntity(9)), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut index = NetEntityIndex::default();
        assert_eq!(index.remove(NetEntity(1)), None);
        assert_eq!(index.remove_entity(Entity::from_raw(1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NetEntity(12).to_string(), "net#12");
    }
}
