//! Resolving network entity ids to live local entities.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use shared::{NetEntity, NetEntityIndex};

/// The single entity capability TTS playback needs: turn a `NetEntity` into
/// a local entity that still exists.
///
/// An id can be indexed but already despawned when the index lags a frame
/// behind, so both the index and the world are checked.
#[derive(SystemParam)]
pub struct NetEntityLookup<'w, 's> {
    index: Res<'w, NetEntityIndex>,
    entities: Query<'w, 's, Entity>,
}

impl NetEntityLookup<'_, '_> {
    pub fn resolve(&self, net: NetEntity) -> Option<Entity> {
        self.index
            .get(net)
            .filter(|entity| self.entities.contains(*entity))
    }
}
