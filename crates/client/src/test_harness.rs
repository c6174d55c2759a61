//! # TestClient — headless harness for the TTS client
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `TtsClientPlugin` so
//! tests can push network events, tick, and inspect the spawned players
//! without a window or an audio device.

use bevy::app::App;
use bevy::prelude::*;

use shared::{NetEntity, NetEntityIndex, PlayTtsEvent, SetTtsCVarEvent, TtsSettings};

use crate::ephemeral_store::EphemeralAudioStore;
use crate::net_bridge::{IncomingTtsPacket, OutgoingTtsPacket};
use crate::playback::{TtsFileCounter, TtsPlayback};
use crate::volume::TtsVolumes;
use crate::TtsClientPlugin;

/// A headless Bevy App wrapping `TtsClientPlugin`.
pub struct TestClient {
    app: App,
}

impl TestClient {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(TtsClientPlugin);
        // Run one update so the initial settings snapshot is taken.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_settings(mut self, settings: TtsSettings) -> Self {
        self.app.insert_resource(settings);
        self.app.update();
        self
    }

    /// Spawn a speaker entity known to the network layer as `net`.
    pub fn with_speaker(mut self, net: NetEntity) -> Self {
        self.spawn_speaker(net);
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn spawn_speaker(&mut self, net: NetEntity) -> Entity {
        let world = self.app.world_mut();
        let entity = world.spawn(Transform::default()).id();
        world.resource_mut::<NetEntityIndex>().insert(net, entity);
        entity
    }

    /// Despawn the speaker but leave the stale index entry behind, the way a
    /// replication layer running a frame late would.
    pub fn despawn_speaker_keep_index(&mut self, net: NetEntity) {
        let world = self.app.world_mut();
        if let Some(entity) = world.resource::<NetEntityIndex>().get(net) {
            world.despawn(entity);
        }
    }

    pub fn send(&mut self, ev: PlayTtsEvent) {
        self.app.world_mut().send_event(ev);
    }

    pub fn send_packet(&mut self, bytes: Vec<u8>) {
        self.app.world_mut().send_event(IncomingTtsPacket(bytes));
    }

    pub fn send_cvar(&mut self, ev: SetTtsCVarEvent) {
        self.app.world_mut().send_event(ev);
    }

    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn store(&self) -> &EphemeralAudioStore {
        self.resource::<EphemeralAudioStore>()
    }

    pub fn files_issued(&self) -> u64 {
        self.resource::<TtsFileCounter>().issued()
    }

    pub fn volumes(&self) -> TtsVolumes {
        *self.resource::<TtsVolumes>()
    }

    pub fn speaker(&self, net: NetEntity) -> Option<Entity> {
        self.resource::<NetEntityIndex>().get(net)
    }

    /// All TTS players with their playback settings, ordered by path index.
    pub fn players(&mut self) -> Vec<(Entity, TtsPlayback, PlaybackSettings)> {
        let world = self.app.world_mut();
        let mut players: Vec<_> = world
            .query::<(Entity, &TtsPlayback, &PlaybackSettings)>()
            .iter(world)
            .map(|(e, p, s)| (e, p.clone(), s.clone()))
            .collect();
        players.sort_by_key(|(_, p, _)| path_index(&p.path));
        players
    }

    pub fn player_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&TtsPlayback>().iter(world).count()
    }

    pub fn parent_of(&mut self, entity: Entity) -> Option<Entity> {
        self.app
            .world()
            .get::<Parent>(entity)
            .map(|parent| parent.get())
    }

    /// Drain outbound packets written since the last call.
    pub fn outgoing_packets(&mut self) -> Vec<Vec<u8>> {
        let world = self.app.world_mut();
        let mut events = world.resource_mut::<Events<OutgoingTtsPacket>>();
        events.drain().map(|packet| packet.0).collect()
    }
}

fn path_index(path: &str) -> u64 {
    path.trim_end_matches(".ogg").parse().unwrap_or(u64::MAX)
}
