//! Client-side TTS playback.
//!
//! Receives synthesized speech over the network and plays it either anchored
//! to the speaking entity or globally. Decoding, mixing, spatialization and
//! the transport itself stay with Bevy and the embedding game.
//!
//! Add [`TtsAssetSourcePlugin`] before `DefaultPlugins` and
//! [`TtsClientPlugin`] anywhere after.

use bevy::prelude::*;

pub mod distance;
pub mod ephemeral_store;
pub mod net_bridge;
pub mod net_lookup;
pub mod playback;
pub mod settings_sync;
pub mod tts_asset_source;
pub mod volume;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_harness;

use shared::{NetEntityIndex, PlayTtsEvent, RequestPreviewTtsEvent, SetTtsCVarEvent, TtsSettings};

pub use ephemeral_store::EphemeralAudioStore;
pub use net_bridge::{request_preview_tts, IncomingTtsPacket, OutgoingTtsPacket};
pub use playback::{TtsFileCounter, TtsPlayback};
pub use tts_asset_source::{tts_asset_path, TtsAssetSourcePlugin, TTS_ASSET_SOURCE};
pub use volume::TtsVolumes;

/// Ordered phases of the TTS pipeline in the `Update` schedule.
///
/// Configured as a chain: `Receive` → `Configure` → `Dispatch` → `Attenuate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TtsSet {
    /// Decode inbound packets, encode outbound requests.
    Receive,
    /// Apply config changes and refresh the volume snapshot.
    Configure,
    /// Turn `PlayTtsEvent`s into playback entities.
    Dispatch,
    /// Per-frame range falloff on positional players.
    Attenuate,
}

/// Registers TTS events, resources and systems.
pub struct TtsClientPlugin;

impl Plugin for TtsClientPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<EphemeralAudioStore>() {
            app.init_resource::<EphemeralAudioStore>();
        }

        app.add_event::<PlayTtsEvent>()
            .add_event::<RequestPreviewTtsEvent>()
            .add_event::<SetTtsCVarEvent>()
            .add_event::<IncomingTtsPacket>()
            .add_event::<OutgoingTtsPacket>()
            .init_resource::<TtsSettings>()
            .init_resource::<TtsVolumes>()
            .init_resource::<TtsFileCounter>()
            .init_resource::<NetEntityIndex>()
            .init_resource::<Assets<AudioSource>>()
            .configure_sets(
                Update,
                (
                    TtsSet::Receive,
                    TtsSet::Configure,
                    TtsSet::Dispatch,
                    TtsSet::Attenuate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    net_bridge::decode_tts_packets,
                    net_bridge::encode_preview_requests,
                )
                    .in_set(TtsSet::Receive),
            )
            .add_systems(
                Update,
                (
                    settings_sync::apply_tts_cvar_events,
                    settings_sync::sync_tts_volumes
                        .run_if(resource_changed::<TtsSettings>),
                )
                    .chain()
                    .in_set(TtsSet::Configure),
            )
            .add_systems(
                Update,
                playback::play_tts_events.in_set(TtsSet::Dispatch),
            )
            .add_systems(
                Update,
                distance::apply_tts_max_distance.in_set(TtsSet::Attenuate),
            );
    }
}
