//! TTS playback dispatcher: turns each [`PlayTtsEvent`] into one playback
//! entity.
//!
//! Per event: allocate a synthetic path, register the payload in the
//! [`EphemeralAudioStore`], load it into an `AudioSource`, pick volume and
//! range by channel, spawn the player (anchored to the speaker or global),
//! then evict the buffer.

use std::path::Path;

use bevy::audio::Volume;
use bevy::prelude::*;

use shared::{PlayTtsEvent, TtsError, TtsType};

use crate::ephemeral_store::EphemeralAudioStore;
use crate::net_lookup::NetEntityLookup;
use crate::tts_asset_source::tts_asset_path;
use crate::volume::{tts_audio_params, TtsVolumes};

/// Hands out synthetic file names for network-delivered audio.
///
/// The counter only grows, so no path is handed out twice while an earlier
/// buffer could still be registered.
#[derive(Resource, Debug, Default)]
pub struct TtsFileCounter {
    next: u64,
}

impl TtsFileCounter {
    /// `"{n}.ogg"` for the next n, starting at 0.
    pub fn next_path(&mut self) -> String {
        let idx = self.next;
        self.next += 1;
        format!("{idx}.ogg")
    }

    /// How many paths have been handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// Marker + parameters on every spawned TTS player.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct TtsPlayback {
    /// Synthetic path the audio was loaded from.
    pub path: String,
    pub tts_type: TtsType,
    /// Decibel-style volume.
    pub volume: f32,
    /// Linear amplitude handed to the mixer.
    pub gain: f32,
    /// Audible range for positional lines.
    pub max_distance: Option<f32>,
    /// Speaker the player is attached to; `None` for global playback.
    pub source: Option<Entity>,
}

/// Load a registered buffer into the audio asset collection.
///
/// The loaded `AudioSource` owns its own reference to the bytes, so the
/// store entry can be evicted as soon as this returns.
pub fn load_tts_audio(
    store: &EphemeralAudioStore,
    path: impl AsRef<Path>,
    sources: &mut Assets<AudioSource>,
) -> Result<Handle<AudioSource>, TtsError> {
    let bytes = store.resolve(path)?;
    Ok(sources.add(AudioSource { bytes }))
}

/// Plays every pending [`PlayTtsEvent`].
///
/// A line whose speaker is no longer resolvable is dropped without playing:
/// the speaker was despawned between send and receive. The buffer is evicted
/// on every path.
pub fn play_tts_events(
    mut commands: Commands,
    mut events: EventReader<PlayTtsEvent>,
    store: Res<EphemeralAudioStore>,
    mut counter: ResMut<TtsFileCounter>,
    mut sources: ResMut<Assets<AudioSource>>,
    volumes: Res<TtsVolumes>,
    lookup: NetEntityLookup,
) {
    let volumes = *volumes;

    for ev in events.read() {
        trace!(
            "TTS: play {} bytes from {:?} entity",
            ev.data.len(),
            ev.source_uid
        );

        let path = counter.next_path();
        store.add_or_update(&path, ev.data.as_slice());

        match load_tts_audio(&store, &path, &mut sources) {
            Ok(handle) => dispatch(&mut commands, ev, &path, handle, &volumes, &lookup),
            Err(e) => warn!("TTS: failed to load {}: {e}", tts_asset_path(&path)),
        }

        store.remove(&path);
    }
}

fn dispatch(
    commands: &mut Commands,
    ev: &PlayTtsEvent,
    path: &str,
    handle: Handle<AudioSource>,
    volumes: &TtsVolumes,
    lookup: &NetEntityLookup,
) {
    let params = tts_audio_params(ev.tts_type, ev.is_whisper, volumes);
    let gain = params.gain();
    let mut playback = TtsPlayback {
        path: path.to_string(),
        tts_type: ev.tts_type,
        volume: params.volume,
        gain,
        max_distance: params.max_distance,
        source: None,
    };
    let settings = PlaybackSettings::DESPAWN.with_volume(Volume::new(gain));

    let Some(net) = ev.source_uid else {
        commands.spawn((AudioPlayer::new(handle), settings, playback));
        return;
    };

    let Some(source) = lookup.resolve(net) else {
        debug!("TTS: speaker {net} is gone, dropping {}", tts_asset_path(path));
        return;
    };

    playback.source = Some(source);
    commands.entity(source).with_children(|parent| {
        parent.spawn((
            AudioPlayer::new(handle),
            settings.with_spatial(true),
            playback,
            Transform::default(),
        ));
    });
}
