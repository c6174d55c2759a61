//! Audible range for positional TTS.
//!
//! Bevy's spatial audio pans by position but never cuts a sound off. Speech
//! has a hard range (whispers carry less than a normal voice), so each frame
//! the sink volume of every positional TTS player is rolled off linearly
//! toward zero at its `max_distance`. The roll-off multiplies whatever
//! inverse-square falloff rodio already applies to the spatial sink, and is
//! scaled by `GlobalVolume` like every other sink volume.

use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;

use crate::playback::TtsPlayback;

/// Gain at `distance` for a sound of `base` gain audible up to `max_distance`.
pub fn distance_gain(base: f32, distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 || distance >= max_distance {
        return 0.0;
    }
    base * (1.0 - distance.max(0.0) / max_distance)
}

/// Gain actually handed to a positional sink.
pub fn sink_volume(gain: f32, global: f32, distance: f32, max_distance: f32) -> f32 {
    distance_gain(gain * global, distance, max_distance)
}

/// `GlobalVolume` is optional so the system also runs without `AudioPlugin`.
pub fn apply_tts_max_distance(
    listeners: Query<&GlobalTransform, With<SpatialListener>>,
    players: Query<(&TtsPlayback, &GlobalTransform, &SpatialAudioSink)>,
    global_volume: Option<Res<GlobalVolume>>,
) {
    let Some(listener) = listeners.iter().next() else {
        return;
    };
    let ear = listener.translation();
    let global = global_volume.map_or(1.0, |g| g.volume.get());

    for (playback, transform, sink) in &players {
        let Some(max_distance) = playback.max_distance else {
            continue;
        };
        let distance = ear.distance(transform.translation());
        sink.set_volume(sink_volume(playback.gain, global, distance, max_distance));
    }
}
