//! Volume and audible-range rules for TTS playback.
//!
//! Volumes here are decibel-style offsets (`10 * log10(gain)`), the same
//! scale the settings sliders are converted through. Bevy's mixer takes a
//! linear amplitude, so the final value goes back through
//! [`volume_to_gain`] when a playback entity is spawned.

use bevy::prelude::*;

use shared::{TtsSettings, TtsType};

/// Whisper attenuation, as a gain. Converted to a decibel offset on use.
pub const WHISPER_FADE: f32 = 4.0;

/// Offset added to every TTS volume so a unity gain still sits below other
/// game audio.
pub const MINIMAL_VOLUME: f32 = -10.0;

/// How far normal speech carries, in world units.
pub const VOICE_RANGE: f32 = 10.0;
/// Whispers are intelligible up to this distance.
pub const WHISPER_CLEAR_RANGE: f32 = 2.0;
/// Whispers are audible (muffled) up to this distance.
pub const WHISPER_MUFFLED_RANGE: f32 = 5.0;

/// Linear gain to decibel offset. Negative gains count as silence.
pub fn gain_to_volume(gain: f32) -> f32 {
    10.0 * gain.max(0.0).log10()
}

/// Decibel offset back to linear gain. `-inf` maps to 0.
pub fn volume_to_gain(volume: f32) -> f32 {
    10f32.powf(volume / 10.0)
}

/// Snapshot of the three TTS gains read by the dispatcher.
///
/// Copied out of [`TtsSettings`] whenever the settings change and read by
/// value. Only systems in the TTS sets touch it, and Bevy orders them, so no
/// lock is needed. Anything reading it from another thread would need the
/// three fields to become atomics.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TtsVolumes {
    pub speech: f32,
    pub radio: f32,
    pub announcement: f32,
}

impl Default for TtsVolumes {
    fn default() -> Self {
        Self::from(&TtsSettings::default())
    }
}

impl From<&TtsSettings> for TtsVolumes {
    fn from(settings: &TtsSettings) -> Self {
        Self {
            speech: settings.volume,
            radio: settings.volume_radio,
            announcement: settings.volume_announcement,
        }
    }
}

impl TtsVolumes {
    /// Volume of an in-world speech line.
    pub fn adjust_volume(&self, is_whisper: bool) -> f32 {
        let mut volume = MINIMAL_VOLUME + gain_to_volume(self.speech);
        if is_whisper {
            volume -= gain_to_volume(WHISPER_FADE);
        }
        volume
    }
}

/// Volume of a line heard everywhere at the given channel gain.
pub fn adjust_global_volume(gain: f32) -> f32 {
    MINIMAL_VOLUME + gain_to_volume(gain)
}

pub fn adjust_distance(is_whisper: bool) -> f32 {
    if is_whisper {
        WHISPER_MUFFLED_RANGE
    } else {
        VOICE_RANGE
    }
}

/// Playback parameters for one TTS line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtsAudioParams {
    /// Decibel-style volume.
    pub volume: f32,
    /// Audible range; `None` means no distance falloff.
    pub max_distance: Option<f32>,
}

impl TtsAudioParams {
    /// Linear amplitude for Bevy's `Volume`.
    pub fn gain(&self) -> f32 {
        volume_to_gain(self.volume)
    }
}

pub fn tts_audio_params(tts_type: TtsType, is_whisper: bool, volumes: &TtsVolumes) -> TtsAudioParams {
    match tts_type {
        TtsType::Speech => TtsAudioParams {
            volume: volumes.adjust_volume(is_whisper),
            max_distance: Some(adjust_distance(is_whisper)),
        },
        TtsType::Radio => TtsAudioParams {
            volume: adjust_global_volume(volumes.radio),
            max_distance: None,
        },
        TtsType::Announcement => TtsAudioParams {
            volume: adjust_global_volume(volumes.announcement),
            max_distance: None,
        },
    }
}
