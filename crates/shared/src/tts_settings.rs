//! Player-facing TTS volume settings.
//!
//! Three independent linear gains, one per `TtsType`. Each is also reachable
//! by a config-var name so console commands and the settings file can address
//! it without knowing the struct layout.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Upper bound for every TTS gain. 1.0 is unity, 2.0 doubles the signal.
pub const MAX_TTS_GAIN: f32 = 2.0;

/// Named configuration variables backing [`TtsSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtsCVar {
    Volume,
    VolumeRadio,
    VolumeAnnouncement,
}

impl TtsCVar {
    pub const ALL: [TtsCVar; 3] = [
        TtsCVar::Volume,
        TtsCVar::VolumeRadio,
        TtsCVar::VolumeAnnouncement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TtsCVar::Volume => "tts.volume",
            TtsCVar::VolumeRadio => "tts.volume_radio",
            TtsCVar::VolumeAnnouncement => "tts.volume_announcement",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cvar| cvar.name() == name)
    }
}

/// TTS gains as configured by the player.
///
/// All values are linear gains in `[0.0, MAX_TTS_GAIN]`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsSettings {
    /// In-world speech.
    pub volume: f32,
    pub volume_radio: f32,
    pub volume_announcement: f32,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            volume_radio: 1.0,
            volume_announcement: 1.0,
        }
    }
}

impl TtsSettings {
    pub fn get(&self, cvar: TtsCVar) -> f32 {
        match cvar {
            TtsCVar::Volume => self.volume,
            TtsCVar::VolumeRadio => self.volume_radio,
            TtsCVar::VolumeAnnouncement => self.volume_announcement,
        }
    }

    /// Set a gain, clamped to `[0.0, MAX_TTS_GAIN]`. NaN and infinities are
    /// ignored and leave the stored value untouched.
    pub fn set(&mut self, cvar: TtsCVar, value: f32) {
        if !value.is_finite() {
            return;
        }
        let value = value.clamp(0.0, MAX_TTS_GAIN);
        match cvar {
            TtsCVar::Volume => self.volume = value,
            TtsCVar::VolumeRadio => self.volume_radio = value,
            TtsCVar::VolumeAnnouncement => self.volume_announcement = value,
        }
    }

    pub fn set_volume(&mut self, value: f32) {
        self.set(TtsCVar::Volume, value);
    }

    pub fn set_volume_radio(&mut self, value: f32) {
        self.set(TtsCVar::VolumeRadio, value);
    }

    pub fn set_volume_announcement(&mut self, value: f32) {
        self.set(TtsCVar::VolumeAnnouncement, value);
    }

    /// Re-apply the setter rules to every field. Used after deserializing.
    pub fn sanitized(self) -> Self {
        let mut out = Self::default();
        for cvar in TtsCVar::ALL {
            out.set(cvar, self.get(cvar));
        }
        out
    }
}

/// Config-change notification for a single TTS setting, addressed by name.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SetTtsCVarEvent {
    pub name: String,
    pub value: f32,
}

impl SetTtsCVarEvent {
    pub fn new(cvar: TtsCVar, value: f32) -> Self {
        Self {
            name: cvar.name().to_string(),
            value,
        }
    }
}
