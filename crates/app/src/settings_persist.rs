//! Loads `TtsSettings` from disk at startup and writes them back after the
//! player stops touching the sliders.

use std::ffi::OsString;
use std::path::PathBuf;

use bevy::prelude::*;

use client::TtsSet;
use shared::settings_file::{load_settings, save_settings};
use shared::TtsSettings;

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "VOICECAST_SETTINGS";
pub const DEFAULT_SETTINGS_FILE: &str = "tts_settings.json";

/// Seconds of quiet after the last change before the file is written.
const SAVE_DEBOUNCE_SECS: f32 = 1.0;

#[derive(Resource, Debug, Clone)]
pub struct SettingsPath(pub PathBuf);

#[derive(Resource)]
struct SettingsSaveDebounce {
    timer: Timer,
    dirty: bool,
}

impl Default for SettingsSaveDebounce {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(SAVE_DEBOUNCE_SECS, TimerMode::Once),
            dirty: false,
        }
    }
}

pub fn resolve_settings_path(env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_SETTINGS_FILE),
    }
}

pub struct SettingsPersistPlugin {
    pub path: PathBuf,
}

impl SettingsPersistPlugin {
    /// Settings file from `VOICECAST_SETTINGS`, or the default next to the binary.
    pub fn from_env() -> Self {
        Self {
            path: resolve_settings_path(std::env::var_os(SETTINGS_ENV)),
        }
    }
}

impl Plugin for SettingsPersistPlugin {
    fn build(&self, app: &mut App) {
        let path = self.path.clone();
        let settings = match load_settings(&path) {
            Ok(settings) => {
                info!("TTS: settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "TTS: could not load {}, using defaults: {e}",
                    path.display()
                );
                TtsSettings::default()
            }
        };

        app.insert_resource(settings)
            .insert_resource(SettingsPath(path))
            .init_resource::<SettingsSaveDebounce>()
            .add_systems(Update, persist_tts_settings.after(TtsSet::Configure));
    }
}

fn persist_tts_settings(
    time: Res<Time>,
    settings: Res<TtsSettings>,
    path: Res<SettingsPath>,
    mut debounce: ResMut<SettingsSaveDebounce>,
    mut started: Local<bool>,
) {
    // The first run sees the freshly inserted resource, which is not an edit.
    if !*started {
        *started = true;
        return;
    }

    if settings.is_changed() {
        debounce.dirty = true;
        debounce.timer.reset();
    }
    if !debounce.dirty {
        return;
    }

    debounce.timer.tick(time.delta());
    if !debounce.timer.finished() {
        return;
    }

    debounce.dirty = false;
    match save_settings(&path.0, &settings) {
        Ok(()) => debug!("TTS: settings saved to {}", path.0.display()),
        Err(e) => warn!("TTS: failed to save {}: {e}", path.0.display()),
    }
}
