//! Keeps [`TtsVolumes`] in step with [`TtsSettings`].
//!
//! Update rule is replace-on-notify: whenever the settings resource changes,
//! the whole snapshot is replaced. The first run sees the resource as newly
//! added, which doubles as the initial-value notification.

use bevy::prelude::*;

use shared::{SetTtsCVarEvent, TtsCVar, TtsSettings};

use crate::volume::TtsVolumes;

/// Applies named config-change notifications to [`TtsSettings`].
pub fn apply_tts_cvar_events(
    mut events: EventReader<SetTtsCVarEvent>,
    mut settings: ResMut<TtsSettings>,
) {
    for ev in events.read() {
        match TtsCVar::from_name(&ev.name) {
            Some(cvar) => settings.set(cvar, ev.value),
            None => warn!("TTS: unknown setting '{}'", ev.name),
        }
    }
}

pub fn sync_tts_volumes(settings: Res<TtsSettings>, mut volumes: ResMut<TtsVolumes>) {
    let next = TtsVolumes::from(&*settings);
    if *volumes != next {
        debug!(
            "TTS: volumes speech={:.2} radio={:.2} announcement={:.2}",
            next.speech, next.radio, next.announcement
        );
        *volumes = next;
    }
}
