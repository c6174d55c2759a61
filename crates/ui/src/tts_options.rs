//! TTS options window.
//!
//! Three volume sliders (speech, radio, announcements) bound to
//! `TtsSettings`, plus a voice/species picker with a Preview button that asks
//! the server for a sample line. Toggled with F8.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use client::request_preview_tts;
use shared::{RequestPreviewTtsEvent, TtsCVar, TtsSettings, MAX_TTS_GAIN};

use crate::theme;

/// Key that opens and closes the window.
pub const TOGGLE_KEY: KeyCode = KeyCode::F8;

/// Window visibility and the preview picker's current text.
#[derive(Resource, Debug, Clone)]
pub struct TtsOptionsPanel {
    pub open: bool,
    pub voice_id: String,
    pub species: String,
}

impl Default for TtsOptionsPanel {
    fn default() -> Self {
        Self {
            open: false,
            voice_id: String::new(),
            species: "Human".to_string(),
        }
    }
}

impl TtsOptionsPanel {
    /// Preview needs a voice; species may be left blank for the default.
    pub fn can_preview(&self) -> bool {
        !self.voice_id.trim().is_empty()
    }
}

/// Slider label for each setting.
fn cvar_label(cvar: TtsCVar) -> &'static str {
    match cvar {
        TtsCVar::Volume => "Speech",
        TtsCVar::VolumeRadio => "Radio",
        TtsCVar::VolumeAnnouncement => "Announcements",
    }
}

/// Gain → slider percent (100 % is unity gain).
pub fn gain_to_percent(gain: f32) -> f32 {
    gain * 100.0
}

pub fn percent_to_gain(percent: f32) -> f32 {
    percent / 100.0
}

pub struct TtsOptionsPlugin;

impl Plugin for TtsOptionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TtsOptionsPanel>().add_systems(
            Update,
            (
                toggle_tts_options,
                tts_options_ui.run_if(|panel: Res<TtsOptionsPanel>| panel.open),
            )
                .chain(),
        );
    }
}

/// Uses `Option<Res<ButtonInput<KeyCode>>>` so the system is a no-op in
/// headless contexts where `InputPlugin` is not present.
fn toggle_tts_options(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut panel: ResMut<TtsOptionsPanel>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(TOGGLE_KEY) {
        panel.open = !panel.open;
    }
}

fn tts_options_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<TtsOptionsPanel>,
    mut settings: ResMut<TtsSettings>,
    mut requests: EventWriter<RequestPreviewTtsEvent>,
) {
    let ctx = contexts.ctx_mut();
    let mut open = panel.open;

    egui::Window::new("Text-to-speech")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.label(
                egui::RichText::new("Volume")
                    .size(theme::FONT_SUBHEADING)
                    .color(theme::TEXT_HEADING),
            );
            for cvar in TtsCVar::ALL {
                render_volume_slider(ui, &mut settings, cvar);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(
                egui::RichText::new("Voice preview")
                    .size(theme::FONT_SUBHEADING)
                    .color(theme::TEXT_HEADING),
            );
            render_preview_picker(ui, &mut panel, &mut requests);
        });

    panel.open = open;
}

/// One labelled 0–200 % slider. Only writes back when the value moved, so
/// an idle window does not flag `TtsSettings` as changed every frame.
fn render_volume_slider(ui: &mut egui::Ui, settings: &mut ResMut<TtsSettings>, cvar: TtsCVar) {
    let current = settings.get(cvar);
    let mut pct = gain_to_percent(current);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(cvar_label(cvar))
                .size(theme::FONT_BODY)
                .color(theme::TEXT),
        );
        ui.add(
            egui::Slider::new(&mut pct, 0.0..=gain_to_percent(MAX_TTS_GAIN))
                .suffix("%")
                .fixed_decimals(0),
        );
    });
    let gain = percent_to_gain(pct);
    if gain != current {
        settings.set(cvar, gain);
    }
}

fn render_preview_picker(
    ui: &mut egui::Ui,
    panel: &mut ResMut<TtsOptionsPanel>,
    requests: &mut EventWriter<RequestPreviewTtsEvent>,
) {
    egui::Grid::new("tts_preview_grid")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Voice").color(theme::TEXT));
            ui.text_edit_singleline(&mut panel.voice_id);
            ui.end_row();

            ui.label(egui::RichText::new("Species").color(theme::TEXT));
            ui.text_edit_singleline(&mut panel.species);
            ui.end_row();
        });

    let button = egui::Button::new(egui::RichText::new("Preview").color(if panel.can_preview() {
        theme::PRIMARY
    } else {
        theme::TEXT_MUTED
    }));
    if ui.add_enabled(panel.can_preview(), button).clicked() {
        request_preview_tts(requests, panel.voice_id.trim(), panel.species.trim());
    }
}
