use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod theme;
pub mod tts_options;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_panel_theme)
            .add_plugins(tts_options::TtsOptionsPlugin);
    }
}
