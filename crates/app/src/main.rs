use bevy::prelude::*;
use bevy::window::PresentMode;

mod demo_playback;
mod settings_persist;

fn main() {
    let mut app = App::new();

    // Asset sources are frozen when AssetPlugin builds, so the tts:// source
    // has to be registered before DefaultPlugins.
    app.add_plugins(client::TtsAssetSourcePlugin);

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Voicecast".to_string(),
            resolution: (960.0, 540.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        client::TtsClientPlugin,
        ui::UiPlugin,
        settings_persist::SettingsPersistPlugin::from_env(),
        demo_playback::DemoPlaybackPlugin,
    ))
    .add_systems(Startup, spawn_listener);

    app.run();
}

/// Camera doubles as the listener for positional speech.
fn spawn_listener(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::default(), SpatialListener::new(0.3)));
}
