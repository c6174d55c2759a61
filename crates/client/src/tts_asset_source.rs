//! The `tts://` asset source: a read-only virtual root over
//! [`EphemeralAudioStore`].
//!
//! Registering the store as an asset source keeps it out of the way of real
//! content (`tts://0.ogg` can never collide with `assets/0.ogg`) and lets
//! `AssetServer::load` resolve network-delivered audio like any other file.

use std::path::{Path, PathBuf};

use bevy::asset::io::{
    AssetReader, AssetReaderError, AssetSource, AssetSourceId, PathStream, Reader, VecReader,
};
use bevy::asset::{AssetApp, AssetPlugin};
use bevy::prelude::*;

use crate::ephemeral_store::EphemeralAudioStore;

/// Name of the asset source, i.e. the `tts` in `tts://0.ogg`.
pub const TTS_ASSET_SOURCE: &str = "tts";

/// Full asset path of a buffer registered in the store.
pub fn tts_asset_path(file: impl AsRef<Path>) -> String {
    format!("{}://{}", TTS_ASSET_SOURCE, file.as_ref().display())
}

/// `AssetReader` that serves buffers straight out of the store.
///
/// The root is the only directory. No buffer carries a `.meta` file, so
/// loaders always run with default settings.
pub struct EphemeralAudioReader {
    store: EphemeralAudioStore,
}

impl EphemeralAudioReader {
    pub fn new(store: EphemeralAudioStore) -> Self {
        Self { store }
    }
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new("/")
}

impl AssetReader for EphemeralAudioReader {
    async fn read<'a>(&'a self, path: &'a Path) -> Result<impl Reader + 'a, AssetReaderError> {
        self.store
            .resolve(path)
            .map(|bytes| VecReader::new(bytes.to_vec()))
            .map_err(|_| AssetReaderError::NotFound(path.to_path_buf()))
    }

    async fn read_meta<'a>(
        &'a self,
        path: &'a Path,
    ) -> Result<impl Reader + 'a, AssetReaderError> {
        Err::<VecReader, _>(AssetReaderError::NotFound(path.to_path_buf()))
    }

    async fn read_directory<'a>(
        &'a self,
        path: &'a Path,
    ) -> Result<Box<PathStream>, AssetReaderError> {
        if !is_root(path) {
            return Err(AssetReaderError::NotFound(path.to_path_buf()));
        }
        let paths: Vec<PathBuf> = self.store.paths();
        let stream: Box<PathStream> = Box::new(futures_lite::stream::iter(paths));
        Ok(stream)
    }

    async fn is_directory<'a>(&'a self, path: &'a Path) -> Result<bool, AssetReaderError> {
        Ok(is_root(path))
    }
}

/// Registers the `tts://` source and inserts the shared [`EphemeralAudioStore`].
///
/// Asset sources are frozen when `AssetPlugin` builds, so this plugin has to
/// be added before `DefaultPlugins`. Added later, it only inserts the store;
/// playback still works because the dispatcher resolves buffers directly.
pub struct TtsAssetSourcePlugin;

impl Plugin for TtsAssetSourcePlugin {
    fn build(&self, app: &mut App) {
        let store = app
            .world()
            .get_resource::<EphemeralAudioStore>()
            .cloned()
            .unwrap_or_default();
        app.insert_resource(store.clone());

        if app.is_plugin_added::<AssetPlugin>() {
            warn!(
                "TTS: TtsAssetSourcePlugin added after AssetPlugin, {}:// paths will not resolve",
                TTS_ASSET_SOURCE
            );
            return;
        }

        app.register_asset_source(
            AssetSourceId::from(TTS_ASSET_SOURCE),
            AssetSource::build()
                .with_reader(move || Box::new(EphemeralAudioReader::new(store.clone()))),
        );
    }
}
