//! In-memory byte buffers addressed by virtual path.
//!
//! Network-delivered audio has no file on disk, but Bevy's asset pipeline
//! resolves everything by path. The store bridges the two: a buffer is
//! registered under a synthetic path right before it is loaded and evicted
//! right after playback starts. The same store backs the `tts://` asset
//! source (see `tts_asset_source`), so any consumer that loads by path sees
//! the buffers while they are registered.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use bevy::prelude::*;
use bevy::utils::HashMap;

use shared::TtsError;

/// Cloneable handle to the shared buffer map.
///
/// Clones share the same buffers. A poisoned lock is recovered: the map only
/// holds whole byte buffers, so a panicking writer cannot leave an entry
/// half-written.
#[derive(Resource, Clone, Default)]
pub struct EphemeralAudioStore {
    files: Arc<RwLock<HashMap<PathBuf, Arc<[u8]>>>>,
}

/// Keys are relative: `"/0.ogg"` and `"0.ogg"` name the same buffer.
fn normalize(path: &Path) -> PathBuf {
    path.strip_prefix("/").unwrap_or(path).to_path_buf()
}

impl EphemeralAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` at `path`, replacing whatever was there.
    pub fn add_or_update(&self, path: impl AsRef<Path>, bytes: impl Into<Arc<[u8]>>) {
        let key = normalize(path.as_ref());
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, bytes.into());
    }

    /// Evict the buffer at `path`. Returns `false` if nothing was registered.
    pub fn remove(&self, path: impl AsRef<Path>) -> bool {
        let key = normalize(path.as_ref());
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some()
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<Arc<[u8]>, TtsError> {
        let key = normalize(path.as_ref());
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or(TtsError::NotFound(key))
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let key = normalize(path.as_ref());
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }
}
