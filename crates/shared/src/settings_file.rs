//! JSON persistence for [`TtsSettings`].
//!
//! Writes go through a temp file plus rename so a crash mid-write never
//! leaves a truncated settings file behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::TtsError;
use crate::tts_settings::TtsSettings;

/// Load settings from `path`.
///
/// A missing file yields the defaults. Values outside the allowed range are
/// clamped the same way the setters clamp them.
pub fn load_settings(path: impl AsRef<Path>) -> Result<TtsSettings, TtsError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TtsSettings::default()),
        Err(e) => return Err(e.into()),
    };
    let settings: TtsSettings = serde_json::from_str(&text)?;
    Ok(settings.sanitized())
}

/// Write settings to `path` as pretty JSON.
pub fn save_settings(path: impl AsRef<Path>, settings: &TtsSettings) -> Result<(), TtsError> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path.as_ref(), json.as_bytes())?;
    Ok(())
}

fn atomic_write(final_path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = final_path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(tmp_path, final_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Helper to create a unique temp directory for each test.
    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("voicecast_settings_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = test_dir("missing");
        let settings = load_settings(dir.join("nope.json")).unwrap();
        assert_eq!(settings, TtsSettings::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_then_load() {
        let dir = test_dir("save_load");
        let path = dir.join("tts.json");
        let settings = TtsSettings {
            volume: 0.5,
            volume_radio: 1.5,
            volume_announcement: 0.0,
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);

        // Temp file should not remain.
        assert!(!dir.join("tts.json.tmp").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = test_dir("partial");
        let path = dir.join("tts.json");
        fs::write(&path, r#"{ "volume_radio": 0.3 }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.volume_radio, 0.3);
        assert_eq!(settings.volume_announcement, 1.0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_out_of_range_values_are_clamped_on_load() {
        let dir = test_dir("clamped");
        let path = dir.join("tts.json");
        fs::write(&path, r#"{ "volume": 12.0, "volume_announcement": -2.0 }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.volume, crate::tts_settings::MAX_TTS_GAIN);
        assert_eq!(settings.volume_announcement, 0.0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = test_dir("invalid");
        let path = dir.join("tts.json");
        fs::write(&path, "volume = 1").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, TtsError::Parse(_)), "got: {err}");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = test_dir("nested");
        let path = dir.join("a/b/tts.json");
        save_settings(&path, &TtsSettings::default()).unwrap();
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
