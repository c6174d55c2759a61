// ---------------------------------------------------------------------------
// TtsError: typed errors for the store, the wire codec and the settings file
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while delivering TTS audio or loading its settings.
///
/// None of these reach the player. Systems log them with `warn!` and carry
/// on with the next event.
#[derive(Debug)]
pub enum TtsError {
    /// No buffer is registered at this virtual path.
    NotFound(PathBuf),
    /// A network packet could not be decoded.
    Decode(String),
    /// I/O error while reading or writing the settings file.
    Io(std::io::Error),
    /// The settings file is not valid JSON.
    Parse(String),
}

impl fmt::Display for TtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtsError::NotFound(path) => write!(f, "No TTS buffer at {}", path.display()),
            TtsError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            TtsError::Io(e) => write!(f, "I/O error: {e}"),
            TtsError::Parse(msg) => write!(f, "Settings parse error: {msg}"),
        }
    }
}

impl std::error::Error for TtsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TtsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TtsError {
    fn from(e: std::io::Error) -> Self {
        TtsError::Io(e)
    }
}

impl From<bitcode::Error> for TtsError {
    fn from(e: bitcode::Error) -> Self {
        TtsError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for TtsError {
    fn from(e: serde_json::Error) -> Self {
        TtsError::Parse(e.to_string())
    }
}
