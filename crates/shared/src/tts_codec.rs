//! Binary wire format for TTS network messages.
//!
//! Messages are `bitcode`-encoded as a flat enum with no header or version
//! field. The transport that carries the bytes belongs to the embedding game.

use crate::error::TtsError;
use crate::tts_event::{PlayTtsEvent, RequestPreviewTtsEvent};

/// Every message the TTS feature puts on the wire.
#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub enum TtsMessage {
    PlayTts(PlayTtsEvent),
    RequestPreview(RequestPreviewTtsEvent),
}

impl TtsMessage {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            TtsMessage::PlayTts(_) => "play_tts",
            TtsMessage::RequestPreview(_) => "request_preview",
        }
    }
}

pub fn encode_message(message: &TtsMessage) -> Vec<u8> {
    bitcode::encode(message)
}

/// Decode one packet. An empty packet is rejected up front.
pub fn decode_message(bytes: &[u8]) -> Result<TtsMessage, TtsError> {
    if bytes.is_empty() {
        return Err(TtsError::Decode("empty packet".to_string()));
    }
    Ok(bitcode::decode(bytes)?)
}
