//! Network events exchanged between the TTS server and clients.
//!
//! Both events travel as flat structures with no version field, so the field
//! order below is part of the wire contract. Adding, removing or reordering
//! fields breaks every peer that has not been rebuilt.

use bevy::prelude::*;

use crate::net_entity::NetEntity;

/// Which channel a synthesized line belongs to. Selects the volume setting
/// and whether the audio is positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bitcode::Encode, bitcode::Decode)]
pub enum TtsType {
    /// Spoken in the world, heard around the speaker.
    #[default]
    Speech,
    /// Radio chatter, heard everywhere at the radio volume.
    Radio,
    /// Station-wide announcement, heard everywhere.
    Announcement,
}

/// Server → client: play this synthesized audio.
///
/// `data` is an encoded audio file (Ogg/Vorbis). Each event is consumed
/// exactly once by the playback dispatcher.
#[derive(Event, Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct PlayTtsEvent {
    pub data: Vec<u8>,
    /// Entity that speaks. `None` means the line is not anchored in the world.
    pub source_uid: Option<NetEntity>,
    pub is_whisper: bool,
    pub tts_type: TtsType,
}

impl PlayTtsEvent {
    /// A global speech line with no source entity.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            source_uid: None,
            is_whisper: false,
            tts_type: TtsType::Speech,
        }
    }

    pub fn from_source(mut self, source: NetEntity) -> Self {
        self.source_uid = Some(source);
        self
    }

    pub fn whispered(mut self, is_whisper: bool) -> Self {
        self.is_whisper = is_whisper;
        self
    }

    pub fn with_type(mut self, tts_type: TtsType) -> Self {
        self.tts_type = tts_type;
        self
    }
}

/// Client → server: ask for a sample line spoken with a voice/species pair.
#[derive(Event, Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct RequestPreviewTtsEvent {
    pub voice_id: String,
    pub species: String,
}

impl RequestPreviewTtsEvent {
    pub fn new(voice_id: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            species: species.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_sender_defaults() {
        let ev = PlayTtsEvent::new(vec![1, 2, 3]);
        assert_eq!(ev.data, vec![1, 2, 3]);
        assert_eq!(ev.source_uid, None);
        assert!(!ev.is_whisper);
        assert_eq!(ev.tts_type, TtsType::Speech);
    }

    #[test]
    fn test_builders() {
        let ev = PlayTtsEvent::new(vec![])
            .from_source(NetEntity(4))
            .whispered(true)
            .with_type(TtsType::Radio);
        assert_eq!(ev.source_uid, Some(NetEntity(4)));
        assert!(ev.is_whisper);
        assert_eq!(ev.tts_type, TtsType::Radio);
    }

    #[test]
    fn test_preview_request_new() {
        let req = RequestPreviewTtsEvent::new("eugene", "Human");
        assert_eq!(req.voice_id, "eugene");
        assert_eq!(req.species, "Human");
    }
}
