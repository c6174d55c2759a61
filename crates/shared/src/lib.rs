//! Types shared by every peer of the TTS feature: the network events and
//! their wire codec, network entity ids, player settings and errors.

pub mod error;
pub mod net_entity;
pub mod settings_file;
pub mod tts_codec;
pub mod tts_event;
pub mod tts_settings;

pub use error::TtsError;
pub use net_entity::{NetEntity, NetEntityIndex};
pub use tts_codec::{decode_message, encode_message, TtsMessage};
pub use tts_event::{PlayTtsEvent, RequestPreviewTtsEvent, TtsType};
pub use tts_settings::{SetTtsCVarEvent, TtsCVar, TtsSettings, MAX_TTS_GAIN};
