//! Loopback demo: `VOICECAST_PLAY=<file.ogg>` pushes the file through the
//! wire codec as if the server had sent it, once, at startup.
//!
//! `VOICECAST_PLAY_TYPE` picks the channel (`speech`, `radio`,
//! `announcement`; default `speech`) and `VOICECAST_WHISPER=1` marks the
//! line as whispered.

use std::path::PathBuf;

use bevy::prelude::*;

use client::IncomingTtsPacket;
use shared::{encode_message, PlayTtsEvent, TtsMessage, TtsType};

const PLAY_ENV: &str = "VOICECAST_PLAY";
const PLAY_TYPE_ENV: &str = "VOICECAST_PLAY_TYPE";
const WHISPER_ENV: &str = "VOICECAST_WHISPER";

pub fn parse_tts_type(name: &str) -> Option<TtsType> {
    match name.trim().to_ascii_lowercase().as_str() {
        "speech" => Some(TtsType::Speech),
        "radio" => Some(TtsType::Radio),
        "announcement" => Some(TtsType::Announcement),
        _ => None,
    }
}

#[derive(Resource, Debug, Clone)]
struct DemoLine {
    file: PathBuf,
    tts_type: TtsType,
    is_whisper: bool,
}

pub struct DemoPlaybackPlugin;

impl Plugin for DemoPlaybackPlugin {
    fn build(&self, app: &mut App) {
        let Some(file) = std::env::var_os(PLAY_ENV) else {
            return;
        };

        let tts_type = match std::env::var(PLAY_TYPE_ENV) {
            Ok(name) => parse_tts_type(&name).unwrap_or_else(|| {
                warn!("TTS: unknown {PLAY_TYPE_ENV} '{name}', playing as speech");
                TtsType::Speech
            }),
            Err(_) => TtsType::Speech,
        };
        let is_whisper = std::env::var(WHISPER_ENV).is_ok_and(|v| v == "1");

        app.insert_resource(DemoLine {
            file: PathBuf::from(file),
            tts_type,
            is_whisper,
        })
        .add_systems(PostStartup, send_demo_packet);
    }
}

fn send_demo_packet(line: Res<DemoLine>, mut packets: EventWriter<IncomingTtsPacket>) {
    let data = match std::fs::read(&line.file) {
        Ok(data) => data,
        Err(e) => {
            warn!("TTS: cannot read demo line {}: {e}", line.file.display());
            return;
        }
    };
    info!(
        "TTS: demo line {} ({} bytes, {:?})",
        line.file.display(),
        data.len(),
        line.tts_type
    );
    let ev = PlayTtsEvent::new(data)
        .whispered(line.is_whisper)
        .with_type(line.tts_type);
    packets.send(IncomingTtsPacket(encode_message(&TtsMessage::PlayTts(ev))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tts_type() {
        assert_eq!(parse_tts_type("speech"), Some(TtsType::Speech));
        assert_eq!(parse_tts_type(" Radio "), Some(TtsType::Radio));
        assert_eq!(parse_tts_type("ANNOUNCEMENT"), Some(TtsType::Announcement));
        assert_eq!(parse_tts_type("yell"), None);
    }
}
