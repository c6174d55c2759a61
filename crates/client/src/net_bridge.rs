//! Bridge between raw transport packets and TTS events.
//!
//! The embedding game's network layer pushes every TTS packet it receives as
//! an [`IncomingTtsPacket`] and drains [`OutgoingTtsPacket`]s into its send
//! queue. Everything in between is typed Bevy events.

use bevy::prelude::*;

use shared::{decode_message, encode_message, PlayTtsEvent, RequestPreviewTtsEvent, TtsMessage};

/// Raw packet received from the server.
#[derive(Event, Debug, Clone)]
pub struct IncomingTtsPacket(pub Vec<u8>);

/// Raw packet to be sent to the server.
#[derive(Event, Debug, Clone)]
pub struct OutgoingTtsPacket(pub Vec<u8>);

/// Ask the server for a sample line in the given voice.
pub fn request_preview_tts(
    requests: &mut EventWriter<RequestPreviewTtsEvent>,
    voice_id: impl Into<String>,
    species: impl Into<String>,
) {
    requests.send(RequestPreviewTtsEvent::new(voice_id, species));
}

/// Decodes inbound packets into [`PlayTtsEvent`]s. Undecodable packets and
/// client-bound preview requests are logged and dropped.
pub fn decode_tts_packets(
    mut packets: EventReader<IncomingTtsPacket>,
    mut plays: EventWriter<PlayTtsEvent>,
) {
    for packet in packets.read() {
        match decode_message(&packet.0) {
            Ok(TtsMessage::PlayTts(ev)) => {
                plays.send(ev);
            }
            Ok(other) => warn!("TTS: ignoring inbound {} message", other.kind()),
            Err(e) => warn!("TTS: dropping {} byte packet: {e}", packet.0.len()),
        }
    }
}

/// Encodes outbound preview requests.
pub fn encode_preview_requests(
    mut requests: EventReader<RequestPreviewTtsEvent>,
    mut packets: EventWriter<OutgoingTtsPacket>,
) {
    for req in requests.read() {
        debug!(
            "TTS: requesting preview voice={} species={}",
            req.voice_id, req.species
        );
        let bytes = encode_message(&TtsMessage::RequestPreview(req.clone()));
        packets.send(OutgoingTtsPacket(bytes));
    }
}
