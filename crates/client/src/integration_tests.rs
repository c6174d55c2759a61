//! Integration tests for the TTS client using the `TestClient` harness.
//!
//! Each test spins up a headless Bevy App with `TtsClientPlugin` and drives
//! it through network events, settings changes and ticks.
