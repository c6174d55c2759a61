//! TTS dispatch throughput.
//!
//! Measures one frame of the playback pipeline for bursts of N lines, both
//! as typed events and as raw packets that go through the codec first.
//!
//! Run with: `cargo bench -p client --bench dispatch_bench`

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use client::{EphemeralAudioStore, IncomingTtsPacket, TtsClientPlugin, TtsPlayback};
use shared::{encode_message, NetEntity, NetEntityIndex, PlayTtsEvent, TtsMessage, TtsType};

/// Typical size of a short synthesized Ogg line.
const PAYLOAD_BYTES: usize = 24 * 1024;

fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(TtsClientPlugin);
    let world = app.world_mut();
    let speaker = world.spawn(Transform::default()).id();
    world
        .resource_mut::<NetEntityIndex>()
        .insert(NetEntity(1), speaker);
    app.update();
    app
}

fn line(i: usize) -> PlayTtsEvent {
    let ev = PlayTtsEvent::new(vec![0x4F; PAYLOAD_BYTES]);
    match i % 3 {
        0 => ev.from_source(NetEntity(1)),
        1 => ev.with_type(TtsType::Radio),
        _ => ev.from_source(NetEntity(1)).whispered(true),
    }
}

/// Remove finished players so entity count stays flat between iterations.
fn clear_players(app: &mut App) {
    let world = app.world_mut();
    let players: Vec<Entity> = world
        .query_filtered::<Entity, With<TtsPlayback>>()
        .iter(world)
        .collect();
    for entity in players {
        world.entity_mut(entity).despawn_recursive();
    }
}

fn bench_dispatch_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_events");
    for burst in [1usize, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            let mut app = build_app();
            b.iter(|| {
                for i in 0..burst {
                    app.world_mut().send_event(line(i));
                }
                app.update();
                clear_players(&mut app);
                black_box(app.world().resource::<EphemeralAudioStore>().len());
            });
        });
    }
    group.finish();
}

fn bench_dispatch_packets(c: &mut Criterion) {
    let packets: Vec<Vec<u8>> = (0..16)
        .map(|i| encode_message(&TtsMessage::PlayTts(line(i))))
        .collect();

    c.bench_function("dispatch_packets_16", |b| {
        let mut app = build_app();
        b.iter(|| {
            for packet in &packets {
                app.world_mut()
                    .send_event(IncomingTtsPacket(packet.clone()));
            }
            app.update();
            clear_players(&mut app);
        });
    });
}

criterion_group!(benches, bench_dispatch_events, bench_dispatch_packets);
criterion_main!(benches);
