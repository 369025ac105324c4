//! Benchmarks for rendering the tuba engine.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tuba_synth::{OutputMode, Tuba, TubaConfig};

use crate::BLOCK_SIZES;

const CHANNELS: usize = 2;

fn tuba() -> Tuba {
    let config = TubaConfig::new(48_000, CHANNELS)
        .noise_seed(7)
        .output_mode(OutputMode::Overwrite);
    Tuba::new(config).expect("valid bench config")
}

pub fn bench_tuba(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/tuba");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * CHANNELS];

        // === SILENCE ===
        // No notes queued: the block fast path
        let mut idle = tuba();
        group.bench_with_input(BenchmarkId::new("silent", size), &size, |b, _| {
            b.iter(|| idle.render(black_box(&mut buffer)))
        });

        // === SUSTAINED NOTE ===
        // One long note held well past the benchmark's runtime
        let mut held = tuba();
        held.trigger_note(33, 0.0, 1.0e6).expect("valid note");
        group.bench_with_input(BenchmarkId::new("sustained", size), &size, |b, _| {
            b.iter(|| held.render(black_box(&mut buffer)))
        });

        // === LEGATO LINE ===
        // Keep a note queued behind the current one so promotions and
        // truncations happen inside the measured blocks
        let mut legato = tuba();
        let pitches = [33, 36, 40, 43, 45, 40];
        let mut step = 0;
        group.bench_with_input(BenchmarkId::new("legato", size), &size, |b, _| {
            b.iter(|| {
                if legato.next_note().is_none() {
                    let start = legato.now() + 0.005;
                    let pitch = pitches[step % pitches.len()];
                    step += 1;
                    legato
                        .trigger_note(pitch, start, 0.02)
                        .expect("valid note");
                }
                legato.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
