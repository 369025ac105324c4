//! Benchmarks for the time-driven note envelopes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tuba_synth::dsp::{Envelope, NoteTiming};

use crate::BLOCK_SIZES;

const PERIOD: f64 = 1.0 / 48_000.0;

fn sweep(envelope: &Envelope, timing: &NoteTiming, from: f64, buffer: &mut [f32]) {
    for (i, out) in buffer.iter_mut().enumerate() {
        *out = envelope.value_at(from + i as f64 * PERIOD, timing) as f32;
    }
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let timing = NoteTiming {
        start: 0.0,
        release: 0.25,
        stop: 0.35,
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let volume = Envelope::volume(0.1, 0.1);
        group.bench_with_input(BenchmarkId::new("volume_attack", size), &size, |b, _| {
            b.iter(|| sweep(black_box(&volume), &timing, 0.01, &mut buffer))
        });
        group.bench_with_input(BenchmarkId::new("volume_release", size), &size, |b, _| {
            b.iter(|| sweep(black_box(&volume), &timing, 0.3, &mut buffer))
        });

        let cutoff = Envelope::cutoff(0.1, 0.1, 200.0, 4_000.0);
        group.bench_with_input(BenchmarkId::new("cutoff", size), &size, |b, _| {
            b.iter(|| sweep(black_box(&cutoff), &timing, 0.05, &mut buffer))
        });
    }

    group.finish();
}
