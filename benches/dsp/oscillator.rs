//! Benchmarks for the sawtooth oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tuba_synth::dsp::{oscillator::phase_increment, SawOscillator};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let period = 1.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // A1, the low end of the tuba's range
        let mut saw = SawOscillator::new();
        let increment = phase_increment(55.0, period);
        group.bench_with_input(BenchmarkId::new("saw_55hz", size), &size, |b, _| {
            b.iter(|| saw.render(black_box(&mut buffer), black_box(increment)))
        });

        // Wraps far more often
        let mut saw = SawOscillator::new();
        let increment = phase_increment(4_000.0, period);
        group.bench_with_input(BenchmarkId::new("saw_4khz", size), &size, |b, _| {
            b.iter(|| saw.render(black_box(&mut buffer), black_box(increment)))
        });
    }

    group.finish();
}
