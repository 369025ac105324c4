//! Benchmarks for the four-pole ladder filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tuba_synth::dsp::LadderFilter;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f64 = 48_000.0;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Fixed cutoff, the cheapest case
        let mut filter = LadderFilter::new();
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("fixed", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), 1_000.0, 1.0, SAMPLE_RATE);
            })
        });

        // Cutoff changing every sample, as under the filter envelope
        let mut filter = LadderFilter::new();
        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for (i, sample) in input.iter().enumerate() {
                    let cutoff = 200.0 + i as f64 * 10.0;
                    acc += filter.process(*sample as f64, cutoff, 1.0, SAMPLE_RATE);
                }
                black_box(acc)
            })
        });

        // Maximum resonance
        let mut filter = LadderFilter::new();
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("resonant", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), 4_000.0, 2.0, SAMPLE_RATE);
            })
        });
    }

    group.finish();
}
