//! Whole-engine benchmarks.
//!
//! These drive a [`Tuba`](tuba_synth::Tuba) the way the audio callback does,
//! one interleaved block at a time.

mod tuba;

pub use tuba::bench_tuba;
