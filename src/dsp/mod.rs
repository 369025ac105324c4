//! Low-level DSP primitives used by the tuba engine.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside the engine struct. They stay focused on the
//! signal-processing math; note lifecycles and timing live in `synth`.

/// Clock-driven attack/sustain/release envelopes.
pub mod envelope;
/// Four-pole ladder low-pass filter.
pub mod filter;
/// Seedable cutoff noise.
pub mod noise;
/// Sawtooth phase accumulator.
pub mod oscillator;

pub use envelope::{Envelope, EnvelopeCurve, EnvelopeStage, NoteTiming};
pub use filter::LadderFilter;
pub use noise::CutoffNoise;
pub use oscillator::SawOscillator;
