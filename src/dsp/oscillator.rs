/*
Sawtooth Phase Accumulator
==========================

The tuba voice starts from a plain sawtooth: bright, every harmonic present,
and cheap to compute. The ladder filter downstream removes most of it anyway.

  phase       Position in the current cycle, always in [0, 1).
  increment   How far `phase` moves per sample: frequency / sample_rate.
              Computed once per note so the per-sample path never divides.

  output
    1.0 ┤    ╱│    ╱│    ╱│
        │   ╱ │   ╱ │   ╱ │
    0.0 ┤  ╱  │  ╱  │  ╱  │
        │ ╱   │ ╱   │ ╱   │
   -1.0 ┤╱    │╱    │╱    │
        └─────┴─────┴─────┴──→ samples

The wrap fires at `phase >= 1`, not only past it, so a phase landing exactly
on 1 becomes 0 and `phase` never leaves [0, 1).

Reading the sample and advancing the phase are separate steps: the engine may
swap notes between the two, and the next advance must use the new note's
increment.
*/

/// Per-sample phase step for a frequency, given the sample period in seconds.
#[inline]
pub fn phase_increment(frequency: f64, sample_duration: f64) -> f64 {
    frequency * sample_duration
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SawOscillator {
    phase: f64,
}

impl SawOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current output in [-1, 1). Does not advance.
    #[inline]
    pub fn sample(&self) -> f64 {
        self.phase * 2.0 - 1.0
    }

    /// Move forward one sample. `increment` is expected to be below 1.
    #[inline]
    pub fn advance(&mut self, increment: f64) {
        self.phase += increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Fill a buffer with raw saw output at a fixed increment.
    pub fn render(&mut self, buffer: &mut [f32], increment: f64) {
        for sample in buffer.iter_mut() {
            *sample = self.sample() as f32;
            self.advance(increment);
        }
    }
}
