//! Engine configuration.
//!
//! Everything here is fixed once a [`Tuba`](crate::synth::Tuba) is built.
//! Out-of-range values are clamped by [`TubaConfig::validated`] so the render
//! loop never has to branch on parameter sanity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TubaError;

const ENVELOPE_TIME_RANGE: (f64, f64) = (0.01, 0.5);
const NOISE_RANGE: (f64, f64) = (0.0, 1000.0);
const CUTOFF_MIN_RANGE: (f64, f64) = (200.0, 10_000.0);
const CUTOFF_MAX_RANGE: (f64, f64) = (200.0, 20_000.0);
const RESONANCE_RANGE: (f64, f64) = (0.0, 2.0);

/// How rendered samples land in the host buffer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Multiply into whatever the buffer already holds, so the synth can be
    /// layered over another source feeding the same buffer.
    #[default]
    Multiply,
    /// Replace the buffer contents.
    Overwrite,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct TubaConfig {
    pub sample_rate: u32,
    pub channels: usize,

    // Volume envelope (seconds)
    pub volume_attack: f64,
    pub volume_release: f64,

    // Filter envelope (seconds, Hz)
    pub filter_attack: f64,
    pub filter_release: f64,
    pub filter_cutoff_min: f64,
    pub filter_cutoff_max: f64,
    pub filter_resonance: f64,
    /// Width of the uniform random offset added to the cutoff every sample.
    pub filter_noise_amount: f64,

    pub output_mode: OutputMode,
    /// Seed for the cutoff noise. `None` seeds from the thread RNG.
    pub noise_seed: Option<u64>,
}

impl Default for TubaConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            volume_attack: 0.1,
            volume_release: 0.1,
            filter_attack: 0.1,
            filter_release: 0.1,
            filter_cutoff_min: 200.0,
            filter_cutoff_max: 4_000.0,
            filter_resonance: 1.0,
            filter_noise_amount: 1_000.0,
            output_mode: OutputMode::Multiply,
            noise_seed: None,
        }
    }
}

impl TubaConfig {
    pub fn new(sample_rate: u32, channels: usize) -> Self {
        Self {
            sample_rate,
            channels,
            ..Self::default()
        }
    }

    pub fn volume_envelope(mut self, attack: f64, release: f64) -> Self {
        self.volume_attack = attack;
        self.volume_release = release;
        self
    }

    pub fn filter_envelope(mut self, attack: f64, release: f64) -> Self {
        self.filter_attack = attack;
        self.filter_release = release;
        self
    }

    pub fn cutoff_range(mut self, min: f64, max: f64) -> Self {
        self.filter_cutoff_min = min;
        self.filter_cutoff_max = max;
        self
    }

    pub fn resonance(mut self, resonance: f64) -> Self {
        self.filter_resonance = resonance;
        self
    }

    pub fn noise_amount(mut self, amount: f64) -> Self {
        self.filter_noise_amount = amount;
        self
    }

    pub fn noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Sample period in seconds.
    pub fn sample_duration(&self) -> f64 {
        1.0 / self.sample_rate as f64
    }

    /// Reject unusable audio formats and clamp every tone parameter into its
    /// supported range.
    pub fn validated(mut self) -> Result<Self, TubaError> {
        if self.sample_rate == 0 {
            return Err(TubaError::InvalidSampleRate(self.sample_rate));
        }
        if self.channels == 0 {
            return Err(TubaError::InvalidChannels);
        }

        self.volume_attack = clamp(self.volume_attack, ENVELOPE_TIME_RANGE);
        self.volume_release = clamp(self.volume_release, ENVELOPE_TIME_RANGE);
        self.filter_attack = clamp(self.filter_attack, ENVELOPE_TIME_RANGE);
        self.filter_release = clamp(self.filter_release, ENVELOPE_TIME_RANGE);
        self.filter_noise_amount = clamp(self.filter_noise_amount, NOISE_RANGE);
        self.filter_resonance = clamp(self.filter_resonance, RESONANCE_RANGE);

        // Keep the cutoff under Nyquist even at the top of the noise band;
        // the ladder goes unstable past it.
        let nyquist = self.sample_rate as f64 * 0.5;
        self.filter_cutoff_min = clamp(self.filter_cutoff_min, CUTOFF_MIN_RANGE).min(nyquist);
        self.filter_cutoff_max = clamp(self.filter_cutoff_max, CUTOFF_MAX_RANGE)
            .max(self.filter_cutoff_min)
            .min(nyquist);
        self.filter_noise_amount = self
            .filter_noise_amount
            .min(nyquist - self.filter_cutoff_max);

        Ok(self)
    }
}

/// NaN falls back to the lower bound.
fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}
