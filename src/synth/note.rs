use crate::{
    dsp::{envelope::NoteTiming, oscillator::phase_increment},
    error::InvalidNoteError,
    io::converter::pitch_to_frequency,
};

/// A scheduled pitch with its lifecycle resolved to absolute clock times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub pitch: i32,
    /// Audible onset.
    pub start_time: f64,
    /// End of sustain, start of release.
    pub release_time: f64,
    /// Fully silent; eligible for replacement.
    pub stop_time: f64,
    /// Precomputed `frequency / sample_rate`.
    pub phase_increment: f64,
}

impl Note {
    /// Resolve a trigger into a note.
    ///
    /// `start_time` is taken as given (clamping against the clock is the
    /// scheduler's job). A negative duration collapses to zero. The pitch must
    /// map to a finite frequency strictly between 0 and the sample rate.
    pub fn new(
        pitch: i32,
        start_time: f64,
        duration: f64,
        volume_release: f64,
        sample_rate: f64,
    ) -> Result<Self, InvalidNoteError> {
        if !start_time.is_finite() || !duration.is_finite() {
            return Err(InvalidNoteError::Timing {
                start_time,
                duration,
            });
        }

        let increment = checked_phase_increment(pitch, sample_rate)?;
        let release_time = start_time + duration.max(0.0);

        Ok(Self {
            pitch,
            start_time,
            release_time,
            stop_time: release_time + volume_release,
            phase_increment: increment,
        })
    }

    pub fn timing(&self) -> NoteTiming {
        NoteTiming {
            start: self.start_time,
            release: self.release_time,
            stop: self.stop_time,
        }
    }

    pub fn frequency(&self, sample_rate: f64) -> f64 {
        self.phase_increment * sample_rate
    }
}

/// Phase increment for `pitch`, rejecting anything the saw cannot play.
pub fn checked_phase_increment(pitch: i32, sample_rate: f64) -> Result<f64, InvalidNoteError> {
    let frequency = pitch_to_frequency(pitch);

    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(InvalidNoteError::Frequency { pitch, frequency });
    }
    if frequency >= sample_rate {
        return Err(InvalidNoteError::AboveSampleRate {
            pitch,
            frequency,
            sample_rate,
        });
    }

    Ok(phase_increment(frequency, 1.0 / sample_rate))
}
