//! The monophonic tuba engine.
//!
//! One sawtooth, one volume envelope, one ladder filter swept by its own
//! envelope, and a two-slot note queue, all driven by a virtual clock that
//! advances exactly one sample period per rendered frame.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::{
    config::TubaConfig,
    dsp::{CutoffNoise, Envelope, LadderFilter, SawOscillator},
    error::TubaError,
    io::write_frame,
};

use super::{
    clock::{ClockReader, DeviceClock},
    message::{MessageReceiver, TubaMessage},
    note::Note,
    scheduler::{NoteSlots, Promotion, TriggerOutcome},
};

pub struct Tuba<R = Pcg32> {
    config: TubaConfig,
    sample_rate: f64,

    slots: NoteSlots,
    oscillator: SawOscillator,
    filter: LadderFilter,
    volume_envelope: Envelope,
    cutoff_envelope: Envelope,
    noise: CutoffNoise<R>,
    clock: DeviceClock,
    // Messages `drain` could not apply; readable from the control side
    rejected: Arc<AtomicU64>,
}

impl Tuba<Pcg32> {
    /// Build an engine, seeding the cutoff noise from `config.noise_seed` or,
    /// when unset, from the thread RNG.
    pub fn new(config: TubaConfig) -> Result<Self, TubaError> {
        let rng = match config.noise_seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Tuba<R> {
    pub fn with_rng(config: TubaConfig, rng: R) -> Result<Self, TubaError> {
        let config = config.validated()?;

        info!(
            "tuba: {} Hz, {} ch, cutoff {}..{} Hz, resonance {}",
            config.sample_rate,
            config.channels,
            config.filter_cutoff_min,
            config.filter_cutoff_max,
            config.filter_resonance
        );

        Ok(Self {
            sample_rate: config.sample_rate as f64,
            slots: NoteSlots::new(),
            oscillator: SawOscillator::new(),
            filter: LadderFilter::new(),
            volume_envelope: Envelope::volume(config.volume_attack, config.volume_release),
            cutoff_envelope: Envelope::cutoff(
                config.filter_attack,
                config.filter_release,
                config.filter_cutoff_min,
                config.filter_cutoff_max,
            ),
            noise: CutoffNoise::new(rng, config.filter_noise_amount),
            clock: DeviceClock::new(config.sample_rate),
            rejected: Arc::new(AtomicU64::new(0)),
            config,
        })
    }

    /// Schedule a note.
    ///
    /// A start time in the past plays now. If a note is already sounding, the
    /// new one waits in the next slot and the sounding note's release is
    /// squashed as needed so it ends exactly when the new one starts.
    pub fn trigger_note(
        &mut self,
        pitch: i32,
        start_time: f64,
        duration: f64,
    ) -> Result<TriggerOutcome, TubaError> {
        let now = self.clock.now();
        let start_time = if start_time < now { now } else { start_time };

        let release = self.config.volume_release;
        let note = Note::new(pitch, start_time, duration, release, self.sample_rate)?;

        let outcome = self.slots.trigger(note, release);
        if outcome == TriggerOutcome::Started {
            self.filter.reset();
            self.oscillator.reset();
        }

        Ok(outcome)
    }

    /// Drop both notes immediately, with no release tail.
    ///
    /// The filter keeps its state; it is cleared when the next note starts.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.oscillator.reset();
    }

    pub fn apply(&mut self, message: TubaMessage) -> Result<(), TubaError> {
        match message {
            TubaMessage::TriggerNote {
                pitch,
                start_time,
                duration,
            } => self.trigger_note(pitch, start_time, duration).map(|_| ()),
            TubaMessage::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Apply every pending message in arrival order.
    ///
    /// Runs on the audio thread, so a message that fails to apply is counted
    /// rather than logged. See [`Tuba::rejected_messages`].
    pub fn drain(&mut self, rx: &mut impl MessageReceiver) {
        while let Some(message) = rx.pop() {
            if self.apply(message).is_err() {
                self.rejected.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Total messages `drain` has dropped because they failed to apply.
    pub fn rejected_messages(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub(crate) fn rejected_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.rejected)
    }

    /// Render one mono sample and advance the clock.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let now = self.clock.now();
        let sample = self.render_note(now);
        self.clock.tick();
        sample
    }

    #[inline]
    fn render_note(&mut self, now: f64) -> f64 {
        let note = loop {
            let Some(note) = self.slots.current().copied() else {
                return 0.0;
            };
            // Truncated to end before it began: never audible, and must not
            // hold back the note queued behind it
            if now >= note.stop_time && now <= note.start_time {
                if self.slots.promote() == Promotion::Promoted {
                    self.filter.reset();
                }
                continue;
            }
            break note;
        };
        if now <= note.start_time {
            return 0.0;
        }

        let timing = note.timing();

        let voiced = self.oscillator.sample() * self.volume_envelope.value_at(now, &timing);
        let cutoff = self.cutoff_envelope.value_at(now, &timing) + self.noise.next_offset();
        let sample = self.filter.process(
            voiced,
            cutoff,
            self.config.filter_resonance,
            self.sample_rate,
        );

        if now >= note.stop_time && self.slots.promote() == Promotion::Promoted {
            self.filter.reset();
        }

        // After a promotion the saw continues at the new note's pitch
        let increment = self
            .slots
            .current()
            .map_or(note.phase_increment, |next| next.phase_increment);
        self.oscillator.advance(increment);

        sample
    }

    /// Fill an interleaved buffer using the configured channel count.
    pub fn render(&mut self, buffer: &mut [f32]) {
        self.render_interleaved(buffer, self.config.channels);
    }

    /// Fill an interleaved buffer, writing the same sample to every channel
    /// of a frame. Samples past the last whole frame are left untouched.
    pub fn render_interleaved(&mut self, buffer: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }

        let frames = buffer.len() / channels;
        let buffer = &mut buffer[..frames * channels];

        if self.slots.is_empty() {
            buffer.fill(0.0);
            self.clock.advance(frames as u64);
        } else {
            let mode = self.config.output_mode;
            for frame in buffer.chunks_exact_mut(channels) {
                let sample = self.next_sample() as f32;
                write_frame(frame, sample, mode);
            }
        }

        self.clock.publish();
    }

    /// Current virtual time in seconds.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn clock_reader(&self) -> ClockReader {
        self.clock.reader()
    }

    pub fn current_note(&self) -> Option<&Note> {
        self.slots.current()
    }

    pub fn next_note(&self) -> Option<&Note> {
        self.slots.next()
    }

    pub fn is_silent(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn oscillator_phase(&self) -> f64 {
        self.oscillator.phase()
    }

    pub fn filter(&self) -> &LadderFilter {
        &self.filter
    }

    pub fn config(&self) -> &TubaConfig {
        &self.config
    }
}

impl<R: Rng + SeedableRng> Tuba<R> {
    pub fn reseed_noise(&mut self, seed: u64) {
        self.noise.reseed(seed);
    }
}
