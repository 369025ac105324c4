//! Cross-thread access to a [`Tuba`].
//!
//! The audio thread owns a [`SharedTuba`]; any one control thread owns the
//! matching [`TubaHandle`]. Triggers travel through a bounded lock-free ring
//! and are applied at the start of the next rendered block, so the render
//! loop never waits on the control side and never sees a half-applied
//! trigger.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, warn};
use rand::Rng;
use rand_pcg::Pcg32;
use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::{
    config::TubaConfig,
    error::{InvalidNoteError, TubaError},
};

use super::{clock::ClockReader, message::TubaMessage, note::checked_phase_increment, tuba::Tuba};

const TRIGGER_QUEUE_SIZE: usize = 64;

/// Audio-thread side: drains pending triggers, then renders.
pub struct SharedTuba<R = Pcg32> {
    tuba: Tuba<R>,
    rx: Consumer<TubaMessage>,
}

/// Control-thread side: validates and queues triggers.
pub struct TubaHandle {
    tx: Producer<TubaMessage>,
    clock: ClockReader,
    rejected: Arc<AtomicU64>,
    sample_rate: f64,
}

impl Tuba<Pcg32> {
    pub fn shared(config: TubaConfig) -> Result<(SharedTuba, TubaHandle), TubaError> {
        Ok(Tuba::new(config)?.into_shared(TRIGGER_QUEUE_SIZE))
    }
}

impl<R: Rng> Tuba<R> {
    /// Split into an audio-side engine and a control-side handle with room for
    /// `capacity` pending messages.
    pub fn into_shared(self, capacity: usize) -> (SharedTuba<R>, TubaHandle) {
        let (tx, rx) = RingBuffer::<TubaMessage>::new(capacity);

        let handle = TubaHandle {
            tx,
            clock: self.clock_reader(),
            rejected: self.rejected_counter(),
            sample_rate: self.config().sample_rate as f64,
        };

        (SharedTuba { tuba: self, rx }, handle)
    }
}

impl<R: Rng> SharedTuba<R> {
    pub fn render(&mut self, buffer: &mut [f32]) {
        self.tuba.drain(&mut self.rx);
        self.tuba.render(buffer);
    }

    pub fn render_interleaved(&mut self, buffer: &mut [f32], channels: usize) {
        self.tuba.drain(&mut self.rx);
        self.tuba.render_interleaved(buffer, channels);
    }

    pub fn tuba(&self) -> &Tuba<R> {
        &self.tuba
    }
}

impl TubaHandle {
    /// Queue a note. Fails fast on a pitch the engine cannot play or when the
    /// queue is full; never blocks.
    pub fn trigger_note(
        &mut self,
        pitch: i32,
        start_time: f64,
        duration: f64,
    ) -> Result<(), TubaError> {
        checked_phase_increment(pitch, self.sample_rate)?;
        if !start_time.is_finite() || !duration.is_finite() {
            return Err(InvalidNoteError::Timing {
                start_time,
                duration,
            }
            .into());
        }

        let start_time = start_time.max(self.now());
        debug!("trigger pitch {pitch} at {start_time:.4}s for {duration:.3}s");

        self.send(TubaMessage::TriggerNote {
            pitch,
            start_time,
            duration,
        })
    }

    pub fn reset(&mut self) -> Result<(), TubaError> {
        debug!("reset");
        self.send(TubaMessage::Reset)
    }

    /// Device time as of the last rendered block.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Messages the audio thread received but could not apply.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Messages queued but not yet picked up by the audio thread.
    pub fn pending(&self) -> usize {
        self.tx.buffer().capacity() - self.tx.slots()
    }

    fn send(&mut self, message: TubaMessage) -> Result<(), TubaError> {
        match self.tx.push(message) {
            Ok(()) => Ok(()),
            Err(PushError::Full(dropped)) => {
                warn!("trigger queue full, dropping {dropped:?}");
                Err(TubaError::QueueFull)
            }
        }
    }
}
