use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// The engine's virtual "device time".
///
/// Time is kept as a count of rendered frames, so it never drifts from
/// `frames * sample_duration` no matter how many blocks have been rendered.
/// Only the render loop advances it. The frame count is published once per
/// block for control-rate readers.
#[derive(Debug)]
pub struct DeviceClock {
    frames: u64,
    sample_duration: f64,
    published: Arc<AtomicU64>,
}

impl DeviceClock {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            frames: 0,
            sample_duration: 1.0 / sample_rate as f64,
            published: Arc::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.frames as f64 * self.sample_duration
    }

    #[inline]
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    /// Skip ahead without rendering, e.g. across a silent block.
    #[inline]
    pub fn advance(&mut self, frames: u64) {
        self.frames += frames;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sample_duration(&self) -> f64 {
        self.sample_duration
    }

    /// Make the current time visible to readers.
    #[inline]
    pub fn publish(&self) {
        self.published.store(self.frames, Ordering::Release);
    }

    pub fn reader(&self) -> ClockReader {
        ClockReader {
            frames: Arc::clone(&self.published),
            sample_duration: self.sample_duration,
        }
    }
}

/// Read-only view of a [`DeviceClock`], safe to hand to other threads.
///
/// Lags the render loop by at most one block.
#[derive(Debug, Clone)]
pub struct ClockReader {
    frames: Arc<AtomicU64>,
    sample_duration: f64,
}

impl ClockReader {
    pub fn now(&self) -> f64 {
        self.frames.load(Ordering::Acquire) as f64 * self.sample_duration
    }
}
