use thiserror::Error;

/// A note that cannot be turned into a usable phase increment.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidNoteError {
    #[error("pitch {pitch} maps to {frequency} Hz, which is not a playable frequency")]
    Frequency { pitch: i32, frequency: f64 },
    #[error("pitch {pitch} maps to {frequency} Hz, at or above the {sample_rate} Hz sample rate")]
    AboveSampleRate {
        pitch: i32,
        frequency: f64,
        sample_rate: f64,
    },
    #[error("note timing must be finite (start {start_time}, duration {duration})")]
    Timing { start_time: f64, duration: f64 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TubaError {
    #[error(transparent)]
    InvalidNote(#[from] InvalidNoteError),
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),
    #[error("channel count must be at least 1")]
    InvalidChannels,
    #[error("trigger queue is full, message dropped")]
    QueueFull,
}
