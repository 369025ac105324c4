/// Semitone number of concert A (440 Hz).
pub const A440_PITCH: i32 = 69;

/// Twelve-tone equal temperament, A440 at semitone 69.
///
/// Pitch is unbounded: very low or high values underflow to 0 Hz or overflow
/// to infinity, and callers are expected to reject those.
#[inline]
pub fn pitch_to_frequency(pitch: i32) -> f64 {
    440.0 * 2.0_f64.powf((pitch as f64 - A440_PITCH as f64) / 12.0)
}
