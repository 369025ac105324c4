//! Walking-bass line generator.
//!
//! A six-tick cycle (triplet eighths): ticks 0 and 3 always play, the rest
//! play with falling probability. Pitches are picked from a small table of
//! intervals above the key's root. Notes are scheduled `LATENCY` ahead of the
//! device clock so they reach the audio thread before they are due.

use log::warn;
use rand::Rng;
use tuba_synth::TubaHandle;

/// C1: the root when the key is C.
const ROOT_PITCH: i32 = 24;
const LATENCY: f64 = 0.1;
const TICKS_PER_CYCLE: u32 = 6;
const MIN_INTERVAL: f64 = 0.01;

pub struct Walker<R> {
    key: i32,
    interval: f64,
    tick: u32,
    next_tick_time: f64,
    rng: R,
}

impl<R: Rng> Walker<R> {
    pub fn new(key: i32, interval: f64, start_time: f64, rng: R) -> Self {
        Self {
            key,
            interval: interval.max(MIN_INTERVAL),
            tick: 0,
            next_tick_time: start_time,
            rng,
        }
    }

    /// Schedule every tick that falls within `LATENCY` of `now`.
    pub fn poll(&mut self, now: f64, handle: &mut TubaHandle) {
        while now + LATENCY > self.next_tick_time {
            if should_play(self.tick, &mut self.rng) {
                let pitch = self.key + ROOT_PITCH + interval_for(self.tick, &mut self.rng);
                if let Err(err) = handle.trigger_note(pitch, self.next_tick_time, self.interval) {
                    warn!("skipped tick {}: {err}", self.tick);
                }
            }

            self.next_tick_time += self.interval;
            self.tick = (self.tick + 1) % TICKS_PER_CYCLE;
        }
    }
}

fn should_play(tick: u32, rng: &mut impl Rng) -> bool {
    match tick {
        0 | 3 => true,
        2 => rng.random_bool(0.75),
        5 => rng.random_bool(0.5),
        _ => rng.random_bool(0.1),
    }
}

/// Semitones above the root for a tick.
fn interval_for(tick: u32, rng: &mut impl Rng) -> i32 {
    let coin = rng.random_bool(0.5);
    match tick {
        // Octave most of the time, then root, occasionally two octaves
        0 => {
            if coin {
                12
            } else if rng.random_bool(0.75) {
                0
            } else {
                24
            }
        }
        2 => 16,
        3 => {
            if coin {
                7
            } else {
                17
            }
        }
        4 => {
            if coin {
                9
            } else {
                16
            }
        }
        _ => {
            if coin {
                11
            } else {
                14
            }
        }
    }
}
