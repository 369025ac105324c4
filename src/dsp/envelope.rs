/*
Time-Segmented Envelopes
========================

Unlike a gate-driven ADSR, these envelopes are pure functions of the clock.
A note carries three absolute times and the envelope reads off its value for
any `now` without keeping state, so the same shape can be evaluated twice per
sample (volume and filter cutoff) and tested in isolation.

Vocabulary
----------

  start     Virtual time the note becomes audible.
  release   Virtual time sustain ends and the level starts to fall.
  stop      Virtual time the note is fully silent and can be replaced.
  attack    Envelope-specific rise duration, measured from `start`.
  fall      Envelope-specific release duration, measured back from `stop`.


The Shape
---------

  Level
    max ┐      ______________
        │     /              \
        │    /                \
    min └───/──────────────────\────→ Time
          start  +attack   release  stop

  Idle      now < start                  min
  Attack    start <= now < start+attack  rises min → max
  Sustain   ..          < release        max
  Release   release <= now < stop        falls max → min
  Finished  now >= stop                  min

Segments are checked in that order, so a note whose release comes before its
attack finishes stays in Attack until the attack time elapses.


Curves
------

The volume envelope uses a quartic curve: p^4 on the way up and
((stop - now) / fall)^4 on the way down. It sits near zero for most of the
ramp and arrives late, which keeps note edges soft without sounding slow.

The filter cutoff envelope is linear between `min` and `max`.

Progress is clamped to [0, 1], so a fall duration that does not match the
release window (the filter's release is configured independently of the
volume's) never pushes the value outside [min, max].
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,
    Attack,
    Sustain,
    Release,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeCurve {
    Quartic,
    Linear,
}

impl EnvelopeCurve {
    #[inline]
    fn shape(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            EnvelopeCurve::Quartic => {
                let p2 = p * p;
                p2 * p2
            }
            EnvelopeCurve::Linear => p,
        }
    }
}

/// The absolute times that bound a note's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteTiming {
    pub start: f64,
    pub release: f64,
    pub stop: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    attack: f64,
    fall: f64,
    min: f64,
    max: f64,
    curve: EnvelopeCurve,
}

impl Envelope {
    pub fn new(attack: f64, fall: f64, min: f64, max: f64, curve: EnvelopeCurve) -> Self {
        Self {
            attack,
            fall,
            min,
            max,
            curve,
        }
    }

    /// Amplitude envelope: quartic, 0 → 1 → 0.
    pub fn volume(attack: f64, release: f64) -> Self {
        Self::new(attack, release, 0.0, 1.0, EnvelopeCurve::Quartic)
    }

    /// Filter cutoff envelope: linear, `min` Hz → `max` Hz → `min` Hz.
    pub fn cutoff(attack: f64, release: f64, min: f64, max: f64) -> Self {
        Self::new(attack, release, min, max, EnvelopeCurve::Linear)
    }

    pub fn stage(&self, now: f64, timing: &NoteTiming) -> EnvelopeStage {
        if now < timing.start {
            EnvelopeStage::Idle
        } else if now < timing.start + self.attack {
            EnvelopeStage::Attack
        } else if now < timing.release {
            EnvelopeStage::Sustain
        } else if now < timing.stop {
            EnvelopeStage::Release
        } else {
            EnvelopeStage::Finished
        }
    }

    #[inline]
    pub fn value_at(&self, now: f64, timing: &NoteTiming) -> f64 {
        let level = match self.stage(now, timing) {
            EnvelopeStage::Idle | EnvelopeStage::Finished => 0.0,
            EnvelopeStage::Attack => self.curve.shape((now - timing.start) / self.attack),
            EnvelopeStage::Sustain => 1.0,
            EnvelopeStage::Release => self.curve.shape((timing.stop - now) / self.fall),
        };

        self.min + (self.max - self.min) * level
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: NoteTiming = NoteTiming {
        start: 1.0,
        release: 1.5,
        stop: 1.6,
    };

    #[test]
    fn volume_hits_boundaries() {
        let env = Envelope::volume(0.1, 0.1);

        assert_eq!(env.value_at(TIMING.start, &TIMING), 0.0);
        assert_eq!(env.value_at(TIMING.start + 0.1, &TIMING), 1.0);
        assert_eq!(env.value_at(TIMING.release - 1e-9, &TIMING), 1.0);
        assert!(env.value_at(TIMING.release + 0.01, &TIMING) < 1.0);
        assert_eq!(env.value_at(TIMING.stop, &TIMING), 0.0);
        assert_eq!(env.value_at(TIMING.stop + 1.0, &TIMING), 0.0);
        assert_eq!(env.value_at(0.0, &TIMING), 0.0);
    }

    #[test]
    fn volume_attack_is_quartic() {
        let env = Envelope::volume(0.1, 0.1);
        let half = env.value_at(TIMING.start + 0.05, &TIMING);
        assert!((half - 0.0625).abs() < 1e-9, "got {half}");
    }

    #[test]
    fn volume_release_is_quartic_from_stop() {
        let env = Envelope::volume(0.1, 0.1);
        let v = env.value_at(TIMING.stop - 0.05, &TIMING);
        assert!((v - 0.0625).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn cutoff_is_linear_within_range() {
        let env = Envelope::cutoff(0.1, 0.1, 200.0, 4_000.0);

        assert_eq!(env.value_at(TIMING.start, &TIMING), 200.0);
        let mid_attack = env.value_at(TIMING.start + 0.05, &TIMING);
        assert!((mid_attack - 2_100.0).abs() < 1e-6);
        assert_eq!(env.value_at(TIMING.start + 0.2, &TIMING), 4_000.0);
        let mid_release = env.value_at(TIMING.stop - 0.05, &TIMING);
        assert!((mid_release - 2_100.0).abs() < 1e-6);
        assert_eq!(env.value_at(TIMING.stop, &TIMING), 200.0);
    }

    #[test]
    fn slow_filter_release_never_overshoots_max() {
        // Release window is 0.1s but the filter falls over 0.05s
        let env = Envelope::cutoff(0.1, 0.05, 200.0, 4_000.0);
        let early_release = env.value_at(TIMING.release + 0.01, &TIMING);
        assert_eq!(early_release, 4_000.0);
    }

    #[test]
    fn stages_in_order() {
        let env = Envelope::volume(0.1, 0.1);
        assert_eq!(env.stage(0.5, &TIMING), EnvelopeStage::Idle);
        assert_eq!(env.stage(1.05, &TIMING), EnvelopeStage::Attack);
        assert_eq!(env.stage(1.2, &TIMING), EnvelopeStage::Sustain);
        assert_eq!(env.stage(1.55, &TIMING), EnvelopeStage::Release);
        assert_eq!(env.stage(1.6, &TIMING), EnvelopeStage::Finished);
    }

    #[test]
    fn attack_wins_over_early_release() {
        let env = Envelope::volume(0.1, 0.1);
        let squashed = NoteTiming {
            start: 1.0,
            release: 0.98,
            stop: 1.08,
        };
        assert_eq!(env.stage(1.05, &squashed), EnvelopeStage::Attack);
        assert_eq!(env.stage(1.1, &squashed), EnvelopeStage::Finished);
    }
}
