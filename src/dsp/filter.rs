/*
Four-Pole Ladder Low-Pass
=========================

A cheap approximation of the Moog transistor ladder: four one-pole low-pass
stages in series, with the last stage fed back (inverted) into the input.

  input ──(−)──► [pole 1] ─► [pole 2] ─► [pole 3] ─► [pole 4] ──┬──► output
           ▲                                                     │
           └──────────────────── × fb ◄──────────────────────────┘

Each pole is a first-order section with a little feedforward from its
previous input:

  out[n] = x[n] + 0.3 * x[n-1] + (1 - f) * out[n-1]

Parameters
----------

  f          Normalised cutoff: (cutoff / sample_rate) * 1.16. Stays well
             below 1 for cutoffs under Nyquist.
  fb         Feedback amount: resonance * (1 - 0.15 * f^2). The correction
             term keeps resonance roughly constant as the cutoff rises.
  gain       0.35013 * f^4 applied to the input. Four poles each contribute
             roughly a factor of f, so this normalises the passband.

Resonance around 1 gives the tuba its nasal honk. Toward 4 the loop gain
reaches unity and the filter self-oscillates; configuration caps it at 2.

State
-----

Eight numbers: the previous input and output of each pole. They carry the
filter's memory across samples and across render blocks. The engine zeroes
them whenever a fresh note begins, never mid-note.
*/

const CUTOFF_SCALE: f64 = 1.16;
const FEEDBACK_CORRECTION: f64 = 0.15;
const INPUT_GAIN: f64 = 0.35013;
const FEEDFORWARD: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LadderFilter {
    inputs: [f64; 4],
    outputs: [f64; 4],
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn process(&mut self, sample: f64, cutoff_hz: f64, resonance: f64, sample_rate: f64) -> f64 {
        let f = (cutoff_hz / sample_rate) * CUTOFF_SCALE;
        let fb = resonance * (1.0 - FEEDBACK_CORRECTION * f * f);
        let damping = 1.0 - f;

        let mut x = sample - self.outputs[3] * fb;
        let f2 = f * f;
        x *= INPUT_GAIN * f2 * f2;

        for (input, output) in self.inputs.iter_mut().zip(self.outputs.iter_mut()) {
            *output = x + FEEDFORWARD * *input + damping * *output;
            *input = x;
            x = *output;
        }

        self.outputs[3]
    }

    /// Filter a block in place with fixed parameters.
    pub fn render(&mut self, buffer: &mut [f32], cutoff_hz: f64, resonance: f64, sample_rate: f64) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample as f64, cutoff_hz, resonance, sample_rate) as f32;
        }
    }

    pub fn reset(&mut self) {
        self.inputs = [0.0; 4];
        self.outputs = [0.0; 4];
    }

    /// `(inputs, outputs)` of the four poles.
    pub fn state(&self) -> ([f64; 4], [f64; 4]) {
        (self.inputs, self.outputs)
    }

    /// True when every pole's memory is zero.
    pub fn is_settled(&self) -> bool {
        self.inputs.iter().chain(self.outputs.iter()).all(|v| *v == 0.0)
    }
}
