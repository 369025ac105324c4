use rand::{Rng, SeedableRng};

/// Uniform random offset added to the filter cutoff every sample.
///
/// The generator is injected so renders can be reproduced exactly; nothing
/// here touches a global RNG.
pub struct CutoffNoise<R> {
    rng: R,
    amount: f64,
}

impl<R: Rng> CutoffNoise<R> {
    pub fn new(rng: R, amount: f64) -> Self {
        Self {
            rng,
            amount: amount.max(0.0),
        }
    }

    /// Next offset in `[0, amount)`.
    #[inline]
    pub fn next_offset(&mut self) -> f64 {
        if self.amount == 0.0 {
            return 0.0;
        }
        self.rng.random::<f64>() * self.amount
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl<R: Rng + SeedableRng> CutoffNoise<R> {
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
