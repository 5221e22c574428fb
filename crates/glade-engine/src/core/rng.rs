//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Uniform random source consumed by scene generation and the star field.
pub trait RandomSource {
    /// Uniform sample in [0, 1).
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in [lo, hi).
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        let v = lo + (hi - lo) * self.next_f32();
        // Rounding can land exactly on `hi`; keep the interval half-open.
        if v < hi {
            v
        } else {
            lo
        }
    }

    /// Uniform sample in the open interval (-half, half).
    fn centered(&mut self, half: f32) -> f32 {
        loop {
            let v = self.range(-half, half);
            if v > -half {
                return v;
            }
        }
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.next_f32() < 0.5
    }
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}
