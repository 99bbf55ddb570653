//! RNG oracle for deterministic random number generation.
//!
//! Board generation draws every random number (table choice, tier and goal
//! sampling, the placement shuffle) from one seeded generator, so a seed
//! fully reproduces a board.

/// Stateful random source consumed by goal tables and the board generator.
///
/// Implementations must be deterministic: the same seed yields the same
/// sequence.
pub trait RngOracle {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`; returns 0 when `bound` is 0.
    ///
    /// Uses rejection sampling so small bounds are not biased.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % bound;
            }
        }
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// state-dependent rotation.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Seeds the generator the way the reference PCG32 does: step, add seed, step.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state);
        rng.state = rng.state.wrapping_add(seed);
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}
