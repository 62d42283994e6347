//! RNG oracle for deterministic duration rolls.
//!
//! Rolls are derived from a seed rather than from hidden generator state, so
//! a saved game replays every transformation with the same durations.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform draw from `[0, n)`; `n <= 0` yields 0.
    fn random2(&self, seed: u64, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        (self.next_u32(seed) % n as u32) as i32
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start
/// * `nonce` - Transition counter of the character's form state
/// * `context` - Distinguishes independent rolls within one transition
///
/// Duration rolls use contexts `0` and `1` for their two draws.
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
