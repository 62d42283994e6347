//! Duration rolls.

use crate::env::{RngOracle, compute_seed};
use crate::form::{DurationScaling, DurationSpec};

/// Maps a transformation power onto a bounded number of ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationModel;

impl DurationModel {
    /// Rolls the duration of `spec` at `power`.
    ///
    /// The two draws a tier may need are seeded from `game_seed` and the
    /// transition `nonce`, so the same transition always rolls the same value.
    /// The result never exceeds `spec.max`.
    pub fn roll<R>(spec: &DurationSpec, power: i32, rng: &R, game_seed: u64, nonce: u64) -> u32
    where
        R: RngOracle + ?Sized,
    {
        let first = || rng.random2(compute_seed(game_seed, nonce, 0), power);
        let second = |n: i32| rng.random2(compute_seed(game_seed, nonce, 1), n);

        let bonus = match spec.scaling {
            DurationScaling::None => 0,
            DurationScaling::Tenth => first() / 10,
            DurationScaling::Single => first(),
            DurationScaling::OneAndAHalf => first().saturating_add(second(power / 2)),
            DurationScaling::Double => first().saturating_add(second(power)),
        };

        Self::clamp(spec, bonus)
    }

    /// Smallest and largest value [`roll`](Self::roll) can return at `power`.
    pub fn bounds(spec: &DurationSpec, power: i32) -> (u32, u32) {
        let top = |n: i32| (n - 1).max(0);
        let max_bonus = match spec.scaling {
            DurationScaling::None => 0,
            DurationScaling::Tenth => top(power) / 10,
            DurationScaling::Single => top(power),
            DurationScaling::OneAndAHalf => top(power).saturating_add(top(power / 2)),
            DurationScaling::Double => top(power).saturating_mul(2),
        };
        (Self::clamp(spec, 0), Self::clamp(spec, max_bonus))
    }

    fn clamp(spec: &DurationSpec, bonus: i32) -> u32 {
        let bonus = u32::try_from(bonus).unwrap_or(0);
        spec.base.saturating_add(bonus).min(spec.max)
    }
}
