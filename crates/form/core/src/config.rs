use crate::env::ConfigOracle;

/// Form rule configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Lowest effective strength or dexterity a voluntary transformation may
    /// leave the character with.
    pub stat_floor: i32,

    /// Head count a freshly entered hydra form starts with.
    pub hydra_starting_heads: u8,

    /// Base seed for duration rolls.
    pub game_seed: u64,
}

impl FormConfig {
    // ===== compile-time constants =====
    /// Upper bound on hydra heads.
    pub const MAX_HYDRA_HEADS: u8 = 20;
    /// Lower bound on hydra heads while the hydra form is active.
    pub const MIN_HYDRA_HEADS: u8 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAT_FLOOR: i32 = 1;
    pub const DEFAULT_HYDRA_STARTING_HEADS: u8 = 1;
    pub const DEFAULT_GAME_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            stat_floor: Self::DEFAULT_STAT_FLOOR,
            hydra_starting_heads: Self::DEFAULT_HYDRA_STARTING_HEADS,
            game_seed: Self::DEFAULT_GAME_SEED,
        }
    }

    pub fn with_game_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            ..Self::new()
        }
    }

    /// Clamps values loaded from data files into their legal ranges.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.hydra_starting_heads = clamp_hydra_heads(i32::from(self.hydra_starting_heads));
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigOracle for FormConfig {
    fn stat_floor(&self) -> i32 {
        self.stat_floor
    }

    fn hydra_starting_heads(&self) -> u8 {
        clamp_hydra_heads(i32::from(self.hydra_starting_heads))
    }

    fn game_seed(&self) -> u64 {
        self.game_seed
    }
}

/// Clamps a requested head count to `[MIN_HYDRA_HEADS, MAX_HYDRA_HEADS]`.
pub fn clamp_hydra_heads(heads: i32) -> u8 {
    heads.clamp(
        i32::from(FormConfig::MIN_HYDRA_HEADS),
        i32::from(FormConfig::MAX_HYDRA_HEADS),
    ) as u8
}
