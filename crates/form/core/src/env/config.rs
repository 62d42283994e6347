//! Configuration oracle for exposing tunable rule values to the controller.

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Lowest strength or dexterity a voluntary transformation may leave.
    fn stat_floor(&self) -> i32;

    /// Head count a freshly entered hydra form starts with.
    fn hydra_starting_heads(&self) -> u8;

    /// Base seed for duration rolls.
    fn game_seed(&self) -> u64;
}
