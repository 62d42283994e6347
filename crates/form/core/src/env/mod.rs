//! Collaborators the rules consume.
//!
//! Read-only oracles (baseline, terrain, config, rng) are bundled into an
//! [`Env`] so the controller can reach everything it needs without coupling
//! to concrete implementations. Mutable collaborators (equipment, messages)
//! are borrowed by the controller directly.
mod baseline;
mod config;
mod equipment;
mod error;
mod memory;
mod messages;
mod rng;
mod terrain;

pub use baseline::{BaselineOracle, BaselineProfile, BaselineProfileBuilder, DraconianColour};
pub use config::ConfigOracle;
pub use equipment::{ArmourKind, EquipmentError, EquipmentStore, ItemDescriptor, ItemKind};
pub use error::OracleError;
pub use memory::{MemoryEquipment, MessageLog};
pub use messages::{MessageChannel, MessageSink};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use terrain::{TerrainFeature, TerrainOracle};

pub(crate) use baseline::pluralise;

/// Aggregates read-only oracles required by the controller.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, B, T, C, R>
where
    B: BaselineOracle + ?Sized,
    T: TerrainOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    baseline: Option<&'a B>,
    terrain: Option<&'a T>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type FormEnv<'a> = Env<
    'a,
    dyn BaselineOracle + 'a,
    dyn TerrainOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, B, T, C, R> Env<'a, B, T, C, R>
where
    B: BaselineOracle + ?Sized,
    T: TerrainOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        baseline: Option<&'a B>,
        terrain: Option<&'a T>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            baseline,
            terrain,
            config,
            rng,
        }
    }

    pub fn with_all(baseline: &'a B, terrain: &'a T, config: &'a C, rng: &'a R) -> Self {
        Self::new(Some(baseline), Some(terrain), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            baseline: None,
            terrain: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the BaselineOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::BaselineNotAvailable` if no baseline oracle was provided.
    pub fn baseline(&self) -> Result<&'a B, OracleError> {
        self.baseline.ok_or(OracleError::BaselineNotAvailable)
    }

    /// Returns the TerrainOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TerrainNotAvailable` if no terrain oracle was provided.
    pub fn terrain(&self) -> Result<&'a T, OracleError> {
        self.terrain.ok_or(OracleError::TerrainNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, B, T, C, R> Env<'a, B, T, C, R>
where
    B: BaselineOracle + 'a,
    T: TerrainOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `FormEnv`.
    pub fn into_form_env(self) -> FormEnv<'a> {
        let baseline: Option<&'a dyn BaselineOracle> = self.baseline.map(|b| b as _);
        let terrain: Option<&'a dyn TerrainOracle> = self.terrain.map(|t| t as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|c| c as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|r| r as _);
        Env::new(baseline, terrain, config, rng)
    }
}
