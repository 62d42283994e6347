//! Oracle access errors.

use crate::error::{ErrorSeverity, RuleError};

/// Errors that occur when a required oracle is missing from the environment.
///
/// The controller cannot validate a transition without them, so every
/// variant is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("BaselineOracle not available")]
    BaselineNotAvailable,

    #[error("TerrainOracle not available")]
    TerrainNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl RuleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            BaselineNotAvailable => "ORACLE_BASELINE_NOT_AVAILABLE",
            TerrainNotAvailable => "ORACLE_TERRAIN_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
