//! Error types for the transition pipeline.

use crate::env::{EquipmentError, OracleError, TerrainFeature};
use crate::error::{ErrorContext, ErrorSeverity, RuleError};
use crate::rules::Stat;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Reasons a transition was refused or could not be applied.
///
/// Every variant except `Oracle` carries the form and nonce at the time of
/// failure. Whatever the variant, the form state and the meld status of every
/// slot are unchanged when it is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformError {
    /// The requested form is already active.
    #[error("already in the requested form")]
    AlreadyActive {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// "No form" is reached through untransform, never through transform.
    #[error("cannot transform into no form")]
    InvalidTarget {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// The terrain underfoot would harm the character in the new form.
    #[error("{feature} is dangerous in the requested form")]
    DangerousFeature {
        feature: TerrainFeature,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// The new form would lower a stat below the configured floor.
    #[error("transforming would leave {stat} too low")]
    StatUnsafe {
        stat: Stat,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    #[error("no form is active")]
    NotTransformed {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// Refreshing cannot lengthen a form already at its maximum duration.
    #[error("form duration is already at its maximum")]
    DurationAtMaximum {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    #[error("hydra form is not active")]
    HydraFormInactive {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// The active body cannot swim, so swimming cannot begin.
    #[error("cannot swim in the current form")]
    SwimmingUnavailable {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// The equipment store failed part-way; completed steps were rolled back.
    #[error("equipment update failed: {error}")]
    Equipment {
        error: EquipmentError,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// Auxiliary state no longer matches the active form.
    #[error("form state is inconsistent after the transition")]
    InconsistentState {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl TransformError {
    pub fn already_active(context: ErrorContext) -> Self {
        Self::AlreadyActive {
            context: context.with_message("requested form is the active form"),
        }
    }

    pub fn invalid_target(context: ErrorContext) -> Self {
        Self::InvalidTarget {
            context: context.with_message("use untransform to return to the natural form"),
        }
    }

    pub fn dangerous_feature(feature: TerrainFeature, context: ErrorContext) -> Self {
        Self::DangerousFeature {
            feature,
            context: context.with_message("terrain check failed"),
        }
    }

    pub fn stat_unsafe(stat: Stat, context: ErrorContext) -> Self {
        Self::StatUnsafe {
            stat,
            context: context.with_message("stat safety check failed"),
        }
    }

    pub fn not_transformed(context: ErrorContext) -> Self {
        Self::NotTransformed { context }
    }

    pub fn duration_at_maximum(context: ErrorContext) -> Self {
        Self::DurationAtMaximum { context }
    }

    pub fn hydra_form_inactive(context: ErrorContext) -> Self {
        Self::HydraFormInactive { context }
    }

    pub fn swimming_unavailable(context: ErrorContext) -> Self {
        Self::SwimmingUnavailable { context }
    }

    pub fn equipment(error: EquipmentError, context: ErrorContext) -> Self {
        Self::Equipment {
            error,
            context: context.with_message("meld batch rolled back"),
        }
    }

    pub fn inconsistent_state(context: ErrorContext) -> Self {
        Self::InconsistentState { context }
    }
}

impl RuleError for TransformError {
    fn severity(&self) -> ErrorSeverity {
        use TransformError::*;
        match self {
            AlreadyActive { .. } | InvalidTarget { .. } | NotTransformed { .. } => {
                ErrorSeverity::Validation
            }
            HydraFormInactive { .. } => ErrorSeverity::Validation,
            DangerousFeature { .. } | StatUnsafe { .. } => ErrorSeverity::Recoverable,
            DurationAtMaximum { .. } | SwimmingUnavailable { .. } => ErrorSeverity::Recoverable,
            Equipment { error, .. } => error.severity(),
            InconsistentState { .. } => ErrorSeverity::Internal,
            Oracle(error) => error.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        use TransformError::*;
        match self {
            AlreadyActive { context }
            | InvalidTarget { context }
            | DangerousFeature { context, .. }
            | StatUnsafe { context, .. }
            | NotTransformed { context }
            | DurationAtMaximum { context }
            | HydraFormInactive { context }
            | SwimmingUnavailable { context }
            | Equipment { context, .. }
            | InconsistentState { context } => Some(context),
            Oracle(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        use TransformError::*;
        match self {
            AlreadyActive { .. } => "TRANSFORM_ALREADY_ACTIVE",
            InvalidTarget { .. } => "TRANSFORM_INVALID_TARGET",
            DangerousFeature { .. } => "TRANSFORM_DANGEROUS_FEATURE",
            StatUnsafe { .. } => "TRANSFORM_STAT_UNSAFE",
            NotTransformed { .. } => "TRANSFORM_NOT_TRANSFORMED",
            DurationAtMaximum { .. } => "TRANSFORM_DURATION_AT_MAXIMUM",
            HydraFormInactive { .. } => "TRANSFORM_HYDRA_INACTIVE",
            SwimmingUnavailable { .. } => "TRANSFORM_SWIMMING_UNAVAILABLE",
            Equipment { error, .. } => error.error_code(),
            InconsistentState { .. } => "TRANSFORM_INCONSISTENT_STATE",
            Oracle(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{EquipSlot, FormId};

    #[test]
    fn phase_error_display_names_the_phase() {
        let error = TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            TransformError::already_active(ErrorContext::new(FormId::Bat, 3)),
        );
        assert_eq!(
            error.to_string(),
            "pre_validate failed: already in the requested form"
        );
    }

    #[test]
    fn equipment_errors_keep_their_classification() {
        let refused = TransformError::equipment(
            EquipmentError::Refused(EquipSlot::BodyArmour),
            ErrorContext::default(),
        );
        assert_eq!(refused.severity(), ErrorSeverity::Recoverable);
        assert_eq!(refused.error_code(), "EQUIPMENT_REFUSED");

        let oracle = TransformError::from(OracleError::TerrainNotAvailable);
        assert_eq!(oracle.severity(), ErrorSeverity::Fatal);
        assert!(oracle.context().is_none());
    }

    #[test]
    fn context_records_the_request() {
        let context = ErrorContext::new(FormId::None, 9).with_requested(FormId::Tree);
        let error = TransformError::stat_unsafe(Stat::Dexterity, context);
        let recorded = error.context().unwrap();
        assert_eq!(recorded.requested, Some(FormId::Tree));
        assert_eq!(recorded.nonce, 9);
        assert_eq!(recorded.message, Some("stat safety check failed"));
    }
}
