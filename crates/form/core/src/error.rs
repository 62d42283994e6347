//! Common error infrastructure for form-core.
//!
//! Domain-specific errors (e.g. `TransformError`, `EquipmentError`) are
//! defined next to the operations they describe; this module provides the
//! severity classification and context they share.
//!
//! # Failure taxonomy
//!
//! - **Fatal**: programming errors such as an unknown form identifier
//! - **Recoverable**: environment or safety rejections; nothing was changed
//!   and the caller may try something else
//! - **Validation**: requests that can never succeed as issued, such as
//!   re-entering the active form
//! - **Internal**: collaborator inconsistencies that were rolled back

use crate::form::FormId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or choose another action.
    ///
    /// Examples: dangerous terrain underfoot, a transform that would zero a stat
    Recoverable,

    /// Validation error - invalid request, should not retry without changes.
    ///
    /// Examples: re-entering the active form, setting heads outside hydra form
    Validation,

    /// Internal error - unexpected collaborator state.
    ///
    /// Examples: equipment store refusing to unmeld a slot it melded
    Internal,

    /// Fatal error - corrupted enumeration, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Form that was active when the error was raised.
    pub current: FormId,

    /// Form the caller asked for, if the error came from a transition.
    pub requested: Option<FormId>,

    /// Transition counter at the time of error.
    ///
    /// Correlates the error with the rolls and log lines of the same
    /// transition.
    pub nonce: u64,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(current: FormId, nonce: u64) -> Self {
        Self {
            current,
            requested: None,
            nonce,
            message: None,
        }
    }

    /// Attaches the requested form (builder pattern).
    #[must_use]
    pub const fn with_requested(mut self, requested: FormId) -> Self {
        self.requested = Some(requested);
        self
    }

    /// Attaches a static message (builder pattern).
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(FormId::None, 0)
    }
}

/// Common trait for all form-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include `ErrorContext` in variants that need debugging info
/// - Classify severity based on recoverability, not impact
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
