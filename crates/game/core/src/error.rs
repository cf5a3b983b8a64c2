//! Common error infrastructure for pursuit-core.
//!
//! Domain-specific errors (`LayoutError`, `ConfigError`, `TurnError`) live next
//! to the code that produces them. This module holds the classification shared
//! by all of them.
//!
//! Normal game outcomes are never errors: an unreachable path target, an agent
//! with no legal move, and a capture are all reported through return values.

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **External**: a collaborator outside the core failed (e.g. a renderer)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, such as a malformed initial layout.
    Validation,

    /// A boundary collaborator reported a failure.
    External,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::External => "external",
        }
    }
}

/// Common trait for all pursuit-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable, upper-case `error_code` per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
