//! Common error infrastructure for tile-core.
//!
//! This module provides the shared severity classification and the trait every
//! error enum in the crate implements. Domain-specific errors (`DecodeError`,
//! `TileError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: decoding and aggregation each have their own error enum
//! - **Stable Codes**: every variant maps to an upper-snake identifier for logs
//! - **Severity Classification**: callers can tell bad static data apart from
//!   bad requests without matching on variants

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request may succeed later or with other arguments
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: an engine invariant was violated by the caller-supplied parts
/// - **Fatal**: corrupt static data; the tile cannot be constructed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative request.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown tile name, reservation on a city the tile lacks
    Validation,

    /// Internal error - inconsistent parts handed to the aggregate.
    ///
    /// Examples: a path pointing at a label, an arena slot that does not exist
    Internal,

    /// Fatal error - static data is corrupt, cannot continue.
    ///
    /// Examples: malformed tile code, back-reference past the cache
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

    /// Returns true if this error indicates corrupt data or a programming error.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tile-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
