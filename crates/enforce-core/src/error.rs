// crates/enforce-core/src/error.rs
// ============================================================================
// Module: Enforcement Error Definitions
// Description: Failure signals produced when a contract does not hold.
// Purpose: Separate the engine's backstop failure from raiser-issued failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A failed contract always surfaces as an [`EnforceError`]. The engine's own
//! backstop is [`EnforceError::Failed`]; a raiser that aborts dispatch
//! surfaces as [`EnforceError::Raised`], carrying the raiser's error as its
//! source so callers can recover the original signal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error;

use thiserror::Error;

// ============================================================================
// SECTION: Type Aliases
// ============================================================================

/// Boxed error returned by an aborting raiser.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result of an enforcement call.
pub type EnforceResult<T> = Result<T, EnforceError>;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure signal for a contract whose outcome was false.
///
/// # Invariants
/// - `diagnostic` is the finalized message and is never empty.
#[derive(Debug, Error)]
pub enum EnforceError {
    /// Backstop failure raised after every raiser returned control.
    #[error("{diagnostic}")]
    Failed {
        /// Finalized diagnostic text.
        diagnostic: String,
    },
    /// A raiser transferred control away by returning an error.
    #[error("{source}")]
    Raised {
        /// Finalized diagnostic text the raiser received.
        diagnostic: String,
        /// Error produced by the raiser.
        source: BoxError,
    },
}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl EnforceError {
    /// Returns the finalized diagnostic text.
    #[must_use]
    pub fn diagnostic(&self) -> &str {
        match self {
            Self::Failed {
                diagnostic,
            }
            | Self::Raised {
                diagnostic, ..
            } => diagnostic,
        }
    }

    /// Returns true for the engine's own backstop failure.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the raiser's error when it has type `E`.
    #[must_use]
    pub fn raised_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Raised {
                source, ..
            } => source.downcast_ref::<E>(),
            Self::Failed {
                ..
            } => None,
        }
    }

    /// Consumes the error, returning the raiser's error if there is one.
    #[must_use]
    pub fn into_raised(self) -> Option<BoxError> {
        match self {
            Self::Raised {
                source, ..
            } => Some(source),
            Self::Failed {
                ..
            } => None,
        }
    }
}
