// crates/enforce-core/src/policy.rs
// ============================================================================
// Module: Enforcement Policy
// Description: Runtime knobs for message finalization and the backstop.
// Purpose: Let deployments pick the placeholder text and failure signal.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! The policy never changes how validators, appenders, or raisers are
//! composed. It only decides what an empty diagnostic becomes and how the
//! backstop failure is delivered once every raiser has returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder used when no appender contributed any text.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Expression has failed";

// ============================================================================
// SECTION: Backstop
// ============================================================================

/// How the engine delivers its own failure signal.
///
/// # Invariants
/// - Variants are stable for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backstop {
    /// Return [`crate::EnforceError::Failed`] to the caller.
    #[default]
    Error,
    /// Panic with the diagnostic text.
    Panic,
}

impl Backstop {
    /// Returns a stable label for the backstop.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Panic => "panic",
        }
    }
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Enforcement policy applied by an [`crate::Enforcer`].
///
/// # Invariants
/// - `default_message` should be non-empty; `enforce-config` validates this
///   for file-based policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnforcePolicy {
    /// Text substituted for an empty diagnostic.
    pub default_message: String,
    /// Delivery of the backstop failure.
    pub backstop: Backstop,
}

impl EnforcePolicy {
    /// Creates a policy with the given placeholder text and backstop.
    #[must_use]
    pub fn new(default_message: impl Into<String>, backstop: Backstop) -> Self {
        Self {
            default_message: default_message.into(),
            backstop,
        }
    }
}

impl Default for EnforcePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_MESSAGE, Backstop::Error)
    }
}
