// crates/enforce-core/tests/support/mocks.rs
// ============================================================================
// Module: Mock Participants
// Description: Shared subjects, participants, and errors for enforcement tests.
// ============================================================================
//! ## Overview
//! Mock subject and auxiliary types used by integration tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;
use std::ops::ControlFlow;

use enforce_core::BoxError;
use enforce_core::Diagnostic;
use enforce_core::Participant;
use enforce_core::Subject;

// ========================================================================
// Mock Subjects
// ========================================================================

/// Subject that is neither `Clone` nor `Copy`, so the engine cannot duplicate it.
#[derive(Debug, PartialEq, Eq)]
pub struct Tester {
    /// Identity used to check the returned value.
    pub id: u64,
}

impl Tester {
    /// Creates a tester with the given identity.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
        }
    }
}

impl Subject for Tester {
    fn truth(&self) -> Option<bool> {
        Some(true)
    }
}

/// Subject with no truthiness; only validators can pass it.
#[derive(Debug, Default)]
pub struct Opaque;

impl Subject for Opaque {}

// ========================================================================
// Mock Participants
// ========================================================================

/// Participant that validates, appends, and raises, recording each call.
#[derive(Debug, Default)]
pub struct Gauge {
    /// Minimum subject value accepted by validation.
    pub min: i32,
    /// Number of validation calls.
    pub validations: usize,
    /// Number of append calls.
    pub appends: usize,
    /// Messages received while raising.
    pub raised: Vec<String>,
}

impl Gauge {
    /// Creates a gauge accepting subjects at or above `min`.
    #[must_use]
    pub fn new(min: i32) -> Self {
        Self {
            min,
            ..Self::default()
        }
    }
}

impl Participant<i32> for Gauge {
    const VALIDATES: bool = true;
    const APPENDS: bool = true;
    const RAISES: bool = true;

    fn validate(&mut self, subject: &mut i32) -> bool {
        self.validations += 1;
        *subject >= self.min
    }

    fn append(&mut self, subject: &mut i32, diagnostic: &mut Diagnostic) {
        self.appends += 1;
        diagnostic.push(*subject).push(" is below ").push(self.min);
    }

    fn raise(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        self.raised.push(diagnostic.to_string());
        ControlFlow::Continue(())
    }
}

/// Participant that only appends, although its `validate` would reject.
///
/// Its `VALIDATES` constant stays false, so the engine must never call
/// `validate`.
#[derive(Debug, Default)]
pub struct Commentary {
    /// Number of validation calls (expected to stay zero).
    pub validations: usize,
}

impl Participant<i32> for Commentary {
    const APPENDS: bool = true;

    fn validate(&mut self, _subject: &mut i32) -> bool {
        self.validations += 1;
        false
    }

    fn append(&mut self, _subject: &mut i32, diagnostic: &mut Diagnostic) {
        diagnostic.push_str("commentary");
    }
}

// ========================================================================
// Mock Errors
// ========================================================================

/// Error returned by aborting raisers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denied(pub String);

impl fmt::Display for Denied {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "denied: {}", self.0)
    }
}

impl Error for Denied {}
