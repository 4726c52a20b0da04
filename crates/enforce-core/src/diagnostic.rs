// crates/enforce-core/src/diagnostic.rs
// ============================================================================
// Module: Diagnostic Buffer
// Description: Accumulating text buffer handed to appenders on failure.
// Purpose: Collect message fragments in argument order, then finalize once.
// Dependencies: std::fmt
// ============================================================================

//! ## Overview
//! A [`Diagnostic`] starts empty, receives fragments from appenders without
//! any separator inserted by the engine, and is finalized exactly once. An
//! empty buffer finalizes to the policy's default text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Diagnostic
// ============================================================================

/// Failure message under construction.
///
/// # Invariants
/// - Fragments appear in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    /// Accumulated text.
    text: String,
}

impl Diagnostic {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends the display form of `piece`.
    ///
    /// Returns `self` so fragments can be chained like a stream:
    /// `buf.push("Value is ").push(value);`
    pub fn push(&mut self, piece: impl fmt::Display) -> &mut Self {
        self.text.push_str(&piece.to_string());
        self
    }

    /// Appends a string slice verbatim.
    pub fn push_str(&mut self, piece: &str) -> &mut Self {
        self.text.push_str(piece);
        self
    }

    /// Returns true when nothing has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the byte length of the accumulated text.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the buffer, substituting `default` when it is empty.
    #[must_use]
    pub fn finalize(self, default: &str) -> String {
        if self.text.is_empty() { default.to_string() } else { self.text }
    }
}

impl fmt::Write for Diagnostic {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
