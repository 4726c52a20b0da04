// crates/enforce-core/src/lib.rs
// ============================================================================
// Module: Enforce Core Root
// Description: Public API surface for the contract enforcement engine.
// Purpose: Wire together shapes, roles, the engine, and the `enforce!` macro.
// Dependencies: crate::{arguments, auxiliary, diagnostic, engine, error, policy,
//              shape, subject}
// ============================================================================

//! ## Overview
//! `enforce-core` checks a runtime contract over a subject value. Auxiliary
//! arguments are classified by callable shape into validators, appenders,
//! and raisers; the engine folds the validators, builds a diagnostic from the
//! appenders on failure, hands it to the raisers, and then returns its own
//! backstop failure unless a raiser aborted first. On success the subject is
//! returned unchanged, so a call can wrap an expression in place:
//!
//! ```
//! use enforce_core::Diagnostic;
//! use enforce_core::enforce;
//!
//! let four = enforce(4_i32, |v: &i32| *v == 4);
//! assert_eq!(four.ok(), Some(4));
//!
//! let failed = enforce(false, |v: &bool, buf: &mut Diagnostic| {
//!     buf.push("Value is ").push(v);
//! });
//! assert_eq!(failed.err().map(|err| err.to_string()), Some("Value is false".to_string()));
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod arguments;
pub mod auxiliary;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod policy;
pub mod shape;
pub mod subject;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arguments::Auxiliaries;
pub use auxiliary::Auxiliary;
pub use auxiliary::Participant;
pub use diagnostic::Diagnostic;
pub use engine::Enforcer;
pub use engine::build_message;
pub use engine::can_validate;
pub use engine::enforce;
pub use engine::validate;
pub use error::BoxError;
pub use error::EnforceError;
pub use error::EnforceResult;
pub use policy::Backstop;
pub use policy::DEFAULT_FAILURE_MESSAGE;
pub use policy::EnforcePolicy;
pub use subject::Subject;

// ============================================================================
// SECTION: Enforce Macro
// ============================================================================

/// Checks a condition and reports its source text on failure.
///
/// `enforce!(cond)` evaluates `cond` once and passes it to [`enforce()`]
/// with an appender producing `": Expression '<cond>' failed"`. Extra
/// arguments are a format string and its values; the formatted text is
/// appended before the expression text.
///
/// ```
/// let limit = 3;
/// let err = enforce_core::enforce!(limit > 5, "limit is {limit}").err();
/// assert_eq!(
///     err.map(|err| err.to_string()),
///     Some("limit is 3: Expression 'limit > 5' failed".to_string())
/// );
/// ```
#[macro_export]
macro_rules! enforce {
    ($cond:expr $(,)?) => {
        $crate::enforce(
            $cond,
            |diagnostic: &mut $crate::Diagnostic| {
                diagnostic
                    .push_str(::core::concat!(": Expression '", ::core::stringify!($cond), "' failed"));
            },
        )
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::enforce(
            $cond,
            (
                |diagnostic: &mut $crate::Diagnostic| {
                    diagnostic.push(::core::format_args!($($arg)+));
                },
                |diagnostic: &mut $crate::Diagnostic| {
                    diagnostic.push_str(::core::concat!(
                        ": Expression '",
                        ::core::stringify!($cond),
                        "' failed"
                    ));
                },
            ),
        )
    };
}
