// crates/enforce-core/src/engine.rs
// ============================================================================
// Module: Enforcement Engine
// Description: Validation fold, message builder, and failure dispatch.
// Purpose: Orchestrate one contract check and return the subject on success.
// Dependencies: crate::{arguments, diagnostic, error, policy, subject}, tracing
// ============================================================================

//! ## Overview
//! A call runs the validation fold once. When it holds, the subject is moved
//! back to the caller untouched. When it fails, the diagnostic is built from
//! every appender, every raiser sees the finalized text, and the backstop
//! fires unless a raiser aborted dispatch first.
//!
//! Arguments that are both validators and appenders are invoked again while
//! building the message. There is no caching: the same instance runs twice,
//! and any mutation it made to the subject during validation is already in
//! place when it appends.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::ControlFlow;

use tracing::debug;
use tracing::trace;

use crate::arguments::Auxiliaries;
use crate::diagnostic::Diagnostic;
use crate::error::EnforceError;
use crate::error::EnforceResult;
use crate::policy::Backstop;
use crate::policy::EnforcePolicy;
use crate::subject::Subject;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Tracing target for engine events.
const LOG_TARGET: &str = "enforce";

// ============================================================================
// SECTION: Capability Queries
// ============================================================================

/// Returns true when the subject or any auxiliary is a validator.
///
/// The answer is a compile-time constant of the argument types; the values
/// are only taken to drive type inference.
#[must_use]
pub const fn can_validate<S, SM, A, AM>(_subject: &S, _auxiliaries: &A) -> bool
where
    S: Subject<SM>,
    A: Auxiliaries<S, AM>,
{
    <S as Subject<SM>>::VALIDATES || <A as Auxiliaries<S, AM>>::VALIDATES
}

// ============================================================================
// SECTION: Validation Fold
// ============================================================================

/// Computes the outcome of a contract.
///
/// With a validator present anywhere, the subject's own standalone check runs
/// first and a false result stops the fold before any argument runs; the
/// argument validators are then ANDed left to right with short-circuiting.
/// Without any validator the subject's truthiness decides, and a subject with
/// no truthiness fails.
pub fn validate<S, SM, A, AM>(subject: &mut S, auxiliaries: &mut A) -> bool
where
    S: Subject<SM>,
    A: Auxiliaries<S, AM>,
{
    if <S as Subject<SM>>::VALIDATES || <A as Auxiliaries<S, AM>>::VALIDATES {
        if <S as Subject<SM>>::VALIDATES && !<S as Subject<SM>>::check(subject) {
            return false;
        }
        return <A as Auxiliaries<S, AM>>::validate_all(auxiliaries, subject);
    }
    <S as Subject<SM>>::truth(subject).unwrap_or(false)
}

// ============================================================================
// SECTION: Message Builder
// ============================================================================

/// Builds the finalized diagnostic for a failed contract.
///
/// The subject appends first when it is appender-shaped, then each appender
/// argument in declaration order. An empty result becomes `default_message`.
#[must_use]
pub fn build_message<S, SM, A, AM>(
    subject: &mut S,
    auxiliaries: &mut A,
    default_message: &str,
) -> String
where
    S: Subject<SM>,
    A: Auxiliaries<S, AM>,
{
    let mut diagnostic = Diagnostic::new();
    if <S as Subject<SM>>::APPENDS {
        <S as Subject<SM>>::append(subject, &mut diagnostic);
    }
    <A as Auxiliaries<S, AM>>::append_all(auxiliaries, subject, &mut diagnostic);
    diagnostic.finalize(default_message)
}

// ============================================================================
// SECTION: Enforcer
// ============================================================================

/// Contract checker bound to an [`EnforcePolicy`].
///
/// # Invariants
/// - The policy is fixed after construction; calls share no state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enforcer {
    /// Policy applied to every call.
    policy: EnforcePolicy,
}

impl Enforcer {
    /// Creates an enforcer with the given policy.
    #[must_use]
    pub const fn new(policy: EnforcePolicy) -> Self {
        Self {
            policy,
        }
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> &EnforcePolicy {
        &self.policy
    }

    /// Checks a contract over `subject`, returning the subject when it holds.
    ///
    /// # Errors
    ///
    /// Returns [`EnforceError::Raised`] when a raiser aborts dispatch, and
    /// [`EnforceError::Failed`] when every raiser returned control and the
    /// backstop is [`Backstop::Error`].
    ///
    /// # Panics
    ///
    /// Panics with the diagnostic text when the contract fails, no raiser
    /// aborts, and the backstop is [`Backstop::Panic`]. A panicking raiser
    /// also unwinds through this call.
    pub fn enforce<S, SM, A, AM>(&self, mut subject: S, mut auxiliaries: A) -> EnforceResult<S>
    where
        S: Subject<SM>,
        A: Auxiliaries<S, AM>,
    {
        if validate::<S, SM, A, AM>(&mut subject, &mut auxiliaries) {
            trace!(target: LOG_TARGET, "contract holds");
            return Ok(subject);
        }
        let diagnostic = build_message::<S, SM, A, AM>(
            &mut subject,
            &mut auxiliaries,
            &self.policy.default_message,
        );
        debug!(
            target: LOG_TARGET,
            backstop = self.policy.backstop.as_str(),
            diagnostic = %diagnostic,
            "contract failed"
        );
        Err(self.dispatch::<S, A, AM>(&mut auxiliaries, diagnostic))
    }

    /// Runs every raiser, then delivers the backstop.
    fn dispatch<S, A, AM>(&self, auxiliaries: &mut A, diagnostic: String) -> EnforceError
    where
        A: Auxiliaries<S, AM>,
    {
        if let ControlFlow::Break(source) = <A as Auxiliaries<S, AM>>::raise_all(auxiliaries, &diagnostic) {
            debug!(target: LOG_TARGET, error = %source, "raiser aborted dispatch");
            return EnforceError::Raised {
                diagnostic,
                source,
            };
        }
        match self.policy.backstop {
            Backstop::Error => EnforceError::Failed {
                diagnostic,
            },
            Backstop::Panic => backstop_panic(&diagnostic),
        }
    }
}

/// Delivers the backstop as a panic carrying the diagnostic.
#[allow(clippy::panic, reason = "Backstop::Panic asks for an unrecoverable failure signal.")]
fn backstop_panic(diagnostic: &str) -> ! {
    panic!("{diagnostic}")
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Checks a contract with the default policy.
///
/// `auxiliaries` is `()`, a single auxiliary, or a tuple of auxiliaries.
///
/// # Errors
///
/// Returns [`EnforceError`] when the contract does not hold; see
/// [`Enforcer::enforce`].
pub fn enforce<S, SM, A, AM>(subject: S, auxiliaries: A) -> EnforceResult<S>
where
    S: Subject<SM>,
    A: Auxiliaries<S, AM>,
{
    Enforcer::default().enforce(subject, auxiliaries)
}
