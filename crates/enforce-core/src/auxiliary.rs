// crates/enforce-core/src/auxiliary.rs
// ============================================================================
// Module: Auxiliary Roles
// Description: Shape-driven classification of auxiliary arguments.
// Purpose: Map each callable shape onto the validator, appender, and raiser roles.
// Dependencies: crate::{diagnostic, error, shape}, std::ops::ControlFlow
// ============================================================================

//! ## Overview
//! Every auxiliary argument implements [`Auxiliary`] for exactly one marker
//! from [`crate::shape`]. The implementation fixes which roles the argument
//! fills through the `VALIDATES`, `APPENDS`, and `RAISES` constants, so role
//! membership is known at compile time and role-free arguments cost nothing.
//!
//! Closures are classified by shape alone. Their parameters must be
//! annotated (`|v: &i32| *v == 4`) so the shape is visible to trait selection.
//! Types that fill several roles at once implement [`Participant`] instead.
//! Plain values such as numbers, strings, and options are accepted under
//! [`Plain`] and serve no role.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::ControlFlow;

use crate::diagnostic::Diagnostic;
use crate::error::BoxError;
use crate::shape;
use crate::shape::Check;
use crate::shape::CheckMut;
use crate::shape::CheckRef;
use crate::shape::Explicit;
use crate::shape::Idle;
use crate::shape::IdleMut;
use crate::shape::IdleRef;
use crate::shape::Note;
use crate::shape::NoteMut;
use crate::shape::NoteRef;
use crate::shape::Plain;
use crate::shape::Raise;
use crate::shape::RaiseOr;
use crate::shape::WriteMut;
use crate::shape::WriteRef;

// ============================================================================
// SECTION: Auxiliary Trait
// ============================================================================

/// An auxiliary argument classified by the shape marker `M`.
///
/// Methods of roles the argument does not fill keep their neutral defaults:
/// validation passes, nothing is appended, raising returns control.
pub trait Auxiliary<S, M> {
    /// True when the argument is a validator.
    const VALIDATES: bool = false;
    /// True when the argument is an appender.
    const APPENDS: bool = false;
    /// True when the argument is a raiser.
    const RAISES: bool = false;

    /// Judges the contract, possibly reading or mutating the subject.
    fn validate(&mut self, _subject: &mut S) -> bool {
        true
    }

    /// Contributes text to the diagnostic.
    fn append(&mut self, _subject: &mut S, _diagnostic: &mut Diagnostic) {}

    /// Reacts to a failure. `Break` aborts dispatch with the given error.
    fn raise(&mut self, _diagnostic: &str) -> ControlFlow<BoxError> {
        ControlFlow::Continue(())
    }
}

// ============================================================================
// SECTION: Explicit Participants
// ============================================================================

/// Auxiliary that declares its roles explicitly.
///
/// Implement this for types that should serve more than one role, for
/// example a subject-dependent validator that also explains itself and logs
/// the failure. Each role whose constant is true is used; the rest are
/// ignored. A participant passed as `&mut P` stays inspectable after the
/// call.
pub trait Participant<S> {
    /// True when the participant validates.
    const VALIDATES: bool = false;
    /// True when the participant appends.
    const APPENDS: bool = false;
    /// True when the participant raises.
    const RAISES: bool = false;

    /// Judges the contract.
    fn validate(&mut self, _subject: &mut S) -> bool {
        true
    }

    /// Contributes text to the diagnostic.
    fn append(&mut self, _subject: &mut S, _diagnostic: &mut Diagnostic) {}

    /// Reacts to a failure.
    fn raise(&mut self, _diagnostic: &str) -> ControlFlow<BoxError> {
        ControlFlow::Continue(())
    }
}

impl<S, P> Participant<S> for &mut P
where
    P: Participant<S>,
{
    const VALIDATES: bool = <P as Participant<S>>::VALIDATES;
    const APPENDS: bool = <P as Participant<S>>::APPENDS;
    const RAISES: bool = <P as Participant<S>>::RAISES;

    fn validate(&mut self, subject: &mut S) -> bool {
        <P as Participant<S>>::validate(&mut **self, subject)
    }

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        <P as Participant<S>>::append(&mut **self, subject, diagnostic);
    }

    fn raise(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        <P as Participant<S>>::raise(&mut **self, diagnostic)
    }
}

impl<S, P> Auxiliary<S, Explicit> for P
where
    P: Participant<S>,
{
    const VALIDATES: bool = <P as Participant<S>>::VALIDATES;
    const APPENDS: bool = <P as Participant<S>>::APPENDS;
    const RAISES: bool = <P as Participant<S>>::RAISES;

    fn validate(&mut self, subject: &mut S) -> bool {
        <P as Participant<S>>::validate(self, subject)
    }

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        <P as Participant<S>>::append(self, subject, diagnostic);
    }

    fn raise(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        <P as Participant<S>>::raise(self, diagnostic)
    }
}

// ============================================================================
// SECTION: Validator Shapes
// ============================================================================

impl<S, F> Auxiliary<S, Check> for F
where
    F: FnMut() -> bool,
{
    const VALIDATES: bool = true;

    fn validate(&mut self, _subject: &mut S) -> bool {
        (*self)()
    }
}

impl<S, F> Auxiliary<S, CheckRef> for F
where
    F: FnMut(&S) -> bool,
{
    const VALIDATES: bool = true;

    fn validate(&mut self, subject: &mut S) -> bool {
        (*self)(&*subject)
    }
}

impl<S, F> Auxiliary<S, CheckMut> for F
where
    F: FnMut(&mut S) -> bool,
{
    const VALIDATES: bool = true;

    fn validate(&mut self, subject: &mut S) -> bool {
        (*self)(subject)
    }
}

// ============================================================================
// SECTION: Appender Shapes
// ============================================================================

impl<S, F, T> Auxiliary<S, Note> for F
where
    F: FnMut() -> T,
    T: Into<String>,
{
    const APPENDS: bool = true;

    fn append(&mut self, _subject: &mut S, diagnostic: &mut Diagnostic) {
        let text: String = (*self)().into();
        diagnostic.push_str(&text);
    }
}

impl<S, F, T> Auxiliary<S, NoteRef> for F
where
    F: FnMut(&S) -> T,
    T: Into<String>,
{
    const APPENDS: bool = true;

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        let text: String = (*self)(&*subject).into();
        diagnostic.push_str(&text);
    }
}

impl<S, F, T> Auxiliary<S, NoteMut> for F
where
    F: FnMut(&mut S) -> T,
    T: Into<String>,
{
    const APPENDS: bool = true;

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        let text: String = (*self)(subject).into();
        diagnostic.push_str(&text);
    }
}

impl<S, F> Auxiliary<S, shape::Write> for F
where
    F: FnMut(&mut Diagnostic),
{
    const APPENDS: bool = true;

    fn append(&mut self, _subject: &mut S, diagnostic: &mut Diagnostic) {
        (*self)(diagnostic);
    }
}

impl<S, F> Auxiliary<S, WriteRef> for F
where
    F: FnMut(&S, &mut Diagnostic),
{
    const APPENDS: bool = true;

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        (*self)(&*subject, diagnostic);
    }
}

impl<S, F> Auxiliary<S, WriteMut> for F
where
    F: FnMut(&mut S, &mut Diagnostic),
{
    const APPENDS: bool = true;

    fn append(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        (*self)(subject, diagnostic);
    }
}

// ============================================================================
// SECTION: Raiser Shapes
// ============================================================================

impl<S, F> Auxiliary<S, Raise> for F
where
    F: FnMut(&str),
{
    const RAISES: bool = true;

    fn raise(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        (*self)(diagnostic);
        ControlFlow::Continue(())
    }
}

impl<S, F, E> Auxiliary<S, RaiseOr> for F
where
    F: FnMut(&str) -> Result<(), E>,
    E: Into<BoxError>,
{
    const RAISES: bool = true;

    fn raise(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        match (*self)(diagnostic) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(err.into()),
        }
    }
}

// ============================================================================
// SECTION: Role-Free Shapes
// ============================================================================

impl<S, F> Auxiliary<S, Idle> for F where F: FnMut() {}

impl<S, F> Auxiliary<S, IdleRef> for F where F: FnMut(&S) {}

impl<S, F> Auxiliary<S, IdleMut> for F where F: FnMut(&mut S) {}

// ============================================================================
// SECTION: Plain Values
// ============================================================================

/// Implements a role-free [`Auxiliary`] for the listed value types.
macro_rules! role_free_value {
    ($($ty:ty),* $(,)?) => {
        $(impl<S> Auxiliary<S, Plain> for $ty {})*
    };
}

role_free_value!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
    &str,
);

impl<S, T> Auxiliary<S, Plain> for Option<T> {}

impl<S, T, E> Auxiliary<S, Plain> for Result<T, E> {}

impl<S, T> Auxiliary<S, Plain> for Vec<T> {}
