// crates/enforce-core/src/subject.rs
// ============================================================================
// Module: Subject Capabilities
// Description: What the value under contract can contribute by itself.
// Purpose: Expose truthiness, standalone validation, and standalone messages.
// Dependencies: crate::{diagnostic, shape}
// ============================================================================

//! ## Overview
//! The subject is moved into an enforcement call and moved back out on
//! success. Besides being handed to subject-dependent auxiliaries, it may
//! contribute on its own:
//! - a truthiness, used only when no validator is present anywhere;
//! - a standalone validation, when the subject is itself a `FnMut() -> bool`;
//! - a standalone message, when the subject is itself appender-shaped.
//!
//! Plain values opt in with an empty `impl Subject for T {}` and fail closed
//! unless they override [`Subject::truth`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::diagnostic::Diagnostic;
use crate::shape;
use crate::shape::ByRef;
use crate::shape::Check;
use crate::shape::Note;
use crate::shape::Plain;

// ============================================================================
// SECTION: Subject Trait
// ============================================================================

/// Capabilities of the value under contract.
///
/// The marker `M` names the shape that selected the implementation; user
/// types implement the default `Subject<Plain>`.
///
/// Callable subjects should be passed by value. A `&mut F` where `F` is
/// itself callable is both a borrowed subject and a callable one, so the
/// shape must be named at the call site:
///
/// ```
/// use enforce_core::enforce;
/// use enforce_core::shape::ByRef;
/// use enforce_core::shape::Check;
///
/// let mut ready = || true;
/// let outcome = enforce::<_, ByRef<Check>, _, _>(&mut ready, ());
/// assert!(outcome.is_ok());
/// ```
pub trait Subject<M = Plain> {
    /// True when the subject is itself a standalone validator.
    const VALIDATES: bool = false;
    /// True when the subject is itself a standalone appender.
    const APPENDS: bool = false;

    /// Own truthiness, consulted only when no validator is present.
    ///
    /// `None` means the subject cannot be judged and the contract fails.
    fn truth(&self) -> Option<bool> {
        None
    }

    /// Runs the subject as a standalone validator.
    fn check(&mut self) -> bool {
        true
    }

    /// Lets the subject contribute to the diagnostic.
    fn append(&mut self, _diagnostic: &mut Diagnostic) {}
}

// ============================================================================
// SECTION: Truthy Values
// ============================================================================

impl Subject for bool {
    fn truth(&self) -> Option<bool> {
        Some(*self)
    }
}

impl<T> Subject for Option<T> {
    fn truth(&self) -> Option<bool> {
        Some(self.is_some())
    }
}

impl<T, E> Subject for Result<T, E> {
    fn truth(&self) -> Option<bool> {
        Some(self.is_ok())
    }
}

// ============================================================================
// SECTION: Opaque Values
// ============================================================================

/// Implements [`Subject`] with no truthiness for the listed types.
macro_rules! opaque_subject {
    ($($ty:ty),* $(,)?) => {
        $(impl Subject for $ty {})*
    };
}

opaque_subject!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String, &str,
);

impl<T> Subject for Vec<T> {}

// ============================================================================
// SECTION: Borrowed Subjects
// ============================================================================

impl<T, M> Subject<ByRef<M>> for &mut T
where
    T: Subject<M>,
{
    const VALIDATES: bool = <T as Subject<M>>::VALIDATES;
    const APPENDS: bool = <T as Subject<M>>::APPENDS;

    fn truth(&self) -> Option<bool> {
        <T as Subject<M>>::truth(&**self)
    }

    fn check(&mut self) -> bool {
        <T as Subject<M>>::check(&mut **self)
    }

    fn append(&mut self, diagnostic: &mut Diagnostic) {
        <T as Subject<M>>::append(&mut **self, diagnostic);
    }
}

// ============================================================================
// SECTION: Callable Subjects
// ============================================================================

impl<F> Subject<Check> for F
where
    F: FnMut() -> bool,
{
    const VALIDATES: bool = true;

    fn check(&mut self) -> bool {
        (*self)()
    }
}

impl<F, T> Subject<Note> for F
where
    F: FnMut() -> T,
    T: Into<String>,
{
    const APPENDS: bool = true;

    fn append(&mut self, diagnostic: &mut Diagnostic) {
        let text: String = (*self)().into();
        diagnostic.push_str(&text);
    }
}

impl<F> Subject<shape::Write> for F
where
    F: FnMut(&mut Diagnostic),
{
    const APPENDS: bool = true;

    fn append(&mut self, diagnostic: &mut Diagnostic) {
        (*self)(diagnostic);
    }
}
