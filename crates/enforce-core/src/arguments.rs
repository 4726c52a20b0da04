// crates/enforce-core/src/arguments.rs
// ============================================================================
// Module: Argument Lists
// Description: Ordered, heterogeneous auxiliary lists built from tuples.
// Purpose: Fold every argument's roles in declaration order.
// Dependencies: crate::{auxiliary, diagnostic, error, shape}
// ============================================================================

//! ## Overview
//! An enforcement call accepts `()`, a single auxiliary, or a tuple of up to
//! twelve auxiliaries. Tuple position is declaration order. Each fold only
//! touches arguments whose role constant is set, so role-free arguments are
//! never invoked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::ControlFlow;

use crate::auxiliary::Auxiliary;
use crate::diagnostic::Diagnostic;
use crate::error::BoxError;
use crate::shape::Single;

// ============================================================================
// SECTION: Auxiliaries Trait
// ============================================================================

/// Ordered list of auxiliary arguments for subject type `S`.
pub trait Auxiliaries<S, M> {
    /// True when any argument is a validator.
    const VALIDATES: bool;

    /// ANDs every validator left to right, stopping at the first false.
    fn validate_all(&mut self, subject: &mut S) -> bool;

    /// Runs every appender in order.
    fn append_all(&mut self, subject: &mut S, diagnostic: &mut Diagnostic);

    /// Runs every raiser in order until one breaks.
    fn raise_all(&mut self, diagnostic: &str) -> ControlFlow<BoxError>;
}

// ============================================================================
// SECTION: Empty and Single Lists
// ============================================================================

impl<S> Auxiliaries<S, ()> for () {
    const VALIDATES: bool = false;

    fn validate_all(&mut self, _subject: &mut S) -> bool {
        true
    }

    fn append_all(&mut self, _subject: &mut S, _diagnostic: &mut Diagnostic) {}

    fn raise_all(&mut self, _diagnostic: &str) -> ControlFlow<BoxError> {
        ControlFlow::Continue(())
    }
}

impl<S, M, A> Auxiliaries<S, Single<M>> for A
where
    A: Auxiliary<S, M>,
{
    const VALIDATES: bool = <A as Auxiliary<S, M>>::VALIDATES;

    fn validate_all(&mut self, subject: &mut S) -> bool {
        !<A as Auxiliary<S, M>>::VALIDATES || <A as Auxiliary<S, M>>::validate(self, subject)
    }

    fn append_all(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
        if <A as Auxiliary<S, M>>::APPENDS {
            <A as Auxiliary<S, M>>::append(self, subject, diagnostic);
        }
    }

    fn raise_all(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
        if <A as Auxiliary<S, M>>::RAISES {
            <A as Auxiliary<S, M>>::raise(self, diagnostic)
        } else {
            ControlFlow::Continue(())
        }
    }
}

// ============================================================================
// SECTION: Tuple Lists
// ============================================================================

/// Implements [`Auxiliaries`] for one tuple arity.
macro_rules! tuple_auxiliaries {
    ($(($arg:ident, $marker:ident, $slot:ident)),+) => {
        impl<S, $($arg, $marker),+> Auxiliaries<S, ($($marker,)+)> for ($($arg,)+)
        where
            $($arg: Auxiliary<S, $marker>,)+
        {
            const VALIDATES: bool = $(<$arg as Auxiliary<S, $marker>>::VALIDATES ||)+ false;

            fn validate_all(&mut self, subject: &mut S) -> bool {
                let ($($slot,)+) = self;
                $(
                    if <$arg as Auxiliary<S, $marker>>::VALIDATES
                        && !<$arg as Auxiliary<S, $marker>>::validate($slot, subject)
                    {
                        return false;
                    }
                )+
                true
            }

            fn append_all(&mut self, subject: &mut S, diagnostic: &mut Diagnostic) {
                let ($($slot,)+) = self;
                $(
                    if <$arg as Auxiliary<S, $marker>>::APPENDS {
                        <$arg as Auxiliary<S, $marker>>::append($slot, subject, diagnostic);
                    }
                )+
            }

            fn raise_all(&mut self, diagnostic: &str) -> ControlFlow<BoxError> {
                let ($($slot,)+) = self;
                $(
                    if <$arg as Auxiliary<S, $marker>>::RAISES {
                        <$arg as Auxiliary<S, $marker>>::raise($slot, diagnostic)?;
                    }
                )+
                ControlFlow::Continue(())
            }
        }
    };
}

tuple_auxiliaries!((A0, M0, a0));
tuple_auxiliaries!((A0, M0, a0), (A1, M1, a1));
tuple_auxiliaries!((A0, M0, a0), (A1, M1, a1), (A2, M2, a2));
tuple_auxiliaries!((A0, M0, a0), (A1, M1, a1), (A2, M2, a2), (A3, M3, a3));
tuple_auxiliaries!((A0, M0, a0), (A1, M1, a1), (A2, M2, a2), (A3, M3, a3), (A4, M4, a4));
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6),
    (A7, M7, a7)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6),
    (A7, M7, a7),
    (A8, M8, a8)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6),
    (A7, M7, a7),
    (A8, M8, a8),
    (A9, M9, a9)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6),
    (A7, M7, a7),
    (A8, M8, a8),
    (A9, M9, a9),
    (A10, M10, a10)
);
tuple_auxiliaries!(
    (A0, M0, a0),
    (A1, M1, a1),
    (A2, M2, a2),
    (A3, M3, a3),
    (A4, M4, a4),
    (A5, M5, a5),
    (A6, M6, a6),
    (A7, M7, a7),
    (A8, M8, a8),
    (A9, M9, a9),
    (A10, M10, a10),
    (A11, M11, a11)
);
