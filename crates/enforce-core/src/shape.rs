// crates/enforce-core/src/shape.rs
// ============================================================================
// Module: Callable Shapes
// Description: Marker types naming each callable shape the engine recognizes.
// Purpose: Let trait selection classify closures by arity and return type.
// Dependencies: std::marker
// ============================================================================

//! ## Overview
//! Rust closures cannot be asked at runtime which roles they fill, and two
//! blanket implementations over `FnMut` bounds would overlap. Each shape
//! therefore gets its own marker type, used as the trailing type parameter of
//! [`crate::Auxiliary`] and [`crate::Subject`]. Implementations keyed by
//! different markers never overlap, and the compiler picks the single marker
//! whose bounds a given closure satisfies.
//!
//! Markers are uninhabited; they only exist at the type level.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::marker::PhantomData;

// ============================================================================
// SECTION: Validator Shapes
// ============================================================================

/// `FnMut() -> bool`: standalone validator.
#[derive(Debug)]
pub enum Check {}

/// `FnMut(&S) -> bool`: validator reading the subject.
#[derive(Debug)]
pub enum CheckRef {}

/// `FnMut(&mut S) -> bool`: validator that may mutate the subject.
#[derive(Debug)]
pub enum CheckMut {}

// ============================================================================
// SECTION: Appender Shapes
// ============================================================================

/// `FnMut() -> T` where `T: Into<String>`: standalone text producer.
#[derive(Debug)]
pub enum Note {}

/// `FnMut(&S) -> T` where `T: Into<String>`.
#[derive(Debug)]
pub enum NoteRef {}

/// `FnMut(&mut S) -> T` where `T: Into<String>`.
#[derive(Debug)]
pub enum NoteMut {}

/// `FnMut(&mut Diagnostic)`: standalone buffer writer.
#[derive(Debug)]
pub enum Write {}

/// `FnMut(&S, &mut Diagnostic)`.
#[derive(Debug)]
pub enum WriteRef {}

/// `FnMut(&mut S, &mut Diagnostic)`.
#[derive(Debug)]
pub enum WriteMut {}

// ============================================================================
// SECTION: Raiser Shapes
// ============================================================================

/// `FnMut(&str)`: raiser that always returns control to the engine.
#[derive(Debug)]
pub enum Raise {}

/// `FnMut(&str) -> Result<(), E>`: raiser that aborts dispatch with `Err`.
#[derive(Debug)]
pub enum RaiseOr {}

// ============================================================================
// SECTION: Role-Free Shapes
// ============================================================================

/// `FnMut()` returning `()`. Accepted and ignored.
#[derive(Debug)]
pub enum Idle {}

/// `FnMut(&S)` returning `()`. Accepted and ignored.
#[derive(Debug)]
pub enum IdleRef {}

/// `FnMut(&mut S)` returning `()`. Accepted and ignored.
#[derive(Debug)]
pub enum IdleMut {}

// ============================================================================
// SECTION: Structural Markers
// ============================================================================

/// Roles declared explicitly through [`crate::Participant`].
#[derive(Debug)]
pub enum Explicit {}

/// Plain values that carry no callable shape, as subjects or as role-free arguments.
#[derive(Debug)]
pub enum Plain {}

/// A subject borrowed as `&mut T`, delegating to `T`'s own shape `M`.
#[derive(Debug)]
pub struct ByRef<M>(PhantomData<fn() -> M>);

/// A lone auxiliary passed without a surrounding tuple.
#[derive(Debug)]
pub struct Single<M>(PhantomData<fn() -> M>);
