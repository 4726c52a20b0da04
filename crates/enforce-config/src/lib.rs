// crates/enforce-config/src/lib.rs
// ============================================================================
// Module: Enforce Config Library
// Description: Canonical config model and validation for enforcement policy.
// Purpose: Single source of truth for enforce.toml semantics.
// Dependencies: enforce-core, serde, toml
// ============================================================================

//! ## Overview
//! `enforce-config` loads an [`enforce_core::EnforcePolicy`] from a TOML file
//! with strict, fail-closed validation, and ships a canonical example file.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
