// crates/enforce-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for `enforce.toml`. Every field shown is its default,
//! so loading the example yields the same policy as an empty file.

/// Returns a canonical example `enforce.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[policy]
# Text used when no appender contributed to a failure diagnostic.
default_message = "Expression has failed"
# Backstop delivered after every raiser returned: "error" or "panic".
backstop = "error"
"#,
    )
}
