//! Policy section validation tests for enforce-config.
// crates/enforce-config/tests/policy_validation.rs
// =============================================================================
// Module: Policy Validation Tests
// Description: Validate parsing and invariants of the [policy] section.
// Purpose: Ensure policy values are parsed strictly and fail closed.
// =============================================================================

use enforce_config::ConfigError;
use enforce_config::EnforceConfig;
use enforce_config::MAX_DEFAULT_MESSAGE_LENGTH;
use enforce_config::config_toml_example;
use enforce_core::Backstop;
use enforce_core::DEFAULT_FAILURE_MESSAGE;
use enforce_core::EnforcePolicy;

type TestResult = Result<(), String>;

fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = EnforceConfig::from_toml_str("").map_err(|err| err.to_string())?;
    if config.policy() != &EnforcePolicy::default() {
        return Err("empty config should yield the default policy".to_string());
    }
    if config.policy().default_message != DEFAULT_FAILURE_MESSAGE {
        return Err("default message should be the placeholder".to_string());
    }
    Ok(())
}

#[test]
fn example_config_matches_defaults() -> TestResult {
    let config =
        EnforceConfig::from_toml_str(&config_toml_example()).map_err(|err| err.to_string())?;
    if config != EnforceConfig::default() {
        return Err("example config should spell out the defaults".to_string());
    }
    Ok(())
}

#[test]
fn panic_backstop_parses() -> TestResult {
    let config = EnforceConfig::from_toml_str(
        "[policy]\ndefault_message = \"contract broken\"\nbackstop = \"panic\"\n",
    )
    .map_err(|err| err.to_string())?;
    if config.policy().backstop != Backstop::Panic {
        return Err("backstop should be panic".to_string());
    }
    if config.enforcer().policy().default_message != "contract broken" {
        return Err("enforcer should carry the configured message".to_string());
    }
    Ok(())
}

#[test]
fn partial_policy_keeps_other_defaults() -> TestResult {
    let config = EnforceConfig::from_toml_str("[policy]\nbackstop = \"panic\"\n")
        .map_err(|err| err.to_string())?;
    if config.policy().default_message != DEFAULT_FAILURE_MESSAGE {
        return Err("unset default_message should keep the placeholder".to_string());
    }
    Ok(())
}

#[test]
fn configured_enforcer_uses_message() -> TestResult {
    let config = EnforceConfig::from_toml_str("[policy]\ndefault_message = \"nope\"\n")
        .map_err(|err| err.to_string())?;
    match config.enforcer().enforce(false, ()) {
        Err(err) if err.diagnostic() == "nope" => Ok(()),
        Err(err) => Err(format!("unexpected diagnostic {}", err.diagnostic())),
        Ok(_) => Err("false subject should fail".to_string()),
    }
}

#[test]
fn blank_default_message_rejected() -> TestResult {
    assert_invalid(
        EnforceConfig::from_toml_str("[policy]\ndefault_message = \"   \"\n"),
        "policy.default_message must be non-empty",
    )
}

#[test]
fn default_message_at_max_length_accepted() -> TestResult {
    let config = EnforceConfig {
        policy: EnforcePolicy::new("x".repeat(MAX_DEFAULT_MESSAGE_LENGTH), Backstop::Error),
    };
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn default_message_over_max_length_rejected() -> TestResult {
    let config = EnforceConfig {
        policy: EnforcePolicy::new("x".repeat(MAX_DEFAULT_MESSAGE_LENGTH + 1), Backstop::Error),
    };
    assert_invalid(config.validate(), "policy.default_message exceeds")
}

#[test]
fn unknown_backstop_rejected() -> TestResult {
    assert_invalid(
        EnforceConfig::from_toml_str("[policy]\nbackstop = \"abort\"\n"),
        "config parse error",
    )
}

#[test]
fn unknown_policy_field_rejected() -> TestResult {
    assert_invalid(
        EnforceConfig::from_toml_str("[policy]\nseparator = \", \"\n"),
        "config parse error",
    )
}

#[test]
fn unknown_section_rejected() -> TestResult {
    assert_invalid(EnforceConfig::from_toml_str("[logging]\nlevel = \"debug\"\n"), "config parse error")
}
