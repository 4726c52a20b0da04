//! Config path resolution tests for enforce-config.
// crates/enforce-config/tests/load_resolution.rs
// =============================================================================
// Module: Config Path Resolution Tests
// Description: Validate the environment and default-file fallbacks of `load`.
// Purpose: Ensure `load(None)` resolves paths in the documented order.
// =============================================================================

#![allow(unsafe_code, reason = "Test harness mutates process env for configuration.")]

use std::env;
use std::fs;
use std::path::Path;

use enforce_config::CONFIG_ENV_VAR;
use enforce_config::DEFAULT_CONFIG_NAME;
use enforce_config::EnforceConfig;
use enforce_core::Backstop;
use tempfile::TempDir;

type TestResult = Result<(), String>;

/// Sets an environment variable for the current process.
fn set_var(key: &str, value: &str) {
    // SAFETY: This binary holds a single test, so no other thread reads the env.
    unsafe {
        env::set_var(key, value);
    }
}

/// Removes an environment variable from the current process.
fn remove_var(key: &str) {
    // SAFETY: This binary holds a single test, so no other thread reads the env.
    unsafe {
        env::remove_var(key);
    }
}

fn write_file(path: &Path, content: &str) -> TestResult {
    fs::write(path, content).map_err(|err| err.to_string())
}

fn expect_backstop(config: &EnforceConfig, expected: Backstop, context: &str) -> TestResult {
    if config.policy().backstop == expected {
        Ok(())
    } else {
        Err(format!("{context}: expected backstop {}", expected.as_str()))
    }
}

// The environment and working directory are process-wide, so every
// resolution case runs inside this one test.
#[test]
fn load_without_path_resolves_env_then_default_file() -> TestResult {
    let original_dir = env::current_dir().map_err(|err| err.to_string())?;
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let result = resolution_cases(dir.path());
    remove_var(CONFIG_ENV_VAR);
    env::set_current_dir(&original_dir).map_err(|err| err.to_string())?;
    result
}

fn resolution_cases(dir: &Path) -> TestResult {
    write_file(&dir.join(DEFAULT_CONFIG_NAME), "[policy]\nbackstop = \"error\"\n")?;
    let env_file = dir.join("from-env.toml");
    write_file(&env_file, "[policy]\nbackstop = \"panic\"\n")?;
    env::set_current_dir(dir).map_err(|err| err.to_string())?;

    remove_var(CONFIG_ENV_VAR);
    let config = EnforceConfig::load(None).map_err(|err| err.to_string())?;
    expect_backstop(&config, Backstop::Error, "default file")?;

    let env_path = env_file.to_str().ok_or("temp path is not utf-8")?;
    set_var(CONFIG_ENV_VAR, env_path);
    let config = EnforceConfig::load(None).map_err(|err| err.to_string())?;
    expect_backstop(&config, Backstop::Panic, "environment path")?;

    let explicit = EnforceConfig::load(Some(&dir.join(DEFAULT_CONFIG_NAME)))
        .map_err(|err| err.to_string())?;
    expect_backstop(&explicit, Backstop::Error, "explicit path wins over environment")?;

    set_var(CONFIG_ENV_VAR, &"c".repeat(4097));
    match EnforceConfig::load(None) {
        Err(err) if err.to_string().contains("config path exceeds max length") => {}
        Err(err) => return Err(format!("unexpected error {err}")),
        Ok(_) => return Err("over-long environment path should be rejected".to_string()),
    }

    remove_var(CONFIG_ENV_VAR);
    fs::remove_file(dir.join(DEFAULT_CONFIG_NAME)).map_err(|err| err.to_string())?;
    match EnforceConfig::load(None) {
        Err(enforce_config::ConfigError::Io(_)) => Ok(()),
        Err(err) => Err(format!("expected io error for a missing default file, got {err}")),
        Ok(_) => Err("missing default file should not load".to_string()),
    }
}
