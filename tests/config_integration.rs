use claybot_client::config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_FALLBACK_MESSAGE};
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CLAYBOT_CLIENT__BASE_URL");
        env::remove_var("CLAYBOT_CLIENT__TIMEOUT_SECS");
        env::remove_var("CLAYBOT_DISPLAY__BOT_NAME");
        env::remove_var("CLAYBOT_BASE_URL");
        env::remove_var("CONFIG_FILE");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["claybot-client"]).expect("Failed to load config");
    assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.client.timeout(), None);
    assert_eq!(config.display.bot_name, "ClayBot");
    assert_eq!(config.display.fallback_message, DEFAULT_FALLBACK_MESSAGE);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CLAYBOT_CLIENT__BASE_URL", "http://10.0.0.5:8000");
        env::set_var("CLAYBOT_CLIENT__TIMEOUT_SECS", "15");
    }

    let config = AppConfig::load_from_args(["claybot-client"]).expect("Failed to load config");
    assert_eq!(config.client.base_url, "http://10.0.0.5:8000");
    assert_eq!(config.client.timeout_secs, Some(15));

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CLAYBOT_CLIENT__BASE_URL", "http://from-env:8000");
    }

    let config = AppConfig::load_from_args(["claybot-client", "--base-url", "http://from-cli:9000"])
        .expect("Failed to load config");
    assert_eq!(config.client.base_url, "http://from-cli:9000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("claybot.yaml");
    fs::write(
        &file_path,
        r#"
client:
  base_url: https://bot.example.com/api
display:
  bot_name: Helper
"#,
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([
        "claybot-client",
        "--config",
        file_path.to_str().unwrap(),
    ])
    .expect("Failed to load config from file");

    assert_eq!(config.client.base_url, "https://bot.example.com/api");
    assert_eq!(config.display.bot_name, "Helper");
    // Untouched keys keep their defaults
    assert_eq!(config.display.fallback_message, DEFAULT_FALLBACK_MESSAGE);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([
        "claybot-client",
        "--config",
        "/definitely/not/here/claybot.yaml",
    ]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_config_file_env_var() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("bot.yaml");
    fs::write(&file_path, "client:\n  base_url: http://from-file:1\n")
        .expect("Failed to write temp config");

    // Point at the file through the environment instead of --config
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args(["claybot-client"]).expect("Failed to load config");
    assert_eq!(config.client.base_url, "http://from-file:1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./claybot.yaml
    let cwd_path = "claybot.yaml";
    fs::write(cwd_path, "display:\n  bot_name: CwdBot\n").expect("Failed to write ./claybot.yaml");

    // No env var, no --config: should pick up ./claybot.yaml
    let config = AppConfig::load_from_args(["claybot-client"]);

    // Clean up before asserting so a failure doesn't leave the file behind
    fs::remove_file(cwd_path).unwrap();

    let config = config.expect("Failed to load config");
    assert_eq!(config.display.bot_name, "CwdBot");
    assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
}
