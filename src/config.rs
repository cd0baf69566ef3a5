use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default chat endpoint, matching a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Shown in place of a reply when a send fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Base URL of the chat endpoint
    #[arg(long, env = "CLAYBOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Reuse a fixed session id instead of generating one
    #[arg(long)]
    pub session_id: Option<String>,

    /// Send a single message, print the reply and exit
    #[arg(short, long)]
    pub message: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "CLAYBOT_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    pub bot_name: String,
    pub fallback_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bot_name: "ClayBot".to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::load_from_cli(&cli)
    }

    /// Build the configuration.
    ///
    /// Priority: CLI flag > `CLAYBOT_` env > config file > defaults.
    pub fn load_from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let client = ClientConfig::default();
        let display = DisplayConfig::default();

        let mut builder = Config::builder()
            .set_default("client.base_url", client.base_url)?
            .set_default("display.bot_name", display.bot_name)?
            .set_default("display.fallback_message", display.fallback_message)?;

        // Explicit file must exist; ./claybot.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("claybot").required(false)),
        };

        // E.g. CLAYBOT_CLIENT__BASE_URL=https://bot.example.com
        builder = builder.add_source(
            Environment::with_prefix("CLAYBOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(base_url) = &cli.base_url {
            builder = builder.set_override("client.base_url", base_url.as_str())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_optional() {
        let mut client = ClientConfig::default();
        assert_eq!(client.timeout(), None);

        client.timeout_secs = Some(5);
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_cli_parses_one_shot_flags() {
        let cli = Cli::try_parse_from([
            "claybot-client",
            "--base-url",
            "http://127.0.0.1:9000",
            "--session-id",
            "test-session-123",
            "-m",
            "Tell me about ClayBot",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.session_id.as_deref(), Some("test-session-123"));
        assert_eq!(cli.message.as_deref(), Some("Tell me about ClayBot"));
    }
}
