//! ClayBot terminal client
//!
//! Entry point for the interactive chat REPL and one-shot mode.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::Write;

use clap::Parser;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use claybot_client::{
    ChatController, ChatSessionClient,
    config::{AppConfig, Cli, DisplayConfig},
    render::TranscriptRenderer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before clap reads env-backed flags
    let _ = dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = AppConfig::load_from_cli(&cli)?;

    let mut client = ChatSessionClient::from_config(&config.client)?;
    if let Some(id) = &cli.session_id {
        client = client.with_session_id(id.as_str());
    }

    info!(
        name: "client.config.loaded",
        base_url = %client.base_url(),
        session_id = %client.session_id(),
        "Client configured"
    );

    if let Some(message) = &cli.message {
        let reply = client.send_message(message).await?;
        println!("{reply}");
        return Ok(());
    }

    run_repl(client, &config.display).await
}

/// Initialize tracing (M-LOG-STRUCTURED). Logs go to stderr so they never
/// interleave with replies on stdout.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_target(true).with_writer(std::io::stderr)))
        .with(filter)
        .init();
}

/// A line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Send(&'a str),
    Clear,
    NewSession,
    Session,
    History,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/clear" => Self::Clear,
            "/new" => Self::NewSession,
            "/session" => Self::Session,
            "/history" => Self::History,
            "/quit" | "/exit" => Self::Quit,
            cmd if cmd.starts_with('/') => Self::Help,
            text => Self::Send(text),
        }
    }
}

const HELP: &str = "Commands: /clear (clear history), /new (new session), /session, /history, /quit";

async fn run_repl(client: ChatSessionClient, display: &DisplayConfig) -> anyhow::Result<()> {
    let renderer = TranscriptRenderer::new(display.bot_name.as_str());
    let mut chat =
        ChatController::new(client).with_fallback_message(display.fallback_message.as_str());

    println!("{} (session {})", display.bot_name, chat.session_id());
    println!("{HELP}");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Session => println!("{}", chat.session_id()),
            Command::History => {
                if !chat.messages().is_empty() {
                    println!("{}", renderer.render(chat.messages()));
                }
            }
            Command::Clear => match chat.clear_history().await {
                Ok(confirmation) => println!("{confirmation}"),
                Err(e) => eprintln!("Error clearing history: {e}"),
            },
            Command::NewSession => {
                let id = chat.start_new_session();
                println!("Started new session {id}");
            }
            Command::Send(text) => {
                if !text.is_empty() {
                    println!("{}", renderer.typing_indicator());
                }
                if let Some(reply) = chat.submit(text).await {
                    println!("{}", renderer.line(reply));
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("/clear"), Command::Clear);
        assert_eq!(Command::parse(" /new \n"), Command::NewSession);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/nope"), Command::Help);
        assert_eq!(Command::parse("  hello there "), Command::Send("hello there"));
        assert_eq!(Command::parse(""), Command::Send(""));
    }
}
