//! Plain-text rendering of a transcript for terminals.

use chrono::Local;

use crate::session::{Message, Role};

/// Formats messages as `[HH:MM:SS] label: content` lines.
#[derive(Debug, Clone)]
pub struct TranscriptRenderer {
    user_label: String,
    bot_label: String,
}

impl Default for TranscriptRenderer {
    fn default() -> Self {
        Self::new("ClayBot")
    }
}

impl TranscriptRenderer {
    /// Renderer labelling bot messages with `bot_name`.
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            user_label: "You".to_string(),
            bot_label: bot_name.into(),
        }
    }

    /// Label shown for a role.
    pub fn label(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user_label,
            Role::Bot => &self.bot_label,
        }
    }

    /// Render one message in local time.
    pub fn line(&self, message: &Message) -> String {
        let time = message.timestamp.with_timezone(&Local).format("%H:%M:%S");
        format!("[{time}] {}: {}", self.label(message.role), message.content)
    }

    /// Render every message, one per line.
    pub fn render(&self, messages: &[Message]) -> String {
        messages
            .iter()
            .map(|m| self.line(m))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indicator shown while a reply is pending.
    pub fn typing_indicator(&self) -> String {
        format!("{} is typing...", self.bot_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines() {
        let renderer = TranscriptRenderer::new("ClayBot");
        let messages = vec![
            Message::new(Role::User, "What are Clay's skills?"),
            Message::new(Role::Bot, "Rust, mostly."),
        ];

        let out = renderer.render(&messages);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] You: What are Clay's skills?"));
        assert!(lines[1].ends_with("] ClayBot: Rust, mostly."));
    }

    #[test]
    fn test_empty_transcript_renders_nothing() {
        assert_eq!(TranscriptRenderer::default().render(&[]), "");
    }

    #[test]
    fn test_typing_indicator_uses_bot_name() {
        let renderer = TranscriptRenderer::new("Helper");
        assert_eq!(renderer.typing_indicator(), "Helper is typing...");
    }
}
