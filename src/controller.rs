//! Display-layer state for a chat UI.
//!
//! [`ChatController`] pairs a [`ChatBackend`] with a local [`Transcript`]. It
//! is what a front end binds to: the user message shows up immediately, the
//! reply is appended when it arrives, and failed sends are replaced by a
//! user-visible fallback message instead of surfacing an error.

use tracing::{error, warn};

use crate::{
    client::ChatBackend,
    config::DEFAULT_FALLBACK_MESSAGE,
    error::Result,
    session::{Message, SessionId, Transcript},
};

/// Chat UI state driven by a backend.
#[derive(Debug)]
pub struct ChatController<B> {
    backend: B,
    transcript: Transcript,
    fallback_message: String,
}

impl<B: ChatBackend> ChatController<B> {
    /// Create a controller with an empty transcript.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Override the text shown when a send fails.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Submit user input.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed text
    /// is appended as a user message, sent, and the bot message (reply or
    /// fallback) is appended and returned.
    pub async fn submit(&mut self, input: &str) -> Option<&Message> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript.add_user_message(text);

        let content = match self.backend.send_message(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    name: "chat.message.fallback",
                    session_id = %self.backend.session_id(),
                    error = %e,
                    "Send failed, showing fallback"
                );
                self.fallback_message.clone()
            }
        };

        Some(self.transcript.add_bot_message(content))
    }

    /// Clear server-side history, then the local transcript.
    ///
    /// On failure the transcript is left untouched.
    pub async fn clear_history(&mut self) -> Result<String> {
        match self.backend.clear_history().await {
            Ok(confirmation) => {
                self.transcript.clear();
                Ok(confirmation)
            }
            Err(e) => {
                error!(session_id = %self.backend.session_id(), error = %e, "Error clearing history");
                Err(e)
            }
        }
    }

    /// Rotate to a new session and start with an empty transcript.
    pub fn start_new_session(&mut self) -> &SessionId {
        self.transcript.clear();
        self.backend.rotate_session()
    }

    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// The backend's current session id.
    pub fn session_id(&self) -> &SessionId {
        self.backend.session_id()
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
