//! HTTP client bound to a single chat session.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, NetworkError, Result},
    session::SessionId,
    types::{ChatReply, ChatRequest, ClearHistoryQuery, ClearHistoryReply},
};

/// Operations a display layer needs from a chat backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a message in the current session and return the reply text.
    async fn send_message(&self, text: &str) -> Result<String>;

    /// Ask the server to forget every prior turn of the current session.
    async fn clear_history(&self) -> Result<String>;

    /// Switch to a freshly generated session id. No network call.
    fn rotate_session(&mut self) -> &SessionId;

    /// The session id currently in use.
    fn session_id(&self) -> &SessionId;
}

/// Client for a remote chat endpoint, correlated by a session id.
///
/// # Example
///
/// ```rust,no_run
/// use claybot_client::{ChatBackend, ChatSessionClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut chat = ChatSessionClient::new("http://localhost:8000")?;
///
/// let reply = chat.send_message("What projects has Clay worked on?").await?;
/// println!("Bot: {reply}");
///
/// chat.clear_history().await?;
/// chat.rotate_session();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChatSessionClient {
    base_url: Url,
    http: reqwest::Client,
    session_id: SessionId,
}

impl ChatSessionClient {
    /// Create a client with a freshly generated session id.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Address of the chat backend (e.g., "http://localhost:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = parse_base_url(base_url.as_ref())?;
        Ok(Self {
            base_url,
            http,
            session_id: SessionId::generate(),
        })
    }

    /// Build a client from configuration, applying the request timeout if set.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(&config.base_url, builder.build()?)
    }

    /// Use a fixed session id instead of the generated one.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a message and return the bot reply.
    pub async fn send_message(&self, text: &str) -> Result<String> {
        let req = ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.to_string(),
        };
        debug!(
            name: "chat.message.sending",
            session_id = %self.session_id,
            len = text.len(),
            "Sending message"
        );

        let response = self
            .http
            .post(self.url("chat")?)
            .json(&req)
            .send()
            .await
            .inspect_err(|e| warn!(session_id = %self.session_id, error = %e, "Error sending message"))?;
        let reply: ChatReply = Self::handle_response(response).await?;

        info!(
            name: "chat.message.sent",
            session_id = %self.session_id,
            reply_len = reply.response.len(),
            "Reply received"
        );
        Ok(reply.response)
    }

    /// Clear the server-side history of the current session.
    pub async fn clear_history(&self) -> Result<String> {
        let query = ClearHistoryQuery {
            session_id: self.session_id.to_string(),
        };

        let response = self
            .http
            .post(self.url("clear-history")?)
            .query(&query)
            .send()
            .await
            .inspect_err(|e| warn!(session_id = %self.session_id, error = %e, "Error clearing history"))?;
        let reply: ClearHistoryReply = Self::handle_response(response).await?;

        info!(
            name: "chat.history.cleared",
            session_id = %self.session_id,
            "History cleared"
        );
        Ok(reply.message)
    }

    /// Start a new session. Later messages are unlinked from prior history.
    pub fn rotate_session(&mut self) -> &SessionId {
        let previous = std::mem::replace(&mut self.session_id, SessionId::generate());
        info!(
            name: "chat.session.rotated",
            previous = %previous,
            session_id = %self.session_id,
            "Started new session"
        );
        &self.session_id
    }

    /// The session id currently in use.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(
                name: "chat.request.failed",
                status = status.as_u16(),
                "Endpoint returned an error status"
            );
            Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            }
            .into())
        }
    }
}

#[async_trait]
impl ChatBackend for ChatSessionClient {
    async fn send_message(&self, text: &str) -> Result<String> {
        ChatSessionClient::send_message(self, text).await
    }

    async fn clear_history(&self) -> Result<String> {
        ChatSessionClient::clear_history(self).await
    }

    fn rotate_session(&mut self) -> &SessionId {
        ChatSessionClient::rotate_session(self)
    }

    fn session_id(&self) -> &SessionId {
        ChatSessionClient::session_id(self)
    }
}

/// Parse the base URL, ensuring its path ends in `/` so that joining
/// `chat` onto `https://host/api` yields `https://host/api/chat`.
///
/// Only `http`/`https` URLs that can act as a base are accepted.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::UnsupportedScheme(url.scheme().to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
