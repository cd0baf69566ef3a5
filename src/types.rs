//! Wire types for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Session the message belongs to.
    pub session_id: String,
}

/// Reply from `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Bot reply text.
    pub response: String,
}

/// Reply from `POST /clear-history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryReply {
    /// Human-readable confirmation.
    pub message: String,
}

/// Query string of `POST /clear-history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryQuery {
    /// Session whose history should be dropped.
    pub session_id: String,
}
