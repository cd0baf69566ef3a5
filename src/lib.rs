//! ClayBot client
//!
//! A session-scoped client for a remote chat endpoint. The client keeps a
//! locally generated session id, sends messages, asks the server to clear a
//! session's history, and rotates to a new session on demand. Conversation
//! history itself lives on the server.
//!
//! # Architecture
//!
//! - **Client**: [`ChatSessionClient`] issues one HTTP request per operation
//! - **Display layer**: [`ChatController`] keeps a local transcript and swaps
//!   failed replies for a fallback message
//! - **CLI**: interactive REPL and one-shot mode in the `claybot-client` binary
//!
//! # Modules
//!
//! - [`client`]: HTTP client and the [`ChatBackend`] trait
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`controller`]: Transcript-owning UI state
//! - [`render`]: Terminal rendering of transcripts
//! - [`session`]: Session ids and messages
//! - [`types`]: Wire DTOs

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod session;
pub mod types;

pub use client::{ChatBackend, ChatSessionClient};
pub use controller::ChatController;
pub use error::{Error, NetworkError, Result};
pub use session::{Message, Role, SessionId, Transcript};
