//! Session identifiers and the local conversation transcript.
//!
//! A session is nothing more than an opaque id generated on the client. The
//! server keys its conversation history on it; the client never persists it.
//!
//! # Architecture
//!
//! - [`SessionId`]: Client-generated session token
//! - [`Transcript`]: Append-only list of [`Message`]s kept by display layers
//!
//! # Example
//!
//! ```rust
//! use claybot_client::session::{Role, SessionId, Transcript};
//!
//! let id = SessionId::generate();
//! assert!(id.as_str().starts_with("session-"));
//!
//! let mut transcript = Transcript::new();
//! transcript.add_user_message("Hello!");
//! assert_eq!(transcript.messages()[0].role, Role::User);
//! ```

mod id;
mod transcript;

pub use id::SessionId;
pub use transcript::{Message, Role, Transcript};
