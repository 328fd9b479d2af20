//! Chat Module
//!
//! This module contains:
//! - [`session::ChatSession`] - The prompt/read/respond loop
//! - [`input::Input`] - Classification of one input line
//! - [`message::Message`] - User and assistant messages of a turn
//! - [`error::ChatError`] - Failures that abort a session

pub mod error;
pub mod input;
pub mod message;
pub mod session;

pub use error::{ChatError, ChatResult};
pub use input::{Input, EXIT_SENTINEL};
pub use message::{Message, Role};
pub use session::{ChatSession, ExitReason, SessionState};
