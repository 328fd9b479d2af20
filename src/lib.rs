//! ChatLoop
//!
//! A minimal interactive chat for the terminal: every line you type is
//! acknowledged back to you until you type `exit`.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use chatloop::{run_chat, ExitReason};
//!
//! let mut output = Vec::new();
//! let reason = run_chat(Cursor::new("hello\n"), &mut output, "en").unwrap();
//! assert_eq!(reason, ExitReason::EndOfInput);
//! ```

#![doc(html_root_url = "https://docs.rs/chatloop")]
#![warn(rust_2018_idioms)]

pub mod chat;

// Utility modules
pub mod util;

// Re-exports
pub use chat::{ChatError, ChatResult, ChatSession, ExitReason, SessionState};

use std::io::{BufRead, Write};

/// Program version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "ChatLoop";

/// Run a chat session over `reader`/`writer` in `lang`
pub fn run_chat<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    lang: &'static str,
) -> ChatResult<ExitReason> {
    ChatSession::new(reader, writer).with_lang(lang).run()
}
