//! The interactive echo loop
//!
//! A [`ChatSession`] owns an input reader and an output writer. It prints a
//! banner once, then repeats prompt → read → classify → respond until the
//! user types [`EXIT_SENTINEL`](super::input::EXIT_SENTINEL) or the input ends.

use std::fmt;
use std::io::{BufRead, Write};

use crate::tlog;
use crate::util::i18n::{self, t, t_simple, DEFAULT_LANG, MSG};

use super::error::ChatResult;
use super::input::{strip_line_ending, Input, EXIT_SENTINEL};
use super::message::Message;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed the exit command
    Sentinel,
    /// The input stream ended
    EndOfInput,
}

impl fmt::Display for ExitReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ExitReason::Sentinel => f.write_str("exit command"),
            ExitReason::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next line
    AwaitingInput,
    /// Finished; no more prompts will be written
    Terminated(ExitReason),
}

/// Interactive echo chat over any reader/writer pair
///
/// ```rust
/// use std::io::Cursor;
/// use chatloop::chat::{ChatSession, ExitReason};
///
/// let mut output = Vec::new();
/// let mut session = ChatSession::new(Cursor::new("hello\nexit\n"), &mut output);
/// assert_eq!(session.run().unwrap(), ExitReason::Sentinel);
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("\"hello\""));
/// ```
#[derive(Debug)]
pub struct ChatSession<R, W> {
    reader: R,
    writer: W,
    lang: &'static str,
    state: SessionState,
    banner_shown: bool,
    lines_read: usize,
}

impl<R: BufRead, W: Write> ChatSession<R, W> {
    /// Create a session using the default language
    pub fn new(
        reader: R,
        writer: W,
    ) -> Self {
        Self {
            reader,
            writer,
            lang: DEFAULT_LANG,
            state: SessionState::AwaitingInput,
            banner_shown: false,
            lines_read: 0,
        }
    }

    /// Use `lang` for all user-facing text
    pub fn with_lang(
        mut self,
        lang: &'static str,
    ) -> Self {
        self.lang = lang;
        self
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Language used for user-facing text
    pub fn lang(&self) -> &'static str {
        self.lang
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Run until the exit command or end of input.
    ///
    /// Calling this on a terminated session writes nothing and returns the
    /// stored exit reason.
    pub fn run(&mut self) -> ChatResult<ExitReason> {
        if let SessionState::Terminated(reason) = self.state {
            tlog!(debug, MSG::SessionAlreadyTerminated, reason);
            return Ok(reason);
        }

        tlog!(debug, MSG::SessionStart, self.lang);
        self.write_banner()?;

        loop {
            if let Some(reason) = self.step()? {
                tlog!(debug, MSG::SessionEnd, self.lines_read, reason);
                return Ok(reason);
            }
        }
    }

    /// Run a single prompt/read/respond iteration.
    ///
    /// Returns `Some(reason)` once the session has terminated.
    pub fn step(&mut self) -> ChatResult<Option<ExitReason>> {
        if let SessionState::Terminated(reason) = self.state {
            return Ok(Some(reason));
        }
        self.write_banner()?;

        write!(self.writer, "{}", t_simple(MSG::ChatPrompt, self.lang))?;
        self.writer.flush()?;

        let Some(raw) = self.read_line()? else {
            return Ok(Some(self.terminate(ExitReason::EndOfInput)));
        };

        let line = strip_line_ending(&raw);
        let input = Input::classify(line);
        tlog!(debug, MSG::InputClassified, input.kind(), line.len());

        match input {
            Input::Exit => {
                self.say(MSG::ChatGoodbye, &[])?;
                Ok(Some(self.terminate(ExitReason::Sentinel)))
            }
            Input::Empty => {
                self.say(MSG::ChatEmptyInput, &[])?;
                Ok(None)
            }
            Input::Text(text) => {
                self.echo(text)?;

                if tracing::enabled!(tracing::Level::DEBUG) {
                    let text = String::from_utf8_lossy(text);
                    let reply = t(MSG::ChatReply, self.lang, &[&text]);
                    tlog!(debug, MSG::MessageLogged, Message::user(text).to_json());
                    tlog!(debug, MSG::MessageLogged, Message::assistant(reply).to_json());
                }
                Ok(None)
            }
        }
    }

    fn write_banner(&mut self) -> ChatResult<()> {
        if self.banner_shown {
            return Ok(());
        }
        self.banner_shown = true;
        self.say(MSG::ChatWelcome, &[])?;
        self.say(MSG::ChatExitHint, &[&EXIT_SENTINEL])
    }

    /// Read one raw line; `None` at end of input
    fn read_line(&mut self) -> ChatResult<Option<Vec<u8>>> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        Ok(Some(raw))
    }

    /// Write the reply with `text` spliced in as raw bytes at `{0}`
    fn echo(
        &mut self,
        text: &[u8],
    ) -> ChatResult<()> {
        let template = i18n::template(MSG::ChatReply, self.lang);
        let (before, after) = template.split_once("{0}").unwrap_or((template, ""));

        self.writer.write_all(before.as_bytes())?;
        self.writer.write_all(text)?;
        self.writer.write_all(after.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn say(
        &mut self,
        id: MSG,
        args: &[&dyn fmt::Display],
    ) -> ChatResult<()> {
        writeln!(self.writer, "{}", t(id, self.lang, args))?;
        self.writer.flush()?;
        Ok(())
    }

    fn terminate(
        &mut self,
        reason: ExitReason,
    ) -> ExitReason {
        self.state = SessionState::Terminated(reason);
        reason
    }
}
