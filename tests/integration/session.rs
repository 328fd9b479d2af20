//! Session integration tests
//!
//! Drive a full chat session over in-memory streams and check the exact
//! transcript written to the output.

use std::io::Cursor;

use chatloop::chat::{ChatSession, ExitReason, SessionState};
use chatloop::run_chat;

const BANNER: &str = "Welcome to ChatLoop!\nType 'exit' to quit.\n";
const PROMPT: &str = "You: ";

fn transcript(input: &str) -> (ExitReason, String) {
    let mut output = Vec::new();
    let reason = run_chat(Cursor::new(input), &mut output, "en").unwrap();
    (reason, String::from_utf8(output).unwrap())
}

#[test]
fn test_hello_empty_exit_scenario() {
    let (reason, output) = transcript("hello\n\nexit\n");

    assert_eq!(reason, ExitReason::Sentinel);
    let expected = format!(
        "{BANNER}{PROMPT}ChatLoop: You said \"hello\".\n\
         {PROMPT}ChatLoop: Please enter something.\n\
         {PROMPT}Exiting ChatLoop.\n"
    );
    assert_eq!(output, expected);
}

#[test]
fn test_nothing_after_exit_is_read() {
    let mut output = Vec::new();
    let mut session = ChatSession::new(Cursor::new("exit\nhello\n"), &mut output);
    assert_eq!(session.run().unwrap(), ExitReason::Sentinel);
    assert_eq!(session.lines_read(), 1);

    let (mut reader, _) = session.into_inner();
    let mut rest = String::new();
    std::io::Read::read_to_string(&mut reader, &mut rest).unwrap();
    assert_eq!(rest, "hello\n");
}

#[test]
fn test_end_of_input_without_exit() {
    let (reason, output) = transcript("one\ntwo\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    assert!(!output.contains("Exiting ChatLoop."));
    assert!(output.ends_with(PROMPT));
    assert_eq!(output.matches(PROMPT).count(), 3);
}

#[test]
fn test_repeated_input_gives_identical_replies() {
    let n = 5;
    let input = "same line\n".repeat(n) + "exit\n";
    let (_, output) = transcript(&input);

    let reply = "ChatLoop: You said \"same line\".\n";
    assert_eq!(output.matches(reply).count(), n);
    assert_eq!(output.matches(PROMPT).count(), n + 1);
}

#[test]
fn test_banner_printed_once() {
    let (_, output) = transcript("a\nb\nc\nexit\n");
    assert_eq!(output.matches("Welcome to ChatLoop!").count(), 1);
    assert_eq!(output.matches("Type 'exit' to quit.").count(), 1);
    assert!(output.starts_with(BANNER));
}

#[test]
fn test_only_exact_sentinel_terminates() {
    let (reason, output) = transcript("EXIT\nquit\n exit\nexit \n");

    assert_eq!(reason, ExitReason::EndOfInput);
    for line in ["EXIT", "quit", " exit", "exit "] {
        assert!(output.contains(&format!("You said \"{}\".", line)), "{:?}", line);
    }
}

#[test]
fn test_placeholder_like_input_echoed_verbatim() {
    let (_, output) = transcript("{0} {1} {\nexit\n");
    assert!(output.contains("You said \"{0} {1} {\"."));
}

#[test]
fn test_state_transitions() {
    let mut session = ChatSession::new(Cursor::new("hi\n"), Vec::new());
    assert_eq!(session.state(), SessionState::AwaitingInput);

    assert_eq!(session.step().unwrap(), None);
    assert_eq!(session.state(), SessionState::AwaitingInput);

    assert_eq!(session.step().unwrap(), Some(ExitReason::EndOfInput));
    assert_eq!(session.state(), SessionState::Terminated(ExitReason::EndOfInput));
}

#[test]
fn test_japanese_session() {
    let mut output = Vec::new();
    let reason = run_chat(Cursor::new("テスト\nexit\n"), &mut output, "ja").unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(reason, ExitReason::Sentinel);
    assert!(output.starts_with("ChatLoop へようこそ！\n"));
    assert!(output.contains("あなた: ChatLoop: 「テスト」と入力しましたね。\n"));
    assert!(output.ends_with("あなた: ChatLoop を終了します。\n"));
}
