//! Property tests for the echo loop

use std::io::Cursor;

use proptest::prelude::*;

use chatloop::{run_chat, ExitReason};

/// Any single line except the exit command and the empty line
fn text_line() -> impl Strategy<Value = String> {
    "[^\r\n]{1,40}".prop_filter("not the exit command", |s| s != "exit")
}

proptest! {
    #[test]
    fn prop_text_is_echoed_verbatim(line in text_line()) {
        let mut output = Vec::new();
        let reason = run_chat(Cursor::new(format!("{}\nexit\n", line)), &mut output, "en").unwrap();
        let output = String::from_utf8(output).unwrap();

        prop_assert_eq!(reason, ExitReason::Sentinel);
        let expected = format!("You: ChatLoop: You said \"{}\".\nYou: ", line);
        prop_assert!(output.contains(&expected));
    }

    #[test]
    fn prop_never_terminates_without_exit(lines in prop::collection::vec(text_line(), 0..8)) {
        let input: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        let mut output = Vec::new();
        let reason = run_chat(Cursor::new(input), &mut output, "ja").unwrap();
        let output = String::from_utf8(output).unwrap();

        prop_assert_eq!(reason, ExitReason::EndOfInput);
        prop_assert_eq!(output.matches("と入力しましたね。").count(), lines.len());
        prop_assert!(!output.contains("終了します"));
    }
}
