//! i18n 测试

use super::*;

#[test]
fn test_msg_key() {
    assert_eq!(MSG::ChatWelcome.key(), "chat_welcome");
    assert_eq!(MSG::ChatReply.key(), "chat_reply");
}

#[test]
fn test_available_langs() {
    let langs = available_langs();
    assert_eq!(langs, vec!["en", "ja"]);
}

#[test]
fn test_every_message_translated() {
    for &lang in &["en", "ja"] {
        let table = TRANSLATIONS.get(lang).expect("bundled catalogue");
        for msg in MSG::ALL {
            assert!(
                table.contains_key(msg.key()),
                "{} missing from {}",
                msg.key(),
                lang
            );
        }
        assert_eq!(table.len(), MSG::ALL.len(), "stray keys in {}", lang);
    }
}

#[test]
fn test_t_with_args() {
    assert_eq!(t(MSG::ChatReply, "en", &[&"hello"]), "ChatLoop: You said \"hello\".");
    assert_eq!(t(MSG::ChatReply, "ja", &[&"hello"]), "ChatLoop: 「hello」と入力しましたね。");
}

#[test]
fn test_t_unknown_lang_falls_back_to_en() {
    assert_eq!(t_simple(MSG::ChatPrompt, "xx"), t_simple(MSG::ChatPrompt, "en"));
}

#[test]
fn test_substitute_is_single_pass() {
    let args: [&dyn fmt::Display; 2] = [&"{1}", &"second"];
    assert_eq!(substitute("{0} and {1}", &args), "{1} and second");
}

#[test]
fn test_substitute_keeps_unmatched_braces() {
    assert_eq!(substitute("{x} {5} {0}", &[&"a"]), "{x} {5} a");
    assert_eq!(substitute("open { only", &[&"a"]), "open { only");
    assert_eq!(substitute("no args {0}", &[]), "no args {0}");
}

#[test]
fn test_resolve_lang_priority() {
    let config = I18nConfig {
        lang: "ja".to_string(),
        fallback: "en".to_string(),
    };

    assert_eq!(resolve_lang_from(Some("en"), Some("ja"), &config), ("en", LangSource::Cli));
    assert_eq!(resolve_lang_from(None, Some("en"), &config), ("en", LangSource::Env));
    assert_eq!(resolve_lang_from(None, None, &config), ("ja", LangSource::Config));
}

#[test]
fn test_resolve_lang_skips_unknown_codes() {
    let config = I18nConfig {
        lang: "fr".to_string(),
        fallback: "ja".to_string(),
    };

    assert_eq!(
        resolve_lang_from(Some("de"), Some("zz"), &config),
        ("ja", LangSource::ConfigFallback)
    );

    let config = I18nConfig {
        lang: "fr".to_string(),
        fallback: "fr".to_string(),
    };
    assert_eq!(resolve_lang_from(None, None, &config), ("en", LangSource::Default));
}

#[test]
fn test_template_falls_back_to_default_lang() {
    assert_eq!(template(MSG::ChatReply, "fr"), template(MSG::ChatReply, DEFAULT_LANG));
    assert_eq!(t(MSG::ChatReply, "fr", &[&"x"]), "ChatLoop: You said \"x\".");
}

#[test]
fn test_reply_template_has_single_slot() {
    for lang in available_langs() {
        assert_eq!(template(MSG::ChatReply, lang).matches("{0}").count(), 1, "{}", lang);
    }
}
