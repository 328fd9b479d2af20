//! Internationalization support for ChatLoop
//!
//! Translations live in JSON files under `locales/` and are compiled into the
//! binary, so the catalogue is available regardless of the working directory.
//!
//! # Language selection
//!
//! Priority (high → low):
//! 1. CLI argument (`--lang`)
//! 2. Environment variable (`CHATLOOP_LANG`)
//! 3. Config file (`[i18n] lang`, then `[i18n] fallback`)
//! 4. Default (`en`)
//!
//! # Usage
//!
//! ```rust
//! use chatloop::util::i18n::{t, t_simple, MSG};
//!
//! assert_eq!(t_simple(MSG::ChatPrompt, "en"), "You: ");
//! assert!(t(MSG::ChatReply, "ja", &[&"hi"]).contains("「hi」"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use once_cell::sync::Lazy;

use crate::util::config::I18nConfig;

/// Environment variable consulted when no `--lang` flag is given
pub const LANG_ENV: &str = "CHATLOOP_LANG";

/// Language used when nothing else resolves
pub const DEFAULT_LANG: &str = "en";

/// Translation table loaded from JSON
type TranslationMap = HashMap<String, String>;

/// Catalogues bundled into the binary
const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../../locales/en.json")),
    ("ja", include_str!("../../../locales/ja.json")),
];

static TRANSLATIONS: Lazy<HashMap<&'static str, TranslationMap>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &(lang, source) in BUNDLED {
        match serde_json::from_str::<TranslationMap>(source) {
            Ok(translations) => {
                map.insert(lang, translations);
            }
            Err(e) => {
                tracing::warn!("failed to parse {} translation file: {}", lang, e);
            }
        }
    }
    map
});

/// Language used by `t_cur` and the `tlog!` macro
static CURRENT_LANG: OnceLock<&'static str> = OnceLock::new();

/// Get all available language codes, sorted
pub fn available_langs() -> Vec<&'static str> {
    let mut langs: Vec<&'static str> = TRANSLATIONS.keys().copied().collect();
    langs.sort_unstable();
    langs
}

/// Look up the interned code for a language, if a catalogue exists for it
pub fn known_lang(code: &str) -> Option<&'static str> {
    TRANSLATIONS.get_key_value(code).map(|(k, _)| *k)
}

/// Raw catalogue template for a message ID
///
/// Falls back to [`DEFAULT_LANG`] when `lang` has no entry for the message, and
/// to the message key itself when no catalogue has it.
pub fn template(
    id: MSG,
    lang: &str,
) -> &'static str {
    let key = id.key();
    TRANSLATIONS
        .get(lang)
        .and_then(|m| m.get(key))
        .or_else(|| TRANSLATIONS.get(DEFAULT_LANG).and_then(|m| m.get(key)))
        .map(String::as_str)
        .unwrap_or(key)
}

/// Get translation for a message ID, substituting `{N}` placeholders
pub fn t(
    id: MSG,
    lang: &str,
    args: &[&dyn fmt::Display],
) -> String {
    substitute(template(id, lang), args)
}

/// Convenience function for translation without args
#[inline]
pub fn t_simple(
    id: MSG,
    lang: &str,
) -> String {
    t(id, lang, &[])
}

/// Translate using the process-wide current language
#[inline]
pub fn t_cur(
    id: MSG,
    args: &[&dyn fmt::Display],
) -> String {
    t(id, current_lang(), args)
}

/// Replace `{N}` placeholders with `args[N]` in a single pass.
///
/// Substituted text is never rescanned, so an argument containing `{1}` is
/// emitted as-is. Placeholders without a matching argument are left intact.
fn substitute(
    template: &str,
    args: &[&dyn fmt::Display],
) -> String {
    use fmt::Write;

    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| (close, arg))
        });
        match placeholder {
            Some((close, arg)) => {
                // Writing into a String cannot fail
                let _ = write!(out, "{}", arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Macro for translated logging using the current language
///
/// ```rust
/// use chatloop::tlog;
/// use chatloop::util::i18n::MSG;
///
/// tlog!(debug, MSG::ConfigMissing, "/tmp/config.toml");
/// ```
#[macro_export]
macro_rules! tlog {
    (debug, $id:expr $(, $arg:expr)* $(,)?) => {
        tracing::debug!(
            "{}",
            $crate::util::i18n::t_cur($id, &[$(&$arg as &dyn ::std::fmt::Display),*])
        );
    };
    (info, $id:expr $(, $arg:expr)* $(,)?) => {
        tracing::info!(
            "{}",
            $crate::util::i18n::t_cur($id, &[$(&$arg as &dyn ::std::fmt::Display),*])
        );
    };
    (warn, $id:expr $(, $arg:expr)* $(,)?) => {
        tracing::warn!(
            "{}",
            $crate::util::i18n::t_cur($id, &[$(&$arg as &dyn ::std::fmt::Display),*])
        );
    };
    (error, $id:expr $(, $arg:expr)* $(,)?) => {
        tracing::error!(
            "{}",
            $crate::util::i18n::t_cur($id, &[$(&$arg as &dyn ::std::fmt::Display),*])
        );
    };
}

/// Get the current process-wide language (defaults to [`DEFAULT_LANG`])
pub fn current_lang() -> &'static str {
    CURRENT_LANG.get().copied().unwrap_or(DEFAULT_LANG)
}

/// Set the process-wide language used by log messages.
///
/// Only the first call takes effect; returns `false` if the code is unknown or
/// a language was already set.
pub fn set_current_lang(code: &str) -> bool {
    match known_lang(code) {
        Some(lang) => CURRENT_LANG.set(lang).is_ok(),
        None => false,
    }
}

/// Where the resolved language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSource {
    Cli,
    Env,
    Config,
    ConfigFallback,
    Default,
}

impl fmt::Display for LangSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            LangSource::Cli => "--lang",
            LangSource::Env => LANG_ENV,
            LangSource::Config => "config i18n.lang",
            LangSource::ConfigFallback => "config i18n.fallback",
            LangSource::Default => "default",
        };
        f.write_str(s)
    }
}

/// Resolve the session language from the CLI flag, [`LANG_ENV`] and config
pub fn resolve_lang(
    cli: Option<&str>,
    config: &I18nConfig,
) -> (&'static str, LangSource) {
    let env = std::env::var(LANG_ENV).ok();
    resolve_lang_from(cli, env.as_deref(), config)
}

/// Resolve a language from explicit sources; unknown codes fall through
pub fn resolve_lang_from(
    cli: Option<&str>,
    env: Option<&str>,
    config: &I18nConfig,
) -> (&'static str, LangSource) {
    let candidates = [
        (cli, LangSource::Cli),
        (env, LangSource::Env),
        (Some(config.lang.as_str()), LangSource::Config),
        (Some(config.fallback.as_str()), LangSource::ConfigFallback),
    ];

    for (code, source) in candidates {
        let Some(code) = code else { continue };
        match known_lang(code) {
            Some(lang) => return (lang, source),
            None => {
                tlog!(warn, MSG::LangUnknown, code, source);
            }
        }
    }

    (DEFAULT_LANG, LangSource::Default)
}

/// Message IDs for user-facing text and logs
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MSG {
    // Chat
    ChatWelcome,
    ChatExitHint,
    ChatPrompt,
    ChatGoodbye,
    ChatEmptyInput,
    ChatReply,

    // Session
    SessionStart,
    SessionEnd,
    SessionAlreadyTerminated,
    InputClassified,
    MessageLogged,

    // Config
    ConfigLoaded,
    ConfigMissing,
    ConfigNoDir,
    ConfigCreated,

    // Language
    LangResolved,
    LangUnknown,
}

impl MSG {
    /// Every message ID, in declaration order
    pub const ALL: &'static [MSG] = &[
        MSG::ChatWelcome,
        MSG::ChatExitHint,
        MSG::ChatPrompt,
        MSG::ChatGoodbye,
        MSG::ChatEmptyInput,
        MSG::ChatReply,
        MSG::SessionStart,
        MSG::SessionEnd,
        MSG::SessionAlreadyTerminated,
        MSG::InputClassified,
        MSG::MessageLogged,
        MSG::ConfigLoaded,
        MSG::ConfigMissing,
        MSG::ConfigNoDir,
        MSG::ConfigCreated,
        MSG::LangResolved,
        MSG::LangUnknown,
    ];

    /// Catalogue key for this message
    pub fn key(&self) -> &'static str {
        match self {
            MSG::ChatWelcome => "chat_welcome",
            MSG::ChatExitHint => "chat_exit_hint",
            MSG::ChatPrompt => "chat_prompt",
            MSG::ChatGoodbye => "chat_goodbye",
            MSG::ChatEmptyInput => "chat_empty_input",
            MSG::ChatReply => "chat_reply",

            MSG::SessionStart => "session_start",
            MSG::SessionEnd => "session_end",
            MSG::SessionAlreadyTerminated => "session_already_terminated",
            MSG::InputClassified => "input_classified",
            MSG::MessageLogged => "message_logged",

            MSG::ConfigLoaded => "config_loaded",
            MSG::ConfigMissing => "config_missing",
            MSG::ConfigNoDir => "config_no_dir",
            MSG::ConfigCreated => "config_created",

            MSG::LangResolved => "lang_resolved",
            MSG::LangUnknown => "lang_unknown",
        }
    }
}

#[cfg(test)]
mod tests;
