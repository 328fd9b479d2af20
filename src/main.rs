//! ChatLoop - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use chatloop::tlog;
use chatloop::util::config::{self, ConfigError, I18nConfig};
use chatloop::util::i18n::{self, t_cur, MSG};
use chatloop::util::logger::{self, LogLevel};
use chatloop::{run_chat, NAME, VERSION};

/// A minimal interactive chat that acknowledges every line you type
#[derive(Parser, Debug)]
#[command(name = "chatloop")]
#[command(author = "ChatLoop Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language for messages (en, ja)
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,

    /// Config file to use instead of ~/.config/chatloop/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive chat (default)
    Chat,

    /// List available languages
    Langs,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the config file path
    Path,

    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_with_level(LogLevel::Debug);
        tracing::debug!("{} version: {}", NAME, VERSION);
        tracing::debug!("Host: {}", std::env::consts::OS);
    }

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = config::load_config(args.config.as_deref())
                .context("Failed to load config")?;
            let level = config.log.level().context("Invalid log level in config")?;
            logger::init_with_level(level);

            let lang = select_lang(args.lang.as_deref(), &config.i18n);
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_chat(stdin.lock(), stdout.lock(), lang).context("Chat session failed")?;
        }
        Commands::Langs => {
            for lang in i18n::available_langs() {
                println!("{}", lang);
            }
        }
        Commands::Config { action } => {
            logger::init();
            select_lang(args.lang.as_deref(), &I18nConfig::default());

            let path = match args.config {
                Some(path) => path,
                None => config::get_config_path().ok_or(ConfigError::NoConfigDir)?,
            };
            match action {
                ConfigAction::Path => println!("{}", path.display()),
                ConfigAction::Init => {
                    config::init_config(&path)
                        .with_context(|| format!("Failed to create config: {}", path.display()))?;
                    println!("{}", t_cur(MSG::ConfigCreated, &[&path.display()]));
                }
            }
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Resolve the language and make it current for log messages
fn select_lang(
    cli: Option<&str>,
    i18n_config: &I18nConfig,
) -> &'static str {
    let (lang, source) = i18n::resolve_lang(cli, i18n_config);
    i18n::set_current_lang(lang);
    tlog!(debug, MSG::LangResolved, lang, source);
    lang
}
