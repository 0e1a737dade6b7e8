use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::core::engine::Engine;
use crate::core::spell::{PermissiveChecker, SpellChecker, WordSetChecker};
use crate::core::words::{FileWordList, StaticWordList, WordListProvider};
use crate::games::scramble::{rules, ScrambleApp, ScrambleGame, Session};

const DEFAULT_DICT: &str = "/usr/share/dict/words";
const DEFAULT_LOCALE: &str = "en";

#[derive(Parser)]
#[command(name = "wordterm")]
#[command(about = "🔤 A terminal word game: make words from the root word's letters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (the default)
    Play {
        /// Root word list, one word per line (bundled list when omitted)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Dictionary used to verify submissions
        #[arg(short, long, default_value = DEFAULT_DICT)]
        dict: PathBuf,

        /// Spell check locale
        #[arg(short, long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },
    /// Validate a single word against a root word and exit
    Check {
        /// The root word candidates must be formed from
        root: String,

        /// The word to validate
        word: String,

        /// Dictionary used to verify the word
        #[arg(short, long, default_value = DEFAULT_DICT)]
        dict: PathBuf,

        /// Spell check locale
        #[arg(short, long, default_value = DEFAULT_LOCALE)]
        locale: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        words: None,
        dict: PathBuf::from(DEFAULT_DICT),
        locale: DEFAULT_LOCALE.to_string(),
    }) {
        Commands::Play {
            words,
            dict,
            locale,
        } => play(words, &dict, locale),
        Commands::Check {
            root,
            word,
            dict,
            locale,
            json,
        } => check(&root, &word, &dict, &locale, json),
    }
}

fn play(words: Option<PathBuf>, dict: &Path, locale: String) -> Result<()> {
    let provider: Box<dyn WordListProvider> = match words {
        Some(path) => Box::new(FileWordList::new(path)),
        None => Box::new(StaticWordList::bundled()),
    };

    let mut game = ScrambleGame::start(provider, load_checker(dict), locale)?;
    game.on_change(|session| {
        tracing::debug!(
            score = session.score(),
            words = session.used_words().len(),
            "session updated"
        );
    });

    let terminal = ratatui::init();
    let result = Engine::new(ScrambleApp::new(game)).run(terminal);
    ratatui::restore();

    let app = result?;
    if let Some(err) = app.into_fatal_error() {
        return Err(err.into());
    }
    Ok(())
}

fn check(root: &str, word: &str, dict: &Path, locale: &str, json: bool) -> Result<()> {
    let checker = load_checker(dict);
    let session = Session::new(root);
    let verdict = rules::validate(word, &session, checker.as_ref(), locale);

    if json {
        let out = match &verdict {
            Ok(word) => serde_json::json!({ "ok": true, "word": word }),
            Err(reason) => serde_json::json!({ "ok": false, "reason": reason }),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match &verdict {
            Ok(word) => println!(
                "✅ '{}' works against '{}' (+{})",
                word,
                session.root_word(),
                word.chars().count()
            ),
            Err(reason) => println!("❌ {}: {}", reason.title(), reason),
        }
    }

    if verdict.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn load_checker(dict: &Path) -> Box<dyn SpellChecker> {
    match WordSetChecker::from_file(dict) {
        Ok(checker) => Box::new(checker),
        Err(err) => {
            warn!(%err, "no dictionary available, accepting any word");
            Box::new(PermissiveChecker)
        }
    }
}
