//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.langsysrc.json` configuration file
//! - `check`: Report failed imports and untranslated entries
//! - `languages` / `keys`: List catalog contents
//! - `get`: Look up (and format) a translation
//! - `put`, `remove`, `remove-key`, `add-language`: Edit the catalog in place
//! - `export`: Write the flattened catalog document

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Common args of the selected command, if it has any.
    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Languages(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Get(cmd)) => Some(&cmd.common),
            Some(Command::Put(cmd)) => Some(&cmd.common),
            Some(Command::Remove(cmd)) => Some(&cmd.common),
            Some(Command::RemoveKey(cmd)) => Some(&cmd.common),
            Some(Command::AddLanguage(cmd)) => Some(&cmd.common),
            Some(Command::Export(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by catalog commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Catalog document (overrides config file)
    #[arg(long, env = "LANGSYS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Fail on load/save errors instead of continuing (overrides config file)
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Language to list keys for
    pub language: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Translation key
    pub key: String,
    /// Values for $1, $2, ... placeholders
    pub values: Vec<String>,
    /// Language to look up (default: configured default language)
    #[arg(long, short)]
    pub lang: Option<String>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PutCommand {
    pub language: String,
    pub key: String,
    pub value: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveCommand {
    pub language: String,
    /// Remove only this key's translation (default: the whole language)
    pub key: Option<String>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveKeyCommand {
    pub key: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddLanguageCommand {
    pub language: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langsysrc.json configuration file
    Init,
    /// Check the catalog for failed imports and untranslated entries
    Check(CheckCommand),
    /// List catalog languages
    Languages(LanguagesCommand),
    /// List the keys of a language
    Keys(KeysCommand),
    /// Look up a translation and substitute placeholders
    Get(GetCommand),
    /// Set a translation (creates the language and catalog if needed)
    Put(PutCommand),
    /// Remove a language, or one translation of a language
    Remove(RemoveCommand),
    /// Remove a key from every language
    RemoveKey(RemoveKeyCommand),
    /// Add an empty language
    AddLanguage(AddLanguageCommand),
    /// Export the flattened catalog document
    Export(ExportCommand),
}
