//! Dispatch a parsed command line to its command handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        check::check,
        edit::{add_language, put, remove, remove_key},
        export::export,
        init::init,
        query::{get, keys, languages},
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Put(cmd)) => put(cmd),
        Some(Command::Remove(cmd)) => remove(cmd),
        Some(Command::RemoveKey(cmd)) => remove_key(cmd),
        Some(Command::AddLanguage(cmd)) => add_language(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
