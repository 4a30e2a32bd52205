use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::Config;
use console::{Console, Terminal};
use details::{full_details, lookup, word_of_the_day, Section};
use dictionary::LexicalProvider;
use game::GameEngine;
use rand::{rngs::StdRng, SeedableRng};

mod config;
mod console;
mod details;
mod game;
mod guess;
mod hints;
mod logging;
#[cfg(test)]
mod testing;
mod utilities;

/// Look up words, or guess one from its hints.
///
/// Without a command, shows the word of the day. With a single word, shows
/// everything known about it.
#[derive(Debug, Parser)]
#[command(name = "dict", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Definitions of a word
    Defn { word: String },
    /// Synonyms of a word
    Syn { word: String },
    /// Antonyms of a word
    Ant { word: String },
    /// Usage examples of a word
    Ex { word: String },
    /// Guess a word from hints, a random one unless given
    Play { word: Option<String> },
    #[command(external_subcommand)]
    Word(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_tracing();
    let cli = Cli::parse();
    let config = Config::from_env()?;
    let dict = config.dictionary()?;
    Ok(run(cli.command, &dict, &mut Terminal).await.into())
}

async fn run<P, C>(command: Option<Command>, dict: &P, console: &mut C) -> Status
where
    P: LexicalProvider + ?Sized,
    C: Console + ?Sized,
{
    match command {
        None => {
            if let Err(error) = word_of_the_day(dict, console).await {
                console.emit(&format!("Could not pick a word of the day: {error}"));
                return Status::Failure;
            }
        }
        Some(Command::Defn { word }) => lookup(dict, console, Section::Definitions, &word).await,
        Some(Command::Syn { word }) => lookup(dict, console, Section::Synonyms, &word).await,
        Some(Command::Ant { word }) => lookup(dict, console, Section::Antonyms, &word).await,
        Some(Command::Ex { word }) => lookup(dict, console, Section::Examples, &word).await,
        Some(Command::Play { word }) => {
            let mut engine = GameEngine::new(dict, console, StdRng::from_entropy());
            let result = match word {
                Some(word) => engine.play(&word).await,
                None => engine.play_random().await,
            };
            if result.is_err() {
                return Status::Failure;
            }
        }
        Some(Command::Word(words)) => match words.as_slice() {
            [word] => full_details(dict, console, word).await,
            _ => {
                let command = words.first().map_or("", String::as_str);
                console.emit(&format!("{command} is an invalid command."));
                return Status::Failure;
            }
        },
    }
    Status::Success
}
