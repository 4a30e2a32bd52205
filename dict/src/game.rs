use std::collections::HashSet;
use std::io;

use dictionary::{DictionaryError, LexicalProvider, WordProfile};
use rand::Rng;
use tracing::{info, warn};

use crate::console::Console;
use crate::details::full_details;
use crate::guess::evaluate;
use crate::hints::{EmptyPoolError, Hint, HintKind};

/// How many random words `play_random` tries before giving up.
pub const MAX_WORD_DRAWS: usize = 5;

const GUESS_PROMPT: &str = "Your guess: ";
const MENU_PROMPT: &str = "Choose an option (1-3): ";
const MENU_CHOICES: [&str; 3] = ["1", "2", "3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Provider(#[from] DictionaryError),
    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),
    #[error("'{word}' has no {missing} to start a game with")]
    InsufficientData { word: String, missing: &'static str },
    #[error("no playable word turned up in {attempts} random draws")]
    NoPlayableWord { attempts: usize },
    #[error("could not read your input: {0}")]
    Input(#[from] io::Error),
}

/// State of one play-through, from the opening hints to a win or a quit.
#[derive(Debug)]
pub struct GameSession {
    profile: WordProfile,
    used_synonyms: HashSet<String>,
    antonyms_available: bool,
    outcome: Outcome,
}

impl GameSession {
    /// Fails unless there is at least one definition and one synonym, the
    /// opening hints need both.
    pub fn new(profile: WordProfile) -> Result<Self, GameError> {
        let missing = if profile.definitions.is_empty() {
            Some("definitions")
        } else if profile.synonyms.is_empty() {
            Some("synonyms")
        } else {
            None
        };
        if let Some(missing) = missing {
            return Err(GameError::InsufficientData {
                word: profile.word,
                missing,
            });
        }
        Ok(Self {
            antonyms_available: profile.has_antonyms(),
            profile,
            used_synonyms: HashSet::new(),
            outcome: Outcome::InProgress,
        })
    }

    pub fn target(&self) -> &str {
        &self.profile.word
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn antonyms_available(&self) -> bool {
        self.antonyms_available
    }

    pub fn used_synonyms(&self) -> &HashSet<String> {
        &self.used_synonyms
    }

    /// Synonyms that still count as a correct guess.
    pub fn unused_synonyms(&self) -> impl Iterator<Item = &str> + '_ {
        self.profile
            .synonyms
            .iter()
            .filter(|synonym| !self.used_synonyms.contains(*synonym))
            .map(String::as_str)
    }

    /// A hint of the given kind. Synonym hints stop counting as winning guesses.
    pub fn hint<R: Rng + ?Sized>(
        &mut self,
        kind: HintKind,
        rng: &mut R,
    ) -> Result<Hint, EmptyPoolError> {
        let hint = crate::hints::generate(kind, &self.profile, rng)?;
        if let Hint::Synonym(synonym) = &hint {
            self.used_synonyms.insert(synonym.clone());
        }
        Ok(hint)
    }

    /// One definition, then one synonym.
    pub fn opening_hints<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<[Hint; 2], EmptyPoolError> {
        let definition = self.hint(HintKind::Definition, rng)?;
        let synonym = self.hint(HintKind::Synonym, rng)?;
        Ok([definition, synonym])
    }

    pub fn random_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hint, EmptyPoolError> {
        let kind = HintKind::choose(rng, self.antonyms_available);
        self.hint(kind, rng)
    }

    /// Checks a guess and records a win. Guesses after the game ended never win.
    pub fn guess(&mut self, submitted: &str) -> bool {
        if self.outcome != Outcome::InProgress {
            return false;
        }
        let correct = evaluate(submitted, self.target(), self.unused_synonyms());
        if correct {
            self.outcome = Outcome::Won;
        }
        correct
    }

    pub fn quit(&mut self) {
        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::Quit;
        }
    }
}

pub struct GameEngine<'a, P: ?Sized, C: ?Sized, R> {
    provider: &'a P,
    console: &'a mut C,
    rng: R,
}

impl<'a, P, C, R> GameEngine<'a, P, C, R>
where
    P: LexicalProvider + ?Sized,
    C: Console + ?Sized,
    R: Rng,
{
    pub fn new(provider: &'a P, console: &'a mut C, rng: R) -> Self {
        Self {
            provider,
            console,
            rng,
        }
    }

    /// Plays one game for `word`. Errors are reported on the console before
    /// being returned.
    pub async fn play(&mut self, word: &str) -> Result<Outcome, GameError> {
        let result = match self.start(word).await {
            Ok(session) => self.run(session).await,
            Err(error) => Err(error),
        };
        self.report(result)
    }

    /// Plays one game for a random word, drawing again when a word cannot be
    /// played.
    pub async fn play_random(&mut self) -> Result<Outcome, GameError> {
        let result = self.play_random_word().await;
        self.report(result)
    }

    async fn play_random_word(&mut self) -> Result<Outcome, GameError> {
        for attempt in 1..=MAX_WORD_DRAWS {
            let word = self.provider.random_word().await?;
            match self.start(&word).await {
                Ok(session) => return self.run(session).await,
                Err(
                    error @ (GameError::InsufficientData { .. }
                    | GameError::Provider(DictionaryError::NotFound(_))),
                ) => {
                    warn!(attempt, %word, %error, "skipping unplayable word");
                }
                Err(error) => return Err(error),
            }
        }
        Err(GameError::NoPlayableWord {
            attempts: MAX_WORD_DRAWS,
        })
    }

    async fn start(&mut self, word: &str) -> Result<GameSession, GameError> {
        let profile = self.provider.profile(word).await?;
        let session = GameSession::new(profile)?;
        info!(
            word,
            antonyms = session.antonyms_available(),
            "starting a game"
        );
        Ok(session)
    }

    async fn run(&mut self, mut session: GameSession) -> Result<Outcome, GameError> {
        self.console.emit("Guess the word! Here are your first two hints:");
        for hint in session.opening_hints(&mut self.rng)? {
            self.console.emit(&hint.to_string());
        }

        while session.outcome() == Outcome::InProgress {
            let guess = self.console.read_line(GUESS_PROMPT)?;
            if session.guess(&guess) {
                break;
            }
            self.console.emit("That's not the word.");
            self.console.emit("1. Try again");
            self.console.emit("2. Get another hint");
            self.console.emit("3. Quit");
            match self.console.prompt_choice(MENU_PROMPT, &MENU_CHOICES)?.as_str() {
                "1" => {}
                "2" => {
                    let hint = session.random_hint(&mut self.rng)?;
                    self.console.emit(&hint.to_string());
                }
                _ => session.quit(),
            }
        }

        let word = session.target().to_owned();
        if session.outcome() == Outcome::Won {
            self.console.emit("Correct! You guessed the word.");
        } else {
            self.console.emit(&format!("The word was '{word}'."));
            full_details(self.provider, &mut *self.console, &word).await;
        }
        info!(
            %word,
            outcome = ?session.outcome(),
            synonyms_revealed = session.used_synonyms().len(),
            "game over"
        );
        Ok(session.outcome())
    }

    fn report(&mut self, result: Result<Outcome, GameError>) -> Result<Outcome, GameError> {
        if let Err(error) = &result {
            warn!(%error, "game aborted");
            self.console.emit(&format!("The game ended early: {error}"));
        }
        result
    }
}
