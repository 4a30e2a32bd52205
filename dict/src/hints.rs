use std::fmt;

use dictionary::WordProfile;
use rand::{seq::SliceRandom, Rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    Definition,
    Synonym,
    JumbledSpelling,
    Antonym,
}

// antonym last, so the kinds without it are a prefix
static KINDS: [HintKind; 4] = [
    HintKind::Definition,
    HintKind::Synonym,
    HintKind::JumbledSpelling,
    HintKind::Antonym,
];

impl HintKind {
    /// The kinds a random hint may be drawn from.
    pub fn enabled(antonyms_available: bool) -> &'static [HintKind] {
        if antonyms_available {
            &KINDS
        } else {
            &KINDS[..3]
        }
    }

    pub fn choose<R: Rng + ?Sized>(rng: &mut R, antonyms_available: bool) -> HintKind {
        let kinds = Self::enabled(antonyms_available);
        kinds[rng.gen_range(0..kinds.len())]
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HintKind::Definition => "definition",
            HintKind::Synonym => "synonym",
            HintKind::JumbledSpelling => "jumbled spelling",
            HintKind::Antonym => "antonym",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Definition(String),
    Synonym(String),
    Antonym(String),
    JumbledSpelling(String),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Definition(text) => write!(f, "The word you are looking for means: {text}"),
            Hint::Synonym(text) => write!(f, "A synonym of the word is '{text}'."),
            Hint::Antonym(text) => write!(f, "An antonym of the word is '{text}'."),
            Hint::JumbledSpelling(text) => write!(f, "The letters of the word, jumbled: {text}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("there is no {kind} to give as a hint")]
pub struct EmptyPoolError {
    pub kind: HintKind,
}

fn draw<'a, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &'a [String],
    kind: HintKind,
) -> Result<&'a str, EmptyPoolError> {
    if pool.is_empty() {
        return Err(EmptyPoolError { kind });
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}

pub fn definition_hint<R: Rng + ?Sized>(
    rng: &mut R,
    definitions: &[String],
) -> Result<Hint, EmptyPoolError> {
    draw(rng, definitions, HintKind::Definition).map(|text| Hint::Definition(text.to_owned()))
}

pub fn synonym_hint<R: Rng + ?Sized>(
    rng: &mut R,
    synonyms: &[String],
) -> Result<Hint, EmptyPoolError> {
    draw(rng, synonyms, HintKind::Synonym).map(|text| Hint::Synonym(text.to_owned()))
}

pub fn antonym_hint<R: Rng + ?Sized>(
    rng: &mut R,
    antonyms: &[String],
) -> Result<Hint, EmptyPoolError> {
    draw(rng, antonyms, HintKind::Antonym).map(|text| Hint::Antonym(text.to_owned()))
}

/// Shuffles the characters of `word`. The result may happen to equal `word`.
pub fn jumbled_hint<R: Rng + ?Sized>(rng: &mut R, word: &str) -> Hint {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    Hint::JumbledSpelling(letters.into_iter().collect())
}

pub fn generate<R: Rng + ?Sized>(
    kind: HintKind,
    profile: &WordProfile,
    rng: &mut R,
) -> Result<Hint, EmptyPoolError> {
    match kind {
        HintKind::Definition => definition_hint(rng, &profile.definitions),
        HintKind::Synonym => synonym_hint(rng, &profile.synonyms),
        HintKind::Antonym => antonym_hint(rng, &profile.antonyms),
        HintKind::JumbledSpelling => Ok(jumbled_hint(rng, &profile.word)),
    }
}
