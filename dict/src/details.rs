use dictionary::{DictionaryError, LexicalProvider};
use tracing::warn;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Definitions,
    Synonyms,
    Antonyms,
    Examples,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Definitions => "Definitions",
            Section::Synonyms => "Synonyms",
            Section::Antonyms => "Antonyms",
            Section::Examples => "Examples",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Section::Definitions => "definitions",
            Section::Synonyms => "synonyms",
            Section::Antonyms => "antonyms",
            Section::Examples => "examples",
        }
    }
}

async fn fetch<P: LexicalProvider + ?Sized>(
    provider: &P,
    section: Section,
    word: &str,
) -> Result<Vec<String>, DictionaryError> {
    match section {
        Section::Definitions => provider.definitions(word).await,
        Section::Synonyms => provider.synonyms(word).await,
        Section::Antonyms => provider.antonyms(word).await,
        Section::Examples => provider.examples(word).await,
    }
}

/// Prints one section. A failed lookup is reported as a line, never propagated.
pub fn show<C: Console + ?Sized>(
    console: &mut C,
    section: Section,
    word: &str,
    result: Result<Vec<String>, DictionaryError>,
) {
    match result {
        Ok(entries) if entries.is_empty() => {
            console.emit(&format!("No {} found for '{word}'.", section.noun()));
        }
        Ok(entries) => {
            console.emit(&format!("{} of '{word}':", section.title()));
            for (index, entry) in entries.iter().enumerate() {
                console.emit(&format!("  {}. {entry}", index + 1));
            }
        }
        Err(error) => {
            warn!(%error, word, section = section.noun(), "lookup failed");
            console.emit(&format!(
                "Could not look up {} for '{word}': {error}",
                section.noun()
            ));
        }
    }
}

pub async fn lookup<P, C>(provider: &P, console: &mut C, section: Section, word: &str)
where
    P: LexicalProvider + ?Sized,
    C: Console + ?Sized,
{
    let result = fetch(provider, section, word).await;
    show(console, section, word, result);
}

/// Definitions, synonyms, antonyms and examples, each looked up on its own.
pub async fn full_details<P, C>(provider: &P, console: &mut C, word: &str)
where
    P: LexicalProvider + ?Sized,
    C: Console + ?Sized,
{
    let (definitions, synonyms, antonyms, examples) = futures::join!(
        fetch(provider, Section::Definitions, word),
        fetch(provider, Section::Synonyms, word),
        fetch(provider, Section::Antonyms, word),
        fetch(provider, Section::Examples, word),
    );
    show(console, Section::Definitions, word, definitions);
    show(console, Section::Synonyms, word, synonyms);
    show(console, Section::Antonyms, word, antonyms);
    show(console, Section::Examples, word, examples);
}

pub async fn word_of_the_day<P, C>(provider: &P, console: &mut C) -> Result<(), DictionaryError>
where
    P: LexicalProvider + ?Sized,
    C: Console + ?Sized,
{
    let word = provider.random_word().await?;
    console.emit(&format!("The word of the day is '{word}'."));
    full_details(provider, console, &word).await;
    Ok(())
}
