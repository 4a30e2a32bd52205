//! In-memory stand-ins for the words API and the terminal.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dictionary::{DictionaryError, LexicalProvider, RelatedWords};

use crate::console::Console;

struct Entry {
    definitions: Vec<String>,
    related: Option<RelatedWords>,
    examples: Vec<String>,
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    entries: HashMap<String, Entry>,
    random_words: Mutex<VecDeque<String>>,
    example_lookups: AtomicUsize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl FakeProvider {
    pub(crate) fn with_word(
        mut self,
        word: &str,
        definitions: &[&str],
        synonyms: &[&str],
        antonyms: &[&str],
        examples: &[&str],
    ) -> Self {
        self.entries.insert(
            word.to_owned(),
            Entry {
                definitions: owned(definitions),
                related: Some(RelatedWords {
                    synonyms: owned(synonyms),
                    antonyms: owned(antonyms),
                }),
                examples: owned(examples),
            },
        );
        self
    }

    /// A word whose related words lookup fails.
    pub(crate) fn without_related(mut self, word: &str, definitions: &[&str]) -> Self {
        self.entries.insert(
            word.to_owned(),
            Entry {
                definitions: owned(definitions),
                related: None,
                examples: Vec::new(),
            },
        );
        self
    }

    pub(crate) fn with_random_words(self, words: &[&str]) -> Self {
        *self.random_words.lock().unwrap() = owned(words).into();
        self
    }

    /// The scenario word used across the game tests.
    pub(crate) fn happy() -> Self {
        Self::default().with_word(
            "happy",
            &["feeling joy"],
            &["glad", "content"],
            &["sad"],
            &["She was happy to help."],
        )
    }

    pub(crate) fn example_lookups(&self) -> usize {
        self.example_lookups.load(Ordering::SeqCst)
    }

    fn entry(&self, word: &str) -> Result<&Entry, DictionaryError> {
        self.entries
            .get(word)
            .ok_or_else(|| DictionaryError::NotFound(format!("'{word}' is not in the dictionary")))
    }
}

#[async_trait]
impl LexicalProvider for FakeProvider {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        Ok(self.entry(word)?.definitions.clone())
    }

    async fn related_words(&self, word: &str) -> Result<RelatedWords, DictionaryError> {
        self.entry(word)?.related.clone().ok_or_else(|| DictionaryError::Status {
            status: 500,
            message: "related words are unavailable".to_owned(),
        })
    }

    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.example_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.entry(word)?.examples.clone())
    }

    async fn random_word(&self) -> Result<String, DictionaryError> {
        self.random_words
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DictionaryError::NotFound("out of random words".to_owned()))
    }
}

/// Plays back canned input and records everything emitted.
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
    pub(crate) lines: Vec<String>,
}

impl ScriptedConsole {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| format!("{line}\n")).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub(crate) fn printed(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub(crate) fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_owned());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of input")
        })
    }

    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
