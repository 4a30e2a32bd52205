use async_trait::async_trait;
use random_word_api::get_random_word;
use words_api::{get_definitions, get_examples, get_related_words, ApiLocation};

mod dictionary;
mod random_word_api;
mod words_api;

use dictionary::Relationship;

pub use dictionary::{RelatedWords, WordProfile};
pub use words_api::DEFAULT_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("{0:?} is not a usable api url")]
    InvalidBaseUrl(String),
    #[error("failed to reach the words api: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected response from the words api: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("the words api answered {status}: {message}")]
    Status { status: u16, message: String },
}

/// Source of lexical data for a word.
///
/// Implementors only have to provide the four raw lookups, the per-relationship
/// accessors and [`LexicalProvider::profile`] are built on top of them.
#[async_trait]
pub trait LexicalProvider: Send + Sync {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, DictionaryError>;

    async fn related_words(&self, word: &str) -> Result<RelatedWords, DictionaryError>;

    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError>;

    async fn random_word(&self) -> Result<String, DictionaryError>;

    async fn synonyms(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        Ok(self.related_words(word).await?.synonyms)
    }

    async fn antonyms(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        Ok(self.related_words(word).await?.antonyms)
    }

    /// Definitions, synonyms and antonyms in one go. Fails if either lookup fails.
    async fn profile(&self, word: &str) -> Result<WordProfile, DictionaryError> {
        let (definitions, related) =
            futures::try_join!(self.definitions(word), self.related_words(word))?;
        Ok(WordProfile {
            word: word.to_owned(),
            definitions,
            synonyms: related.synonyms,
            antonyms: related.antonyms,
        })
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    api: ApiLocation,
}

impl Dictionary {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, DictionaryError> {
        Ok(Self {
            client: reqwest::Client::new(),
            api: ApiLocation::new(base_url, api_key.into())?,
        })
    }
}

#[async_trait]
impl LexicalProvider for Dictionary {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        get_definitions(&self.client, &self.api, word).await
    }

    async fn related_words(&self, word: &str) -> Result<RelatedWords, DictionaryError> {
        get_related_words(&self.client, &self.api, word).await
    }

    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        get_examples(&self.client, &self.api, word).await
    }

    async fn random_word(&self) -> Result<String, DictionaryError> {
        get_random_word(&self.client, &self.api).await
    }
}
