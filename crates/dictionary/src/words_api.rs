// https://fourtytwowords.herokuapp.com - definitions, related words, examples, random word
// every endpoint wants the api key as a query parameter

use reqwest::{StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, instrument};

use crate::{DictionaryError, RelatedWords, Relationship};

pub const DEFAULT_API_URL: &str = "https://fourtytwowords.herokuapp.com";

#[derive(Debug, Deserialize)]
pub(crate) struct DefinitionEntry {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelatedEntry {
    relationship_type: String,
    #[serde(default)]
    words: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExamplesBody {
    #[serde(default)]
    examples: Vec<ExampleEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExampleEntry {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Where the words API lives and the key it expects.
#[derive(Debug, Clone)]
pub(crate) struct ApiLocation {
    base_url: Url,
    api_key: String,
}

impl ApiLocation {
    pub(crate) fn new(base_url: &str, api_key: String) -> Result<Self, DictionaryError> {
        let parsed = Url::parse(base_url)
            .map_err(|_| DictionaryError::InvalidBaseUrl(base_url.to_owned()))?;
        if parsed.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            base_url: parsed,
            api_key,
        })
    }

    /// Appends `segments` to the base path, each one percent-encoded on its own.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    api: &ApiLocation,
    segments: &[&str],
) -> Result<T, DictionaryError> {
    let url = api.url(segments);
    debug!(%url, "requesting words api");
    let res: reqwest::Response = client
        .get(url)
        .query(&[("api_key", &api.api_key)])
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        let message = match res.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        return Err(error_for_status(status, message));
    }
    res.json::<T>().await.map_err(DictionaryError::Deserialize)
}

fn error_for_status(status: StatusCode, message: String) -> DictionaryError {
    match status {
        // the api answers unknown words with a 400 and an `error` body
        StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => DictionaryError::NotFound(message),
        other => DictionaryError::Status {
            status: other.as_u16(),
            message,
        },
    }
}

#[instrument(skip(client, api))]
pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    api: &ApiLocation,
    word: &str,
) -> Result<Vec<String>, DictionaryError> {
    let entries: Vec<DefinitionEntry> =
        get_json(client, api, &["word", word, "definitions"]).await?;
    Ok(definitions_from(entries))
}

#[instrument(skip(client, api))]
pub(crate) async fn get_related_words(
    client: &reqwest::Client,
    api: &ApiLocation,
    word: &str,
) -> Result<RelatedWords, DictionaryError> {
    let entries: Vec<RelatedEntry> =
        get_json(client, api, &["word", word, "relatedWords"]).await?;
    Ok(related_from(entries))
}

#[instrument(skip(client, api))]
pub(crate) async fn get_examples(
    client: &reqwest::Client,
    api: &ApiLocation,
    word: &str,
) -> Result<Vec<String>, DictionaryError> {
    let body: ExamplesBody = get_json(client, api, &["word", word, "examples"]).await?;
    Ok(examples_from(body))
}

fn definitions_from(entries: Vec<DefinitionEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.text).collect()
}

fn examples_from(body: ExamplesBody) -> Vec<String> {
    body.examples.into_iter().map(|entry| entry.text).collect()
}

fn related_from(entries: Vec<RelatedEntry>) -> RelatedWords {
    let mut related = RelatedWords::default();
    for entry in entries {
        if entry.relationship_type == Relationship::Synonym.as_api_str() {
            related.synonyms.extend(entry.words);
        } else if entry.relationship_type == Relationship::Antonym.as_api_str() {
            related.antonyms.extend(entry.words);
        }
    }
    related
}
