// the words api hands out one random word per request, with no filtering by
// length or kind, so callers that need a playable word may have to ask again

use serde::Deserialize;
use tracing::instrument;

use crate::words_api::{get_json, ApiLocation};
use crate::DictionaryError;

#[derive(Debug, Deserialize)]
struct RandomWordBody {
    word: String,
}

#[instrument(skip_all)]
pub(crate) async fn get_random_word(
    client: &reqwest::Client,
    api: &ApiLocation,
) -> Result<String, DictionaryError> {
    let body: RandomWordBody = get_json(client, api, &["words", "randomWord"]).await?;
    Ok(body.word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_random_word_body() {
        let body: RandomWordBody =
            serde_json::from_str(r#"{"id": 14210, "word": "quixotic"}"#).unwrap();
        assert_eq!(body.word, "quixotic");
    }
}
