/// Everything the guessing game needs to know about one word.
///
/// Synonyms and antonyms may legitimately be empty, the API simply has no
/// related words of that kind for some entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordProfile {
    pub word: String,
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl WordProfile {
    pub fn has_antonyms(&self) -> bool {
        !self.antonyms.is_empty()
    }
}

/// Synonyms and antonyms as returned together by the related words endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedWords {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relationship {
    Synonym,
    Antonym,
}

impl Relationship {
    pub(crate) fn as_api_str(self) -> &'static str {
        match self {
            Relationship::Synonym => "synonym",
            Relationship::Antonym => "antonym",
        }
    }
}
