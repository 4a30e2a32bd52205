/// Whether `submitted` wins the round.
///
/// Surrounding whitespace is ignored, case is not. Pass only the synonyms that
/// have not been revealed as hints yet: a revealed synonym is not a win.
pub fn evaluate<I, S>(submitted: &str, target: &str, unused_synonyms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let guess = submitted.trim();
    guess == target
        || unused_synonyms
            .into_iter()
            .any(|synonym| synonym.as_ref() == guess)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn target_word_always_wins() {
        assert!(evaluate("happy", "happy", ["glad", "content"]));
        assert!(evaluate("happy", "happy", NONE));
        assert!(evaluate("  happy\n", "happy", ["happy"]));
    }

    #[test]
    fn unused_synonyms_win() {
        for synonym in ["glad", "content"] {
            assert!(evaluate(synonym, "happy", ["glad", "content"]));
        }
    }

    #[test]
    fn revealed_synonyms_do_not_win() {
        // "glad" was given as a hint, so only "content" is still unused
        assert!(!evaluate("glad", "happy", ["content"]));
        assert!(evaluate("content", "happy", ["content"]));
    }

    #[test]
    fn no_case_folding() {
        assert!(!evaluate("Happy", "happy", ["glad"]));
        assert!(!evaluate("GLAD", "happy", ["glad"]));
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert!(!evaluate("hap py", "happy", NONE));
        assert!(!evaluate("", "happy", ["glad"]));
    }
}
