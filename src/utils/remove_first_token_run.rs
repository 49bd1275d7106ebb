/// Removes the first contiguous run of `tokens` whose words equal the words of `combo`.
///
/// Matching is on whole tokens, so `"inc"` never matches inside `"lincoln"`, and the amount of
/// whitespace between words in the source name is irrelevant. Returns whether a run was removed.
pub fn remove_first_token_run(tokens: &mut Vec<&str>, combo: &str) -> bool {
    let combo_words: Vec<&str> = combo.split_whitespace().collect();
    if combo_words.is_empty() || combo_words.len() > tokens.len() {
        return false;
    }

    match tokens
        .windows(combo_words.len())
        .position(|window| window == combo_words.as_slice())
    {
        Some(start) => {
            tokens.drain(start..start + combo_words.len());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_whole_tokens_only() {
        let mut tokens = vec!["lincoln", "inc"];
        assert!(remove_first_token_run(&mut tokens, "inc"));
        assert_eq!(tokens, vec!["lincoln"]);
    }

    #[test]
    fn test_removes_first_run_only() {
        let mut tokens = vec!["inc", "holdings", "inc"];
        assert!(remove_first_token_run(&mut tokens, "inc"));
        assert_eq!(tokens, vec!["holdings", "inc"]);
    }

    #[test]
    fn test_removes_multi_word_run() {
        let mut tokens = vec!["long", "island", "fishing", "llc"];
        assert!(remove_first_token_run(&mut tokens, "long island"));
        assert_eq!(tokens, vec!["fishing", "llc"]);
    }

    #[test]
    fn test_missing_run_leaves_tokens() {
        let mut tokens = vec!["sage", "group"];
        assert!(!remove_first_token_run(&mut tokens, "ag"));
        assert!(!remove_first_token_run(&mut tokens, "sage group plc"));
        assert!(!remove_first_token_run(&mut tokens, ""));
        assert_eq!(tokens, vec!["sage", "group"]);
    }
}
