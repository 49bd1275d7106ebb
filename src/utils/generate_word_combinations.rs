use crate::types::WordCombination;

/// Generates every contiguous run of whitespace-delimited words in `text`.
///
/// Single words come first, left to right. Then, for each starting word, the runs beginning there
/// are extended one word at a time. For `"the brown fox"` this yields
/// `["the", "brown", "fox", "the brown", "the brown fox", "brown fox"]`.
///
/// An `n`-word input produces exactly `n * (n + 1) / 2` combinations. The order matters: matching
/// is first-match-wins, so callers rely on it being stable.
pub fn generate_word_combinations(text: &str) -> Vec<WordCombination> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let total = words.len() * (words.len() + 1) / 2;

    let mut combinations: Vec<WordCombination> = Vec::with_capacity(total);
    combinations.extend(words.iter().map(|word| word.to_string()));

    for (i, first_word) in words.iter().enumerate() {
        let mut combo = first_word.to_string();

        for next_word in &words[i + 1..] {
            combo.push(' ');
            combo.push_str(next_word);
            combinations.push(combo.clone());
        }
    }

    combinations
}
