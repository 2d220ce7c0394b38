use crate::core::strings::is_vowel;
use crate::domain::model::{LetterCounts, TextStats};

impl TextStats {
    /// Words are runs of anything other than space, newline and tab. A final
    /// line without a trailing newline still counts as a line.
    pub fn from_text(text: &str) -> Self {
        let mut stats = TextStats::default();
        let mut in_word = false;
        let mut last = None;

        for c in text.chars() {
            stats.characters += 1;
            if c == '\n' {
                stats.lines += 1;
            }
            if matches!(c, ' ' | '\n' | '\t') {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
            last = Some(c);
        }

        if last.is_some_and(|c| c != '\n') {
            stats.lines += 1;
        }
        stats
    }
}

impl LetterCounts {
    /// Only ASCII letters count; digits and symbols are ignored.
    pub fn from_text(text: &str) -> Self {
        text.chars()
            .filter(char::is_ascii_alphabetic)
            .fold(LetterCounts::default(), |mut counts, c| {
                if is_vowel(c) {
                    counts.vowels += 1;
                } else {
                    counts.consonants += 1;
                }
                counts
            })
    }
}
