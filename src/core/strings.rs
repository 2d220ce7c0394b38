use crate::domain::model::{CharClassCounts, LetterKind};

pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `None` for anything that is not an ASCII letter.
pub fn classify_letter(c: char) -> Option<LetterKind> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    Some(if is_vowel(c) {
        LetterKind::Vowel
    } else {
        LetterKind::Consonant
    })
}

pub fn count_char_classes(s: &str) -> CharClassCounts {
    s.chars().fold(CharClassCounts::default(), |mut counts, c| {
        if c == ' ' {
            counts.spaces += 1;
        } else if c.is_ascii_digit() {
            counts.digits += 1;
        } else if c.is_ascii_punctuation() {
            counts.special += 1;
        }
        counts
    })
}

pub fn are_anagrams(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut freq = [0i32; 256];
    for (x, y) in a.bytes().zip(b.bytes()) {
        freq[x as usize] += 1;
        freq[y as usize] -= 1;
    }
    freq.iter().all(|&f| f == 0)
}

/// First word of maximal length, words being separated by single spaces.
pub fn longest_word(s: &str) -> Option<&str> {
    let mut best: Option<&str> = None;
    for word in s.split(' ').filter(|w| !w.is_empty()) {
        if best.map_or(true, |b| word.chars().count() > b.chars().count()) {
            best = Some(word);
        }
    }
    best
}

/// Reverses every word in place; spacing and word order are unchanged.
pub fn reverse_each_word(s: &str) -> String {
    s.split(' ')
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split(' ').filter(|w| !w.is_empty())
}

pub fn initials(name: &str) -> String {
    words(name).filter_map(|w| w.chars().next()).collect()
}

/// "John Ronald Tolkien" becomes "J. R. Tolkien".
pub fn initials_with_surname(name: &str) -> String {
    let parts: Vec<&str> = words(name).collect();
    let Some((surname, given)) = parts.split_last() else {
        return String::new();
    };
    let mut out = String::new();
    for word in given {
        if let Some(c) = word.chars().next() {
            out.push(c);
            out.push_str(". ");
        }
    }
    out.push_str(surname);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_letter() {
        assert_eq!(classify_letter('a'), Some(LetterKind::Vowel));
        assert_eq!(classify_letter('E'), Some(LetterKind::Vowel));
        assert_eq!(classify_letter('z'), Some(LetterKind::Consonant));
        assert_eq!(classify_letter('7'), None);
        assert_eq!(classify_letter('é'), None);
    }

    #[test]
    fn test_count_char_classes() {
        let counts = count_char_classes("Hi there, 42 @home!");
        assert_eq!(
            counts,
            CharClassCounts {
                spaces: 3,
                digits: 2,
                special: 3,
            }
        );
    }

    #[test]
    fn test_anagrams() {
        assert!(are_anagrams("listen", "silent"));
        assert!(!are_anagrams("listen", "silents"));
        assert!(!are_anagrams("abc", "abd"));
        assert!(are_anagrams("", ""));
    }

    #[test]
    fn test_longest_word_keeps_first_on_tie() {
        assert_eq!(longest_word("the quick brown fox"), Some("quick"));
        assert_eq!(longest_word("  a  bb "), Some("bb"));
        assert_eq!(longest_word("   "), None);
    }

    #[test]
    fn test_reverse_each_word() {
        assert_eq!(reverse_each_word("hello world"), "olleh dlrow");
        assert_eq!(reverse_each_word("ab  cd"), "ba  dc");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Ronald Tolkien"), "JRT");
        assert_eq!(initials("  ada   lovelace"), "al");
    }

    #[test]
    fn test_initials_with_surname() {
        assert_eq!(initials_with_surname("John Ronald Tolkien"), "J. R. Tolkien");
        assert_eq!(initials_with_surname("Plato"), "Plato");
        assert_eq!(initials_with_surname(""), "");
    }
}
