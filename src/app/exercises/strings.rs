use crate::core::strings::{
    are_anagrams, classify_letter, count_char_classes, initials, initials_with_surname,
    longest_word, reverse_each_word,
};
use crate::domain::model::{LetterKind, Report};
use crate::domain::ports::Exercise;
use crate::utils::error::{DrillError, Result};
use crate::utils::input::Prompter;
use serde_json::json;
use std::io::{BufRead, Write};

pub struct VowelExercise;

impl Exercise for VowelExercise {
    type Input = char;

    fn name(&self) -> &'static str {
        "vowel"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter character: ")?;
        prompter.read_char("character")
    }

    fn solve(&self, c: Self::Input) -> Result<Report> {
        let kind = classify_letter(c).ok_or_else(|| {
            DrillError::invalid_input("Please enter an alphabet character.")
        })?;
        let shown = c.to_ascii_lowercase();
        let line = match kind {
            LetterKind::Vowel => format!("{} is a vowel.", shown),
            LetterKind::Consonant => format!("{} is a consonant.", shown),
        };
        Ok(Report::new(self.name(), json!({ "character": c, "kind": kind })).line(line))
    }
}

pub struct CharClassesExercise;

impl Exercise for CharClassesExercise {
    type Input = String;

    fn name(&self) -> &'static str {
        "char-classes"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a string: ")?;
        prompter.read_line("string")
    }

    fn solve(&self, text: Self::Input) -> Result<Report> {
        let counts = count_char_classes(&text);
        Ok(Report::new(self.name(), json!(counts))
            .line(format!("Spaces: {}", counts.spaces))
            .line(format!("Digits: {}", counts.digits))
            .line(format!("Special Characters: {}", counts.special)))
    }
}

pub struct AnagramExercise;

impl Exercise for AnagramExercise {
    type Input = (String, String);

    fn name(&self) -> &'static str {
        "anagram"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter first string: ")?;
        let first = prompter.read_line("first string")?;
        prompter.prompt("Enter second string: ")?;
        let second = prompter.read_line("second string")?;
        Ok((first, second))
    }

    fn solve(&self, (first, second): Self::Input) -> Result<Report> {
        let anagrams = are_anagrams(&first, &second);
        let verdict = if anagrams {
            "Strings are anagrams."
        } else {
            "Strings are not anagrams."
        };
        Ok(Report::new(self.name(), json!({ "anagrams": anagrams })).line(verdict))
    }
}

pub struct LongestWordExercise;

impl Exercise for LongestWordExercise {
    type Input = String;

    fn name(&self) -> &'static str {
        "longest-word"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a sentence: ")?;
        prompter.read_line("sentence")
    }

    fn solve(&self, sentence: Self::Input) -> Result<Report> {
        let word = longest_word(&sentence).ok_or_else(|| DrillError::EmptyInputError {
            what: "sentence".to_string(),
        })?;
        Ok(Report::new(self.name(), json!({ "longest": word }))
            .line(format!("The longest word is: {}", word)))
    }
}

pub struct ReverseWordsExercise;

impl Exercise for ReverseWordsExercise {
    type Input = String;

    fn name(&self) -> &'static str {
        "reverse-words"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a sentence: ")?;
        prompter.read_line("sentence")
    }

    fn solve(&self, sentence: Self::Input) -> Result<Report> {
        let reversed = reverse_each_word(&sentence);
        let line = format!("Reversed words sentence: {}", reversed);
        Ok(Report::new(self.name(), json!({ "reversed": reversed })).line(line))
    }
}

pub struct InitialsExercise {
    pub with_surname: bool,
}

impl Exercise for InitialsExercise {
    type Input = String;

    fn name(&self) -> &'static str {
        if self.with_surname {
            "initials-surname"
        } else {
            "initials"
        }
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter your full name: ")?;
        prompter.read_line("name")
    }

    fn solve(&self, name: Self::Input) -> Result<Report> {
        let (label, value) = if self.with_surname {
            ("Initials with surname", initials_with_surname(&name))
        } else {
            ("Initials", initials(&name))
        };
        let line = format!("{}: {}", label, value);
        Ok(Report::new(self.name(), json!({ "initials": value })).line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::DrillEngine;
    use std::io::Cursor;

    fn run<E: Exercise>(exercise: E, input: &str) -> Result<Report> {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 256);
        DrillEngine::new(exercise).run(&mut prompter)
    }

    #[test]
    fn test_vowel_exercise() {
        assert_eq!(run(VowelExercise, "E\n").unwrap().lines, vec!["e is a vowel."]);
        assert_eq!(run(VowelExercise, "k\n").unwrap().lines, vec!["k is a consonant."]);
        assert!(run(VowelExercise, "4\n").is_err());
        assert!(run(VowelExercise, " e\n").is_err());
    }

    #[test]
    fn test_char_classes_exercise() {
        let report = run(CharClassesExercise, "a 1 #\n").unwrap();
        assert_eq!(
            report.lines,
            vec!["Spaces: 2", "Digits: 1", "Special Characters: 1"]
        );
    }

    #[test]
    fn test_anagram_exercise() {
        let report = run(AnagramExercise, "night\nthing\n").unwrap();
        assert_eq!(report.lines, vec!["Strings are anagrams."]);
    }

    #[test]
    fn test_sentence_exercises() {
        let report = run(LongestWordExercise, "I love programming\n").unwrap();
        assert_eq!(report.lines, vec!["The longest word is: programming"]);

        let report = run(ReverseWordsExercise, "I love Rust\n").unwrap();
        assert_eq!(report.lines, vec!["Reversed words sentence: I evol tsuR"]);
    }

    #[test]
    fn test_initials_exercises() {
        let report = run(InitialsExercise { with_surname: false }, "Mohandas Karamchand Gandhi\n")
            .unwrap();
        assert_eq!(report.lines, vec!["Initials: MKG"]);

        let report = run(InitialsExercise { with_surname: true }, "Mohandas Karamchand Gandhi\n")
            .unwrap();
        assert_eq!(report.lines, vec!["Initials with surname: M. K. Gandhi"]);
    }
}
