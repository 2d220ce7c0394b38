use serde::{Deserialize, Serialize};

/// One line of the student records file: `name roll_number marks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub roll_number: i64,
    pub marks: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassCounts {
    pub spaces: usize,
    pub digits: usize,
    pub special: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterKind {
    Vowel,
    Consonant,
}

/// Rendered outcome of a single exercise run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub exercise: String,
    pub lines: Vec<String>,
    pub data: serde_json::Value,
}

impl Report {
    pub fn new(exercise: &str, data: serde_json::Value) -> Self {
        Self {
            exercise: exercise.to_string(),
            lines: Vec::new(),
            data,
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
