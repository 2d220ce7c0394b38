use crate::core::files::{append_line, copy_file, load_records, store_records, uppercase_file};
use crate::domain::model::{LetterCounts, Report, StudentRecord, TextStats};
use crate::domain::ports::{Exercise, Storage};
use crate::utils::error::{DrillError, Result};
use crate::utils::input::Prompter;
use crate::utils::validation::{validate_capacity, validate_non_empty_string};
use serde_json::json;
use std::io::{BufRead, Write};

fn path_or_prompt<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    given: &Option<String>,
    message: &str,
) -> Result<String> {
    if let Some(path) = given {
        return Ok(path.clone());
    }
    prompter.prompt(message)?;
    let path = prompter.read_line("file name")?.trim().to_string();
    validate_non_empty_string("file name", &path)?;
    Ok(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMetric {
    /// Characters, words and lines.
    Totals,
    /// Vowels and consonants.
    Letters,
}

pub struct TextFileExercise<S: Storage> {
    pub storage: S,
    pub path: Option<String>,
    pub metric: TextMetric,
}

impl<S: Storage> Exercise for TextFileExercise<S> {
    type Input = String;

    fn name(&self) -> &'static str {
        match self.metric {
            TextMetric::Totals => "count-text",
            TextMetric::Letters => "count-letters",
        }
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        path_or_prompt(prompter, &self.path, "Enter the filename: ")
    }

    fn solve(&self, path: Self::Input) -> Result<Report> {
        let data = self
            .storage
            .read_file(&path)
            .map_err(|source| DrillError::FileOpenError {
                path: path.clone(),
                role: "input",
                source,
            })?;
        let text = String::from_utf8_lossy(&data);

        let report = match self.metric {
            TextMetric::Totals => {
                let stats = TextStats::from_text(&text);
                Report::new(self.name(), json!({ "file": path, "stats": stats }))
                    .line(format!("Total Characters: {}", stats.characters))
                    .line(format!("Total Words: {}", stats.words))
                    .line(format!("Total Lines: {}", stats.lines))
            }
            TextMetric::Letters => {
                let counts = LetterCounts::from_text(&text);
                Report::new(self.name(), json!({ "file": path, "counts": counts }))
                    .line(format!("Vowels: {}", counts.vowels))
                    .line(format!("Consonants: {}", counts.consonants))
            }
        };
        Ok(report)
    }
}

pub struct CopyExercise<S: Storage> {
    pub storage: S,
    pub source: Option<String>,
    pub destination: Option<String>,
}

impl<S: Storage> Exercise for CopyExercise<S> {
    type Input = (String, String);

    fn name(&self) -> &'static str {
        "copy"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        let source = path_or_prompt(prompter, &self.source, "Enter source file name: ")?;
        let destination =
            path_or_prompt(prompter, &self.destination, "Enter destination file name: ")?;
        Ok((source, destination))
    }

    fn solve(&self, (source, destination): Self::Input) -> Result<Report> {
        let bytes = copy_file(&self.storage, &source, &destination)?;
        let line = format!(
            "Content copied from {} to {} successfully.",
            source, destination
        );
        Ok(Report::new(
            self.name(),
            json!({ "source": source, "destination": destination, "bytes": bytes }),
        )
        .line(line))
    }
}

pub struct UppercaseExercise<S: Storage> {
    pub storage: S,
    pub source: String,
    pub destination: String,
}

impl<S: Storage> Exercise for UppercaseExercise<S> {
    type Input = ();

    fn name(&self) -> &'static str {
        "uppercase"
    }

    fn gather<R: BufRead, W: Write>(&self, _prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        Ok(())
    }

    fn solve(&self, _: Self::Input) -> Result<Report> {
        let bytes = uppercase_file(&self.storage, &self.source, &self.destination)?;
        Ok(Report::new(
            self.name(),
            json!({ "source": self.source, "destination": self.destination, "bytes": bytes }),
        )
        .line(format!(
            "Converted {} to uppercase in {}.",
            self.source, self.destination
        )))
    }
}

pub struct AppendExercise<S: Storage> {
    pub storage: S,
    pub path: String,
}

impl<S: Storage> Exercise for AppendExercise<S> {
    type Input = String;

    fn name(&self) -> &'static str {
        "append"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter a line of text to append: ")?;
        prompter.read_line("text")
    }

    fn solve(&self, text: Self::Input) -> Result<Report> {
        append_line(&self.storage, &self.path, &text)?;
        Ok(
            Report::new(self.name(), json!({ "file": self.path, "appended": text }))
                .line("Text appended successfully."),
        )
    }
}

pub struct RecordsExercise<S: Storage> {
    pub storage: S,
    pub path: String,
    pub max_records: usize,
}

impl<S: Storage> Exercise for RecordsExercise<S> {
    type Input = Vec<StudentRecord>;

    fn name(&self) -> &'static str {
        "records"
    }

    fn gather<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Self::Input> {
        prompter.prompt("Enter number of students: ")?;
        let n: usize = prompter.next_token("student count")?;
        validate_capacity("student count", n, self.max_records)?;

        let mut records = Vec::with_capacity(n);
        for i in 1..=n {
            prompter.prompt(&format!(
                "Enter name, roll number and marks of student {}: ",
                i
            ))?;
            records.push(StudentRecord {
                name: prompter.next_token("name")?,
                roll_number: prompter.next_token("roll number")?,
                marks: prompter.next_token("marks")?,
            });
        }
        Ok(records)
    }

    fn solve(&self, records: Self::Input) -> Result<Report> {
        store_records(&self.storage, &self.path, &records)?;
        let loaded = load_records(&self.storage, &self.path)?;

        let mut report = Report::new(self.name(), json!({ "file": self.path, "records": loaded }))
            .line("Student Records:")
            .line("Name\tRoll Number\tMarks");
        for record in &loaded {
            report = report.line(format!(
                "{}\t{}\t\t{:.2}",
                record.name, record.roll_number, record.marks
            ));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::app::engine::DrillEngine;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run<E: Exercise>(exercise: E, input: &str) -> Result<Report> {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 256);
        DrillEngine::new(exercise).run(&mut prompter)
    }

    #[test]
    fn test_count_text_prompts_for_file_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("poem.txt"), "roses are red\nviolets are blue\n").unwrap();

        let exercise = TextFileExercise {
            storage: LocalStorage::new(dir.path()),
            path: None,
            metric: TextMetric::Totals,
        };
        let report = run(exercise, "poem.txt\n").unwrap();
        assert_eq!(
            report.lines,
            vec!["Total Characters: 31", "Total Words: 6", "Total Lines: 2"]
        );
    }

    #[test]
    fn test_count_letters_missing_file() {
        let dir = TempDir::new().unwrap();
        let exercise = TextFileExercise {
            storage: LocalStorage::new(dir.path()),
            path: Some("ghost.txt".to_string()),
            metric: TextMetric::Letters,
        };
        let err = run(exercise, "").unwrap_err();
        assert_eq!(err.user_friendly_message(), "Could not open input file ghost.txt");
    }

    #[test]
    fn test_records_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let exercise = RecordsExercise {
            storage: LocalStorage::new(dir.path()),
            path: "students.txt".to_string(),
            max_records: 10,
        };
        let report = run(exercise, "2\nAsha 1 88.5\nRavi 2 71\n").unwrap();
        assert_eq!(
            report.lines,
            vec![
                "Student Records:",
                "Name\tRoll Number\tMarks",
                "Asha\t1\t\t88.50",
                "Ravi\t2\t\t71.00",
            ]
        );
    }
}
