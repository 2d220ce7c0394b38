use crate::domain::model::StudentRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{DrillError, Result};
use std::io;

fn open_error(path: &str, role: &'static str) -> impl FnOnce(io::Error) -> DrillError {
    let path = path.to_string();
    move |source| DrillError::FileOpenError { path, role, source }
}

/// Byte-exact copy. Returns the number of bytes written.
pub fn copy_file<S: Storage>(storage: &S, source: &str, destination: &str) -> Result<usize> {
    let data = storage
        .read_file(source)
        .map_err(open_error(source, "source"))?;
    storage
        .write_file(destination, &data)
        .map_err(open_error(destination, "destination"))?;
    tracing::debug!("Copied {} bytes from {} to {}", data.len(), source, destination);
    Ok(data.len())
}

/// Copies `source` to `destination`, turning ASCII lowercase letters into uppercase.
pub fn uppercase_file<S: Storage>(storage: &S, source: &str, destination: &str) -> Result<usize> {
    let mut data = storage
        .read_file(source)
        .map_err(open_error(source, "input"))?;
    data.make_ascii_uppercase();
    storage
        .write_file(destination, &data)
        .map_err(open_error(destination, "output"))?;
    Ok(data.len())
}

/// Appends `text` as a new line at the end of `path`.
pub fn append_line<S: Storage>(storage: &S, path: &str, text: &str) -> Result<()> {
    let mut line = text.trim_end_matches(['\r', '\n']).to_string();
    line.push('\n');
    storage
        .append_file(path, line.as_bytes())
        .map_err(open_error(path, "target"))
}

fn record_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(Vec::new())
}

/// Writes one `name roll_number marks` line per record, marks with two decimals.
pub fn store_records<S: Storage>(storage: &S, path: &str, records: &[StudentRecord]) -> Result<()> {
    let mut writer = record_writer();
    for record in records {
        if record.name.is_empty() || record.name.chars().any(char::is_whitespace) {
            return Err(DrillError::invalid_input(format!(
                "student name '{}' must be a single non-empty word",
                record.name
            )));
        }
        writer.write_record([
            record.name.clone(),
            record.roll_number.to_string(),
            format!("{:.2}", record.marks),
        ])?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| DrillError::IoError(io::Error::new(e.error().kind(), e.to_string())))?;
    storage
        .write_file(path, &data)
        .map_err(open_error(path, "records"))?;
    tracing::debug!("Stored {} student records in {}", records.len(), path);
    Ok(())
}

pub fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<StudentRecord>> {
    let data = storage.read_file(path).map_err(open_error(path, "records"))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: StudentRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn contents(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|d| String::from_utf8_lossy(d).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn append_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
            self.files
                .borrow_mut()
                .entry(path.to_string())
                .or_default()
                .extend_from_slice(data);
            Ok(())
        }
    }

    #[test]
    fn test_copy_file() {
        let storage = MockStorage::with_file("a.txt", "line one\nline two");
        assert_eq!(copy_file(&storage, "a.txt", "b.txt").unwrap(), 17);
        assert_eq!(storage.contents("b.txt").unwrap(), "line one\nline two");
    }

    #[test]
    fn test_copy_missing_source() {
        let storage = MockStorage::default();
        let err = copy_file(&storage, "nope.txt", "b.txt").unwrap_err();
        assert_eq!(err.user_friendly_message(), "Could not open source file nope.txt");
        assert!(storage.contents("b.txt").is_none());
    }

    #[test]
    fn test_uppercase_only_touches_ascii_lowercase() {
        let storage = MockStorage::with_file("input.txt", "Hello, wörld 42");
        uppercase_file(&storage, "input.txt", "output.txt").unwrap();
        assert_eq!(storage.contents("output.txt").unwrap(), "HELLO, WöRLD 42");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let storage = MockStorage::with_file("example.txt", "first\n");
        append_line(&storage, "example.txt", "second\n").unwrap();
        append_line(&storage, "example.txt", "third").unwrap();
        assert_eq!(storage.contents("example.txt").unwrap(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_records_written_with_two_decimals_and_read_back() {
        let storage = MockStorage::default();
        let records = vec![
            StudentRecord {
                name: "Asha".to_string(),
                roll_number: 7,
                marks: 91.5,
            },
            StudentRecord {
                name: "Ben".to_string(),
                roll_number: 12,
                marks: 78.0,
            },
        ];
        store_records(&storage, "students.txt", &records).unwrap();
        assert_eq!(
            storage.contents("students.txt").unwrap(),
            "Asha 7 91.50\nBen 12 78.00\n"
        );
        assert_eq!(load_records(&storage, "students.txt").unwrap(), records);
    }

    #[test]
    fn test_record_name_with_space_rejected() {
        let storage = MockStorage::default();
        let records = vec![StudentRecord {
            name: "Mary Ann".to_string(),
            roll_number: 1,
            marks: 50.0,
        }];
        assert!(store_records(&storage, "students.txt", &records).is_err());
    }

    #[test]
    fn test_malformed_record_line() {
        let storage = MockStorage::with_file("students.txt", "Asha seven 91.5\n");
        assert!(matches!(
            load_records(&storage, "students.txt"),
            Err(DrillError::CsvError(_))
        ));
    }
}
