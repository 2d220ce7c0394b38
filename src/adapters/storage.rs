use crate::domain::ports::Storage;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `Storage` on the local filesystem. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }

    fn resolve_for_write(&self, path: &str) -> io::Result<PathBuf> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(full_path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
        fs::write(self.resolve_for_write(path)?, data)
    }

    fn append_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.resolve_for_write(path)?)?;
        file.write_all(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_resolve_against_base() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.write_file("notes.txt", b"abc").unwrap();
        assert_eq!(fs::read(dir.path().join("notes.txt")).unwrap(), b"abc");
        assert_eq!(storage.read_file("notes.txt").unwrap(), b"abc");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.write_file("records/students.txt", b"x 1 2.00\n").unwrap();
        assert!(dir.path().join("records/students.txt").exists());
    }

    #[test]
    fn test_append_creates_then_extends() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.append_file("log.txt", b"one\n").unwrap();
        storage.append_file("log.txt", b"two\n").unwrap();
        assert_eq!(storage.read_file("log.txt").unwrap(), b"one\ntwo\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("absent.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
