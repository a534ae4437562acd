//! File read/write helpers with typed errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a file to a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `content` to a file, replacing it if it exists.
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    std::fs::write(path, content).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write_round_trip() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("patched.txt");

        write_file(&path, "line1\nline2").unwrap();
        assert_eq!(read_file(&path).unwrap(), "line1\nline2");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("missing.txt");

        match read_file(&path) {
            Err(FileError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("no_such_dir").join("out.txt");

        match write_file(&path, "x") {
            Err(FileError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}
