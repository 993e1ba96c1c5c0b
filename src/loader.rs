//! Whole-file loading into a [`Document`].

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::ops::Deref;
use std::path::Path;

use crate::error::{Error, Result};

/// Full contents of one text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Deref for Document {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Read the file at `path` into memory and decode it as UTF-8.
///
/// The handle is dropped before this returns, on success and on error.
pub fn load(path: &Path) -> Result<Document> {
    let io_err = |source: std::io::Error| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let bytes = {
        let mut file = File::open(path).map_err(io_err)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_err)?;
        bytes
    };
    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8(bytes).map_err(|source| Error::DecodeError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn keeps_whitespace_and_line_breaks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"one  two\n\tthree\r\n").unwrap();
        let doc = load(file.path()).unwrap();
        assert_eq!(doc.as_str(), "one  two\n\tthree\r\n");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff, 0xfe]).unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, Error::DecodeError { .. }));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
