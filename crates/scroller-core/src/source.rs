use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Text read from disk, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub path: PathBuf,
    pub text: String,
}

impl LoadedText {
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Where the text currently on screen came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextSource {
    #[default]
    Empty,
    File(PathBuf),
    Pasted,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Empty => f.write_str("(no text)"),
            TextSource::File(path) => f.write_str(&display_name(path)),
            TextSource::Pasted => f.write_str("(pasted text)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReadErrorKind {
    NotFound,
    PermissionDenied,
    InvalidUtf8,
    Other(String),
}

impl fmt::Display for FileReadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileReadErrorKind::NotFound => f.write_str("file not found"),
            FileReadErrorKind::PermissionDenied => f.write_str("permission denied"),
            FileReadErrorKind::InvalidUtf8 => f.write_str("file is not valid UTF-8 text"),
            FileReadErrorKind::Other(message) => f.write_str(message),
        }
    }
}

impl From<io::Error> for FileReadErrorKind {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileReadErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FileReadErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => FileReadErrorKind::InvalidUtf8,
            _ => FileReadErrorKind::Other(err.to_string()),
        }
    }
}

/// A text file could not be shown. The session keeps its current text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to read {}: {kind}", .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    pub kind: FileReadErrorKind,
}

/// Reads a whole file as UTF-8, dropping a leading byte order mark.
pub fn read_text(path: impl AsRef<Path>) -> Result<LoadedText, FileReadError> {
    let path = path.as_ref();
    let fail = |kind: FileReadErrorKind| FileReadError {
        path: path.to_path_buf(),
        kind,
    };

    if path.is_dir() {
        return Err(fail(FileReadErrorKind::Other("path is a directory".into())));
    }

    let bytes = fs::read(path).map_err(|err| fail(err.into()))?;
    let mut text = String::from_utf8(bytes).map_err(|_| fail(FileReadErrorKind::InvalidUtf8))?;
    if text.starts_with(BYTE_ORDER_MARK) {
        text.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
    }

    Ok(LoadedText {
        path: path.to_path_buf(),
        text,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_utf8_and_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("speech.txt");
        fs::write(&path, "\u{feff}Four score\nand seven").unwrap();

        let loaded = read_text(&path).unwrap();
        assert_eq!(loaded.text, "Four score\nand seven");
        assert_eq!(loaded.display_name(), "speech.txt");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_text(dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind, FileReadErrorKind::NotFound);
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert_eq!(err.kind, FileReadErrorKind::InvalidUtf8);
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempdir().unwrap();
        let err = read_text(dir.path()).unwrap_err();
        assert!(matches!(err.kind, FileReadErrorKind::Other(_)));
    }
}
