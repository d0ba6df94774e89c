use rfd::FileDialog;
use scroller_core::{FileReadError, LoadedText, read_text};
use std::path::PathBuf;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text", "log"];

/// Asks the user for a text file and reads it.
///
/// `Ok(None)` means the dialog was cancelled.
pub async fn pick_text_file() -> Result<Option<LoadedText>, FileReadError> {
    let Some(path) = FileDialog::new()
        .set_title("Upload Text File")
        .add_filter("Text", TEXT_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    else {
        return Ok(None);
    };

    read_text(path).map(Some)
}

/// Reads a file named on the command line.
pub async fn load_text_from_path(path: PathBuf) -> Result<Option<LoadedText>, FileReadError> {
    read_text(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroller_core::FileReadErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        futures::executor::block_on(future)
    }

    #[test]
    fn load_from_path_reads_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("talk.txt");
        fs::write(&path, "line one\nline two").unwrap();

        let loaded = block_on(load_text_from_path(path.clone())).unwrap().unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.text, "line one\nline two");
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = block_on(load_text_from_path(dir.path().join("absent.txt"))).unwrap_err();
        assert_eq!(err.kind, FileReadErrorKind::NotFound);
    }
}
