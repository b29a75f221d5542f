use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use crate::error::DocumentError;

pub const APP_NAME: &str = "HTML Editor";
pub const UNTITLED: &str = "Untitled";
pub const DEFAULT_EXTENSION: &str = "htm";
pub const EMPTY_DOCUMENT: &str = "<p></p>";

/// The file behind the current document and whether it has unsaved edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSession {
    file_path: Option<PathBuf>,
    modified: bool,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    pub fn is_untitled(&self) -> bool {
        match &self.file_path {
            None => true,
            Some(path) => path.as_os_str().is_empty(),
        }
    }

    /// Save writes straight to disk only for titled documents.
    pub fn can_save(&self) -> bool {
        !self.is_untitled()
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
        self.modified = false;
    }

    pub fn reset(&mut self) {
        self.set_file_path(None);
    }

    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .filter(|_| !self.is_untitled())
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn window_title(&self) -> String {
        let marker = if self.modified { "*" } else { "" };
        format!("{}{marker} - {APP_NAME}", self.display_name())
    }
}

/// Appends `.htm` unless the name already ends in `.htm` or `.html`.
pub fn normalize_extension(path: &Path) -> PathBuf {
    let recognized = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("htm") || ext.eq_ignore_ascii_case("html"));
    if recognized {
        return path.to_path_buf();
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(DEFAULT_EXTENSION);
    PathBuf::from(name)
}

pub fn read_document(path: &Path) -> Result<Vec<u8>, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the whole document; anything less than every byte is a failure.
pub fn write_document(path: &Path, html: &str) -> Result<(), DocumentError> {
    let write_err = |source: io::Error| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let bytes = html.as_bytes();
    let mut file = File::create(path).map_err(write_err)?;
    let mut written = 0;
    while written < bytes.len() {
        match file.write(&bytes[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(write_err(err)),
        }
    }
    if written < bytes.len() {
        return Err(DocumentError::ShortWrite {
            path: path.to_path_buf(),
            written,
            expected: bytes.len(),
        });
    }
    file.flush().map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reflects_name_and_modified() {
        let mut session = DocumentSession::new();
        assert_eq!(session.window_title(), "Untitled - HTML Editor");

        session.set_file_path(Some(PathBuf::from("/tmp/notes/page.html")));
        session.set_modified(true);
        assert_eq!(session.window_title(), "page.html* - HTML Editor");
    }

    #[test]
    fn only_real_paths_are_titled() {
        let mut session = DocumentSession::new();
        assert!(session.is_untitled());

        session.set_file_path(Some(PathBuf::new()));
        assert!(!session.can_save());

        session.set_file_path(Some(PathBuf::from("page.htm")));
        assert!(session.can_save());
    }
}
