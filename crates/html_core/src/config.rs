use std::ffi::OsString;
use std::path::PathBuf;

use crate::zoom::{ZOOM_DEFAULT, Zoom};

/// Overrides the startup zoom percentage.
pub const ZOOM_ENV: &str = "HTML_EDITOR_ZOOM";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// File named on the command line, loaded instead of the bundled example.
    pub initial_file: Option<PathBuf>,
    pub default_zoom: u32,
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os()).with_zoom_override(std::env::var(ZOOM_ENV).ok())
    }

    /// Expects the program name first. Only a single positional argument is
    /// taken as the initial file.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let initial_file = match args.as_slice() {
            [_, file] if !file.is_empty() => Some(PathBuf::from(file)),
            _ => None,
        };
        Self {
            initial_file,
            default_zoom: 0,
        }
        .with_defaults()
    }

    pub fn with_zoom_override(mut self, value: Option<String>) -> Self {
        match value.as_deref().map(str::trim).map(str::parse::<u32>) {
            Some(Ok(percent)) => self.default_zoom = percent,
            Some(Err(err)) => log::warn!("ignoring {ZOOM_ENV}: {err}"),
            None => {}
        }
        self.with_defaults()
    }

    fn with_defaults(mut self) -> Self {
        if self.default_zoom == 0 {
            self.default_zoom = ZOOM_DEFAULT;
        }
        self.default_zoom = Zoom::new(self.default_zoom).percent();
        self
    }
}
