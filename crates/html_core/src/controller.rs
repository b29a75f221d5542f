use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::dispatch::{Dispatched, dispatch};
use crate::engine::{EditingEngine, EngineEvent, HTML_MIME, RequestId};
use crate::error::DocumentError;
use crate::session::{
    DocumentSession, EMPTY_DOCUMENT, normalize_extension, read_document, write_document,
};
use crate::source_view::{SourceView, ViewTab};
use crate::toolbar::ToolbarState;
use crate::zoom::Zoom;

/// Operations that discard the current document and so sit behind the
/// unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    New,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardChoice {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Proceed(PendingAction),
    /// The document is modified; answer with [`EditorController::resolve_guard`].
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardResolution {
    Proceed(PendingAction),
    Cancelled,
    /// Waiting for the save; the action follows as [`Effect::Proceed`].
    Saving,
    /// The document has no file yet. Ask for one and call
    /// [`EditorController::save_as_then`] with the action.
    NeedsPath(PendingAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Pending(RequestId),
    /// No file to save to; run the save-as flow.
    NeedsPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupDocument {
    File,
    Example,
    Empty,
}

/// Something the UI has to act on after an engine answer.
#[derive(Debug)]
pub enum Effect {
    SourceText(String),
    Saved(PathBuf),
    SaveFailed(DocumentError),
    Proceed(PendingAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HtmlPurpose {
    Source,
    Save {
        path: PathBuf,
        edit_generation: u64,
        then: Option<PendingAction>,
    },
}

/// Owns the engine handle and every piece of editor state around it.
pub struct EditorController<E: EditingEngine> {
    engine: E,
    session: DocumentSession,
    toolbar: ToolbarState,
    source: SourceView,
    zoom: Zoom,
    html_requests: HashMap<RequestId, HtmlPurpose>,
    next_request: u64,
    pending_guard: Option<PendingAction>,
    edit_generation: u64,
}

impl<E: EditingEngine> EditorController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            session: DocumentSession::new(),
            toolbar: ToolbarState::new(),
            source: SourceView::new(),
            zoom: Zoom::default(),
            html_requests: HashMap::new(),
            next_request: 0,
            pending_guard: None,
            edit_generation: 0,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    pub fn source(&self) -> &SourceView {
        &self.source
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Loads the first document that works out of: the configured file, the
    /// bundled example, an empty page.
    pub fn start(&mut self, config: &EditorConfig, example: Option<&[u8]>) -> StartupDocument {
        let loaded = match config.initial_file.as_deref() {
            Some(path) => match self.open(path) {
                Ok(()) => Some(StartupDocument::File),
                Err(err) => {
                    log::warn!("{err}");
                    None
                }
            },
            None => None,
        };

        let loaded = loaded.unwrap_or_else(|| match example {
            Some(bytes) if !bytes.is_empty() => {
                self.load(bytes, None);
                self.session.reset();
                StartupDocument::Example
            }
            _ => {
                self.new_document();
                StartupDocument::Empty
            }
        });

        self.toolbar.refresh(&mut self.engine);
        self.source.mark_dirty();
        self.session.set_modified(false);
        self.set_zoom(config.default_zoom);
        loaded
    }

    pub fn new_document(&mut self) {
        self.load(EMPTY_DOCUMENT.as_bytes(), None);
        self.session.reset();
        log::info!("new document");
    }

    /// Leaves everything untouched when the file cannot be read.
    pub fn open(&mut self, path: &Path) -> Result<(), DocumentError> {
        let bytes = read_document(path)?;
        self.load(&bytes, path.parent());
        self.session.set_file_path(Some(path.to_path_buf()));
        log::info!("opened {}", path.display());
        Ok(())
    }

    /// Pushes edited source text back into the rendered view.
    pub fn apply_source(&mut self, html: &str) {
        let base_dir = self
            .session
            .file_path()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        self.abandon_source_sync();
        self.engine
            .load_content(html.as_bytes(), HTML_MIME, base_dir.as_deref());
        self.mark_edited();
    }

    fn load(&mut self, content: &[u8], base_dir: Option<&Path>) {
        self.abandon_source_sync();
        self.engine.load_content(content, HTML_MIME, base_dir);
        self.edit_generation += 1;
        if self.source.mark_dirty() {
            self.start_source_sync();
        }
    }

    pub fn save(&mut self) -> SaveOutcome {
        self.save_then(None)
    }

    pub fn save_as(&mut self, path: &Path) -> SaveOutcome {
        self.save_as_then(path, None)
    }

    pub fn save_then(&mut self, then: Option<PendingAction>) -> SaveOutcome {
        let Some(path) = self
            .session
            .file_path()
            .filter(|_| self.session.can_save())
            .map(Path::to_path_buf)
        else {
            return SaveOutcome::NeedsPath;
        };

        let edit_generation = self.edit_generation;
        let request = self.request_html(HtmlPurpose::Save {
            path,
            edit_generation,
            then,
        });
        SaveOutcome::Pending(request)
    }

    pub fn save_as_then(&mut self, path: &Path, then: Option<PendingAction>) -> SaveOutcome {
        let path = normalize_extension(path);
        let modified = self.session.is_modified();
        self.session.set_file_path(Some(path));
        self.session.set_modified(modified);
        self.save_then(then)
    }

    pub fn guard(&mut self, action: PendingAction) -> Guard {
        if !self.session.is_modified() {
            return Guard::Proceed(action);
        }
        self.pending_guard = Some(action);
        Guard::Prompt
    }

    pub fn resolve_guard(&mut self, choice: GuardChoice) -> GuardResolution {
        let Some(action) = self.pending_guard.take() else {
            return GuardResolution::Cancelled;
        };
        match choice {
            GuardChoice::Discard => GuardResolution::Proceed(action),
            GuardChoice::Cancel => GuardResolution::Cancelled,
            GuardChoice::Save => match self.save_then(Some(action)) {
                SaveOutcome::Pending(_) => GuardResolution::Saving,
                SaveOutcome::NeedsPath => GuardResolution::NeedsPath(action),
            },
        }
    }

    pub fn dispatch(&mut self, command: &Command) -> Dispatched {
        let dispatched = dispatch(&mut self.engine, command);
        self.toolbar.refresh(&mut self.engine);
        dispatched
    }

    pub fn refresh_toolbar(&mut self) {
        self.toolbar.refresh(&mut self.engine);
    }

    pub fn select_tab(&mut self, tab: ViewTab) {
        if self.source.select(tab) {
            self.start_source_sync();
        }
    }

    pub fn set_zoom(&mut self, percent: u32) {
        self.zoom.set(percent);
        self.engine.set_zoom(self.zoom.factor());
    }

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.zoom.zoom_in();
        if changed {
            self.engine.set_zoom(self.zoom.factor());
        }
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.zoom_out();
        if changed {
            self.engine.set_zoom(self.zoom.factor());
        }
        changed
    }

    pub fn handle_event(&mut self, event: EngineEvent) -> Vec<Effect> {
        match event {
            EngineEvent::SelectionChanged => {
                self.toolbar.refresh(&mut self.engine);
                Vec::new()
            }
            EngineEvent::ContentChanged => {
                self.mark_edited();
                self.toolbar.refresh(&mut self.engine);
                Vec::new()
            }
            EngineEvent::Html { request, html } => self.finish_html(request, html),
            EngineEvent::CommandState(raw) => {
                if let Err(err) = self.toolbar.apply_command_state(&raw) {
                    log::warn!("discarding command state: {err}");
                }
                Vec::new()
            }
            EngineEvent::ActionEnabled(raw) => {
                if let Err(err) = self.toolbar.apply_action_enabled(&raw) {
                    log::warn!("discarding action state: {err}");
                }
                Vec::new()
            }
        }
    }

    fn mark_edited(&mut self) {
        self.edit_generation += 1;
        self.session.set_modified(true);
        if self.source.mark_dirty() {
            self.start_source_sync();
        }
    }

    /// The old page cannot answer once a new one is loaded.
    fn abandon_source_sync(&mut self) {
        if let Some(request) = self.source.abandon_sync() {
            self.html_requests.remove(&request);
        }
    }

    fn start_source_sync(&mut self) {
        let request = self.request_html(HtmlPurpose::Source);
        self.source.sync_started(request);
    }

    fn request_html(&mut self, purpose: HtmlPurpose) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.html_requests.insert(request, purpose);
        self.engine.request_html(request);
        request
    }

    fn finish_html(&mut self, request: RequestId, html: String) -> Vec<Effect> {
        let Some(purpose) = self.html_requests.remove(&request) else {
            log::warn!("no pending request {request:?} for serialized document");
            return Vec::new();
        };

        match purpose {
            HtmlPurpose::Source => {
                if self.source.in_flight() != Some(request) {
                    return Vec::new();
                }
                if self.source.sync_finished(request) {
                    self.start_source_sync();
                }
                vec![Effect::SourceText(html)]
            }
            HtmlPurpose::Save {
                path,
                edit_generation,
                then,
            } => match write_document(&path, &html) {
                Ok(()) => {
                    if self.session.file_path() == Some(path.as_path())
                        && self.edit_generation == edit_generation
                    {
                        self.session.set_modified(false);
                    }
                    log::info!("saved {}", path.display());
                    let mut effects = vec![Effect::Saved(path)];
                    effects.extend(then.map(Effect::Proceed));
                    effects
                }
                Err(err) => {
                    log::warn!("{err}");
                    vec![Effect::SaveFailed(err)]
                }
            },
        }
    }
}
