pub mod webview;
pub use http;
pub use wry;

use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use serde::Deserialize;
use serialize_to_javascript::{DefaultTemplate, Template, default_template};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use wry::{Error as WryError, Result, WebView, WebViewBuilder, WebViewId};

const DOCUMENT_SCHEME: &str = "editor";

/// URL the current document is served from. The revision busts the engine's cache.
pub fn document_url(revision: u64) -> String {
    #[cfg(windows)]
    let base = "http://editor.localhost/";
    #[cfg(not(windows))]
    let base = "editor://localhost/";

    format!("{base}?revision={revision}")
}

/// Messages posted by the editing bridge script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BridgeMessage {
    SelectionChanged,
    ContentChanged,
}

impl BridgeMessage {
    pub fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str(body) {
            Ok(message) => Some(message),
            Err(err) => {
                log::warn!("ignoring bridge message `{body}`: {err}");
                None
            }
        }
    }
}

#[derive(Debug, Default)]
struct ServedDocument {
    content: Vec<u8>,
    mime_type: String,
    base_dir: Option<PathBuf>,
    revision: u64,
}

/// The in-memory document behind the `editor://` protocol.
///
/// The root path answers with the document itself; any other path is looked up
/// as a file under the document's directory so relative images and stylesheets
/// keep working.
#[derive(Debug, Clone, Default)]
pub struct DocumentSource {
    inner: Arc<RwLock<ServedDocument>>,
}

impl DocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the served document and returns the URL that loads it.
    pub fn replace(&self, content: &[u8], mime_type: &str, base_dir: Option<&Path>) -> String {
        let mut document = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        document.content = content.to_vec();
        document.mime_type = mime_type.to_string();
        document.base_dir = base_dir.map(Path::to_path_buf);
        document.revision += 1;
        document_url(document.revision)
    }

    pub fn url(&self) -> String {
        let document = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        document_url(document.revision)
    }

    fn respond(&self, request: &http::Request<Vec<u8>>) -> http::Response<Vec<u8>> {
        let document = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let path = request.uri().path();
        log::trace!("{} {}", request.method(), request.uri());

        let result = if path.trim_start_matches('/').is_empty() {
            response_bytes(document.content.clone(), &document.mime_type)
        } else if let Some(root) = document.base_dir.as_deref() {
            serve_asset(root, path)
        } else {
            Ok(response_not_found(path))
        };
        result.unwrap_or_else(response_internal_server_err)
    }
}

pub type MessageHandler = Box<dyn Fn(BridgeMessage) + 'static>;

pub struct Builder<'a> {
    builder: WebViewBuilder<'a>,
    webview_id: WebViewId<'a>,
    document: Option<DocumentSource>,
    message_handler: Option<MessageHandler>,
    editable: bool,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Builder<'a> {
    pub fn new() -> Self {
        Builder {
            builder: WebViewBuilder::new(),
            webview_id: WebViewId::default(),
            document: None,
            message_handler: None,
            editable: false,
        }
    }

    pub fn with_webview_id(mut self, webview_id: WebViewId<'a>) -> Self {
        self.webview_id = webview_id;
        self
    }

    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: FnOnce(WebViewBuilder<'a>) -> WebViewBuilder<'a>,
    {
        self.builder = f(self.builder);
        self
    }

    /// Serves `source` over the `editor://` protocol and starts on it.
    pub fn serve_document(mut self, source: DocumentSource) -> Self {
        self.document = Some(source);
        self
    }

    /// Receives the bridge's selection and content notifications.
    pub fn on_message<F>(mut self, handler: F) -> Self
    where
        F: Fn(BridgeMessage) + 'static,
    {
        self.message_handler = Some(Box::new(handler));
        self
    }

    /// Puts every loaded page in design mode.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn build_as_child(self, window: &mut gpui::Window) -> Result<WebView> {
        if self.webview_id.is_empty() {
            return Result::Err(WryError::InitScriptError);
        }

        use raw_window_handle::HasWindowHandle;

        let window_handle = window.window_handle()?;
        let webview_id = self.webview_id;
        self.with_bridge_script()?
            .with_document()
            .with_messages()
            .builder
            .with_id(webview_id)
            .build_as_child(&window_handle)
    }

    fn with_bridge_script(self) -> Result<Self> {
        let script = EditorBridge {
            editable: self.editable,
        }
        .render_default(&core::default::Default::default())
        .map_err(|err| {
            log::error!("failed to render editor bridge: {err}");
            WryError::InitScriptError
        })?
        .into_string();

        Ok(self.apply(|b| b.with_initialization_script_for_main_only(script, true)))
    }

    fn with_document(mut self) -> Self {
        let Some(source) = self.document.take() else {
            return self;
        };
        let url = source.url();
        self.apply(move |b| {
            b.with_asynchronous_custom_protocol(
                DOCUMENT_SCHEME.into(),
                move |_webview_id, request, responder| {
                    responder.respond(source.respond(&request))
                },
            )
            .with_url(url)
        })
    }

    fn with_messages(mut self) -> Self {
        let Some(handler) = self.message_handler.take() else {
            return self;
        };
        self.apply(move |b| {
            b.with_ipc_handler(move |request: http::Request<String>| {
                if let Some(message) = BridgeMessage::parse(request.body()) {
                    handler(message);
                }
            })
        })
    }
}

#[derive(Template)]
#[default_template("scripts/editor-bridge.js")]
struct EditorBridge {
    editable: bool,
}

fn decode_uri_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = from_hex(bytes[i + 1]);
            let lo = from_hex(bytes[i + 2]);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).unwrap_or_else(|_| input.to_string())
}

fn from_hex(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn serve_asset(root: &Path, path: &str) -> http::Result<http::Response<Vec<u8>>> {
    let root = match fs::canonicalize(root) {
        Ok(root) => root,
        Err(err) => {
            log::warn!("document directory `{}` not accessible: {err}", root.display());
            return Ok(response_not_found(path));
        }
    };

    match resolve_asset(&root, path) {
        Ok(asset) => response_bytes(asset.bytes, &asset.mime),
        Err(AssetError::NotFound(requested)) => {
            log::debug!("asset not found: {}", requested.display());
            Ok(response_not_found(requested.display()))
        }
        Err(AssetError::OutsideRoot(requested)) => {
            log::warn!("refusing asset outside document directory: {}", requested.display());
            Ok(response_forbidden(requested.display()))
        }
        Err(AssetError::IsDirectory(requested)) => Ok(response_forbidden(requested.display())),
        Err(AssetError::Io(err)) => {
            log::warn!("failed to read asset: {err}");
            Ok(response_internal_server_err("failed to read asset"))
        }
    }
}

fn response_bytes(bytes: Vec<u8>, mime: &str) -> http::Result<http::Response<Vec<u8>>> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header(CONTENT_TYPE, mime)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(bytes)
}

fn response_status<S: ToString>(status: http::StatusCode, content: S) -> http::Response<Vec<u8>> {
    let mut response = http::Response::new(content.to_string().into_bytes());
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain"),
    );
    response
}

fn response_not_found<S: ToString>(content: S) -> http::Response<Vec<u8>> {
    response_status(
        http::StatusCode::NOT_FOUND,
        format!("{} not found", content.to_string()),
    )
}

fn response_forbidden<S: ToString>(content: S) -> http::Response<Vec<u8>> {
    response_status(
        http::StatusCode::FORBIDDEN,
        format!("{} is not accessible", content.to_string()),
    )
}

fn response_internal_server_err<S: ToString>(content: S) -> http::Response<Vec<u8>> {
    response_status(http::StatusCode::INTERNAL_SERVER_ERROR, content)
}

struct Asset {
    bytes: Vec<u8>,
    mime: String,
}

#[derive(Debug)]
enum AssetError {
    NotFound(PathBuf),
    OutsideRoot(PathBuf),
    IsDirectory(PathBuf),
    Io(io::Error),
}

fn resolve_asset(root: &Path, uri_path: &str) -> std::result::Result<Asset, AssetError> {
    let relative = sanitize_path(uri_path)?;
    let candidate = root.join(&relative);

    let resolved = match fs::canonicalize(&candidate) {
        Ok(path) => path,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AssetError::NotFound(relative));
        }
        Err(err) => return Err(AssetError::Io(err)),
    };

    if !resolved.starts_with(root) {
        return Err(AssetError::OutsideRoot(relative));
    }

    if resolved.is_dir() {
        return Err(AssetError::IsDirectory(relative));
    }

    let bytes = fs::read(&resolved).map_err(AssetError::Io)?;
    let mime = mime_guess::from_path(&resolved)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(Asset { bytes, mime })
}

fn sanitize_path(path: &str) -> std::result::Result<PathBuf, AssetError> {
    let decoded = decode_uri_component(path);
    let trimmed = decoded.trim_start_matches('/');
    let mut buf = PathBuf::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => buf.push(part),
            Component::CurDir => continue,
            Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                return Err(AssetError::OutsideRoot(PathBuf::from(trimmed)));
            }
        }
    }

    if buf.as_os_str().is_empty() {
        return Err(AssetError::NotFound(buf));
    }

    Ok(buf)
}
