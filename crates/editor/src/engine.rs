use std::path::Path;
use std::rc::Rc;

use futures::channel::mpsc::UnboundedSender;
use gpui_manos_webview::{BridgeMessage, DocumentSource};
use manos_html_core::script;
use manos_html_core::{
    BuiltinAction, CommandArg, EditingEngine, EngineEvent, RequestId, ToggleCommand,
};

/// Drives a `wry` page in design mode through `document.execCommand`.
///
/// Every answer travels back as an [`EngineEvent`] on `events`; the window
/// drains the channel on its own task.
pub struct WryEngine {
    webview: Rc<gpui_manos_webview::wry::WebView>,
    document: DocumentSource,
    events: UnboundedSender<EngineEvent>,
}

impl WryEngine {
    pub fn new(
        webview: Rc<gpui_manos_webview::wry::WebView>,
        document: DocumentSource,
        events: UnboundedSender<EngineEvent>,
    ) -> Self {
        Self {
            webview,
            document,
            events,
        }
    }

    /// Forwards bridge notifications from the page.
    pub fn bridge_handler(
        events: UnboundedSender<EngineEvent>,
    ) -> impl Fn(BridgeMessage) + 'static {
        move |message| {
            let event = match message {
                BridgeMessage::SelectionChanged => EngineEvent::SelectionChanged,
                BridgeMessage::ContentChanged => EngineEvent::ContentChanged,
            };
            send(&events, event);
        }
    }

    fn run(&self, js: &str) {
        if let Err(err) = self.webview.evaluate_script(js) {
            log::warn!("script failed: {err}");
        }
    }

    fn query<F>(&self, js: &str, into_event: F)
    where
        F: Fn(String) -> EngineEvent + Send + 'static,
    {
        let events = self.events.clone();
        let result = self.webview.evaluate_script_with_callback(js, move |raw| {
            send(&events, into_event(script::decode_result(&raw)));
        });
        if let Err(err) = result {
            log::warn!("query failed: {err}");
        }
    }
}

fn send(events: &UnboundedSender<EngineEvent>, event: EngineEvent) {
    if events.unbounded_send(event).is_err() {
        log::debug!("editor window is gone, dropping engine event");
    }
}

impl EditingEngine for WryEngine {
    fn load_content(&mut self, content: &[u8], mime_type: &str, base_dir: Option<&Path>) {
        let url = self.document.replace(content, mime_type, base_dir);
        if let Err(err) = self.webview.load_url(&url) {
            log::error!("failed to load document: {err}");
        }
    }

    fn request_html(&mut self, request: RequestId) {
        self.query(script::serialize_document(), move |html| EngineEvent::Html {
            request,
            html,
        });
    }

    fn exec_command(&mut self, name: &str, argument: Option<&CommandArg>) {
        self.run(&script::exec_command(name, argument));
    }

    fn query_command_state(&mut self, command: ToggleCommand) {
        self.query(
            &script::query_command_state(command),
            EngineEvent::CommandState,
        );
    }

    fn trigger_action(&mut self, action: BuiltinAction) {
        self.run(&script::trigger_action(action));
    }

    fn query_action_enabled(&mut self, action: BuiltinAction) {
        self.query(
            &script::query_action_enabled(action),
            EngineEvent::ActionEnabled,
        );
    }

    fn set_zoom(&mut self, factor: f64) {
        if let Err(err) = self.webview.zoom(factor) {
            log::warn!("failed to zoom: {err}");
        }
    }
}
