#![allow(dead_code)]

use std::path::{Path, PathBuf};

use manos_html_core::{
    BuiltinAction, CommandArg, EditingEngine, EditorController, EngineEvent, RequestId,
    ToggleCommand,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load {
        content: Vec<u8>,
        mime_type: String,
        base_dir: Option<PathBuf>,
    },
    RequestHtml(RequestId),
    Exec {
        name: String,
        argument: Option<CommandArg>,
    },
    QueryState(ToggleCommand),
    Trigger(BuiltinAction),
    QueryEnabled(BuiltinAction),
    Zoom(f64),
}

/// Records every engine call and keeps the last loaded content as "the document".
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
    pub document: String,
}

impl RecordingEngine {
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn html_requests(&self) -> Vec<RequestId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::RequestHtml(request) => Some(*request),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl EditingEngine for RecordingEngine {
    fn load_content(&mut self, content: &[u8], mime_type: &str, base_dir: Option<&Path>) {
        self.document = String::from_utf8_lossy(content).into_owned();
        self.calls.push(Call::Load {
            content: content.to_vec(),
            mime_type: mime_type.to_string(),
            base_dir: base_dir.map(Path::to_path_buf),
        });
    }

    fn request_html(&mut self, request: RequestId) {
        self.calls.push(Call::RequestHtml(request));
    }

    fn exec_command(&mut self, name: &str, argument: Option<&CommandArg>) {
        self.calls.push(Call::Exec {
            name: name.to_string(),
            argument: argument.cloned(),
        });
    }

    fn query_command_state(&mut self, command: ToggleCommand) {
        self.calls.push(Call::QueryState(command));
    }

    fn trigger_action(&mut self, action: BuiltinAction) {
        self.calls.push(Call::Trigger(action));
    }

    fn query_action_enabled(&mut self, action: BuiltinAction) {
        self.calls.push(Call::QueryEnabled(action));
    }

    fn set_zoom(&mut self, factor: f64) {
        self.calls.push(Call::Zoom(factor));
    }
}

pub fn controller() -> EditorController<RecordingEngine> {
    EditorController::new(RecordingEngine::default())
}

/// Answers the most recent serialization request with the current document.
pub fn answer_last_html(
    controller: &mut EditorController<RecordingEngine>,
) -> Vec<manos_html_core::Effect> {
    let request = *controller
        .engine()
        .html_requests()
        .last()
        .expect("an html request");
    let html = controller.engine().document.clone();
    controller.handle_event(EngineEvent::Html { request, html })
}
