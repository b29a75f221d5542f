use std::path::Path;

use crate::command::{BuiltinAction, CommandArg};
use crate::toolbar::ToggleCommand;

pub const HTML_MIME: &str = "text/html";

/// Correlates an HTML serialization request with its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// The editing engine hosting the document.
///
/// Everything that reads state back is asynchronous: the engine answers later
/// with an [`EngineEvent`], in no guaranteed order.
pub trait EditingEngine {
    /// Replaces the document. `base_dir` resolves relative asset URLs.
    fn load_content(&mut self, content: &[u8], mime_type: &str, base_dir: Option<&Path>);

    /// Answered with [`EngineEvent::Html`].
    fn request_html(&mut self, request: RequestId);

    fn exec_command(&mut self, name: &str, argument: Option<&CommandArg>);

    /// Answered with [`EngineEvent::CommandState`].
    fn query_command_state(&mut self, command: ToggleCommand);

    fn trigger_action(&mut self, action: BuiltinAction);

    /// Answered with [`EngineEvent::ActionEnabled`].
    fn query_action_enabled(&mut self, action: BuiltinAction);

    fn set_zoom(&mut self, factor: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SelectionChanged,
    ContentChanged,
    Html { request: RequestId, html: String },
    /// Raw `<true|false>:<command>` answer.
    CommandState(String),
    /// Raw `<true|false>:<action>` answer.
    ActionEnabled(String),
}
