//! JavaScript snippets for engines driven through `document.execCommand`.

use serde_json::Value;

use crate::command::{BuiltinAction, CommandArg};
use crate::toolbar::ToggleCommand;

/// Separator of the `<status>:<name>` encoding used by the state queries.
pub const STATE_SEPARATOR: char = ':';

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

pub fn exec_command(name: &str, argument: Option<&CommandArg>) -> String {
    let argument = match argument {
        None => "null".to_string(),
        Some(CommandArg::Text(text)) => js_string(text),
        Some(CommandArg::Number(number)) => number.to_string(),
    };
    format!(
        "document.execCommand({}, false, {argument});",
        js_string(name)
    )
}

pub fn trigger_action(action: BuiltinAction) -> String {
    exec_command(action.name(), None)
}

/// Evaluates to `"true:<name>"` or `"false:<name>"`.
pub fn query_command_state(command: ToggleCommand) -> String {
    tagged_query("queryCommandState", command.query_name())
}

/// Evaluates to `"true:<name>"` or `"false:<name>"`.
pub fn query_action_enabled(action: BuiltinAction) -> String {
    tagged_query("queryCommandEnabled", action.name())
}

fn tagged_query(method: &str, name: &str) -> String {
    let suffix = format!("{STATE_SEPARATOR}{name}");
    format!(
        "String(document.{method}({})) + {};",
        js_string(name),
        js_string(&suffix)
    )
}

pub fn serialize_document() -> &'static str {
    "document.documentElement.outerHTML;"
}

/// Script results come back JSON-encoded; strings are unwrapped, anything
/// else is passed through as-is.
pub fn decode_result(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(text)) => text,
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_escaped() {
        let script = exec_command(
            "insertHTML",
            Some(&CommandArg::Text("<a href=\"x\">\n</a>".into())),
        );
        assert_eq!(
            script,
            r#"document.execCommand("insertHTML", false, "<a href=\"x\">\n</a>");"#
        );
    }

    #[test]
    fn numeric_and_missing_arguments() {
        assert_eq!(
            exec_command("fontSize", Some(&CommandArg::Number(4))),
            r#"document.execCommand("fontSize", false, 4);"#
        );
        assert_eq!(
            trigger_action(BuiltinAction::Undo),
            r#"document.execCommand("undo", false, null);"#
        );
    }

    #[test]
    fn state_query_is_tagged() {
        assert_eq!(
            query_command_state(ToggleCommand::Bold),
            r#"String(document.queryCommandState("bold")) + ":bold";"#
        );
    }

    #[test]
    fn decode_unwraps_json_strings() {
        assert_eq!(decode_result(r#""true:bold""#), "true:bold");
        assert_eq!(decode_result("true"), "true");
        assert_eq!(decode_result("not json"), "not json");
    }
}
