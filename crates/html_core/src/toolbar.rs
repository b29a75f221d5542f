use std::collections::BTreeMap;

use crate::command::BuiltinAction;
use crate::engine::EditingEngine;
use crate::error::ToolbarError;
use crate::script::STATE_SEPARATOR;

/// Toolbar controls whose checked state follows the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToggleCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    OrderedList,
    UnorderedList,
}

impl ToggleCommand {
    pub const ALL: [ToggleCommand; 10] = [
        ToggleCommand::Bold,
        ToggleCommand::Italic,
        ToggleCommand::Underline,
        ToggleCommand::Strikethrough,
        ToggleCommand::AlignLeft,
        ToggleCommand::AlignCenter,
        ToggleCommand::AlignRight,
        ToggleCommand::AlignJustify,
        ToggleCommand::OrderedList,
        ToggleCommand::UnorderedList,
    ];

    pub fn query_name(self) -> &'static str {
        match self {
            ToggleCommand::Bold => "bold",
            ToggleCommand::Italic => "italic",
            ToggleCommand::Underline => "underline",
            ToggleCommand::Strikethrough => "strikeThrough",
            ToggleCommand::AlignLeft => "justifyLeft",
            ToggleCommand::AlignCenter => "justifyCenter",
            ToggleCommand::AlignRight => "justifyRight",
            ToggleCommand::AlignJustify => "justifyFull",
            ToggleCommand::OrderedList => "insertOrderedList",
            ToggleCommand::UnorderedList => "insertUnorderedList",
        }
    }

    pub fn from_query_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.query_name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub checked: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            enabled: true,
            checked: false,
        }
    }
}

/// Mirror of the engine's command state, as shown on the toolbar.
///
/// Answers are applied as they arrive; whichever lands last wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    toggles: BTreeMap<ToggleCommand, ControlState>,
    actions: BTreeMap<BuiltinAction, ControlState>,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            toggles: ToggleCommand::ALL
                .into_iter()
                .map(|cmd| (cmd, ControlState::default()))
                .collect(),
            actions: BuiltinAction::TRACKED
                .into_iter()
                .map(|action| (action, ControlState::default()))
                .collect(),
        }
    }
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the engine for a fresh snapshot of every tracked control.
    pub fn refresh<E: EditingEngine + ?Sized>(&self, engine: &mut E) {
        for command in ToggleCommand::ALL {
            engine.query_command_state(command);
        }
        for action in BuiltinAction::TRACKED {
            engine.query_action_enabled(action);
        }
    }

    pub fn apply_command_state(&mut self, raw: &str) -> Result<(ToggleCommand, bool), ToolbarError> {
        let (status, name) = parse_tagged(raw)?;
        let command = ToggleCommand::from_query_name(name)
            .ok_or_else(|| ToolbarError::UnknownCommand(name.to_string()))?;
        if let Some(state) = self.toggles.get_mut(&command) {
            state.checked = status;
        }
        Ok((command, status))
    }

    pub fn apply_action_enabled(&mut self, raw: &str) -> Result<(BuiltinAction, bool), ToolbarError> {
        let (status, name) = parse_tagged(raw)?;
        let action = BuiltinAction::from_name(name)
            .filter(|action| BuiltinAction::TRACKED.contains(action))
            .ok_or_else(|| ToolbarError::UnknownCommand(name.to_string()))?;
        if let Some(state) = self.actions.get_mut(&action) {
            state.enabled = status;
        }
        Ok((action, status))
    }

    pub fn toggle(&self, command: ToggleCommand) -> ControlState {
        self.toggles.get(&command).copied().unwrap_or_default()
    }

    pub fn is_checked(&self, command: ToggleCommand) -> bool {
        self.toggle(command).checked
    }

    pub fn action(&self, action: BuiltinAction) -> ControlState {
        self.actions.get(&action).copied().unwrap_or_default()
    }

    pub fn is_enabled(&self, action: BuiltinAction) -> bool {
        self.action(action).enabled
    }
}

fn parse_tagged(raw: &str) -> Result<(bool, &str), ToolbarError> {
    let malformed = || ToolbarError::Malformed(raw.to_string());
    let parts: Vec<&str> = raw.trim().split(STATE_SEPARATOR).collect();
    let [status, name] = parts.as_slice() else {
        return Err(malformed());
    };
    let status = match status.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(malformed()),
    };
    Ok((status, *name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_two_parts() {
        assert_eq!(parse_tagged("true:bold"), Ok((true, "bold")));
        assert!(parse_tagged("true").is_err());
        assert!(parse_tagged("true:bold:extra").is_err());
        assert!(parse_tagged("maybe:bold").is_err());
    }

    #[test]
    fn query_names_round_trip() {
        for command in ToggleCommand::ALL {
            assert_eq!(ToggleCommand::from_query_name(command.query_name()), Some(command));
        }
    }
}
