mod common;

use common::controller;
use manos_html_core::{
    BuiltinAction, Command, EngineEvent, ToggleCommand, ToolbarError, ToolbarState,
};

#[test]
fn selection_change_queries_every_control() {
    let mut editor = controller();

    editor.handle_event(EngineEvent::SelectionChanged);

    let engine = editor.engine();
    assert_eq!(
        engine.count(|call| matches!(call, common::Call::QueryState(_))),
        ToggleCommand::ALL.len()
    );
    assert_eq!(
        engine.count(|call| matches!(call, common::Call::QueryEnabled(_))),
        BuiltinAction::TRACKED.len()
    );
}

#[test]
fn answers_set_checked_and_enabled() {
    let mut editor = controller();

    editor.handle_event(EngineEvent::CommandState("true:bold".into()));
    editor.handle_event(EngineEvent::CommandState("true:justifyCenter".into()));
    editor.handle_event(EngineEvent::ActionEnabled("false:undo".into()));

    let toolbar = editor.toolbar();
    assert!(toolbar.is_checked(ToggleCommand::Bold));
    assert!(toolbar.is_checked(ToggleCommand::AlignCenter));
    assert!(!toolbar.is_checked(ToggleCommand::Italic));
    assert!(!toolbar.is_enabled(BuiltinAction::Undo));
    assert!(toolbar.is_enabled(BuiltinAction::Paste));
}

#[test]
fn latest_answer_wins_regardless_of_order() {
    let mut toolbar = ToolbarState::new();

    toolbar.apply_command_state("true:italic").unwrap();
    toolbar.apply_command_state("false:italic").unwrap();
    assert!(!toolbar.is_checked(ToggleCommand::Italic));

    toolbar.apply_command_state("true:italic").unwrap();
    assert!(toolbar.is_checked(ToggleCommand::Italic));
}

#[test]
fn malformed_answers_leave_state_unchanged() {
    let mut editor = controller();
    editor.handle_event(EngineEvent::CommandState("true:underline".into()));
    let before = editor.toolbar().clone();

    editor.handle_event(EngineEvent::CommandState("true".into()));
    editor.handle_event(EngineEvent::CommandState("yes:underline".into()));
    editor.handle_event(EngineEvent::CommandState("false:underline:x".into()));
    editor.handle_event(EngineEvent::CommandState("false:marquee".into()));
    editor.handle_event(EngineEvent::ActionEnabled("false:selectAll".into()));

    assert_eq!(editor.toolbar(), &before);
}

#[test]
fn errors_name_the_problem() {
    let mut toolbar = ToolbarState::new();
    assert_eq!(
        toolbar.apply_command_state("nonsense"),
        Err(ToolbarError::Malformed("nonsense".into()))
    );
    assert_eq!(
        toolbar.apply_command_state("true:blink"),
        Err(ToolbarError::UnknownCommand("blink".into()))
    );
}

#[test]
fn refresh_is_idempotent() {
    let answers = [
        "true:bold",
        "false:italic",
        "true:underline",
        "false:strikeThrough",
        "true:insertOrderedList",
    ];

    let mut first = ToolbarState::new();
    let mut second = ToolbarState::new();
    for _ in 0..2 {
        for answer in answers {
            first.apply_command_state(answer).unwrap();
        }
    }
    for answer in answers {
        second.apply_command_state(answer).unwrap();
    }

    assert_eq!(first, second);
}

#[test]
fn content_change_requeries_every_control() {
    let mut editor = controller();
    editor.dispatch(&Command::Builtin(BuiltinAction::ToggleBold));
    editor.engine_mut().take_calls();

    editor.handle_event(EngineEvent::ContentChanged);

    let engine = editor.engine();
    assert_eq!(
        engine.count(|call| matches!(call, common::Call::QueryState(_))),
        ToggleCommand::ALL.len()
    );
    assert_eq!(
        engine.count(|call| matches!(call, common::Call::QueryEnabled(_))),
        BuiltinAction::TRACKED.len()
    );
}
