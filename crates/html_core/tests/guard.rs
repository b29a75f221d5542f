mod common;

use common::{answer_last_html, controller};
use manos_html_core::{
    Effect, EngineEvent, Guard, GuardChoice, GuardResolution, PendingAction, SaveOutcome,
};

#[test]
fn unmodified_documents_proceed_immediately() {
    let mut editor = controller();
    assert_eq!(editor.guard(PendingAction::New), Guard::Proceed(PendingAction::New));
}

#[test]
fn cancel_aborts_and_discard_proceeds() {
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    assert_eq!(editor.guard(PendingAction::Close), Guard::Prompt);
    assert_eq!(editor.resolve_guard(GuardChoice::Cancel), GuardResolution::Cancelled);
    assert!(editor.session().is_modified());

    assert_eq!(editor.guard(PendingAction::Open), Guard::Prompt);
    assert_eq!(
        editor.resolve_guard(GuardChoice::Discard),
        GuardResolution::Proceed(PendingAction::Open)
    );
}

#[test]
fn save_choice_proceeds_only_after_a_successful_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guarded.html");
    std::fs::write(&path, "<p>v1</p>").unwrap();

    let mut editor = controller();
    editor.open(&path).unwrap();
    editor.handle_event(EngineEvent::ContentChanged);
    editor.engine_mut().document = "<p>v2</p>".into();

    assert_eq!(editor.guard(PendingAction::New), Guard::Prompt);
    assert_eq!(editor.resolve_guard(GuardChoice::Save), GuardResolution::Saving);

    let effects = answer_last_html(&mut editor);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Saved(_), Effect::Proceed(PendingAction::New)]
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>v2</p>");
}

#[test]
fn failed_save_does_not_proceed() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    assert_eq!(editor.guard(PendingAction::Close), Guard::Prompt);
    assert_eq!(
        editor.resolve_guard(GuardChoice::Save),
        GuardResolution::NeedsPath(PendingAction::Close)
    );
    let outcome = editor.save_as_then(
        &dir.path().join("nope").join("x.html"),
        Some(PendingAction::Close),
    );
    assert!(matches!(outcome, SaveOutcome::Pending(_)));

    let effects = answer_last_html(&mut editor);
    assert!(matches!(effects.as_slice(), [Effect::SaveFailed(_)]));
}

#[test]
fn untitled_save_routes_through_save_as() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);
    editor.engine_mut().document = "<p>fresh</p>".into();

    editor.guard(PendingAction::Open);
    let GuardResolution::NeedsPath(action) = editor.resolve_guard(GuardChoice::Save) else {
        panic!("untitled documents need a path");
    };
    editor.save_as_then(&dir.path().join("fresh"), Some(action));
    let effects = answer_last_html(&mut editor);

    assert!(matches!(
        effects.as_slice(),
        [Effect::Saved(_), Effect::Proceed(PendingAction::Open)]
    ));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("fresh.htm")).unwrap(),
        "<p>fresh</p>"
    );
}

#[test]
fn resolving_without_a_prompt_is_a_cancel() {
    let mut editor = controller();
    assert_eq!(editor.resolve_guard(GuardChoice::Discard), GuardResolution::Cancelled);
}

#[test]
fn every_exit_request_is_guarded() {
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    for _ in 0..2 {
        assert_eq!(editor.guard(PendingAction::Close), Guard::Prompt);
        assert_eq!(editor.resolve_guard(GuardChoice::Cancel), GuardResolution::Cancelled);
    }

    assert_eq!(editor.guard(PendingAction::Close), Guard::Prompt);
    assert_eq!(
        editor.resolve_guard(GuardChoice::Discard),
        GuardResolution::Proceed(PendingAction::Close)
    );
}
