mod common;

use common::{Call, answer_last_html, controller};
use manos_html_core::{Effect, EngineEvent, ViewTab};

fn html_request_count(editor: &manos_html_core::EditorController<common::RecordingEngine>) -> usize {
    editor
        .engine()
        .count(|call| matches!(call, Call::RequestHtml(_)))
}

#[test]
fn switching_to_source_when_dirty_serializes_once() {
    let mut editor = controller();
    assert!(editor.source().is_dirty());

    editor.select_tab(ViewTab::Source);
    assert_eq!(html_request_count(&editor), 1);

    editor.engine_mut().document = "<html><body><p>hi</p></body></html>".into();
    let effects = answer_last_html(&mut editor);

    assert!(!editor.source().is_dirty());
    assert!(matches!(
        effects.as_slice(),
        [Effect::SourceText(text)] if text == "<html><body><p>hi</p></body></html>"
    ));
}

#[test]
fn switching_to_source_when_clean_does_nothing() {
    let mut editor = controller();
    editor.select_tab(ViewTab::Source);
    answer_last_html(&mut editor);
    editor.select_tab(ViewTab::Normal);

    editor.select_tab(ViewTab::Source);

    assert_eq!(html_request_count(&editor), 1);
}

#[test]
fn switching_again_while_in_flight_does_not_duplicate() {
    let mut editor = controller();
    editor.select_tab(ViewTab::Source);
    editor.select_tab(ViewTab::Normal);
    editor.select_tab(ViewTab::Source);

    assert_eq!(html_request_count(&editor), 1);
}

#[test]
fn edits_mark_dirty_on_either_tab() {
    let mut editor = controller();
    editor.select_tab(ViewTab::Source);
    answer_last_html(&mut editor);
    editor.select_tab(ViewTab::Normal);

    editor.handle_event(EngineEvent::ContentChanged);

    assert!(editor.source().is_dirty());
    assert_eq!(html_request_count(&editor), 1);
}

#[test]
fn edit_while_source_is_active_resyncs() {
    let mut editor = controller();
    editor.select_tab(ViewTab::Source);
    answer_last_html(&mut editor);

    editor.handle_event(EngineEvent::ContentChanged);

    assert_eq!(html_request_count(&editor), 2);
}

#[test]
fn returning_to_normal_never_syncs() {
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    editor.select_tab(ViewTab::Normal);

    assert_eq!(html_request_count(&editor), 0);
}

#[test]
fn applying_source_reloads_and_marks_modified() {
    let mut editor = controller();
    editor.engine_mut().take_calls();

    editor.apply_source("<p>edited</p>");

    assert!(editor.session().is_modified());
    assert!(editor.source().is_dirty());
    assert!(matches!(
        editor.engine().calls.first(),
        Some(Call::Load { content, mime_type, .. })
            if content.as_slice() == b"<p>edited</p>" && mime_type == "text/html"
    ));
}

#[test]
fn loading_a_page_abandons_the_pending_sync() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("next.html");
    std::fs::write(&path, "<p>next</p>").unwrap();

    let mut editor = controller();
    editor.select_tab(ViewTab::Source);
    let abandoned = editor.source().in_flight().unwrap();
    editor.select_tab(ViewTab::Normal);
    editor.open(&path).unwrap();

    editor.select_tab(ViewTab::Source);
    editor.handle_event(EngineEvent::ContentChanged);

    assert_eq!(html_request_count(&editor), 2);
    assert_ne!(editor.source().in_flight(), Some(abandoned));

    let late = editor.handle_event(EngineEvent::Html {
        request: abandoned,
        html: "<p>old page</p>".into(),
    });
    assert!(late.is_empty());

    let effects = answer_last_html(&mut editor);
    assert!(matches!(
        effects.as_slice(),
        [Effect::SourceText(text)] if text == "<p>next</p>"
    ));
}

#[test]
fn applying_source_while_syncing_starts_a_fresh_sync() {
    let mut editor = controller();
    editor.select_tab(ViewTab::Source);

    editor.apply_source("<p>applied</p>");

    assert_eq!(html_request_count(&editor), 2);
    let effects = answer_last_html(&mut editor);
    assert!(matches!(
        effects.as_slice(),
        [Effect::SourceText(text)] if text == "<p>applied</p>"
    ));
}
