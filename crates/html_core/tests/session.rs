mod common;

use std::path::{Path, PathBuf};

use common::{Call, answer_last_html, controller};
use manos_html_core::{
    DocumentError, EditorConfig, Effect, EngineEvent, SaveOutcome, StartupDocument,
    normalize_extension, write_document,
};

#[test]
fn open_loads_bytes_and_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<h1>Title</h1>").unwrap();

    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);
    assert!(editor.session().is_modified());

    editor.open(&path).unwrap();

    assert!(!editor.session().is_modified());
    assert_eq!(editor.session().file_path(), Some(path.as_path()));
    assert_eq!(
        editor.engine().calls.last(),
        Some(&Call::Load {
            content: b"<h1>Title</h1>".to_vec(),
            mime_type: "text/html".into(),
            base_dir: Some(dir.path().to_path_buf()),
        })
    );
}

#[test]
fn open_missing_file_changes_nothing() {
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);
    editor.engine_mut().take_calls();

    let result = editor.open(Path::new("/no/such/file.html"));

    assert!(matches!(result, Err(DocumentError::NotFound(_))));
    assert!(editor.session().is_modified());
    assert_eq!(editor.session().file_path(), None);
    assert!(editor.engine().calls.is_empty());
}

#[test]
fn save_without_path_asks_for_one() {
    let mut editor = controller();
    assert_eq!(editor.save(), SaveOutcome::NeedsPath);
}

#[test]
fn save_as_then_save_writes_the_normalized_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = controller();
    editor.engine_mut().document = "<p>body</p>".into();
    editor.handle_event(EngineEvent::ContentChanged);

    let outcome = editor.save_as(&dir.path().join("notes"));
    assert!(matches!(outcome, SaveOutcome::Pending(_)));
    let effects = answer_last_html(&mut editor);

    let expected = dir.path().join("notes.htm");
    assert!(matches!(effects.as_slice(), [Effect::Saved(path)] if path == &expected));
    assert!(!editor.session().is_modified());
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), "<p>body</p>");

    editor.handle_event(EngineEvent::ContentChanged);
    editor.engine_mut().document = "<p>second</p>".into();
    assert!(matches!(editor.save(), SaveOutcome::Pending(_)));
    answer_last_html(&mut editor);
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), "<p>second</p>");
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn save_then_open_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let html = "<html><head><meta charset=\"utf-8\"></head><body><p>Grüße &amp; \"quotes\"</p></body></html>";
    let mut editor = controller();
    editor.engine_mut().document = html.into();

    editor.save_as(&dir.path().join("round.html"));
    answer_last_html(&mut editor);
    editor.engine_mut().document.clear();
    editor.open(&dir.path().join("round.html")).unwrap();

    assert_eq!(editor.engine().document, html);
}

#[test]
fn edits_during_a_save_keep_the_document_modified() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    editor.save_as(&dir.path().join("busy.html"));
    editor.handle_event(EngineEvent::ContentChanged);
    answer_last_html(&mut editor);

    assert!(editor.session().is_modified());
}

#[test]
fn failed_write_keeps_modified_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = controller();
    editor.handle_event(EngineEvent::ContentChanged);

    editor.save_as(&dir.path().join("missing-dir").join("page.html"));
    let effects = answer_last_html(&mut editor);

    assert!(matches!(
        effects.as_slice(),
        [Effect::SaveFailed(DocumentError::Write { .. })]
    ));
    assert!(editor.session().is_modified());
}

#[test]
fn extension_is_appended_exactly_once() {
    assert_eq!(normalize_extension(Path::new("a")), PathBuf::from("a.htm"));
    assert_eq!(normalize_extension(Path::new("a.txt")), PathBuf::from("a.txt.htm"));
    assert_eq!(normalize_extension(Path::new("a.htm")), PathBuf::from("a.htm"));
    assert_eq!(normalize_extension(Path::new("a.html")), PathBuf::from("a.html"));
    assert_eq!(normalize_extension(Path::new("A.HTML")), PathBuf::from("A.HTML"));
    let once = normalize_extension(Path::new("b"));
    assert_eq!(normalize_extension(&once), once);
}

#[test]
fn write_document_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");
    write_document(&path, "<p></p>").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"<p></p>");
}

#[test]
fn new_document_resets_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<p>x</p>").unwrap();
    let mut editor = controller();
    editor.open(&path).unwrap();
    editor.handle_event(EngineEvent::ContentChanged);

    editor.new_document();

    assert_eq!(editor.session().file_path(), None);
    assert!(!editor.session().is_modified());
    assert_eq!(editor.engine().document, "<p></p>");
}

#[test]
fn startup_prefers_file_then_example_then_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("start.html");
    std::fs::write(&path, "<p>start</p>").unwrap();

    let mut editor = controller();
    let config = EditorConfig::from_args(["html-editor".into(), path.clone().into_os_string()]);
    assert_eq!(editor.start(&config, Some(b"<p>example</p>")), StartupDocument::File);
    assert_eq!(editor.engine().document, "<p>start</p>");

    let mut editor = controller();
    let config = EditorConfig::from_args(["html-editor", "/missing.html"]);
    assert_eq!(editor.start(&config, Some(b"<p>example</p>")), StartupDocument::Example);
    assert_eq!(editor.engine().document, "<p>example</p>");
    assert!(editor.session().is_untitled());

    let mut editor = controller();
    let config = EditorConfig::from_args(["html-editor"]);
    assert_eq!(editor.start(&config, None), StartupDocument::Empty);
    assert_eq!(editor.engine().document, "<p></p>");
    assert!(!editor.session().is_modified());
    assert!(editor.source().is_dirty());
    assert_eq!(editor.engine().calls.last(), Some(&Call::Zoom(1.0)));
}
