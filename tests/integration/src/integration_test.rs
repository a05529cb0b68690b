//! End-to-end integration tests for the formatting pipeline
//!
//! These tests exercise the complete flow: project directory -> configuration
//! set -> formatted set -> project directory.

use std::thread;

use gtx_format::{Formatter, format_configuration_set};
use gtx_fs::{FormatOptions, ProjectLayout, read_configuration_set, write_configuration_set};
use gtx_schema::{ConfigurationSet, DocumentKind};
use gtx_test_utils::{documents, project::TestProject};
use pretty_assertions::assert_eq;
use serde_json::json;

const OVERWRITE: FormatOptions = FormatOptions {
    compact: false,
    overwrite: true,
};

fn format_in_place(project: &TestProject) -> ConfigurationSet {
    let layout = ProjectLayout::new(project.root());
    let set = read_configuration_set(&layout).unwrap();
    let set = format_configuration_set(set).unwrap();
    write_configuration_set(&layout, &set, OVERWRITE).unwrap();
    set
}

#[test]
fn test_full_pipeline_round_trips_through_disk() {
    let project = TestProject::with_sample_documents();

    let formatted = format_in_place(&project);
    let reread = read_configuration_set(&ProjectLayout::new(project.root())).unwrap();

    assert_eq!(reread, formatted);
    assert_eq!(format_configuration_set(reread).unwrap(), formatted);
}

#[test]
fn test_written_documents_keep_authored_key_order() {
    let project = TestProject::with_sample_documents();
    format_in_place(&project);

    let task_presenter = project.read_document(DocumentKind::TaskPresenter);
    let keys: Vec<_> = task_presenter.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["language", "questionnaire", "subject"]);

    let input = &task_presenter["questionnaire"]["questions"][1]["input"];
    let keys: Vec<_> = input.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        [
            "type",
            "options",
            "enable-multiple-choices",
            "enable-other-option",
            "enable-illustrations",
            "size"
        ]
    );
}

#[test]
fn test_tutorial_file_listed_first_still_uses_task_presenter_language() {
    let project = TestProject::new();
    project.write_raw(
        "tutorial.json",
        r#"{"default-message": {"on-wrong-answer": "Raté."}}"#,
    );
    project.write_document(DocumentKind::Project, &json!({"name": "Inondations"}));
    project.write_document(
        DocumentKind::TaskPresenter,
        &json!({
            "language": {"default": "fr", "available": ["fr", "en"]},
            "questionnaire": {
                "questions": [{"key": "eau", "title": "De l'eau ?", "input": {"type": "text"}}]
            }
        }),
    );

    format_in_place(&project);

    assert_eq!(
        project.read_document(DocumentKind::Tutorial),
        json!({"default-message": {"on-wrong-answer": {"fr": "Raté."}}})
    );
}

#[test]
fn test_rejected_set_writes_nothing() {
    let project = TestProject::with_sample_documents();
    let mut tutorial = documents::tutorial();
    tutorial["subjects"][0]["assertions"] = json!({"smoke": {"expects": "yes"}});
    project.write_document(DocumentKind::Tutorial, &tutorial);
    let before: Vec<_> = DocumentKind::ALL
        .iter()
        .map(|kind| project.read_raw(kind.file_name()))
        .collect();

    let layout = ProjectLayout::new(project.root());
    let set = read_configuration_set(&layout).unwrap();
    let error = format_configuration_set(set).unwrap_err();

    assert!(error.is_invalid_configuration());
    assert!(error.to_string().contains("smoke"));
    let after: Vec<_> = DocumentKind::ALL
        .iter()
        .map(|kind| project.read_raw(kind.file_name()))
        .collect();
    assert_eq!(after, before);
}

#[test]
fn test_independent_sets_format_concurrently() {
    let handles: Vec<_> = ["en", "fr", "es"]
        .into_iter()
        .map(|code| {
            thread::spawn(move || {
                let mut set = documents::configuration_set();
                if let Some(task_presenter) = set.get_mut(DocumentKind::TaskPresenter) {
                    task_presenter["language"] = json!({"default": code, "available": [code]});
                }
                let set = Formatter::new().format(set, false).unwrap();
                (code, set)
            })
        })
        .collect();

    for handle in handles {
        let (code, set) = handle.join().unwrap();
        let message = &set.get(DocumentKind::Tutorial).unwrap()["default-message"]["on-correct-answer"];
        assert_eq!(message, &json!({code: "Well done!"}));
    }
}
