//! End-to-end tests that invoke the compiled `geotagx-formatter` binary.

use assert_cmd::Command;
use gtx_schema::DocumentKind;
use gtx_test_utils::project::TestProject;
use predicates::prelude::*;
use serde_json::json;

fn formatter_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("geotagx-formatter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    formatter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GeoTag-X"))
        .stdout(predicate::str::contains("--compact"));
}

#[test]
fn test_version_output() {
    formatter_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("GeoTag-X Project Formatter Tool v"));
}

#[test]
fn test_paths_are_required() {
    formatter_cmd().assert().failure();
}

#[test]
fn test_formats_project_in_place() {
    let project = TestProject::with_sample_documents();

    formatter_cmd()
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("was successfully formatted."));

    let formatted = project.read_document(DocumentKind::Project);
    assert_eq!(formatted["name"], json!("Flood Watch"));

    let task_presenter = project.read_document(DocumentKind::TaskPresenter);
    assert_eq!(task_presenter["subject"], json!({"type": "image"}));

    let tutorial = project.read_raw("tutorial.json");
    assert!(tutorial.starts_with("{\n    \""));
    assert!(tutorial.contains(r#""on-correct-answer": {"#));
}

#[test]
fn test_second_run_changes_nothing() {
    let project = TestProject::with_sample_documents();
    formatter_cmd().arg(project.root()).assert().success();
    let first = project.read_raw("task_presenter.json");

    formatter_cmd().arg(project.root()).assert().success();
    assert_eq!(project.read_raw("task_presenter.json"), first);
}

#[test]
fn test_compact_output() {
    let project = TestProject::with_sample_documents();

    formatter_cmd()
        .args(["--compact", "--quiet"])
        .arg(project.root())
        .assert()
        .success();

    let content = project.read_raw("project.json");
    assert!(!content.contains('\n'));
    assert!(content.starts_with(r#"{"name":"Flood Watch","#));
}

#[test]
fn test_invalid_project_is_left_untouched() {
    let project = TestProject::with_sample_documents();
    project.write_document(DocumentKind::Project, &json!({"name": "  ", "short_name": "x"}));
    let before = project.read_raw("task_presenter.json");

    formatter_cmd()
        .arg(project.root())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: The project's name must be a non-empty string."));

    assert_eq!(project.read_raw("task_presenter.json"), before);
}

#[test]
fn test_failure_does_not_stop_other_projects() {
    let good = TestProject::with_sample_documents();
    let empty = TestProject::new();

    formatter_cmd()
        .arg(empty.root())
        .arg(good.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("contains no project configuration"))
        .stdout(predicate::str::contains("was successfully formatted."));

    assert_eq!(good.read_document(DocumentKind::Project)["name"], json!("Flood Watch"));
}

#[test]
fn test_missing_path_is_reported() {
    let project = TestProject::new();

    formatter_cmd()
        .arg(project.root().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_duplicate_paths_are_formatted_once() {
    let project = TestProject::with_sample_documents();

    formatter_cmd()
        .arg(project.root())
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully formatted").count(1));
}

#[test]
fn test_unknown_input_type_warns() {
    let project = TestProject::with_sample_documents();
    let mut task_presenter = gtx_test_utils::documents::task_presenter();
    task_presenter["questionnaire"]["questions"][3]["input"] = json!({"type": "polygon"});
    project.write_document(DocumentKind::TaskPresenter, &task_presenter);

    formatter_cmd()
        .arg(project.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"));

    formatter_cmd()
        .arg("--quiet")
        .arg(project.root())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
