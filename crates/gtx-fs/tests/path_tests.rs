use assert_fs::prelude::*;
use gtx_fs::{Error, sanitize_path, sanitize_paths};
use rstest::rstest;

#[test]
fn sanitize_canonicalizes() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("projects/flood").create_dir_all().unwrap();

    let path = sanitize_path(temp.path().join("projects/../projects/flood")).unwrap();
    assert_eq!(
        path,
        dunce::canonicalize(temp.path()).unwrap().join("projects").join("flood")
    );
}

#[rstest]
#[case("missing")]
#[case("missing/child")]
fn sanitize_missing_path_fails(#[case] name: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    let error = sanitize_path(temp.path().join(name)).unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn sanitize_file_is_not_a_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("project.json").touch().unwrap();

    let error = sanitize_path(temp.path().join("project.json")).unwrap_err();
    assert!(matches!(error, Error::NotADirectory { .. }));
}

#[test]
fn sanitize_paths_drops_duplicates_in_order() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").create_dir_all().unwrap();
    temp.child("b").create_dir_all().unwrap();

    let results = sanitize_paths([
        temp.path().join("b"),
        temp.path().join("a"),
        temp.path().join("a/../b"),
        temp.path().join("a"),
    ]);

    let root = dunce::canonicalize(temp.path()).unwrap();
    let paths: Vec<_> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(paths, [root.join("b"), root.join("a")]);
}

#[test]
fn sanitize_paths_keeps_errors_in_place() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").create_dir_all().unwrap();

    let results = sanitize_paths([temp.path().join("missing"), temp.path().join("a")]);

    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
}
