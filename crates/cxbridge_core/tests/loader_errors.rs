use cxbridge_core::{LibclangConfig, Libclang, LoadError};
use std::fs;

#[test]
fn load_with_empty_directory_reports_searched_locations() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = LibclangConfig {
        explicit_path: None,
        search_dirs: vec![dir.path().to_path_buf()],
    };

    let err = Libclang::load_with(&config).expect_err("empty directory must not load");
    match &err {
        LoadError::NotFound { searched } => assert_eq!(searched, &vec![dir.path().to_path_buf()]),
        other => panic!("expected NotFound, got {other}"),
    }
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn open_rejects_a_file_that_is_not_a_library() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(if cfg!(windows) {
        "libclang.dll"
    } else if cfg!(target_os = "macos") {
        "libclang.dylib"
    } else {
        "libclang.so"
    });
    fs::write(&path, b"\x7fELF but not really").expect("write fake library");

    let err = Libclang::open(&path).expect_err("garbage must not open");
    assert!(matches!(err, LoadError::Open { .. }));
    assert_eq!(err.path(), Some(&path));
}

#[test]
fn explicit_garbage_path_is_the_only_attempt() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let first = dir.path().join("first-libclang.so");
    let second = dir.path().join("second-libclang.so");
    fs::write(&first, b"garbage").expect("write fake library");
    fs::write(&second, b"garbage").expect("write fake library");

    // Only the explicit path is tried; the other file has a non-matching name.
    let err = Libclang::load_with(&LibclangConfig {
        explicit_path: Some(first.clone()),
        search_dirs: vec![dir.path().to_path_buf()],
    })
    .expect_err("garbage must not load");

    match err {
        LoadError::Unloadable { attempts } => {
            assert_eq!(attempts.len(), 1);
            assert_eq!(attempts[0].path(), Some(&first));
        }
        other => panic!("expected Unloadable, got {other}"),
    }
}
