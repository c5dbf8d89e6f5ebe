use assert_fs::prelude::*;
use dir_flatten::{flatten, RecordingReport};

/// Happy path from a media library: one wrapper folder holding one file.
#[test]
fn single_file_wrapper_is_flattened() {
    let root = assert_fs::TempDir::new().unwrap();
    let movie_dir = root.child("Wicked (2024)");
    movie_dir.create_dir_all().unwrap();
    movie_dir.child("Wicked (2024).mkv").write_str("dummy").unwrap();

    let mut report = RecordingReport::new();
    flatten(root.path(), None, &mut report).expect("flatten should succeed");

    let moved = root.child("Wicked (2024).mkv");
    assert!(moved.path().is_file(), "file should now sit directly under the root");
    assert!(!movie_dir.path().exists(), "wrapper directory should be gone");
    moved.assert("dummy");
}

/// Several siblings in one pass: qualifying wrappers collapse, the rest stay.
#[test]
fn mixed_siblings_are_handled_independently() {
    let root = assert_fs::TempDir::new().unwrap();

    let single = root.child("Solo (2018)");
    single.create_dir_all().unwrap();
    single.child("Solo (2018).mkv").write_str("a").unwrap();

    let multi = root.child("Extras");
    multi.create_dir_all().unwrap();
    multi.child("one.mp4").write_str("b").unwrap();
    multi.child("two.mp4").write_str("c").unwrap();

    let empty = root.child("Empty");
    empty.create_dir_all().unwrap();

    let mut report = RecordingReport::new();
    flatten(root.path(), None, &mut report).expect("flatten should succeed");

    assert!(root.child("Solo (2018).mkv").path().is_file());
    assert!(!single.path().exists());
    assert!(multi.child("one.mp4").path().is_file());
    assert!(multi.child("two.mp4").path().is_file());
    assert!(empty.path().is_dir(), "empty directory is not a candidate");
}
