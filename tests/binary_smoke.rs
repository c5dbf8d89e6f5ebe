use assert_cmd::cargo::cargo_bin;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// The binary defaults its root to the current working directory.
#[test]
fn defaults_to_current_directory() {
    let td = tempdir().unwrap();
    let wrapper = td.path().join("Wicked (2024)");
    fs::create_dir_all(&wrapper).unwrap();
    fs::write(wrapper.join("Wicked (2024).mkv"), "dummy").unwrap();

    let me = cargo_bin("dir_flatten");
    let out = Command::new(&me)
        .current_dir(td.path())
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "binary exited with failure");
    assert!(td.path().join("Wicked (2024).mkv").is_file(), "file should sit under the root");
    assert!(!wrapper.exists(), "wrapper directory should be gone");
}

/// An explicit positional root is honored.
#[test]
fn accepts_positional_root() {
    let td = tempdir().unwrap();
    let wrapper = td.path().join("Solo (2018)");
    fs::create_dir_all(&wrapper).unwrap();
    fs::write(wrapper.join("Solo (2018).mkv"), "dummy").unwrap();

    let me = cargo_bin("dir_flatten");
    let out = Command::new(&me)
        .arg(td.path())
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "binary exited with failure");
    assert!(td.path().join("Solo (2018).mkv").is_file());
    assert!(!wrapper.exists());
}

/// --depth is enforced by the binary: nothing below the bound moves.
#[test]
fn depth_flag_limits_traversal() {
    let td = tempdir().unwrap();
    let level2 = td.path().join("Level1").join("Level2");
    fs::create_dir_all(&level2).unwrap();
    fs::write(level2.join("movie.mkv"), "dummy").unwrap();

    let me = cargo_bin("dir_flatten");
    let out = Command::new(&me)
        .arg(td.path())
        .args(["--depth", "0"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "binary exited with failure");
    assert!(level2.join("movie.mkv").is_file(), "nothing below depth 0 should move");
}

/// A negative depth dies in argument parsing, before any traversal.
#[test]
fn negative_depth_is_rejected_at_parse_time() {
    let td = tempdir().unwrap();
    let wrapper = td.path().join("Movie (2001)");
    fs::create_dir_all(&wrapper).unwrap();
    fs::write(wrapper.join("movie.mkv"), "dummy").unwrap();

    let me = cargo_bin("dir_flatten");
    let out = Command::new(&me)
        .arg(td.path())
        .args(["--depth", "-1"])
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "parse error should exit nonzero");
    assert!(wrapper.join("movie.mkv").is_file(), "tree must be untouched");
}

/// A missing root is a reported no-op, not a program failure.
#[test]
fn missing_root_reports_and_exits_zero() {
    let td = tempdir().unwrap();
    let gone = td.path().join("no_such_dir");

    let me = cargo_bin("dir_flatten");
    let out = Command::new(&me)
        .arg(&gone)
        .output()
        .expect("spawn binary");

    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));

    assert!(out.status.success(), "missing root should not be fatal");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Directory does not exist"),
        "expected a missing-root diagnostic, got: {stderr}"
    );
}
