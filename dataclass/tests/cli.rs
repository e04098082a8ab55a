//! End-to-end runs of the `dataclass` binary against temporary packages.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn package_dir(name: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.go"), format!("package {}\n", name)).unwrap();
    dir
}

fn dataclass(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dataclass"))
        .args(args)
        .env_remove("DATACLASS_STDOUT")
        .env_remove("DATACLASS_DEBUG")
        .output()
        .expect("failed to run dataclass")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn test_stdout_without_formatting() {
    let dir = package_dir("models");
    let args = [
        "-t",
        "OneType",
        "-f",
        "OneField int",
        "--no-format",
        "--stdout",
        path_str(dir.path()),
    ];
    let output = dataclass(&args);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let preamble = format!(
        "// Code generated by \"dataclass {}\"; DO NOT EDIT.\n\npackage models\n\n",
        args.join(" ")
    );
    assert!(stdout.starts_with(&preamble), "{}", stdout);
    assert!(stdout.contains("type OneType interface {\n\tOneField() int\n}\n"));
    assert!(stdout.contains("func NewOneType(\n\toneField int,\n) OneType {\n"));
    assert!(!dir.path().join("dataclass.go").exists());
}

#[test]
fn test_writes_default_file_in_package_dir() {
    let dir = package_dir("shapes");
    let output = dataclass(&[
        "--type",
        "Point",
        "--field",
        "X int|Y int",
        "--no-format",
        path_str(dir.path()),
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(dir.path().join("dataclass.go")).unwrap();
    assert!(content.contains("\npackage shapes\n"));
    assert!(content.contains("func (s *point) Y() int { return s.y }\n"));
}

#[test]
fn test_explicit_output_path() {
    let dir = package_dir("shapes");
    let out = dir.path().join("gen/point.go");
    let output = dataclass(&[
        "-t",
        "Point",
        "-f",
        "X int",
        "-o",
        path_str(&out),
        "--no-format",
        path_str(dir.path()),
    ]);
    assert!(output.status.success());
    assert!(out.exists());
    assert!(!dir.path().join("dataclass.go").exists());
}

#[test]
fn test_type_name_is_checked_before_package_discovery() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let output = dataclass(&["-t", "lower", "-f", "A int", path_str(&missing)]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("type must be public: lower"), "{}", stderr);
    assert!(!stderr.contains("failed to read"), "{}", stderr);
}

#[test]
fn test_invalid_fields_write_nothing() {
    let dir = package_dir("models");
    let output = dataclass(&[
        "-t",
        "T",
        "-f",
        "A int|lower string",
        "--no-format",
        path_str(dir.path()),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid field name 'lower'"));
    assert!(!dir.path().join("dataclass.go").exists());
}

#[test]
fn test_package_must_be_unique() {
    let dir = TempDir::new().unwrap();
    let output = dataclass(&["-t", "T", "-f", "A int", "--no-format", path_str(dir.path())]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("0 packages found"));
}
