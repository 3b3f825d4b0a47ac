#![cfg(feature = "cli")]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "jsonvet-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents.as_bytes()).expect("file should be writable");
    path
}

const PERSON_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "name": { "type": "string" },
        "role": { "type": "string", "default": "viewer" }
    },
    "required": ["name"]
}"#;

#[test]
fn validate_prints_the_defaulted_instance() {
    let dir = unique_temp_dir("validate-ok");
    let schema = write_file(&dir, "person.schema.json", PERSON_SCHEMA);
    let instance = write_file(&dir, "person.json", r#"{"name": "ada"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("--format")
        .arg("json")
        .arg("validate")
        .arg(&instance)
        .arg("--schema")
        .arg(&schema)
        .output()
        .expect("validate should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be JSON");
    assert_eq!(value["name"], "ada");
    assert_eq!(value["role"], "viewer");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_failure_exits_60_with_the_aggregated_message() {
    let dir = unique_temp_dir("validate-fail");
    let schema = write_file(&dir, "person.schema.json", PERSON_SCHEMA);
    let instance = write_file(&dir, "person.json", r#"{"role": "admin"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("validate")
        .arg(&instance)
        .arg("--schema")
        .arg(&schema)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema validation failed."));
    assert!(stderr.contains("name"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_reads_the_instance_from_stdin() {
    let dir = unique_temp_dir("validate-stdin");
    let schema = write_file(&dir, "person.schema.json", PERSON_SCHEMA);

    let mut child = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("--format")
        .arg("json")
        .arg("validate")
        .arg("-")
        .arg("--schema")
        .arg(&schema)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("validate should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(br#"{"name": "grace"}"#)
        .expect("stdin write should succeed");

    let output = child.wait_with_output().expect("validate should finish");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"role\":\"viewer\""));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_instance_text_exits_60() {
    let dir = unique_temp_dir("validate-malformed");
    let schema = write_file(&dir, "person.schema.json", PERSON_SCHEMA);
    let instance = write_file(&dir, "person.json", "{not json");

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("validate")
        .arg(&instance)
        .arg("--schema")
        .arg(&schema)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("instance is not valid JSON"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_reports_ok_schemas_and_exits_0() {
    let dir = unique_temp_dir("check-ok");
    let schema = write_file(&dir, "person.schema.json", PERSON_SCHEMA);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("--format")
        .arg("json")
        .arg("check")
        .arg(&schema)
        .output()
        .expect("check should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"ok\":true"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_flags_a_bogus_schema_and_exits_60() {
    let dir = unique_temp_dir("check-bogus");
    let good = write_file(&dir, "good.schema.json", r#"{"type": "object"}"#);
    let bogus = write_file(&dir, "bogus.schema.json", r#"{"type": "bogus-type"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("--format")
        .arg("json")
        .arg("check")
        .arg(&good)
        .arg(&bogus)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"ok\":true"));
    assert!(stdout.contains("\"ok\":false"));
    assert!(stdout.contains("Invalid JSON schema."));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_schema_file_exits_nonzero() {
    let dir = unique_temp_dir("missing-schema");
    let instance = write_file(&dir, "person.json", r#"{"name": "ada"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("validate")
        .arg(&instance)
        .arg("--schema")
        .arg(dir.join("no-such.schema.json"))
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_the_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonvet"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
