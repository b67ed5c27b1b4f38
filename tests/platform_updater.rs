use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_platform-updater");
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn write_manifest(dir: &TempDir) -> PathBuf {
    let manifest = serde_json::json!({
        "packages": [{
            "name": "websim",
            "maintainer": "WebSim",
            "platforms": [
                {
                    "name": "WebSim AVR Boards",
                    "version": "1.0.0",
                    "architecture": "avr",
                    "category": "Contributed",
                    "size": "1000",
                    "checksum": "SHA-256:aaa",
                    "url": "https://websim.example/avr-1.0.zip",
                    "archiveFileName": "websim-avr-1.0.zip",
                    "boards": [{"name": "Uno"}]
                },
                {
                    "name": "WebSim SAMD Boards",
                    "version": "2.0.0",
                    "architecture": "samd",
                    "size": "2000",
                    "checksum": "SHA-256:bbb"
                }
            ]
        }]
    });
    let path = dir.path().join("index.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&manifest).expect("serialize fixture"),
    )
    .expect("write fixture");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN).args(args).output().expect("run binary")
}

fn read_manifest(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read manifest");
    serde_json::from_str(&content).expect("parse manifest")
}

fn platform<'a>(doc: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    doc["packages"][0]["platforms"]
        .as_array()
        .expect("platforms array")
        .iter()
        .find(|platform| platform["name"] == name)
        .expect("platform present")
}

#[test]
fn explicit_values_rewrite_file_and_create_backup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);
    let original = fs::read(&path).expect("read original");

    let output = run(&[
        path.to_str().expect("utf-8 path"),
        "--platform",
        "WebSim AVR Boards",
        "--size",
        "5588",
        "--checksum",
        "abc123",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc = read_manifest(&path);
    let updated = platform(&doc, "WebSim AVR Boards");
    assert_eq!(updated["size"], "5588");
    assert_eq!(updated["checksum"], "SHA-256:abc123");
    // Untouched fields and sibling entries survive.
    assert_eq!(updated["version"], "1.0.0");
    assert_eq!(doc["packages"][0]["maintainer"], "WebSim");
    assert_eq!(platform(&doc, "WebSim SAMD Boards")["size"], "2000");

    let backup = fs::read(path.with_extension("json.backup")).expect("read backup");
    assert_eq!(backup, original);
}

#[test]
fn no_backup_flag_suppresses_backup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);

    let output = run(&[
        path.to_str().expect("utf-8 path"),
        "--size",
        "5588",
        "--checksum",
        "abc123",
        "--no-backup",
    ]);
    assert!(output.status.success());
    assert!(!path.with_extension("json.backup").exists());
}

#[test]
fn from_file_computes_size_and_digest() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);
    let archive = dir.path().join("websim-avr-1.0.zip");
    fs::write(&archive, b"abc").expect("write archive");

    let output = run(&[
        path.to_str().expect("utf-8 path"),
        "--from-file",
        archive.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc = read_manifest(&path);
    let updated = platform(&doc, "WebSim AVR Boards");
    assert_eq!(updated["size"], "3");
    assert_eq!(updated["checksum"], format!("SHA-256:{ABC_SHA256}"));
}

#[test]
fn missing_manifest_exits_nonzero() {
    let output = run(&["/no/such/index.json", "--size", "1", "--checksum", "x"]);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn malformed_manifest_exits_nonzero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").expect("write fixture");

    let output = run(&[
        path.to_str().expect("utf-8 path"),
        "--size",
        "1",
        "--checksum",
        "x",
    ]);
    assert!(!output.status.success());
}

#[test]
fn unmatched_platform_exits_nonzero_and_leaves_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);
    let original = fs::read(&path).expect("read original");

    let output = run(&[
        path.to_str().expect("utf-8 path"),
        "--platform",
        "No Such Boards",
        "--size",
        "1",
        "--checksum",
        "x",
    ]);
    assert!(!output.status.success());
    assert_eq!(fs::read(&path).expect("re-read"), original);
}

#[test]
fn no_update_arguments_is_clean_noop() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);
    let original = fs::read(&path).expect("read original");

    let output = run(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("To update, provide"));
    assert_eq!(fs::read(&path).expect("re-read"), original);
}

#[test]
fn show_displays_without_modifying() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);
    let original = fs::read(&path).expect("read original");

    let output = run(&[path.to_str().expect("utf-8 path"), "--show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WebSim AVR Boards"));
    assert!(stdout.contains("Size: 1000"));
    assert_eq!(fs::read(&path).expect("re-read"), original);
}

#[test]
fn list_flattens_all_platforms() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_manifest(&dir);

    let output = run(&[path.to_str().expect("utf-8 path"), "--list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WebSim AVR Boards (v1.0.0) - avr - Package: websim"));
    assert!(stdout.contains("WebSim SAMD Boards (v2.0.0) - samd - Package: websim"));
    assert!(stdout.contains("Total: 2 platform(s)"));
}
