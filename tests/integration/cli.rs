//! Integration tests for the `dcrtc` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper function to create a test file
fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Run dcrtc with its user config isolated inside `dir`
fn dcrtc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dcrtc"))
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_default_stage_prints_global_scope() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "ok.dcrt", "const pi: u32;\ndecl y;\n");

    let output = dcrtc(temp_dir.path(), &[path_str(&file)]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Global {\
         \n\tDeclaration {\n\t\tsymbol - pi\n\t\tis const - 1\n\t\ttype - u32\n\t\tline - 1\n\t\tchar - 1\n\t}\
         \n\tDeclaration {\n\t\tsymbol - y\n\t\tis const - 0\n\t\ttype - (to infer)\n\t\tline - 2\n\t\tchar - 1\n\t}\
         \n}\n"
    );
}

#[test]
fn test_stage_zero_prints_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "ok.dcrt", "decl");

    let output = dcrtc(temp_dir.path(), &["-s", "0", path_str(&file)]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Token {\n\tkind - 'decl'\n\tcontents - (empty)\n\tline - 1\n\tchar - 1\n}\n"
    );
}

#[test]
fn test_output_file_and_json() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "ok.dcrt", "decl p: >i8;");
    let out = temp_dir.path().join("out.json");

    let output = dcrtc(
        temp_dir.path(),
        &[
            "--format",
            "json",
            "-o",
            path_str(&out),
            path_str(&file),
        ],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["decls"][0]["type"], ">i8");
}

#[test]
fn test_user_config_sets_stage() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config").join("dcrtc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output]\nstage = \"lex\"\n").unwrap();
    let file = create_test_file(&temp_dir, "ok.dcrt", "decl");

    let output = dcrtc(temp_dir.path(), &[path_str(&file)]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Token {"));

    // CLI flag wins over the config file
    let output = dcrtc(temp_dir.path(), &["-s", "1", path_str(&file)]);
    assert!(!output.status.success());
}

#[test]
fn test_error_reports_position() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "bad.dcrt", "decl x: u32;\ndecl y: u99;\n");

    let output = dcrtc(temp_dir.path(), &[path_str(&file)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("    2 | decl y: u99;\n      |         ^"));
    assert!(stderr.contains("unknown type `u99` at 2:9"));
}

#[test]
fn test_invalid_stage_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "ok.dcrt", "decl y;");

    let output = dcrtc(temp_dir.path(), &["-s", "2", path_str(&file)]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.dcrt");

    let output = dcrtc(temp_dir.path(), &[path_str(&missing)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));
}
