use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn langpack_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langpack"))
}

const PO: &str = concat!(
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"PO-Revision-Date: 2024-01-01 00:00+0000\\n\"\n",
);

fn seed_languages(root: &Path) {
    let languages = root.join("languages");
    fs::create_dir_all(&languages).unwrap();
    fs::write(languages.join("my-plugin-de_DE.po"), PO).unwrap();
    fs::write(languages.join("my-plugin-de_DE.mo"), b"mo bytes").unwrap();
    fs::write(
        languages.join("my-plugin-de_DE-abc123.json"),
        b"{\"Hello\":\"Hallo\"}",
    )
    .unwrap();
}

#[test]
fn test_build_skip_convert() {
    let temp_dir = TempDir::new().unwrap();
    seed_languages(temp_dir.path());

    let output = langpack_cmd()
        .args(["build", temp_dir.path().to_str().unwrap(), "--skip-convert"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("my-plugin-de_DE.zip created."));
    assert!(stdout.contains("language-pack.json created."));

    // Durable outputs are in place, scratch space is gone.
    assert!(temp_dir.path().join("packages/my-plugin-de_DE.zip").exists());
    assert!(!temp_dir.path().join("tmp").exists());

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join("language-pack.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["de_DE"]["slug"], "my-plugin");
    assert_eq!(manifest["de_DE"]["updated"], "2024-01-01 00:00+0000");
    assert_eq!(
        manifest["de_DE"]["package"],
        "/packages/my-plugin-de_DE.zip"
    );
}

#[test]
fn test_build_no_overwrite_reports_failure_line() {
    let temp_dir = TempDir::new().unwrap();
    seed_languages(temp_dir.path());
    let root = temp_dir.path().to_str().unwrap().to_string();

    let first = langpack_cmd()
        .args(["build", &root, "--skip-convert", "--no-overwrite"])
        .output()
        .unwrap();
    assert!(first.status.success());

    let archive = temp_dir.path().join("packages/my-plugin-de_DE.zip");
    let bytes = fs::read(&archive).unwrap();

    let second = langpack_cmd()
        .args(["build", &root, "--skip-convert", "--no-overwrite"])
        .output()
        .unwrap();
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains(">> my-plugin-de_DE.zip failed."));

    // The first archive survived the second run unchanged.
    assert_eq!(fs::read(&archive).unwrap(), bytes);
}

#[test]
fn test_build_archive_contents() {
    let temp_dir = TempDir::new().unwrap();
    seed_languages(temp_dir.path());

    let output = langpack_cmd()
        .args(["build", temp_dir.path().to_str().unwrap(), "--skip-convert"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let file = fs::File::open(temp_dir.path().join("packages/my-plugin-de_DE.zip")).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "my-plugin-de_DE-abc123.json",
            "my-plugin-de_DE.mo",
            "my-plugin-de_DE.po",
        ]
    );
}

#[test]
fn test_locales_lists_distinct_identifiers() {
    let temp_dir = TempDir::new().unwrap();
    seed_languages(temp_dir.path());
    fs::write(
        temp_dir.path().join("languages/my-plugin-fr_FR.po"),
        PO,
    )
    .unwrap();

    let output = langpack_cmd()
        .args([
            "locales",
            temp_dir.path().join("languages").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["my-plugin-de_DE", "my-plugin-fr_FR"]);
}

#[test]
fn test_locales_missing_directory_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let output = langpack_cmd()
        .args([
            "locales",
            temp_dir.path().join("absent").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
