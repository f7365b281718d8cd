use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pfg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pfg").unwrap();
    cmd.current_dir(dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

const RESUME: &str = "\
Max Mustermann
max@firma.de
+49 176 1234567

Berufserfahrung
2019 - 2021 Monteur bei Beispiel GmbH

Studium der Informatik 2010 - 2014

Kenntnisse: SAP und Python
";

/// Write a resume file into the tempdir and return its path. The tempdir
/// guard must be kept alive.
fn resume_file() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lebenslauf.txt");
    fs::write(&path, RESUME).unwrap();
    (tmp, path)
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    let mut cmd = Command::cargo_bin("pfg").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pfg"));
}

// --- Text rendering ---

#[test]
fn renders_profile_text() {
    let (tmp, resume) = resume_file();

    pfg(tmp.path())
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Berufserfahrung:**"))
        .stdout(predicate::str::contains("Beispiel GmbH"))
        .stdout(predicate::str::contains("| SAP: | Advanced |"))
        .stdout(predicate::str::contains("Profil automatisch generiert am"));
}

#[test]
fn applies_header_defaults() {
    let (tmp, resume) = resume_file();

    pfg(tmp.path())
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("X|YYY|XXX|Z"))
        .stdout(predicate::str::contains("01.04.2025"));
}

#[test]
fn reads_from_stdin() {
    let tmp = TempDir::new().unwrap();

    pfg(tmp.path())
        .write_stdin(RESUME)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Ausbildung:**"));
}

// --- JSON output ---

#[test]
fn json_output_contains_identity() {
    let (tmp, resume) = resume_file();

    pfg(tmp.path())
        .args(["--json"])
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_experience\""))
        .stdout(predicate::str::contains("Max Mustermann"))
        .stdout(predicate::str::contains("max@firma.de"));
}

// --- Remarks ---

#[test]
fn appends_references_and_certificates() {
    let (tmp, resume) = resume_file();

    pfg(tmp.path())
        .args(["--references", "Dr. Weber", "--certificates", "SAP-Schulung"])
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("Zusätzliche Informationen:"))
        .stdout(predicate::str::contains("- Referenzen: Dr. Weber"))
        .stdout(predicate::str::contains("- Zertifikate: SAP-Schulung"));
}

// --- Degenerate input ---

#[test]
fn empty_resume_fails_with_warning() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("leer.txt");
    fs::write(&path, "   \n\n  ").unwrap();

    pfg(tmp.path())
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Kein Text gefunden im Lebenslauf."));
}

// --- Artifact output ---

#[test]
fn writes_timestamped_artifact() {
    let (tmp, resume) = resume_file();
    let out = tmp.path().join("out");

    pfg(tmp.path())
        .arg(&resume)
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&out).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("Bewerberprofil_"));
    assert!(name.ends_with(".txt"));
}
