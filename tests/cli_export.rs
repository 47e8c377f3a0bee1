//! The `ner-review export` command against the demo fallback

use std::io::Write;
use std::process::Command;

fn ner_review() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ner-review"))
}

#[test]
fn export_to_stdout_uses_demo_tweets() {
    let dir = tempfile::tempdir().unwrap();
    let output = ner_review()
        .args(["export", "--stdout", "--sample-size", "4", "--dataset"])
        .arg(dir.path().join("missing.csv"))
        .arg("--config")
        .arg(write_config(&dir, ""))
        .output()
        .unwrap();

    assert!(output.status.success());
    let csv = String::from_utf8(output.stdout).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("tweet_id,tweet_text,tagged_entity,entity_label,correct_entities? (yes/no),your label,notes")
    );
    // built-in lexicon: CDC + today, Pfizer, and two sentinel rows
    assert_eq!(lines.count(), 5);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("demo tweets"));
    assert!(stderr.contains("Crude accuracy (sample): 0.00%"));
}

#[test]
fn export_applies_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("actions.txt");
    std::fs::write(&script, "# mark everything correct\nyes 0\nyes 1\nyes 2\nyes 3\nyes 4\ntable\n").unwrap();
    let out = dir.path().join("labels.csv");

    let status = ner_review()
        .args(["export", "--sample-size", "4", "--dataset"])
        .arg(dir.path().join("missing.csv"))
        .arg("--config")
        .arg(write_config(&dir, ""))
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&out)
        .output()
        .unwrap();
    assert!(status.status.success());

    let rows = ner_review::from_csv(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(ner_review::accuracy(&rows), Some(1.0));
}

#[test]
fn out_of_range_sample_size_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = ner_review()
        .args(["export", "--stdout", "--sample-size", "500"])
        .arg("--config")
        .arg(write_config(&dir, ""))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("sample_size"));
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}
