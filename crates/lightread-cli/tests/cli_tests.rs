//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BOOK: &str = "Chapter 1\n\
The magnificent castle stood silently upon the green rolling hills tonight. \
Seven weary travellers approached the ancient gates before nightfall arrived.\n\
Chapter 2\n\
One. Two. Three. Four. Five. Six. Short bits only in this chapter here.\n";

fn lightread(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lightread").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write_book(dir: &TempDir) {
    std::fs::write(dir.path().join("book.txt"), BOOK).unwrap();
}

#[test]
fn load_detects_chapters() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir)
        .args(["load", "book.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 chapter(s) detected"));

    lightread(&dir)
        .arg("chapters")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 1"))
        .stdout(predicate::str::contains("Chapter 2"))
        .stdout(predicate::str::contains("Overall progress: 0%"));
}

#[test]
fn load_rejects_tiny_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tiny.txt"), "too small").unwrap();

    lightread(&dir)
        .args(["load", "tiny.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too small"));
}

#[test]
fn load_reports_no_chapters() {
    let dir = TempDir::new().unwrap();
    // exactly 30 characters: passes the file-size gate, but the single
    // chunk is not long enough to survive the chapter length filter
    std::fs::write(dir.path().join("flat.txt"), "abcdefghijklmnopqrstuvwxyz1234").unwrap();

    lightread(&dir)
        .args(["load", "flat.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no chapters found"));
}

#[test]
fn quiz_and_submit_record_a_score() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    // chapter 1 has exactly two qualifying sentences
    lightread(&dir)
        .args(["quiz", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz — Chapter 1"))
        .stdout(predicate::str::contains("A)"))
        .stdout(predicate::str::contains("D)"));

    lightread(&dir)
        .args(["submit", "--answers", "-,-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored 0/2 (0%)."));

    lightread(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quizzes taken: 1/2"));
}

#[test]
fn quiz_on_terse_chapter_reports_no_questions() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    lightread(&dir)
        .args(["quiz", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions could be generated"));
}

#[test]
fn submit_without_pending_quiz_fails() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    lightread(&dir)
        .args(["submit", "--answers", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pending quiz"));
}

#[test]
fn progress_flows_into_completion_notice() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir)
        .args([
            "join",
            "--name",
            "Ada",
            "--phone",
            "15550100",
            "--book-title",
            "Dracula",
            "--day",
            "Saturday",
            "--start-date",
            "2026-09-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("member ID is LR-"));

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    // not done yet
    lightread(&dir)
        .args(["complete", "--note", "Great read"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not every chapter is finished"));

    lightread(&dir).args(["progress", "1", "100"]).assert().success();
    lightread(&dir).args(["progress", "2", "100"]).assert().success();

    lightread(&dir)
        .args(["complete", "--note", "Great read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion Notice"))
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Note: Great read"));
}

#[test]
fn read_prints_chapter_and_moves_cursor() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    lightread(&dir)
        .args(["read", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 2"))
        .stdout(predicate::str::contains("Short bits only"));

    // the cursor marker follows the last-read chapter
    lightread(&dir)
        .arg("chapters")
        .assert()
        .success()
        .stdout(predicate::str::contains("2*"));

    lightread(&dir)
        .args(["read", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no chapter 9"));
}

#[test]
fn reset_removes_state() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);

    lightread(&dir).args(["load", "book.txt"]).assert().success();
    assert!(dir.path().join("lightread.json").exists());

    lightread(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert!(!dir.path().join("lightread.json").exists());

    lightread(&dir)
        .arg("chapters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no book loaded"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    lightread(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lightread.toml"));

    lightread(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_caps_quiz_size() {
    let dir = TempDir::new().unwrap();
    write_book(&dir);
    std::fs::write(
        dir.path().join("lightread.toml"),
        "[quiz]\nmax_questions = 1\n",
    )
    .unwrap();

    lightread(&dir).args(["load", "book.txt"]).assert().success();

    lightread(&dir)
        .args(["quiz", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("2. ").not());
}
