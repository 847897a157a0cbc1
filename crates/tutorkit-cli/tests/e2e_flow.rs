//! Full quiz-and-study journey: init, take the quiz, grade, then watch the
//! served content level follow the graded category.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tutorkit() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tutorkit").unwrap();
    cmd.env_remove("TUTORKIT_DATA_DIR");
    cmd
}

const ALL_CORRECT: &str = r#"{
  "answers": [
    { "question_id": 1, "selected": 0, "elapsed_secs": 28.0, "confidence": 4 },
    { "question_id": 2, "selected": 1, "elapsed_secs": 28.0, "confidence": 4 },
    { "question_id": 3, "selected": 1, "elapsed_secs": 28.0, "confidence": 4 },
    { "question_id": 4, "selected": 1, "elapsed_secs": 28.0, "confidence": 4 },
    { "question_id": 5, "selected": 0, "elapsed_secs": 28.0, "confidence": 4 }
  ],
  "time_taken_secs": 140.0,
  "confidence": 4.0,
  "hints_used": 1
}"#;

const ALL_WRONG: &str = r#"{
  "answers": [
    { "question_id": 1, "selected": 1, "elapsed_secs": 58.0, "confidence": 2 },
    { "question_id": 2, "selected": 0, "elapsed_secs": 58.0, "confidence": 2 },
    { "question_id": 3, "selected": 0, "elapsed_secs": 58.0, "confidence": 2 },
    { "question_id": 4, "selected": 0, "elapsed_secs": 58.0, "confidence": 2 },
    { "question_id": 5, "selected": 1, "elapsed_secs": 58.0, "confidence": 2 }
  ],
  "time_taken_secs": 290.0,
  "confidence": 2.0,
  "hints_used": 3
}"#;

#[test]
fn content_level_follows_graded_attempts() {
    let dir = TempDir::new().unwrap();

    tutorkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // The seeded question bank is served without its answer key.
    let output = tutorkit()
        .current_dir(dir.path())
        .args(["questions", "--topic", "binary-trees", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let questions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(questions.as_array().unwrap().len(), 5);
    assert!(questions[0].get("correct_index").is_none());

    // A strong attempt lands in the intermediate band.
    let submission = dir.path().join("round1.json");
    std::fs::write(&submission, ALL_CORRECT).unwrap();
    tutorkit()
        .current_dir(dir.path())
        .args(["grade", "--topic", "binary-trees", "--submission"])
        .arg(&submission)
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Intermediate"));

    // Content now defaults to the intermediate section for the same user.
    tutorkit()
        .current_dir(dir.path())
        .args(["content", "--topic", "binary-trees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level: intermediate"))
        .stdout(predicate::str::contains("Inorder traversal"))
        .stdout(predicate::str::contains("Code Python"));

    // A weak attempt drops the user back to beginner.
    let submission = dir.path().join("round2.json");
    std::fs::write(&submission, ALL_WRONG).unwrap();
    tutorkit()
        .current_dir(dir.path())
        .args(["grade", "--topic", "binary-trees", "--submission"])
        .arg(&submission)
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Beginner"));

    tutorkit()
        .current_dir(dir.path())
        .args(["content", "--topic", "binary-trees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level: beginner"))
        .stdout(predicate::str::contains("family tree"));

    // Both attempts are on record, newest first.
    tutorkit()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginner"))
        .stdout(predicate::str::contains("Intermediate"));

    let log = std::fs::read_to_string(dir.path().join("data/attempts.json")).unwrap();
    let attempts: serde_json::Value = serde_json::from_str(&log).unwrap();
    assert_eq!(attempts.as_array().unwrap().len(), 2);

    // The seeded document itself passes validation.
    tutorkit()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All topic documents valid"));
}

#[test]
fn named_users_keep_separate_histories() {
    let dir = TempDir::new().unwrap();

    tutorkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let submission = dir.path().join("alex.json");
    std::fs::write(&submission, ALL_CORRECT).unwrap();
    tutorkit()
        .current_dir(dir.path())
        .args(["grade", "--topic", "binary-trees", "--user", "alex", "--submission"])
        .arg(&submission)
        .assert()
        .success();

    tutorkit()
        .current_dir(dir.path())
        .args(["history", "--user", "alex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary-trees"));

    tutorkit()
        .current_dir(dir.path())
        .args(["history", "--user", "sam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attempts recorded for sam"));

    // The default user's content level is untouched by alex's attempt.
    tutorkit()
        .current_dir(dir.path())
        .args(["content", "--topic", "binary-trees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level: beginner"));
}
