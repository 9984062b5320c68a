//! Integration tests for the curriculum CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a curriculum command isolated from the caller's environment
fn curriculum() -> Command {
    let mut cmd = Command::cargo_bin("curriculum").unwrap();
    cmd.env_remove("CURRICULUM_CONFIG").env_remove("CURRICULUM_LOG");
    cmd
}

/// Helper to create an initialized directory
fn setup_test_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    curriculum().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

const SYLLABUS: &str = r#"
metadata:
  version: "1.0.0"
  created_at: "2024-03-01T09:00:00Z"
  target_exam: SAA-C03
  total_days: 30
weeks:
  - week_number: 1
    theme: Foundations
    description: Accounts, identity and networking
    days:
      - day_number: 1
        global_day_number: 1
        topic: IAM and account security
        aws_services: [IAM, Organizations]
        difficulty: beginner
        estimated_hours: 3
      - day_number: 2
        global_day_number: 2
        topic: VPC networking
        aws_services: [VPC]
        difficulty: intermediate
  - week_number: 2
    theme: Data
    description: Managed databases
    days:
      - day_number: 1
        global_day_number: 8
        topic: Amazon RDS
        aws_services: [RDS]
"#;

fn daily_content(correct_answer: &str) -> String {
    let mut yaml = String::from(
        r#"
metadata:
  day_number: 1
  week_number: 2
  global_day_number: 8
  topic: Amazon RDS
overview:
  description: Managed relational databases
scenario:
  context: An online shop needs a resilient database
quiz:
  questions:
"#,
    );
    for n in 1..=5 {
        let answer = if n == 5 { correct_answer } else { "A" };
        yaml.push_str(&format!(
            "    - question_number: {n}\n      question_text: Question {n}\n      options: [a, b, c, d]\n      correct_answer: {answer}\n      explanation: Because {n}\n"
        ));
    }
    yaml
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    curriculum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AWS certification curriculum"));
}

#[test]
fn test_version_displays() {
    curriculum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("curriculum"));
}

#[test]
fn test_unknown_command_fails() {
    curriculum().arg("frobnicate").assert().failure();
}

// ============================================================================
// Init Tests
// ============================================================================

#[test]
fn test_init_writes_default_config() {
    let tmp = setup_test_dir();
    let content = fs::read_to_string(tmp.path().join("config.yaml")).unwrap();

    assert!(content.contains("duration: 30"));
    assert!(content.contains("ec2_access_method: ssm-session-manager"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = setup_test_dir();
    fs::write(tmp.path().join("config.yaml"), "duration: 14\n").unwrap();

    curriculum()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    curriculum()
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();
    let content = fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
    assert!(content.contains("duration: 30"));
}

#[test]
fn test_init_creates_directory() {
    let tmp = TempDir::new().unwrap();
    curriculum()
        .current_dir(tmp.path())
        .args(["init", "nested/study"])
        .assert()
        .success();
    assert!(tmp.path().join("nested/study/config.yaml").exists());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let tmp = setup_test_dir();
    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("duration"))
        .stdout(predicate::str::contains("SAA-C03"));
}

#[test]
fn test_config_show_single_key() {
    let tmp = setup_test_dir();
    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show", "duration"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn test_config_show_json() {
    let tmp = setup_test_dir();
    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_instance_type\": \"t2.micro\""));
}

#[test]
fn test_config_show_unknown_key_fails() {
    let tmp = setup_test_dir();
    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show", "favorite_color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_config_show_rejects_zero_duration() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.yaml"), "duration: 0\n").unwrap();

    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn test_config_show_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    curriculum()
        .current_dir(tmp.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_path_from_env() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.yaml");
    fs::write(&path, "duration: 14\ncontainer_tool: podman\n").unwrap();

    curriculum()
        .env("CURRICULUM_CONFIG", &path)
        .args(["config", "show", "container_tool"])
        .assert()
        .success()
        .stdout("podman\n");
}

#[test]
fn test_config_keys_lists_defaults() {
    curriculum()
        .args(["config", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_cdk_language"))
        .stdout(predicate::str::contains("[default: typescript]"));
}

// ============================================================================
// Validate Tests
// ============================================================================

#[test]
fn test_validate_valid_documents() {
    let tmp = setup_test_dir();
    fs::write(tmp.path().join("syllabus.yaml"), SYLLABUS).unwrap();
    fs::create_dir_all(tmp.path().join("output/week2")).unwrap();
    fs::write(tmp.path().join("output/week2/day08.yaml"), daily_content("D")).unwrap();

    curriculum()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files checked:  3"))
        .stdout(predicate::str::contains("All files passed"));
}

#[test]
fn test_validate_invalid_answer_key() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("day08.yaml");
    fs::write(&path, daily_content("E")).unwrap();

    curriculum()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("quiz.questions[4].correct_answer"));
}

#[test]
fn test_validate_keep_going_reports_every_failure() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.yaml"), "duration: 0\n").unwrap();
    fs::write(tmp.path().join("b.yaml"), "cicd_tool: jenkins\n").unwrap();

    curriculum()
        .args(["validate", "--keep-going"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Files failed:   2"));
}

#[test]
fn test_validate_malformed_yaml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yaml");
    fs::write(&path, "weeks: [\n  - {").unwrap();

    curriculum()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_validate_explicit_kind() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS).unwrap();

    curriculum()
        .args(["validate", "--kind", "daily"])
        .arg(&path)
        .assert()
        .failure();
    curriculum()
        .args(["validate", "--kind", "syllabus"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_validate_skips_unknown_documents() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("other.yaml"), "name: unrelated\n").unwrap();

    curriculum()
        .arg("validate")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

// ============================================================================
// Syllabus Tests
// ============================================================================

#[test]
fn test_syllabus_summary() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS).unwrap();

    curriculum()
        .args(["syllabus", "summary"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("VPC networking"))
        .stdout(predicate::str::contains("Days listed:    3 of 30"));
}

#[test]
fn test_syllabus_day_found() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS).unwrap();

    curriculum()
        .args(["syllabus", "day"])
        .arg(&path)
        .arg("8")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amazon RDS"))
        .stdout(predicate::str::contains("Theme: Data"));
}

#[test]
fn test_syllabus_day_not_found_succeeds() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS).unwrap();

    curriculum()
        .args(["syllabus", "day"])
        .arg(&path)
        .arg("30")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_syllabus_day_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS).unwrap();

    curriculum()
        .args(["syllabus", "day", "--format", "json"])
        .arg(&path)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"global_day_number\": 1"));
}

#[test]
fn test_syllabus_invalid_week_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("syllabus.yaml");
    fs::write(&path, SYLLABUS.replace("week_number: 2", "week_number: 5")).unwrap();

    curriculum()
        .args(["syllabus", "summary"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("weeks[1].week_number"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    curriculum()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("curriculum"));
}
