use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content portal for Brazilian public datasets"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_ingest_then_list_and_get() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("portal.db");

    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--db-path")
        .arg(&db_path)
        .arg("ingest")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"upserted\": 3"));

    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--db-path")
        .arg(&db_path)
        .arg("list")
        .arg("fipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("honda-civic"));

    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--db-path")
        .arg(&db_path)
        .arg("get")
        .arg("fipe")
        .arg("no-such-car")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item not found"));
}

#[test]
fn test_search_short_query_is_empty_array() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("portal.db");

    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--db-path").arg(&db_path).arg("ingest").assert().success();

    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.arg("--db-path")
        .arg(&db_path)
        .arg("search")
        .arg("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}
