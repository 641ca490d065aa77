mod common;
use common::{arg_value, make_failing_tool, recorded_args, sparrow_cmd, setup_stub_home};
use predicates::prelude::*;

#[test]
fn test_query_run_invokes_query_tool_with_defaults() {
    let home = setup_stub_home();

    sparrow_cmd()
        .args(["--sparrow-cli-internal", home.path().to_str().unwrap()])
        .args(["query", "run", "--gdl", "script.gdl"])
        .assert()
        .success();

    let args = recorded_args(home.path(), "sparrow-query");
    assert_eq!(
        arg_value(&args, "--home"),
        Some(home.path().display().to_string())
    );
    assert_eq!(arg_value(&args, "--format"), Some("json".to_string()));
    assert_eq!(arg_value(&args, "--timeout"), Some("3600".to_string()));
    assert!(args.contains(&"script.gdl".to_string()));
    assert!(!args.contains(&"--database".to_string()));
}

#[test]
fn test_query_run_csv_format_and_output_dir() {
    let home = setup_stub_home();

    sparrow_cmd()
        .args(["--sparrow-cli-internal", home.path().to_str().unwrap()])
        .args(["query", "run", "--gdl", "script.gdl", "-f", "csv", "-o", "/tmp/out"])
        .assert()
        .success();

    let args = recorded_args(home.path(), "sparrow-query");
    assert_eq!(arg_value(&args, "--format"), Some("csv".to_string()));
    assert_eq!(arg_value(&args, "--output"), Some("/tmp/out".to_string()));
    assert_eq!(arg_value(&args, "--timeout"), Some("3600".to_string()));
}

#[test]
fn test_query_run_forwards_database_and_all_scripts() {
    let home = setup_stub_home();

    sparrow_cmd()
        .args(["--sparrow-cli-internal", home.path().to_str().unwrap()])
        .args(["query", "run", "-d", "/db", "--gdl", "a.gdl", "b.gdl"])
        .assert()
        .success();

    let args = recorded_args(home.path(), "sparrow-query");
    assert_eq!(arg_value(&args, "--database"), Some("/db".to_string()));
    assert!(args.contains(&"a.gdl".to_string()));
    assert!(args.contains(&"b.gdl".to_string()));
}

#[test]
fn test_query_run_requires_gdl() {
    sparrow_cmd()
        .args(["query", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--gdl"));
}

#[test]
fn test_query_tool_failure_propagates_as_nonzero_exit() {
    let home = setup_stub_home();
    make_failing_tool(home.path(), "sparrow-query", 3);

    sparrow_cmd()
        .args(["--sparrow-cli-internal", home.path().to_str().unwrap()])
        .args(["query", "run", "--gdl", "script.gdl"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("exited with status 3"));
}

#[test]
fn test_query_run_reports_missing_install() {
    sparrow_cmd()
        .args(["--sparrow-cli-internal", "/nonexistent-sparrow-home"])
        .args(["query", "run", "--gdl", "script.gdl"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"));
}
