use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// Returns a configured Command for `sparrow-cli`
pub fn sparrow_cmd() -> Command {
    Command::cargo_bin("sparrow-cli").expect("Binary not found")
}

/// Prepares a temp home whose platform tools record their argv, one
/// argument per line, into `<home>/<tool>.args`.
pub fn setup_stub_home() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let bin = temp_dir.path().join("bin");
    fs::create_dir(&bin).expect("Failed to create bin directory");

    for tool in ["sparrow-query", "sparrow-database", "sparrow-rebuild"] {
        write_stub_tool(
            &bin.join(tool),
            &format!("printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/../{}.args\"\n", tool),
        );
    }

    temp_dir
}

/// Replace one stub tool with a version that exits with the given code.
pub fn make_failing_tool(home: &Path, tool: &str, code: i32) {
    write_stub_tool(&home.join("bin").join(tool), &format!("exit {}\n", code));
}

/// Read back the argv recorded by a stub tool.
pub fn recorded_args(home: &Path, tool: &str) -> Vec<String> {
    let path = home.join(format!("{}.args", tool));
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("{} was not invoked", tool))
        .lines()
        .map(str::to_string)
        .collect()
}

/// Value following a flag in a recorded argv.
pub fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

#[cfg(unix)]
fn write_stub_tool(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{}", body)).expect("Failed to write stub tool");
    let mut perms = fs::metadata(path).expect("Failed to stat stub tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub tool");
}
