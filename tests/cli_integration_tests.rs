use std::process::Command;

/// Test helper to run the binary with a clean auth environment and capture output
fn run_cli_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sponsors"))
        .args(args)
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("SPONSORS_HTTP_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Test helper to check if output contains expected text
fn assert_output_contains(output: &str, expected: &str) {
    assert!(
        output.contains(expected),
        "Output did not contain expected text.\nExpected: {}\nActual output:\n{}",
        expected,
        output
    );
}

#[test]
fn test_cli_help_command() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["--help"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "Work with GitHub sponsors.");
    assert_output_contains(&stdout, "Commands:");
    assert_output_contains(&stdout, "list");
}

#[test]
fn test_cli_list_help_shows_example() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["list", "--help"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "List sponsors for a user");
    assert_output_contains(&stdout, "$ sponsors list <user>");
}

#[test]
fn test_cli_version_command() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["--version"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_cli_list_without_user() {
    let (stdout, stderr, exit_code) = run_cli_command(&["list"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert_output_contains(&stderr, "must specify a user");
    assert_output_contains(&stderr, "Usage: sponsors list <user>");
}

#[test]
fn test_cli_list_with_too_many_users() {
    let (stdout, stderr, exit_code) = run_cli_command(&["ls", "foo", "bar"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert_output_contains(&stderr, "too many arguments");
}

#[test]
fn test_cli_list_without_token_fails_before_network() {
    let (stdout, stderr, exit_code) = run_cli_command(&["list", "octocat"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert_output_contains(&stderr, "authentication required");
    assert_output_contains(&stderr, "GH_TOKEN");
}
