/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/sample-resolution/resolution.toml";
const UNRESOLVED_FIXTURE: &str = "tests/fixtures/sample-resolution/unresolved.toml";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", FIXTURE])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("resolved-components")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("resolved-components")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 0: unresolved artifacts without --fail-on-unresolved
    #[test]
    fn test_exit_code_unresolved_without_flag() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", UNRESOLVED_FIXTURE])
            .assert()
            .code(0);
    }

    /// Exit code 1: unresolved artifacts with --fail-on-unresolved
    #[test]
    fn test_exit_code_unresolved_with_flag() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", UNRESOLVED_FIXTURE, "--fail-on-unresolved"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("could not be resolved"));
    }

    /// Exit code 0: --fail-on-unresolved with everything resolved
    #[test]
    fn test_exit_code_all_resolved_with_flag() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", FIXTURE, "--fail-on-unresolved"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("resolved-components")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", FIXTURE, "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent input
    #[test]
    fn test_exit_code_missing_input() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", "/nonexistent/resolution.toml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Resolution result file not found"));
    }

    /// Exit code 3: Application error - input is a directory
    #[test]
    fn test_exit_code_input_is_directory() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", "tests/fixtures"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - invalid exclude pattern
    #[test]
    fn test_exit_code_invalid_pattern() {
        cargo_bin_cmd!("resolved-components")
            .args(["-i", FIXTURE, "-e", "bad@pattern"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid character"));
    }
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("resolved-components")
        .args(["-i", FIXTURE])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["serialNumber"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
    assert_eq!(json["metadata"]["tool"]["name"], "resolved-components");
    assert_eq!(json["summary"]["totalComponents"], 7);
    assert_eq!(json["summary"]["distinctComponents"], 6);
    assert_eq!(json["components"][0]["id"], "com.google.guava:guava:32.1.3-jre");
}

#[test]
fn test_e2e_markdown_format() {
    cargo_bin_cmd!("resolved-components")
        .args(["-i", FIXTURE, "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Resolved Components"))
        .stdout(predicate::str::contains(
            "| org.slf4j:slf4j-api:2.0.9 | module | 2 | 0 |",
        ));
}

#[test]
fn test_e2e_exclude_patterns() {
    cargo_bin_cmd!("resolved-components")
        .args(["-i", FIXTURE, "-e", "org.junit*", "-e", "nothing*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("junit").not())
        .stderr(predicate::str::contains(
            "Exclude pattern 'nothing*' did not match any component",
        ));
}

#[test]
fn test_e2e_exclude_everything_fails() {
    cargo_bin_cmd!("resolved-components")
        .args(["-i", UNRESOLVED_FIXTURE, "-e", "org.example*"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("were excluded"));
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.md");

    cargo_bin_cmd!("resolved-components")
        .args(["-i", FIXTURE, "-f", "md", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output complete"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("## Components"));
}

#[test]
fn test_e2e_malformed_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("resolution.toml");
    fs::write(&input, "[[component]]\nkind = \"project\"\npath = \"app\"\n").unwrap();

    cargo_bin_cmd!("resolved-components")
        .arg("-i")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse resolution result"))
        .stderr(predicate::str::contains("component[0]"));
}

#[test]
fn test_e2e_default_input_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::copy(FIXTURE, temp_dir.path().join("resolution.toml")).unwrap();

    cargo_bin_cmd!("resolved-components")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("project :libs:core"));
}
