use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

use crate::fixtures;

#[cfg(test)]
mod tests {
    use super::*;

    fn mcptoggle() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mcptoggle"));
        cmd.env_remove("MCPTOGGLE_CONFIG").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_cli_help() {
        mcptoggle()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("enable or disable MCP servers"));
    }

    #[test]
    fn test_cli_version() {
        mcptoggle()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_list_shows_global_and_local_servers() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let project_dir = fixtures::canonical_dir(temp_dir.path());
        let config_file = temp_dir.child(".claude.json");
        fixtures::write_json(
            config_file.path(),
            &fixtures::full_document(&project_dir.to_string_lossy().replace('\\', "/")),
        );

        mcptoggle()
            .current_dir(&project_dir)
            .arg("--config")
            .arg(config_file.path())
            .arg("--list")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("[on ] github")
                    .and(predicate::str::contains("[on ] fetch"))
                    .and(predicate::str::contains("[off] slack"))
                    .and(predicate::str::contains("[on ] sqlite (local)"))
                    .and(predicate::str::contains("[off] postgres (local)"))
                    .and(predicate::str::contains("other").not()),
            );
    }

    #[test]
    fn test_list_reads_path_from_env() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config_file = temp_dir.child("claude.json");
        fixtures::write_json(config_file.path(), &fixtures::simple_document());

        mcptoggle()
            .current_dir(temp_dir.path())
            .env("MCPTOGGLE_CONFIG", config_file.path())
            .arg("--list")
            .assert()
            .success()
            .stdout(predicate::str::contains("[on ] a").and(predicate::str::contains("[off] b")));
    }

    #[test]
    fn test_missing_config_exits_with_error() {
        let temp_dir = assert_fs::TempDir::new().unwrap();

        mcptoggle()
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(temp_dir.child("missing.json").path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read"));
    }

    #[test]
    fn test_invalid_json_exits_with_error() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config_file = temp_dir.child(".claude.json");
        config_file.write_str("{ not json").unwrap();

        mcptoggle()
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(config_file.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn test_empty_config_exits_with_error() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config_file = temp_dir.child(".claude.json");
        config_file.write_str("{}").unwrap();

        mcptoggle()
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(config_file.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("No MCP servers found"));
    }

    #[test]
    fn test_non_interactive_terminal_exits_without_writing() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config_file = temp_dir.child(".claude.json");
        let original = r#"{"mcpServers":{"a":{"x":1}},"_disabledMcpServers":{"b":{"y":2}}}"#;
        config_file.write_str(original).unwrap();

        mcptoggle()
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(config_file.path())
            .write_stdin(" \r")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Interactive terminal required"));

        assert_eq!(fs::read_to_string(config_file.path()).unwrap(), original);
    }
}
