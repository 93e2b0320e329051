#![allow(clippy::self_named_module_files)]

use std::path::{Path, PathBuf};

pub mod reader;
pub mod writer;

/// File name of the Claude CLI configuration in the home directory.
pub const CLAUDE_CONFIG_FILE: &str = ".claude.json";

#[derive(Debug, Clone)]
pub struct ToggleConfig {
    pub config_path: PathBuf,
    pub current_dir: PathBuf,
}

impl ToggleConfig {
    /// Creates a new `ToggleConfig` for the current process.
    ///
    /// `config_override` replaces the default `~/.claude.json` location.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The home directory cannot be determined (when no override is given)
    /// - The current directory cannot be determined
    pub fn new(config_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match config_override {
            Some(path) => path,
            None => Self::default_config_path()?,
        };
        let current_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Could not determine current directory: {}", e))?;

        Ok(Self { config_path, current_dir })
    }

    pub fn with_paths<P: Into<PathBuf>>(config_path: P, current_dir: P) -> Self {
        Self { config_path: config_path.into(), current_dir: current_dir.into() }
    }

    /// Gets the default configuration file path (`~/.claude.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_config_path() -> anyhow::Result<PathBuf> {
        let home_dir = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
            .home_dir()
            .to_path_buf();
        Ok(home_dir.join(CLAUDE_CONFIG_FILE))
    }

    /// Key of the current directory inside the document's `projects` table.
    pub fn project_key(&self) -> String {
        project_key(&self.current_dir)
    }
}

/// Normalizes a directory path into a `projects` table key.
///
/// Claude writes project keys with forward slashes on every platform.
pub fn project_key(dir: &Path) -> String {
    dir.to_string_lossy().replace('\\', "/")
}
