#![allow(missing_docs)]

pub mod cli;
pub mod config;
pub mod servers;
pub mod session;
pub mod tui;

pub use config::ToggleConfig;
pub use servers::{build_server_list, save_entries, Scope, ServerEntry};
pub use session::{Action, Outcome, Session};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum McpToggleError {
    #[error("Failed to read {}: {reason}", path.display())]
    ConfigUnreadable { path: PathBuf, reason: String },

    #[error("No MCP servers found in configuration")]
    EmptyConfiguration,

    #[error("Interactive terminal required (stdin must be a TTY with raw mode support)")]
    UnsupportedTerminal,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
