use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mcptoggle",
    about = "Interactively enable or disable MCP servers in ~/.claude.json",
    long_about = "mcptoggle lists the MCP servers configured for Claude and lets you switch them on and off.

Servers are read from:
  • mcpServers / _disabledMcpServers (global)
  • projects[<current directory>].mcpServers / _disabledMcpServers (local)

Disabled servers are moved to the _disabledMcpServers mapping of the same scope,
so their definitions are kept and can be re-enabled later.

Keys:
  ↑/↓, k/j   move
  space      toggle the selected server
  a / n      enable all / disable all
  enter      save and exit
  q, esc     exit without saving (also Ctrl+C)

Examples:
  # Toggle servers for the current directory
  mcptoggle

  # Show the servers and their state without the interactive screen
  mcptoggle --list

  # Keep a timestamped copy of ~/.claude.json before saving
  mcptoggle --backup",
    version,
    author
)]
pub struct Cli {
    /// Path to the Claude configuration file (defaults to ~/.claude.json)
    #[arg(short, long, env = "MCPTOGGLE_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the servers and their state, then exit
    #[arg(short, long)]
    pub list: bool,

    /// Create timestamped backup of the configuration file before saving
    #[arg(short, long)]
    pub backup: bool,

    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(short = 't', long)]
    pub trace: bool,
}
