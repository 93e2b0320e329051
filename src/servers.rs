use crate::config::{project_key, reader, writer, ToggleConfig};
use crate::McpToggleError;
use anyhow::Context;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

pub const ACTIVE_KEY: &str = "mcpServers";
pub const DISABLED_KEY: &str = "_disabledMcpServers";
pub const PROJECTS_KEY: &str = "projects";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Top-level mappings, shared by every directory.
    Global,
    /// Mappings inside the `projects` entry of the current directory.
    Local,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// One toggle-able MCP server definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEntry {
    pub name: String,
    pub scope: Scope,
    pub enabled: bool,
    /// Original server definition, written back untouched.
    pub config: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// The file could not be re-read before merging, so nothing was written.
    Skipped { reason: String },
}

fn mapping<'a>(container: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    container.get(key).and_then(Value::as_object)
}

fn project_entry<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    document.get(PROJECTS_KEY).and_then(|projects| projects.get(key)).filter(|p| p.is_object())
}

/// Build the flat list of servers from a configuration document.
///
/// Sources are visited in order: global active, global disabled, local active,
/// local disabled. The first occurrence of a name wins across all four, so a
/// local server sharing a global server's name is not listed.
///
/// # Errors
///
/// Returns `McpToggleError::EmptyConfiguration` if no server is found.
pub fn build_server_list(
    document: &Value,
    current_dir: &Path,
) -> Result<Vec<ServerEntry>, McpToggleError> {
    let key = project_key(current_dir);
    let project = project_entry(document, &key);
    if project.is_none() {
        debug!("No project entry for {key}; only global servers are listed");
    }

    let sources = [
        (mapping(document, ACTIVE_KEY), Scope::Global, true),
        (mapping(document, DISABLED_KEY), Scope::Global, false),
        (project.and_then(|p| mapping(p, ACTIVE_KEY)), Scope::Local, true),
        (project.and_then(|p| mapping(p, DISABLED_KEY)), Scope::Local, false),
    ];

    let mut seen: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for (source, scope, enabled) in sources {
        let Some(servers) = source else {
            continue;
        };
        for (name, config) in servers {
            if !seen.insert(name.as_str()) {
                debug!("Skipping duplicate {scope} server '{name}'");
                continue;
            }
            entries.push(ServerEntry { name: name.clone(), scope, enabled, config: config.clone() });
        }
    }

    if entries.is_empty() {
        return Err(McpToggleError::EmptyConfiguration);
    }

    debug!("Loaded {} server(s)", entries.len());
    Ok(entries)
}

fn write_scope(target: &mut Map<String, Value>, entries: &[ServerEntry], scope: Scope) {
    let mut active = Map::new();
    let mut disabled = Map::new();

    for entry in entries.iter().filter(|e| e.scope == scope) {
        let bucket = if entry.enabled { &mut active } else { &mut disabled };
        bucket.insert(entry.name.clone(), entry.config.clone());
    }

    target.insert(ACTIVE_KEY.to_string(), Value::Object(active));
    if disabled.is_empty() {
        target.shift_remove(DISABLED_KEY);
    } else {
        target.insert(DISABLED_KEY.to_string(), Value::Object(disabled));
    }
}

/// Rebuild the active/disabled mappings of both scopes inside `document`.
///
/// Local mappings are only written when the document already has a project
/// entry for `current_dir`; otherwise local changes are dropped.
pub fn apply_entries(document: &mut Value, entries: &[ServerEntry], current_dir: &Path) {
    let Some(root) = document.as_object_mut() else {
        warn!("Configuration document is not a JSON object; nothing to update");
        return;
    };

    write_scope(root, entries, Scope::Global);

    let key = project_key(current_dir);
    let project = root
        .get_mut(PROJECTS_KEY)
        .and_then(|projects| projects.get_mut(&key))
        .and_then(Value::as_object_mut);

    match project {
        Some(project) => write_scope(project, entries, Scope::Local),
        None => {
            if entries.iter().any(|e| e.scope == Scope::Local) {
                warn!("No project entry for {key}; local server changes were not saved");
            }
        },
    }
}

/// Merge the session's entries into a fresh read of the configuration file
/// and write it back.
///
/// # Errors
///
/// Returns an error if the merged document cannot be written.
pub fn save_entries(config: &ToggleConfig, entries: &[ServerEntry]) -> anyhow::Result<SaveOutcome> {
    let mut document = match reader::read_document(&config.config_path) {
        Ok(document) => document,
        Err(e) => {
            debug!("Skipping save, re-read failed");
            return Ok(SaveOutcome::Skipped { reason: e.to_string() });
        },
    };

    apply_entries(&mut document, entries, &config.current_dir);

    writer::write_document(&config.config_path, &document)
        .with_context(|| format!("Failed to write {}", config.config_path.display()))?;

    info!("Saved {} server(s) to {}", entries.len(), config.config_path.display());
    Ok(SaveOutcome::Written)
}

/// Returns `(enabled, disabled)` counts.
pub fn count_states(entries: &[ServerEntry]) -> (usize, usize) {
    let enabled = entries.iter().filter(|e| e.enabled).count();
    (enabled, entries.len() - enabled)
}
