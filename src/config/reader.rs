use crate::McpToggleError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read the Claude configuration document from a JSON file
///
/// # Errors
///
/// Returns `McpToggleError::ConfigUnreadable` if:
/// - Unable to read the file
/// - Unable to parse the JSON content
/// - The top-level value is not a JSON object
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value, McpToggleError> {
    let path_ref = path.as_ref();
    let unreadable = |reason: String| McpToggleError::ConfigUnreadable {
        path: path_ref.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path_ref).map_err(|e| unreadable(e.to_string()))?;

    let document: Value = serde_json::from_str(&content)
        .map_err(|e| unreadable(format!("invalid JSON: {e}")))?;

    if !document.is_object() {
        return Err(unreadable("top-level value is not a JSON object".to_string()));
    }

    Ok(document)
}
