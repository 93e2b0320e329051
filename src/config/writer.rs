use chrono::Local;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialize a configuration document the way it is stored on disk:
/// two-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn to_config_string(document: &Value) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Write the configuration document to a JSON file, replacing its content
///
/// # Errors
///
/// Returns an error if:
/// - Unable to create parent directories
/// - Unable to serialize the document
/// - Unable to write to the file
pub fn write_document<P: AsRef<Path>>(path: P, document: &Value) -> anyhow::Result<()> {
    let path_ref = path.as_ref();

    if let Some(parent) = path_ref.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = to_config_string(document)?;
    fs::write(path_ref, json)?;

    Ok(())
}

/// Create a backup of a file with timestamp
///
/// # Errors
///
/// Returns an error if unable to copy the file
pub fn backup_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Option<String>> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path_ref.with_file_name(format!(
        "{}.backup.{}",
        path_ref.file_name().and_then(|n| n.to_str()).unwrap_or(".claude.json"),
        timestamp
    ));

    fs::copy(path_ref, &backup_path)?;

    Ok(Some(backup_path.to_string_lossy().to_string()))
}
