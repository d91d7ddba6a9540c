use std::path::Path;

use serde_json::Value;

use super::errors::ConfigurationError;

const CONNECTION_STRINGS_SECTION: &str = "ConnectionStrings";

/// Reads `ConnectionStrings:{name}` from a JSON settings file.
///
/// Returns `Ok(None)` when the file does not exist or has no such entry. Keys are
/// matched case-insensitively. A file that exists but cannot be read or parsed is an
/// error: a broken settings file should stop the deployment.
pub fn read_connection_string(path: &Path, name: &str) -> Result<Option<String>, ConfigurationError> {
    if !path.is_file() {
        return Ok(None);
    }

    let invalid = |reason: String| ConfigurationError::InvalidSettingsFile {
        path: path.display().to_string(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let root: Value = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;

    let value = get_ignore_case(&root, CONNECTION_STRINGS_SECTION)
        .and_then(|section| get_ignore_case(section, name))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(value)
}

fn get_ignore_case<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .as_object()?
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}
