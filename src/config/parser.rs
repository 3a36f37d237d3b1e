use crate::config::types::Settings;
use crate::error::{ApifixError, Result};
use std::path::Path;

/// Parse a settings file from the given path.
pub fn parse_settings_file(path: &Path) -> Result<Settings> {
	let content = std::fs::read_to_string(path).map_err(|source| ApifixError::SettingsRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_settings_str(&content, path)
}

/// Parse settings from a string (useful for testing).
pub fn parse_settings_str(content: &str, path: &Path) -> Result<Settings> {
	let settings: Settings =
		toml::from_str(content).map_err(|source| ApifixError::SettingsParse {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed settings
	settings.validate()?;

	Ok(settings)
}

/// Template written by `apifix --init`.
pub fn settings_template() -> &'static str {
	r#"# apifix settings
# Every key is optional; the values below are the built-in defaults.

# Directory scanned for source files.
root = "src"

# File extensions considered for rewriting (no leading dot).
extensions = ["js", "jsx", "ts", "tsx"]

# Client identifiers whose calls are rewritten.
receivers = ["axios", "api"]

# HTTP verbs recognized on a receiver.
verbs = ["get", "post", "put", "patch", "delete"]

# Path segment inserted after the leading slash.
prefix = "api"
"#
}
