use std::path::PathBuf;

/// Library-level structured errors for apifix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ApifixError {
	#[error("Failed to read settings file: {path}")]
	SettingsRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	SettingsParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid settings: {reason}")]
	InvalidSettings { reason: String },

	#[error("Invalid endpoint pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Directory not found: {path}")]
	MissingDirectory { path: PathBuf },

	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using ApifixError.
pub type Result<T> = std::result::Result<T, ApifixError>;
