use serde::Deserialize;
use std::path::PathBuf;

/// Settings from an `.apifix.toml` file.
///
/// Every key is optional in the file; missing keys fall back to the built-in
/// defaults below, which reproduce the tool's stock behavior: rewrite
/// `axios`/`api` HTTP calls in JavaScript/TypeScript sources under `src` so
/// their path literals gain an `/api/` prefix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
	/// Directory scanned for source files.
	pub root: PathBuf,

	/// File extensions considered for rewriting, without a leading dot.
	pub extensions: Vec<String>,

	/// Client identifiers whose calls are rewritten.
	pub receivers: Vec<String>,

	/// HTTP verbs recognized on a receiver.
	pub verbs: Vec<String>,

	/// Path segment inserted after the leading slash.
	pub prefix: String,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			root: PathBuf::from("src"),
			extensions: vec![
				"js".to_string(),
				"jsx".to_string(),
				"ts".to_string(),
				"tsx".to_string(),
			],
			receivers: vec!["axios".to_string(), "api".to_string()],
			verbs: vec![
				"get".to_string(),
				"post".to_string(),
				"put".to_string(),
				"patch".to_string(),
				"delete".to_string(),
			],
			prefix: "api".to_string(),
		}
	}
}

/// Settings together with where they were loaded from.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
	/// The effective settings.
	pub settings: Settings,

	/// The file they came from, or `None` for built-in defaults.
	pub source: Option<PathBuf>,
}

impl Settings {
	/// Validate settings before rules are compiled from them.
	pub fn validate(&self) -> Result<(), crate::error::ApifixError> {
		if self.receivers.is_empty() {
			return Err(invalid("at least one receiver is required"));
		}
		if self.verbs.is_empty() {
			return Err(invalid("at least one verb is required"));
		}
		if self.extensions.is_empty() {
			return Err(invalid("at least one extension is required"));
		}

		for receiver in &self.receivers {
			if receiver.is_empty() {
				return Err(invalid("receivers must not be empty strings"));
			}
		}
		for verb in &self.verbs {
			if verb.is_empty() {
				return Err(invalid("verbs must not be empty strings"));
			}
		}
		for ext in &self.extensions {
			if ext.is_empty() || ext.starts_with('.') {
				return Err(invalid(format!(
					"extension {ext:?} must be non-empty with no leading dot"
				)));
			}
		}

		if self.prefix.is_empty() || self.prefix.contains(['/', '\'', '"']) {
			return Err(invalid(format!(
				"prefix {:?} must be a non-empty path segment without slashes or quotes",
				self.prefix
			)));
		}

		Ok(())
	}
}

fn invalid(reason: impl Into<String>) -> crate::error::ApifixError {
	crate::error::ApifixError::InvalidSettings {
		reason: reason.into(),
	}
}
