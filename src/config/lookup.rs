use crate::config::parser::parse_settings_file;
use crate::config::types::{LoadedSettings, Settings};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name looked up in the invocation directory and the home directory.
pub const SETTINGS_FILE_NAME: &str = ".apifix.toml";

/// Locate the settings file for a run.
///
/// The lookup order is:
/// 1. `.apifix.toml` in `start_dir` (the invocation directory)
/// 2. `~/.apifix.toml`
///
/// A missing home directory just skips the user level.
pub fn find_settings_file(start_dir: &Path) -> Option<PathBuf> {
	let project = start_dir.join(SETTINGS_FILE_NAME);
	if project.exists() {
		return Some(project);
	}

	if let Some(home) = dirs::home_dir() {
		let user = home.join(SETTINGS_FILE_NAME);
		if user.exists() {
			return Some(user);
		}
	}

	None
}

/// Load the effective settings for a run started in `start_dir`.
///
/// Returns built-in defaults when no settings file exists anywhere.
pub fn load_settings(start_dir: &Path) -> Result<LoadedSettings> {
	match find_settings_file(start_dir) {
		Some(path) => {
			let settings = parse_settings_file(&path)?;
			Ok(LoadedSettings {
				settings,
				source: Some(path),
			})
		}
		None => Ok(LoadedSettings {
			settings: Settings::default(),
			source: None,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_project_settings_file_found() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, r#"prefix = "v2""#).unwrap();

		let found = find_settings_file(temp_dir.path());
		assert_eq!(found, Some(settings_path));
	}

	#[test]
	fn test_load_settings_from_project_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, r#"receivers = ["http"]"#).unwrap();

		let loaded = load_settings(temp_dir.path()).unwrap();
		assert_eq!(loaded.source, Some(settings_path));
		assert_eq!(loaded.settings.receivers, vec!["http".to_string()]);
	}

	#[test]
	fn test_load_settings_parse_error_propagates() {
		let temp_dir = tempfile::tempdir().unwrap();
		let settings_path = temp_dir.path().join(SETTINGS_FILE_NAME);
		std::fs::write(&settings_path, "invalid toml [[[").unwrap();

		assert!(load_settings(temp_dir.path()).is_err());
	}

	#[test]
	fn test_load_settings_defaults_without_file() {
		// Skip when the environment has a real user-level settings file.
		if dirs::home_dir().is_some_and(|h| h.join(SETTINGS_FILE_NAME).exists()) {
			return;
		}

		let temp_dir = tempfile::tempdir().unwrap();
		let loaded = load_settings(temp_dir.path()).unwrap();

		assert!(loaded.source.is_none());
		assert_eq!(loaded.settings, Settings::default());
	}
}
