//! Candidate file discovery for apifix.
//!
//! This module handles:
//! - Recursive traversal of the root directory
//! - Restricting candidates to the recognized source extensions

use crate::error::{ApifixError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every file under `root` whose extension is in `extensions`.
///
/// Performs a fresh traversal on each call and returns the candidates in
/// sorted order so runs are deterministic. Extension comparison is
/// case-insensitive and expects entries without a leading dot.
///
/// Fails with `MissingDirectory` when `root` does not exist or is not a
/// directory; no partial scanning is attempted.
pub fn collect_candidates(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
	if !root.is_dir() {
		return Err(ApifixError::MissingDirectory {
			path: root.to_path_buf(),
		});
	}

	let mut candidates = Vec::new();

	for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
		let path = entry.path();

		if !path.is_file() {
			continue;
		}

		let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
		if extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)) {
			candidates.push(path.to_path_buf());
		}
	}

	candidates.sort();
	Ok(candidates)
}
