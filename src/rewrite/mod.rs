//! Per-file rewriting and the whole-tree run for apifix.
//!
//! This module handles:
//! - Reading, transforming, and conditionally writing back a single file
//! - Driving the scan over the root and collecting the run summary

use crate::config::Settings;
use crate::error::{ApifixError, Result};
use crate::rules::{CompiledRule, apply_rules, compile_rules};
use crate::scan::collect_candidates;
use std::path::{Path, PathBuf};

/// Result of rewriting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The content changed and was written back (suppressed in a dry run).
	Changed,
	/// No rule matched; the file was left untouched on disk.
	Unchanged,
}

/// Summary of a whole-tree run.
#[derive(Debug, Default)]
pub struct RunSummary {
	/// Paths whose content changed (or would change in a dry run), in scan order.
	pub changed: Vec<PathBuf>,

	/// Per-file failures; the run continues past each of them.
	pub failures: Vec<ApifixError>,
}

/// Rewrite a single file in place.
///
/// Reads the full content, applies the ordered rules, and writes back only
/// when the result differs, so unchanged files keep their modification
/// metadata. With `dry_run` the write-back is suppressed.
pub fn rewrite_file(path: &Path, rules: &[CompiledRule], dry_run: bool) -> Result<Outcome> {
	let content = std::fs::read_to_string(path).map_err(|source| ApifixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let rewritten = apply_rules(rules, &content);

	if rewritten == content {
		return Ok(Outcome::Unchanged);
	}

	if !dry_run {
		std::fs::write(path, rewritten).map_err(|source| ApifixError::FileWrite {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(Outcome::Changed)
}

/// Run the rewriter over every candidate file under the configured root.
///
/// A missing root aborts the run before any file is touched. A failure on an
/// individual file is recorded in the summary and processing continues with
/// the next file.
pub fn run(settings: &Settings, dry_run: bool) -> Result<RunSummary> {
	let rules = compile_rules(settings)?;
	let candidates = collect_candidates(&settings.root, &settings.extensions)?;

	let mut summary = RunSummary::default();
	for path in candidates {
		match rewrite_file(&path, &rules, dry_run) {
			Ok(Outcome::Changed) => summary.changed.push(path),
			Ok(Outcome::Unchanged) => {}
			Err(e) => summary.failures.push(e),
		}
	}

	Ok(summary)
}
