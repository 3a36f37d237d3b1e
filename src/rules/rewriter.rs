use crate::config::Settings;
use crate::error::{ApifixError, Result};
use regex::{Captures, Regex};

/// A compiled substitution rule for a single receiver.
///
/// Matches call expressions of the form `receiver.verb('/path` (either quote
/// style) and inserts the prefix segment directly after the leading slash.
/// Matching is purely lexical: there is no awareness of surrounding code
/// structure, string interpolation, or call expressions split across lines.
#[derive(Debug)]
pub struct CompiledRule {
	/// The receiver identifier this rule rewrites.
	pub receiver: String,

	/// Compiled call-expression pattern.
	pattern: Regex,

	/// Path segment inserted after the leading slash.
	prefix: String,
}

impl CompiledRule {
	/// Compile the rule for one receiver.
	pub fn new(receiver: &str, verbs: &[String], prefix: &str) -> Result<Self> {
		let verb_alternation = verbs
			.iter()
			.map(|v| regex::escape(v))
			.collect::<Vec<_>>()
			.join("|");
		let pattern_str = format!(
			r#"{}\.({})\((['"])/([^'"]+)"#,
			regex::escape(receiver),
			verb_alternation
		);
		let pattern = Regex::new(&pattern_str).map_err(|source| ApifixError::InvalidPattern {
			pattern: pattern_str.clone(),
			source,
		})?;

		Ok(CompiledRule {
			receiver: receiver.to_string(),
			pattern,
			prefix: prefix.to_string(),
		})
	}

	/// Apply this rule to `content`, rewriting every non-overlapping match
	/// whose path literal does not already carry the prefix.
	///
	/// The `regex` crate has no lookaround, so the already-prefixed check
	/// runs in the replacer instead: such a match is emitted unchanged,
	/// byte for byte. Receiver, verb, and quote character are preserved.
	pub fn apply(&self, content: &str) -> String {
		let skip = format!("{}/", self.prefix);
		self.pattern
			.replace_all(content, |caps: &Captures| {
				let (verb, quote, path) = (&caps[1], &caps[2], &caps[3]);
				if path.starts_with(&skip) {
					caps[0].to_string()
				} else {
					format!(
						"{}.{}({}/{}/{}",
						self.receiver, verb, quote, self.prefix, path
					)
				}
			})
			.into_owned()
	}
}

/// Compile one rule per configured receiver, in settings order.
pub fn compile_rules(settings: &Settings) -> Result<Vec<CompiledRule>> {
	settings
		.receivers
		.iter()
		.map(|receiver| CompiledRule::new(receiver, &settings.verbs, &settings.prefix))
		.collect()
}

/// Apply every rule in order; later rules see the output of earlier ones.
pub fn apply_rules(rules: &[CompiledRule], content: &str) -> String {
	rules
		.iter()
		.fold(content.to_string(), |acc, rule| rule.apply(&acc))
}
