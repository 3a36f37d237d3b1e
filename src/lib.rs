//! Apifix - CLI tool for prefixing API endpoint paths in JavaScript/TypeScript sources.
//!
//! This library provides the core functionality for apifix, including:
//! - Settings file parsing and project-then-user lookup
//! - Per-receiver substitution rule compilation
//! - Source tree scanning restricted to recognized extensions
//! - In-place file rewriting with change reporting
//!
//! # Example
//!
//! ```no_run
//! use apifix_cli::config::load_settings;
//! use apifix_cli::rewrite::run;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let loaded = load_settings(&cwd).unwrap();
//!
//! let summary = run(&loaded.settings, false).unwrap();
//! for path in &summary.changed {
//!     println!("rewrote {}", path.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod rewrite;
pub mod rules;
pub mod scan;

pub use error::{ApifixError, Result};
