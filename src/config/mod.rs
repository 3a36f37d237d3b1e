//! Settings loading and parsing for apifix.
//!
//! This module handles:
//! - TOML settings file parsing
//! - Project-then-user settings file lookup
//! - The settings template written by `--init`

pub mod lookup;
pub mod parser;
pub mod types;

pub use lookup::{SETTINGS_FILE_NAME, find_settings_file, load_settings};
pub use parser::{parse_settings_file, parse_settings_str, settings_template};
pub use types::{LoadedSettings, Settings};
