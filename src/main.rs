use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use apifix_cli::config::{SETTINGS_FILE_NAME, load_settings, settings_template};
use apifix_cli::error::ApifixError;
use apifix_cli::rewrite::{RunSummary, run};

#[derive(Parser)]
#[command(name = "apifix")]
#[command(
	author,
	version,
	about = "CLI tool for prefixing API endpoint paths in JavaScript/TypeScript sources"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .apifix.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .apifix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Report what would change without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Directory to scan (overrides the configured root)
	root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Settings management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective settings and where they came from
	Show,
	/// Check the settings file for errors without touching any source file
	Validate,
}

fn main() -> ExitCode {
	match run_cli() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run_cli() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	// Default action: rewrite the tree
	handle_fix(cli.root, cli.dry_run)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let settings_path = PathBuf::from(SETTINGS_FILE_NAME);

	if settings_path.exists() && !force {
		anyhow::bail!(".apifix.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&settings_path, settings_template())
		.with_context(|| format!("Failed to write {}", settings_path.display()))?;

	println!("Created .apifix.toml");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let loaded = load_settings(&cwd).context("Failed to load settings")?;

	match &loaded.source {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}

	let settings = &loaded.settings;
	println!("root = \"{}\"", settings.root.display());
	println!("extensions = {:?}", settings.extensions);
	println!("receivers = {:?}", settings.receivers);
	println!("verbs = {:?}", settings.verbs);
	println!("prefix = {:?}", settings.prefix);

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match load_settings(&cwd) {
		Ok(loaded) => {
			match &loaded.source {
				Some(path) => println!(
					"Settings file is valid: {} ({} receivers, {} extensions)",
					path.display(),
					loaded.settings.receivers.len(),
					loaded.settings.extensions.len()
				),
				None => println!("No settings file found; built-in defaults apply."),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Settings error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_fix(root_override: Option<PathBuf>, dry_run: bool) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let mut settings = load_settings(&cwd)
		.context("Failed to load settings")?
		.settings;
	if let Some(root) = root_override {
		settings.root = root;
	}

	let summary = match run(&settings, dry_run) {
		Ok(summary) => summary,
		Err(ApifixError::MissingDirectory { path }) => {
			println!("Error: {} directory not found!", path.display());
			return Ok(ExitCode::FAILURE);
		}
		Err(e) => return Err(e).context("Failed to rewrite source tree"),
	};

	report(&summary, dry_run);

	if summary.failures.is_empty() {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}

fn report(summary: &RunSummary, dry_run: bool) {
	if summary.changed.is_empty() {
		println!("No files needed fixing.");
	} else {
		let label = if dry_run { "Would fix" } else { "Fixed" };
		println!("{} {} files:", label, summary.changed.len());
		for path in &summary.changed {
			println!("  - {}", path.display());
		}
	}

	// Per-file failures don't abort the run, just surface them
	for failure in &summary.failures {
		match failure.source() {
			Some(cause) => eprintln!("Warning: {failure}: {cause}"),
			None => eprintln!("Warning: {failure}"),
		}
	}
}
