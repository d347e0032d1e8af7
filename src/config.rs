//! Command-line configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::components::force_graph::LayoutConfig;

/// Parsed command line.
#[derive(Parser, Debug)]
#[command(name = "ecosystem-map")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Architecture map of the Invistto ecosystem")]
#[command(long_about = r#"
Renders the project registry as an interactive HTML diagram, static SVG/PNG
snapshots, and a JSON export, then prints a grouped listing to the console.

EXAMPLES:
  # Diagram into ./out without opening the browser
  ecosystem-map --out-dir out --no-open

  # Card-style architecture overview
  ecosystem-map overview

ENVIRONMENT VARIABLES:
  RUST_LOG        Log filter (default: info)
"#)]
pub struct Cli {
	/// What to generate; the diagram when omitted.
	#[command(subcommand)]
	pub command: Option<Command>,

	/// Options shared by every command.
	#[command(flatten)]
	pub settings: Settings,
}

/// Output family to generate.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Force-directed diagram, snapshots, JSON export and console report (default)
	Diagram,
	/// Card-style architecture overview with its JSON export
	Overview,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Settings {
	/// Directory the output files are written to
	#[arg(short, long, global = true, default_value = ".")]
	pub out_dir: PathBuf,

	/// Do not open the generated page in the browser
	#[arg(long, global = true)]
	pub no_open: bool,

	/// Seed for the static layout
	#[arg(long, global = true, default_value_t = 42)]
	pub seed: u64,

	/// Simulation steps for the static layout
	#[arg(long, global = true, default_value_t = 300)]
	pub iterations: usize,

	/// Fail on connections to unknown projects instead of skipping them
	#[arg(long, global = true)]
	pub strict: bool,

	/// More log output
	#[arg(short, long, global = true, conflicts_with = "quiet")]
	pub verbose: bool,

	/// Only warnings and errors
	#[arg(short, long, global = true)]
	pub quiet: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			out_dir: PathBuf::from("."),
			no_open: false,
			seed: 42,
			iterations: 300,
			strict: false,
			verbose: false,
			quiet: false,
		}
	}
}

impl Settings {
	/// Default log filter when `RUST_LOG` is unset.
	pub fn log_level(&self) -> log::LevelFilter {
		if self.verbose {
			log::LevelFilter::Debug
		} else if self.quiet {
			log::LevelFilter::Warn
		} else {
			log::LevelFilter::Info
		}
	}

	/// Static layout parameters for these options.
	pub fn layout(&self) -> LayoutConfig {
		LayoutConfig {
			seed: self.seed,
			iterations: self.iterations,
			..LayoutConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_arguments_means_diagram_defaults() {
		let cli = Cli::try_parse_from(["ecosystem-map"]).unwrap();
		assert_eq!(cli.command, None);
		assert_eq!(cli.settings.out_dir, PathBuf::from("."));
		assert_eq!(cli.settings.seed, 42);
		assert_eq!(cli.settings.iterations, 300);
		assert!(!cli.settings.no_open);
		assert_eq!(cli.settings.log_level(), log::LevelFilter::Info);
	}

	#[test]
	fn options_follow_the_subcommand() {
		let cli = Cli::try_parse_from([
			"ecosystem-map",
			"overview",
			"--out-dir",
			"out",
			"--no-open",
			"-q",
		])
		.unwrap();
		assert_eq!(cli.command, Some(Command::Overview));
		assert_eq!(cli.settings.out_dir, PathBuf::from("out"));
		assert!(cli.settings.no_open);
		assert_eq!(cli.settings.log_level(), log::LevelFilter::Warn);
	}

	#[test]
	fn verbose_and_quiet_conflict() {
		assert!(Cli::try_parse_from(["ecosystem-map", "-v", "-q"]).is_err());
	}

	#[test]
	fn layout_takes_seed_and_iterations() {
		let settings = Settings {
			seed: 7,
			iterations: 10,
			..Settings::default()
		};
		let layout = settings.layout();
		assert_eq!(layout.seed, 7);
		assert_eq!(layout.iterations, 10);
	}
}
