//! Command-line entrypoint.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use clap::Parser;
use ecosystem_map::run::{run_diagram, run_overview};
use ecosystem_map::{Cli, Command, init_logging};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_logging(cli.settings.log_level());

	match cli.command.unwrap_or(Command::Diagram) {
		Command::Diagram => {
			run_diagram(&cli.settings)?;
		}
		Command::Overview => {
			run_overview(&cli.settings)?;
		}
	}
	Ok(())
}
