//! ecosystem-map: architecture diagrams for the Invistto service ecosystem.
//!
//! The built-in [`Registry`] describes every project, its port, and the
//! projects it depends on. A run derives a [`GraphData`] from it and renders
//! an interactive D3 page, static SVG/PNG snapshots, and a JSON export. A
//! second run mode renders the broader architecture catalog as a card page.

use log::{LevelFilter, info};

// Used by the bin target only.
use anyhow as _;
#[cfg(test)]
use tempfile as _;

pub mod components;
pub mod config;
pub mod error;
pub mod registry;
pub mod run;

pub use components::force_graph::{GraphData, GraphLink, GraphNode};
pub use config::{Cli, Command, Settings};
pub use error::{Error, Result};
pub use registry::{Category, Project, Registry};

/// Initialize `env_logger` with `level` unless `RUST_LOG` overrides it.
pub fn init_logging(level: LevelFilter) {
	let _ = env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.try_init();
	info!("ecosystem-map: logging initialized");
}
