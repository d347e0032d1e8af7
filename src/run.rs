//! One generation run: render every artifact into the output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;
use log::{info, warn};

use crate::components::force_graph::{GraphData, Theme, spring_layout};
use crate::components::overview::{self, Catalog};
use crate::components::snapshot::{self, Scene};
use crate::components::{interactive, report};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Interactive diagram page.
pub const DIAGRAM_HTML: &str = "ecosystem-diagram.html";
/// Static diagram, vector.
pub const DIAGRAM_SVG: &str = "ecosystem-diagram.svg";
/// Static diagram, raster.
pub const DIAGRAM_PNG: &str = "ecosystem-diagram.png";
/// JSON mirror of the registry.
pub const DIAGRAM_JSON: &str = "ecosystem-data.json";
/// Architecture overview page.
pub const OVERVIEW_HTML: &str = "ecosystem-overview.html";
/// JSON export of the architecture catalog.
pub const OVERVIEW_JSON: &str = "ecosystem-overview.json";

const RULE_WIDTH: usize = 60;

/// Files written by [`run_diagram`].
#[derive(Clone, Debug)]
pub struct DiagramOutputs {
	/// Interactive page.
	pub html: PathBuf,
	/// Static SVG.
	pub svg: PathBuf,
	/// `None` when the build has no raster support.
	pub png: Option<PathBuf>,
	/// Registry JSON.
	pub json: PathBuf,
	/// Nodes drawn.
	pub nodes: usize,
	/// Links drawn, self-connections included.
	pub links: usize,
}

/// Files written by [`run_overview`].
#[derive(Clone, Debug)]
pub struct OverviewOutputs {
	/// Card page.
	pub html: PathBuf,
	/// Catalog JSON.
	pub json: PathBuf,
}

fn rule() {
	println!("{}", "=".repeat(RULE_WIDTH));
}

fn banner(title: &str) {
	rule();
	println!("{title}");
	rule();
	println!();
}

fn write(path: &Path, contents: &str) -> Result<()> {
	fs::write(path, contents).map_err(|e| Error::io(path, e))?;
	info!("ecosystem-map: wrote {}", path.display());
	Ok(())
}

fn prepare(out_dir: &Path) -> Result<()> {
	fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))
}

/// Render the diagram artifacts for the built-in registry.
pub fn run_diagram(settings: &Settings) -> Result<DiagramOutputs> {
	run_diagram_with(&Registry::builtin(), settings)
}

/// Render the diagram artifacts for `registry`.
///
/// Prior outputs in the directory are overwritten.
pub fn run_diagram_with(registry: &Registry, settings: &Settings) -> Result<DiagramOutputs> {
	banner("ECOSYSTEM DIAGRAM");
	prepare(&settings.out_dir)?;

	let data = if settings.strict {
		GraphData::from_registry_strict(registry)?
	} else {
		GraphData::from_registry(registry)
	};
	let now = Local::now();

	let html = settings.out_dir.join(DIAGRAM_HTML);
	write(&html, &interactive::render_page(&data, &registry.stats(), &now)?)?;
	println!("✅ Interactive HTML: {}", html.display());

	let theme = Theme::default();
	let layout = spring_layout(&data, &settings.layout());
	let scene = Scene::build(&data, &layout, &theme);

	let svg = snapshot::render_svg(&scene, &settings.out_dir.join(DIAGRAM_SVG))?;
	println!("✅ Static SVG: {}", svg.display());

	let png = snapshot::render_png(&scene, &settings.out_dir.join(DIAGRAM_PNG))?;
	match &png {
		Some(path) => println!("✅ Static PNG: {}", path.display()),
		None => println!("⚠️  PNG not generated (built without the `raster` feature)"),
	}

	let json = settings.out_dir.join(DIAGRAM_JSON);
	write(&json, &serde_json::to_string_pretty(registry)?)?;
	println!("✅ JSON data: {}", json.display());

	println!();
	banner("PROJECT SUMMARY");
	report::print(registry);

	println!();
	rule();
	println!("Generated at: {}", now.format("%Y-%m-%d %H:%M"));
	rule();

	if !settings.no_open {
		open_in_browser(&html);
	}

	Ok(DiagramOutputs {
		html,
		svg,
		png,
		json,
		nodes: data.nodes.len(),
		links: data.links.len(),
	})
}

/// Render the architecture overview page and its JSON export.
pub fn run_overview(settings: &Settings) -> Result<OverviewOutputs> {
	prepare(&settings.out_dir)?;

	let catalog = Catalog::builtin();
	let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();

	let html = settings.out_dir.join(OVERVIEW_HTML);
	write(&html, &overview::render_page(&catalog, &stamp))?;
	println!("✅ Overview generated: {}", html.display());
	println!("📊 Projects mapped: {}", catalog.totals.total_projects);
	println!("🔌 Ports in use: {}", catalog.ports.len());
	println!(
		"⚠️  Issues identified: {}",
		catalog.standardization_issues.total()
	);

	let json = settings.out_dir.join(OVERVIEW_JSON);
	write(&json, &overview::to_json(&catalog, &stamp)?)?;
	println!("📄 JSON data: {}", json.display());

	if !settings.no_open {
		open_in_browser(&html);
	}

	Ok(OverviewOutputs { html, json })
}

/// Hand `path` to the platform's default opener. Failures are logged only.
pub fn open_in_browser(path: &Path) {
	let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

	#[cfg(target_os = "macos")]
	let status = Command::new("open").arg(&target).status();
	#[cfg(target_os = "windows")]
	let status = Command::new("cmd")
		.args(["/C", "start", ""])
		.arg(&target)
		.status();
	#[cfg(not(any(target_os = "macos", target_os = "windows")))]
	let status = Command::new("xdg-open").arg(&target).status();

	match status {
		Ok(s) if s.success() => info!("ecosystem-map: opened {}", target.display()),
		Ok(s) => warn!(
			"ecosystem-map: browser launcher exited with {s} for {}",
			target.display()
		),
		Err(e) => warn!("ecosystem-map: could not open {}: {e}", target.display()),
	}
}
