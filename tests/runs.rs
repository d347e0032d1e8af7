//! End-to-end generation runs into temporary directories.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use ecosystem_map::components::snapshot::RASTER_AVAILABLE;
use ecosystem_map::run::{
	DIAGRAM_HTML, DIAGRAM_JSON, DIAGRAM_SVG, OVERVIEW_HTML, OVERVIEW_JSON, run_diagram,
	run_diagram_with, run_overview,
};
use ecosystem_map::{Category, Error, Project, Registry, Settings};

fn settings(dir: &tempfile::TempDir) -> Settings {
	Settings {
		out_dir: dir.path().to_path_buf(),
		no_open: true,
		iterations: 50,
		..Settings::default()
	}
}

#[test]
fn diagram_run_writes_every_artifact() {
	let dir = tempfile::tempdir().unwrap();
	let outputs = run_diagram(&settings(&dir)).unwrap();

	assert_eq!(outputs.html, dir.path().join(DIAGRAM_HTML));
	assert_eq!(outputs.svg, dir.path().join(DIAGRAM_SVG));
	assert_eq!(outputs.json, dir.path().join(DIAGRAM_JSON));
	assert!(outputs.html.is_file());
	assert!(outputs.svg.is_file());
	assert!(outputs.json.is_file());
	assert_eq!(outputs.png.is_some(), RASTER_AVAILABLE);
	if let Some(png) = &outputs.png {
		let bytes = std::fs::read(png).unwrap();
		assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
	}

	let registry = Registry::builtin();
	let json: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(&outputs.json).unwrap()).unwrap();
	assert_eq!(json.as_object().unwrap().len(), registry.len());
	assert_eq!(outputs.nodes, registry.len());
}

#[test]
fn rerun_overwrites_with_same_counts() {
	let dir = tempfile::tempdir().unwrap();
	let settings = settings(&dir);
	let first = run_diagram(&settings).unwrap();
	let svg_before = std::fs::read_to_string(&first.svg).unwrap();

	let second = run_diagram(&settings).unwrap();
	assert_eq!(first.nodes, second.nodes);
	assert_eq!(first.links, second.links);
	assert_eq!(svg_before, std::fs::read_to_string(&second.svg).unwrap());
}

#[test]
fn creates_missing_output_directory() {
	let dir = tempfile::tempdir().unwrap();
	let nested = Settings {
		out_dir: dir.path().join("a/b"),
		..settings(&dir)
	};
	let outputs = run_diagram(&nested).unwrap();
	assert!(outputs.html.starts_with(dir.path().join("a/b")));
	assert!(outputs.html.is_file());
}

#[test]
fn dangling_connections_are_skipped_unless_strict() {
	let registry = Registry::new(vec![
		Project::new("web", "Web", Category::Frontend).connecting(&["api", "ghost"]),
		Project::new("api", "API", Category::Backend),
	]);
	let dir = tempfile::tempdir().unwrap();

	let outputs = run_diagram_with(&registry, &settings(&dir)).unwrap();
	assert_eq!(outputs.nodes, 2);
	assert_eq!(outputs.links, 1);

	let strict = Settings {
		strict: true,
		..settings(&dir)
	};
	let err = run_diagram_with(&registry, &strict).unwrap_err();
	assert!(matches!(err, Error::DanglingReference { ref to, .. } if to == "ghost"));
}

#[test]
fn overview_run_writes_page_and_json() {
	let dir = tempfile::tempdir().unwrap();
	let outputs = run_overview(&settings(&dir)).unwrap();

	assert_eq!(outputs.html, dir.path().join(OVERVIEW_HTML));
	assert_eq!(outputs.json, dir.path().join(OVERVIEW_JSON));

	let html = std::fs::read_to_string(&outputs.html).unwrap();
	assert!(html.contains("Mapa de Portas"));

	let json: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(&outputs.json).unwrap()).unwrap();
	assert!(json["meta"]["generated_at"].is_string());
	assert_eq!(json["ports_map"].as_object().unwrap().len(), 15);
}

#[test]
fn self_connection_is_kept_and_drawn() {
	let registry = Registry::new(vec![
		Project::new("api", "API", Category::Backend).connecting(&["api", "db"]),
		Project::new("db", "DB", Category::Database),
	]);
	let dir = tempfile::tempdir().unwrap();

	let outputs = run_diagram_with(&registry, &settings(&dir)).unwrap();
	assert_eq!(outputs.nodes, 2);
	assert_eq!(outputs.links, 2);
	assert!(outputs.svg.is_file());
}
