//! Seeded spring layout for static diagrams.
//!
//! Wraps the `force_graph` physics simulation: nodes start at pseudo-random
//! positions derived from the seed, the simulation is stepped a fixed number
//! of times, and the resulting positions are fitted into the drawing area.
//! The same graph, seed, and configuration always produce the same layout.

use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, warn};

use super::types::GraphData;

/// Parameters of a layout run.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
	/// Seed of the initial positions.
	pub seed: u64,
	/// Number of simulation steps.
	pub iterations: usize,
	/// Simulated seconds per step.
	pub step: f32,
	/// Drawing area width in pixels.
	pub width: f64,
	/// Drawing area height in pixels.
	pub height: f64,
	/// Empty border kept around the fitted layout, in pixels.
	pub margin: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			seed: 42,
			iterations: 300,
			step: 0.016,
			width: 1600.0,
			height: 1120.0,
			margin: 110.0,
		}
	}
}

/// Final position of every node, indexed by node id.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	/// `(x, y)` in pixels, indexed by node id.
	pub positions: Vec<(f64, f64)>,
	/// Drawing area width in pixels.
	pub width: f64,
	/// Drawing area height in pixels.
	pub height: f64,
}

impl Layout {
	/// Position of node `id`, if it was laid out.
	pub fn position(&self, id: usize) -> Option<(f64, f64)> {
		self.positions.get(id).copied()
	}
}

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug, Default)]
struct NodeInfo {
	id: usize,
}

/// Deterministic pseudo-random value in `[0, 1)`.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// Compute a spring layout for `data`.
pub fn spring_layout(data: &GraphData, config: &LayoutConfig) -> Layout {
	let mut graph: ForceGraph<NodeInfo, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 250.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let degrees = data.degrees();
	let base = config.seed as f64 * 0.618;
	let spread = config.width.min(config.height) / 2.0;
	let mut indices: HashMap<usize, DefaultNodeIdx> = HashMap::new();
	let mut initial = Vec::with_capacity(data.nodes.len());

	for node in &data.nodes {
		let seed = base + node.id as f64 + 1.0;
		let (x, y) = (
			(pseudo_random(seed * 1.1) - 0.5) * spread,
			(pseudo_random(seed * 2.3) - 0.5) * spread,
		);
		initial.push((x, y));

		// Mass grows with degree.
		let mass = 10.0 + 2.0 * degrees[node.id] as f32;
		let idx = graph.add_node(NodeData {
			x: x as f32,
			y: y as f32,
			mass,
			is_anchor: false,
			user_data: NodeInfo { id: node.id },
		});
		indices.insert(node.id, idx);
	}

	// Self-loops stay in the graph data but carry no spring; force_graph rejects them.
	for link in data.links.iter().filter(|l| l.source != l.target) {
		if let (Some(&src), Some(&tgt)) = (indices.get(&link.source), indices.get(&link.target)) {
			graph.add_edge(src, tgt, EdgeData::default());
		}
	}

	for _ in 0..config.iterations {
		graph.update(config.step);
	}

	let mut positions = initial.clone();
	graph.visit_nodes(|node| {
		positions[node.data.user_data.id] = (node.x() as f64, node.y() as f64);
	});

	if positions.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
		warn!("ecosystem-map: layout diverged, falling back to seeded positions");
		positions = initial;
	}

	debug!(
		"ecosystem-map: laid out {} nodes in {} steps (seed {})",
		positions.len(),
		config.iterations,
		config.seed
	);

	Layout {
		positions: fit(&positions, config),
		width: config.width,
		height: config.height,
	}
}

/// Scale and translate raw positions into the drawing area, preserving aspect ratio.
fn fit(raw: &[(f64, f64)], config: &LayoutConfig) -> Vec<(f64, f64)> {
	let (cx, cy) = (config.width / 2.0, config.height / 2.0);
	if raw.is_empty() {
		return Vec::new();
	}

	let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
	let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
	for &(x, y) in raw {
		min_x = min_x.min(x);
		min_y = min_y.min(y);
		max_x = max_x.max(x);
		max_y = max_y.max(y);
	}

	let (span_x, span_y) = (max_x - min_x, max_y - min_y);
	let avail_x = (config.width - 2.0 * config.margin).max(1.0);
	let avail_y = (config.height - 2.0 * config.margin).max(1.0);
	let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
		(true, true) => (avail_x / span_x).min(avail_y / span_y),
		(true, false) => avail_x / span_x,
		(false, true) => avail_y / span_y,
		(false, false) => 0.0,
	};
	let (mid_x, mid_y) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

	raw.iter()
		.map(|&(x, y)| (cx + (x - mid_x) * scale, cy + (y - mid_y) * scale))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::Registry;

	fn builtin() -> GraphData {
		GraphData::from_registry(&Registry::builtin())
	}

	#[test]
	fn pseudo_random_stays_in_unit_interval() {
		for i in 0..500 {
			let v = pseudo_random(i as f64 * 0.37);
			assert!((0.0..1.0).contains(&v), "{v} out of range");
		}
	}

	#[test]
	fn one_position_per_node_inside_margins() {
		let config = LayoutConfig::default();
		let data = builtin();
		let layout = spring_layout(&data, &config);
		assert_eq!(layout.positions.len(), data.nodes.len());
		for &(x, y) in &layout.positions {
			assert!(x >= config.margin - 1e-6 && x <= config.width - config.margin + 1e-6);
			assert!(y >= config.margin - 1e-6 && y <= config.height - config.margin + 1e-6);
		}
	}

	#[test]
	fn same_seed_gives_same_layout() {
		let config = LayoutConfig::default();
		let data = builtin();
		assert_eq!(spring_layout(&data, &config), spring_layout(&data, &config));
	}

	#[test]
	fn different_seeds_move_nodes() {
		let data = builtin();
		let a = spring_layout(&data, &LayoutConfig::default());
		let b = spring_layout(
			&data,
			&LayoutConfig {
				seed: 7,
				..LayoutConfig::default()
			},
		);
		assert_ne!(a.positions, b.positions);
	}

	#[test]
	fn single_node_is_centered() {
		let registry = Registry::new(vec![crate::registry::Project::new(
			"solo",
			"Solo",
			crate::registry::Category::Service,
		)]);
		let config = LayoutConfig::default();
		let layout = spring_layout(&GraphData::from_registry(&registry), &config);
		assert_eq!(layout.positions, vec![(config.width / 2.0, config.height / 2.0)]);
	}

	#[test]
	fn self_connection_is_laid_out() {
		let registry = Registry::new(vec![
			crate::registry::Project::new("a", "A", crate::registry::Category::Backend)
				.connecting(&["a", "b"]),
			crate::registry::Project::new("b", "B", crate::registry::Category::Database),
		]);
		let data = GraphData::from_registry(&registry);
		assert_eq!(data.links.len(), 2);
		assert_eq!((data.links[0].source, data.links[0].target), (0, 0));

		let layout = spring_layout(&data, &LayoutConfig::default());
		assert_eq!(layout.positions.len(), 2);
		assert!(layout.positions.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
	}

	#[test]
	fn empty_graph_has_no_positions() {
		let layout = spring_layout(&GraphData::default(), &LayoutConfig::default());
		assert!(layout.positions.is_empty());
	}
}
