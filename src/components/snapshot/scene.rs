//! Backend-independent drawing primitives for the static diagram.
//!
//! Shapes are stored in paint order:
//! 1. Title (screen space, top)
//! 2. Edge lines, then arrowheads
//! 3. Nodes, then name and port labels
//! 4. Legend box and rows

use crate::components::force_graph::theme::BackgroundStyle;
use crate::components::force_graph::{Color, GraphData, Layout, Theme, legend_entries};

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	/// Text starts at `x`.
	Start,
	/// Text is centered on `x`.
	Middle,
}

/// A styled run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
	/// Anchor point, horizontal.
	pub x: f64,
	/// Baseline.
	pub y: f64,
	/// Text to draw.
	pub content: String,
	/// Fill color.
	pub color: Color,
	/// Font size in pixels.
	pub size: f64,
	/// Alignment relative to `x`.
	pub anchor: Anchor,
	/// Bold weight.
	pub bold: bool,
	/// Monospace family, for port labels.
	pub monospace: bool,
}

/// A single drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	/// Rounded rectangle, used for the legend box.
	Rect {
		/// Left edge.
		x: f64,
		/// Top edge.
		y: f64,
		/// Width in pixels.
		width: f64,
		/// Height in pixels.
		height: f64,
		/// Corner radius.
		corner: f64,
		/// Fill color.
		fill: Color,
		/// Outline color and width.
		stroke: Option<(Color, f64)>,
	},
	/// Straight segment, used for edges.
	Line {
		/// Start point.
		from: (f64, f64),
		/// End point.
		to: (f64, f64),
		/// Stroke color.
		color: Color,
		/// Stroke width.
		width: f64,
	},
	/// Filled triangle, used for arrowheads.
	Triangle {
		/// Corners; the first is the tip.
		points: [(f64, f64); 3],
		/// Fill color.
		fill: Color,
	},
	/// Node or legend swatch.
	Circle {
		/// Center point.
		center: (f64, f64),
		/// Radius in pixels.
		radius: f64,
		/// Fill color.
		fill: Color,
		/// Lighter tone for a radial highlight, when the backend supports gradients.
		highlight: Option<Color>,
		/// Outline color and width.
		stroke: Option<(Color, f64)>,
	},
	/// A text run.
	Text(Text),
}

/// Everything needed to paint one diagram.
#[derive(Clone, Debug)]
pub struct Scene {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Canvas fill.
	pub background: BackgroundStyle,
	/// Primitives in paint order.
	pub shapes: Vec<Shape>,
}

/// Title painted at the top of the static diagram.
pub const TITLE: &str = "Ecossistema Invistto - Mapa de Arquitetura";

impl Scene {
	/// Lay out nodes, edges, labels, title and legend for `data` at `layout` positions.
	pub fn build(data: &GraphData, layout: &Layout, theme: &Theme) -> Self {
		let mut shapes = Vec::new();

		shapes.push(Shape::Text(Text {
			x: layout.width / 2.0,
			y: 48.0,
			content: TITLE.to_string(),
			color: theme.label.color,
			size: theme.label.title_size,
			anchor: Anchor::Middle,
			bold: true,
			monospace: false,
		}));

		let mut arrows = Vec::new();
		for link in &data.links {
			let (Some(src), Some(tgt)) = (
				layout.position(link.source),
				layout.position(link.target),
			) else {
				continue;
			};
			let src_radius = data.nodes[link.source].radius;
			let tgt_radius = data.nodes[link.target].radius;
			if let Some((line, arrow)) = edge_shapes(src, tgt, src_radius, tgt_radius, theme) {
				shapes.push(line);
				arrows.push(arrow);
			}
		}
		shapes.extend(arrows);

		let mut labels = Vec::new();
		for node in &data.nodes {
			let Some((x, y)) = layout.position(node.id) else {
				continue;
			};
			let fill = theme
				.node_color(&node.color, node.kind)
				.with_alpha(theme.node.alpha);
			shapes.push(Shape::Circle {
				center: (x, y),
				radius: node.radius,
				fill,
				highlight: Some(fill.lighten(0.4)),
				stroke: (theme.node.border_width > 0.0)
					.then_some((theme.node.border_color, theme.node.border_width)),
			});

			labels.push(Shape::Text(Text {
				x,
				y: y + node.radius + theme.label.size + 4.0,
				content: node.name.clone(),
				color: theme.label.color,
				size: theme.label.size,
				anchor: Anchor::Middle,
				bold: true,
				monospace: false,
			}));
			if let Some(port) = node.port {
				labels.push(Shape::Text(Text {
					x,
					y: y + theme.label.port_size / 3.0,
					content: format!(":{port}"),
					color: theme.label.port_color,
					size: theme.label.port_size,
					anchor: Anchor::Middle,
					bold: false,
					monospace: true,
				}));
			}
		}
		shapes.extend(labels);

		shapes.extend(legend_shapes(data, layout, theme));

		Self {
			width: layout.width,
			height: layout.height,
			background: theme.background.clone(),
			shapes,
		}
	}

	/// Node circles followed by legend swatches.
	pub fn circles(&self) -> impl Iterator<Item = &Shape> {
		self.shapes
			.iter()
			.filter(|s| matches!(s, Shape::Circle { .. }))
	}

	/// Every text run, in paint order.
	pub fn texts(&self) -> impl Iterator<Item = &Text> {
		self.shapes.iter().filter_map(|s| match s {
			Shape::Text(text) => Some(text),
			_ => None,
		})
	}
}

/// Line from the rim of the source node to the base of an arrowhead touching the target rim.
fn edge_shapes(
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	src_radius: f64,
	tgt_radius: f64,
	theme: &Theme,
) -> Option<(Shape, Shape)> {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	let arrow = theme.edge.arrow_size;
	if dist < src_radius + tgt_radius + arrow {
		return None;
	}

	let (ux, uy) = (dx / dist, dy / dist);
	let (tip_x, tip_y) = (x2 - ux * tgt_radius, y2 - uy * tgt_radius);
	let (back_x, back_y) = (tip_x - ux * arrow, tip_y - uy * arrow);
	let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);

	let line = Shape::Line {
		from: (x1 + ux * src_radius, y1 + uy * src_radius),
		to: (back_x, back_y),
		color: theme.edge.color,
		width: theme.edge.width,
	};
	let head = Shape::Triangle {
		points: [
			(tip_x, tip_y),
			(back_x + px, back_y + py),
			(back_x - px, back_y - py),
		],
		fill: theme.edge.color,
	};
	Some((line, head))
}

fn legend_shapes(data: &GraphData, layout: &Layout, theme: &Theme) -> Vec<Shape> {
	const ROW: f64 = 22.0;
	const PAD: f64 = 14.0;
	const SWATCH: f64 = 12.0;

	let entries = legend_entries(data, theme);
	if entries.is_empty() {
		return Vec::new();
	}

	let longest = entries
		.iter()
		.map(|e| e.label.chars().count())
		.max()
		.unwrap_or(0) as f64;
	let width = PAD * 3.0 + SWATCH + longest * theme.label.size * 0.6;
	let height = PAD * 2.0 + ROW * entries.len() as f64 - (ROW - SWATCH);
	let (x, y) = (24.0, layout.height - height - 24.0);

	let mut shapes = vec![Shape::Rect {
		x,
		y,
		width,
		height,
		corner: 8.0,
		fill: theme.legend.background.with_alpha(0.9),
		stroke: Some((theme.legend.border, 1.0)),
	}];
	for (i, entry) in entries.iter().enumerate() {
		let row_y = y + PAD + ROW * i as f64;
		shapes.push(Shape::Circle {
			center: (x + PAD + SWATCH / 2.0, row_y + SWATCH / 2.0),
			radius: SWATCH / 2.0,
			fill: entry.color,
			highlight: None,
			stroke: None,
		});
		shapes.push(Shape::Text(Text {
			x: x + PAD * 2.0 + SWATCH,
			y: row_y + SWATCH - 2.0,
			content: entry.label.clone(),
			color: theme.legend.text,
			size: theme.label.size,
			anchor: Anchor::Start,
			bold: false,
			monospace: false,
		}));
	}
	shapes
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{LayoutConfig, spring_layout};
	use crate::registry::Registry;

	fn builtin_scene() -> (GraphData, Scene) {
		let data = GraphData::from_registry(&Registry::builtin());
		let layout = spring_layout(&data, &LayoutConfig::default());
		let scene = Scene::build(&data, &layout, &Theme::default());
		(data, scene)
	}

	#[test]
	fn draws_every_node_and_legend_swatch() {
		let (data, scene) = builtin_scene();
		let legend = legend_entries(&data, &Theme::default()).len();
		assert_eq!(scene.circles().count(), data.nodes.len() + legend);
	}

	#[test]
	fn node_labels_and_ports_are_present() {
		let (data, scene) = builtin_scene();
		let texts: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
		for node in &data.nodes {
			assert!(texts.contains(&node.name.as_str()), "missing {}", node.name);
		}
		assert!(texts.contains(&":3001"));
		assert!(texts.contains(&TITLE));
	}

	#[test]
	fn hub_is_drawn_larger_than_external() {
		let (data, scene) = builtin_scene();
		let radius_of = |key: &str| {
			let id = data.nodes.iter().position(|n| n.key == key).unwrap();
			scene
				.circles()
				.nth(id)
				.map(|s| match s {
					Shape::Circle { radius, .. } => *radius,
					_ => unreachable!(),
				})
				.unwrap()
		};
		assert!(radius_of("invistto-hub") > radius_of("mysql-main"));
		assert!(radius_of("mysql-main") > radius_of("courier-api"));
		assert!(radius_of("courier-api") > radius_of("zeiss-sao-api"));
	}

	#[test]
	fn overlapping_nodes_get_no_edge() {
		let theme = Theme::default();
		assert!(edge_shapes((0.0, 0.0), (10.0, 0.0), 20.0, 20.0, &theme).is_none());
		let (line, head) = edge_shapes((0.0, 0.0), (200.0, 0.0), 20.0, 20.0, &theme).unwrap();
		assert_eq!(
			line,
			Shape::Line {
				from: (20.0, 0.0),
				to: (170.0, 0.0),
				color: theme.edge.color,
				width: theme.edge.width,
			}
		);
		match head {
			Shape::Triangle { points, .. } => assert_eq!(points[0], (180.0, 0.0)),
			other => panic!("unexpected {other:?}"),
		}
	}
}
