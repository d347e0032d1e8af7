//! Visual theming for the ecosystem diagrams.
//!
//! Provides the color type, category colors, and the legend derived from the graph.

use crate::registry::Category;

use super::types::GraphData;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parse `#rrggbb` or `#rgb`. Returns `None` for anything else.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match digits.len() {
			6 => Some(Self::rgb(
				channel(&digits[0..2])?,
				channel(&digits[2..4])?,
				channel(&digits[4..6])?,
			)),
			3 => {
				let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
				Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
			}
			_ => None,
		}
	}

	/// Same color with opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// `#rrggbb`, ignoring opacity.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to blend from `color` to `color_secondary` diagonally
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Line and arrowhead color
	pub color: Color,
	/// Line width in pixels
	pub width: f64,
	/// Arrowhead length in pixels
	pub arrow_size: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill opacity applied on top of each project color
	pub alpha: f64,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border/stroke color
	pub border_color: Color,
}

/// Text style for node names, port labels, and the title.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Name and title color
	pub color: Color,
	/// Name font size in pixels
	pub size: f64,
	/// Port label color
	pub port_color: Color,
	/// Port label font size in pixels
	pub port_size: f64,
	/// Title font size in pixels
	pub title_size: f64,
}

/// Legend box style.
#[derive(Clone, Debug)]
pub struct LegendStyle {
	/// Box fill
	pub background: Color,
	/// Box outline
	pub border: Color,
	/// Row label color
	pub text: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background
	pub background: BackgroundStyle,
	/// Connection lines and arrowheads
	pub edge: EdgeStyle,
	/// Node circles
	pub node: NodeStyle,
	/// Text
	pub label: LabelStyle,
	/// Legend box
	pub legend: LegendStyle,
}

impl Theme {
	/// Slate dark theme used by every diagram output (default)
	pub fn default_theme() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(15, 23, 42),
				color_secondary: Color::rgb(30, 41, 59),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(71, 85, 105, 0.6),
				width: 1.5,
				arrow_size: 10.0,
			},
			node: NodeStyle {
				alpha: 0.9,
				border_width: 2.0,
				border_color: Color::rgb(255, 255, 255),
			},
			label: LabelStyle {
				color: Color::rgb(255, 255, 255),
				size: 11.0,
				port_color: Color::rgb(96, 165, 250),
				port_size: 9.0,
				title_size: 22.0,
			},
			legend: LegendStyle {
				background: Color::rgb(30, 41, 59),
				border: Color::rgb(71, 85, 105),
				text: Color::rgb(255, 255, 255),
			},
		}
	}

	/// Canonical color of a category, used for legends.
	pub fn category_color(&self, category: Category) -> Color {
		match category {
			Category::Hub => Color::rgb(59, 130, 246),
			Category::Frontend => Color::rgb(16, 185, 129),
			Category::Backend => Color::rgb(139, 92, 246),
			Category::Service => Color::rgb(245, 158, 11),
			Category::Database => Color::rgb(99, 102, 241),
			Category::External => Color::rgb(148, 163, 184),
		}
	}

	/// Fill color of a node: its own color when parseable, otherwise the category color.
	pub fn node_color(&self, color: &str, category: Category) -> Color {
		Color::from_hex(color).unwrap_or_else(|| self.category_color(category))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

/// One row of a diagram legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Swatch color.
	pub color: Color,
	/// Row text.
	pub label: String,
}

/// Legend rows for a graph.
///
/// One row per category present in the graph, in [`Category::ALL`] order,
/// followed by one row per node whose color differs from its category color.
pub fn legend_entries(data: &GraphData, theme: &Theme) -> Vec<LegendEntry> {
	let mut entries: Vec<LegendEntry> = Category::ALL
		.iter()
		.filter(|&&category| data.nodes.iter().any(|n| n.kind == category))
		.map(|&category| LegendEntry {
			color: theme.category_color(category),
			label: category.label().to_string(),
		})
		.collect();

	for node in &data.nodes {
		let color = theme.node_color(&node.color, node.kind);
		if color != theme.category_color(node.kind) && !entries.iter().any(|e| e.color == color) {
			entries.push(LegendEntry {
				color,
				label: node.name.clone(),
			});
		}
	}
	entries
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::Registry;

	#[test]
	fn parses_hex_colors() {
		assert_eq!(Color::from_hex("#3b82f6"), Some(Color::rgb(59, 130, 246)));
		assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
		assert_eq!(Color::from_hex("3b82f6"), None);
		assert_eq!(Color::from_hex("#zzzzzz"), None);
	}

	#[test]
	fn css_output_round_trips_opaque_colors() {
		assert_eq!(Color::rgb(239, 68, 68).to_css(), "#ef4444");
		assert_eq!(
			Color::rgba(71, 85, 105, 0.6).to_css(),
			"rgba(71, 85, 105, 0.6)"
		);
	}

	#[test]
	fn builtin_legend_lists_categories_then_overrides() {
		let data = GraphData::from_registry(&Registry::builtin());
		let labels: Vec<_> = legend_entries(&data, &Theme::default())
			.into_iter()
			.map(|e| e.label)
			.collect();
		assert_eq!(
			labels,
			[
				"Hub Central",
				"Frontend",
				"Backend API",
				"Serviço",
				"Banco de Dados",
				"Externo",
				"Auth API"
			]
		);
	}
}
