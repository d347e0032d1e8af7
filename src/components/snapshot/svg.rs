//! SVG rendering of a [`Scene`], with vector text.

use std::fmt::Write;

use super::scene::{Anchor, Scene, Shape, Text};
use crate::components::force_graph::Color;
use crate::components::markup::escape;

fn paint(color: Color) -> String {
	if (color.a - 1.0).abs() < 0.001 {
		format!("\"{}\"", color.to_css_rgb())
	} else {
		format!("\"{}\" fill-opacity=\"{:.3}\"", color.to_css_rgb(), color.a)
	}
}

fn stroke(stroke: Option<(Color, f64)>) -> String {
	match stroke {
		Some((color, width)) => format!(
			" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{width}\"",
			color.to_css_rgb(),
			color.a
		),
		None => String::new(),
	}
}

/// Render the scene as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
	let mut svg = String::new();
	let (w, h) = (scene.width, scene.height);
	let bg = &scene.background;

	let _ = writeln!(
		svg,
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
	);
	svg.push_str("<defs>\n");
	let _ = writeln!(
		svg,
		r#"<linearGradient id="bg" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
		bg.color.to_css_rgb(),
		bg.color_secondary.to_css_rgb()
	);

	// One radial gradient per distinct highlighted fill.
	let mut gradients: Vec<(Color, Color)> = Vec::new();
	for shape in &scene.shapes {
		if let Shape::Circle {
			fill,
			highlight: Some(highlight),
			..
		} = shape
		{
			if !gradients.contains(&(*fill, *highlight)) {
				let _ = writeln!(
					svg,
					r#"<radialGradient id="node{}" cx="0.35" cy="0.35" r="0.75"><stop offset="0" stop-color="{}"/><stop offset="0.7" stop-color="{}"/></radialGradient>"#,
					gradients.len(),
					highlight.to_css_rgb(),
					fill.to_css_rgb()
				);
				gradients.push((*fill, *highlight));
			}
		}
	}
	svg.push_str("</defs>\n");

	let background = if bg.use_gradient {
		"url(#bg)".to_string()
	} else {
		bg.color.to_css_rgb()
	};
	let _ = writeln!(
		svg,
		r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{background}"/>"#
	);

	for shape in &scene.shapes {
		match shape {
			Shape::Rect {
				x,
				y,
				width,
				height,
				corner,
				fill,
				stroke: outline,
			} => {
				let _ = writeln!(
					svg,
					r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" rx="{corner}" fill={}{}/>"#,
					paint(*fill),
					stroke(*outline)
				);
			}
			Shape::Line {
				from,
				to,
				color,
				width,
			} => {
				let _ = writeln!(
					svg,
					r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"{}/>"#,
					from.0,
					from.1,
					to.0,
					to.1,
					stroke(Some((*color, *width)))
				);
			}
			Shape::Triangle { points, fill } => {
				let pts: Vec<String> = points
					.iter()
					.map(|(x, y)| format!("{x:.1},{y:.1}"))
					.collect();
				let _ = writeln!(
					svg,
					r#"<polygon points="{}" fill={}/>"#,
					pts.join(" "),
					paint(*fill)
				);
			}
			Shape::Circle {
				center,
				radius,
				fill,
				highlight,
				stroke: outline,
			} => {
				let fill_attr = match highlight {
					Some(highlight) => {
						let id = gradients
							.iter()
							.position(|g| *g == (*fill, *highlight))
							.unwrap_or(0);
						format!("\"url(#node{id})\" fill-opacity=\"{:.3}\"", fill.a)
					}
					None => paint(*fill),
				};
				let _ = writeln!(
					svg,
					r#"<circle cx="{:.1}" cy="{:.1}" r="{radius}" fill={fill_attr}{}/>"#,
					center.0,
					center.1,
					stroke(*outline)
				);
			}
			Shape::Text(text) => write_text(&mut svg, text),
		}
	}

	svg.push_str("</svg>\n");
	svg
}

fn write_text(svg: &mut String, text: &Text) {
	let anchor = match text.anchor {
		Anchor::Start => "start",
		Anchor::Middle => "middle",
	};
	let family = if text.monospace {
		"ui-monospace, monospace"
	} else {
		"system-ui, -apple-system, sans-serif"
	};
	let weight = if text.bold { "bold" } else { "normal" };
	let _ = writeln!(
		svg,
		r#"<text x="{:.1}" y="{:.1}" text-anchor="{anchor}" font-family="{family}" font-size="{}" font-weight="{weight}" fill={}>{}</text>"#,
		text.x,
		text.y,
		text.size,
		paint(text.color),
		escape(&text.content)
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{GraphData, LayoutConfig, Theme, spring_layout};
	use crate::registry::Registry;

	#[test]
	fn builtin_svg_contains_nodes_and_labels() {
		let data = GraphData::from_registry(&Registry::builtin());
		let layout = spring_layout(&data, &LayoutConfig::default());
		let svg = to_svg(&Scene::build(&data, &layout, &Theme::default()));

		assert!(svg.starts_with("<svg"));
		assert!(svg.trim_end().ends_with("</svg>"));
		let lines = svg.matches("<line ").count();
		assert!(lines > 0 && lines <= data.links.len());
		assert_eq!(svg.matches("<polygon ").count(), lines);
		assert!(svg.contains(">Invistto Hub</text>"));
		assert!(svg.contains(">:6379</text>"));
		assert!(svg.contains("url(#bg)"));
	}
}
