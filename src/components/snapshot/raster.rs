//! PNG rendering of a [`Scene`] with the `image` crate.
//!
//! Paints background, edges, arrowheads, nodes and the legend box with
//! single-pixel edge anti-aliasing. Text uses the `font8x8` bitmap glyphs
//! (ASCII and Latin-1), scaled to the requested size.

use std::path::Path;

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgba, RgbaImage};

use super::scene::{Anchor, Scene, Shape, Text};
use crate::components::force_graph::Color;
use crate::error::Result;

/// Blend `color` over the pixel at `(x, y)` with the given coverage in `[0, 1]`.
fn blend(img: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: f64) {
	if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
		return;
	}
	let alpha = (color.a * coverage).clamp(0.0, 1.0);
	if alpha <= 0.0 {
		return;
	}
	let px = img.get_pixel_mut(x as u32, y as u32);
	let Rgba([r, g, b, a]) = *px;
	let mix = |dst: u8, src: u8| (src as f64 * alpha + dst as f64 * (1.0 - alpha)).round() as u8;
	*px = Rgba([
		mix(r, color.r),
		mix(g, color.g),
		mix(b, color.b),
		a.max((alpha * 255.0).round() as u8),
	]);
}

/// Coverage of a pixel whose center lies `distance` outside (positive) or inside an edge.
fn coverage(distance: f64) -> f64 {
	(0.5 - distance).clamp(0.0, 1.0)
}

fn fill_background(img: &mut RgbaImage, scene: &Scene) {
	let bg = &scene.background;
	let (w, h) = (img.width() as f64, img.height() as f64);
	for (x, y, px) in img.enumerate_pixels_mut() {
		let color = if bg.use_gradient {
			let t = (x as f64 / w + y as f64 / h) / 2.0;
			bg.color.lerp(bg.color_secondary, t)
		} else {
			bg.color
		};
		*px = Rgba([color.r, color.g, color.b, 255]);
	}
}

fn draw_circle(
	img: &mut RgbaImage,
	(cx, cy): (f64, f64),
	radius: f64,
	fill: Color,
	stroke: Option<(Color, f64)>,
) {
	let outer = radius + stroke.map_or(0.0, |(_, w)| w / 2.0) + 1.0;
	let (x0, x1) = ((cx - outer).floor() as i64, (cx + outer).ceil() as i64);
	let (y0, y1) = ((cy - outer).floor() as i64, (cy + outer).ceil() as i64);
	for y in y0..=y1 {
		for x in x0..=x1 {
			let (dx, dy) = (x as f64 + 0.5 - cx, y as f64 + 0.5 - cy);
			let d = (dx * dx + dy * dy).sqrt() - radius;
			blend(img, x, y, fill, coverage(d));
			if let Some((color, width)) = stroke {
				blend(img, x, y, color, coverage(d.abs() - width / 2.0));
			}
		}
	}
}

fn draw_line(img: &mut RgbaImage, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
	let half = width / 2.0;
	let (dx, dy) = (to.0 - from.0, to.1 - from.1);
	let len_sq = dx * dx + dy * dy;
	let pad = half + 1.0;
	let (x0, x1) = (
		(from.0.min(to.0) - pad).floor() as i64,
		(from.0.max(to.0) + pad).ceil() as i64,
	);
	let (y0, y1) = (
		(from.1.min(to.1) - pad).floor() as i64,
		(from.1.max(to.1) + pad).ceil() as i64,
	);
	for y in y0..=y1 {
		for x in x0..=x1 {
			let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
			let t = if len_sq > 0.0 {
				(((px - from.0) * dx + (py - from.1) * dy) / len_sq).clamp(0.0, 1.0)
			} else {
				0.0
			};
			let (nx, ny) = (from.0 + t * dx, from.1 + t * dy);
			let d = ((px - nx).powi(2) + (py - ny).powi(2)).sqrt() - half;
			blend(img, x, y, color, coverage(d));
		}
	}
}

fn draw_triangle(img: &mut RgbaImage, points: [(f64, f64); 3], fill: Color) {
	let [a, b, c] = points;
	let edge = |p: (f64, f64), q: (f64, f64), x: f64, y: f64| {
		(q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
	};
	let area = edge(a, b, c.0, c.1);
	if area.abs() < f64::EPSILON {
		return;
	}
	let min_x = a.0.min(b.0).min(c.0).floor() as i64;
	let max_x = a.0.max(b.0).max(c.0).ceil() as i64;
	let min_y = a.1.min(b.1).min(c.1).floor() as i64;
	let max_y = a.1.max(b.1).max(c.1).ceil() as i64;
	for y in min_y..=max_y {
		for x in min_x..=max_x {
			let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
			let inside = [edge(a, b, px, py), edge(b, c, px, py), edge(c, a, px, py)]
				.iter()
				.all(|&e| e * area >= 0.0);
			if inside {
				blend(img, x, y, fill, 1.0);
			}
		}
	}
}

fn draw_rect(
	img: &mut RgbaImage,
	(x, y, width, height): (f64, f64, f64, f64),
	corner: f64,
	fill: Color,
	stroke: Option<(Color, f64)>,
) {
	let r = corner.min(width / 2.0).min(height / 2.0);
	let (cx, cy) = (x + width / 2.0, y + height / 2.0);
	let (hw, hh) = (width / 2.0 - r, height / 2.0 - r);
	for py in (y - 1.0).floor() as i64..=(y + height + 1.0).ceil() as i64 {
		for px in (x - 1.0).floor() as i64..=(x + width + 1.0).ceil() as i64 {
			// Signed distance to a rounded rectangle.
			let qx = ((px as f64 + 0.5 - cx).abs() - hw).max(0.0);
			let qy = ((py as f64 + 0.5 - cy).abs() - hh).max(0.0);
			let outside = (qx * qx + qy * qy).sqrt();
			let inside = ((px as f64 + 0.5 - cx).abs() - hw)
				.max((py as f64 + 0.5 - cy).abs() - hh)
				.min(0.0);
			let d = outside + inside - r;
			blend(img, px, py, fill, coverage(d));
			if let Some((color, w)) = stroke {
				blend(img, px, py, color, coverage(d.abs() - w / 2.0));
			}
		}
	}
}

/// Glyph cell width relative to the font size, matching the legend's text metrics.
const ADVANCE: f64 = 0.6;
/// Glyph row holding the baseline.
const BASELINE_ROW: f64 = 7.0;

fn glyph(c: char) -> Option<[u8; 8]> {
	BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

fn draw_text(img: &mut RgbaImage, text: &Text) {
	let (sx, sy) = (text.size * ADVANCE / 8.0, text.size / 8.0);
	let advance = sx * 8.0;
	let width = advance * text.content.chars().count() as f64;
	let left = match text.anchor {
		Anchor::Start => text.x,
		Anchor::Middle => text.x - width / 2.0,
	};
	let top = text.y - BASELINE_ROW * sy;
	let passes: &[f64] = if text.bold { &[0.0, 1.0] } else { &[0.0] };

	for (i, c) in text.content.chars().enumerate() {
		// Unsupported glyphs leave a blank cell.
		let Some(rows) = glyph(c) else {
			continue;
		};
		let cell = left + advance * i as f64;
		for &offset in passes {
			let x0 = cell + offset;
			for py in top.floor() as i64..=(top + 8.0 * sy).ceil() as i64 {
				let gy = ((py as f64 + 0.5 - top) / sy).floor();
				if !(0.0..8.0).contains(&gy) {
					continue;
				}
				for px in x0.floor() as i64..=(x0 + advance).ceil() as i64 {
					let gx = ((px as f64 + 0.5 - x0) / sx).floor();
					if !(0.0..8.0).contains(&gx) {
						continue;
					}
					if rows[gy as usize] & (1 << gx as u8) != 0 {
						blend(img, px, py, text.color, 1.0);
					}
				}
			}
		}
	}
}

/// Paint the scene into an in-memory image.
pub fn rasterize(scene: &Scene) -> RgbaImage {
	let mut img = RgbaImage::new(scene.width.round() as u32, scene.height.round() as u32);
	fill_background(&mut img, scene);

	for shape in &scene.shapes {
		match shape {
			Shape::Rect {
				x,
				y,
				width,
				height,
				corner,
				fill,
				stroke,
			} => draw_rect(&mut img, (*x, *y, *width, *height), *corner, *fill, *stroke),
			Shape::Line {
				from,
				to,
				color,
				width,
			} => draw_line(&mut img, *from, *to, *color, *width),
			Shape::Triangle { points, fill } => draw_triangle(&mut img, *points, *fill),
			Shape::Circle {
				center,
				radius,
				fill,
				stroke,
				..
			} => draw_circle(&mut img, *center, *radius, *fill, *stroke),
			Shape::Text(text) => draw_text(&mut img, text),
		}
	}
	img
}

/// Rasterize the scene and save it as PNG at `path`.
pub fn write_png(scene: &Scene, path: &Path) -> Result<()> {
	rasterize(scene).save_with_format(path, image::ImageFormat::Png)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::theme::BackgroundStyle;

	fn blank(shapes: Vec<Shape>) -> Scene {
		Scene {
			width: 100.0,
			height: 80.0,
			background: BackgroundStyle {
				color: Color::rgb(0, 0, 0),
				color_secondary: Color::rgb(0, 0, 0),
				use_gradient: false,
			},
			shapes,
		}
	}

	#[test]
	fn image_matches_scene_size() {
		let img = rasterize(&blank(Vec::new()));
		assert_eq!(img.dimensions(), (100, 80));
		assert_eq!(*img.get_pixel(50, 40), Rgba([0, 0, 0, 255]));
	}

	#[test]
	fn circles_fill_their_interior_only() {
		let img = rasterize(&blank(vec![Shape::Circle {
			center: (50.0, 40.0),
			radius: 10.0,
			fill: Color::rgb(255, 0, 0),
			highlight: None,
			stroke: None,
		}]));
		assert_eq!(*img.get_pixel(50, 40), Rgba([255, 0, 0, 255]));
		assert_eq!(*img.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
	}

	#[test]
	fn text_is_drawn_inside_its_cell() {
		let img = rasterize(&blank(vec![Shape::Text(Text {
			x: 10.0,
			y: 24.0,
			content: "Hub".to_string(),
			color: Color::rgb(255, 255, 255),
			size: 16.0,
			anchor: Anchor::Start,
			bold: false,
			monospace: false,
		})]));
		let white = Rgba([255, 255, 255, 255]);
		let lit: Vec<_> = img
			.enumerate_pixels()
			.filter(|(_, _, px)| **px == white)
			.map(|(x, y, _)| (x, y))
			.collect();
		assert!(lit.len() > 20, "only {} pixels lit", lit.len());
		// Three cells of 16 * 0.6 px starting at x = 10; glyph rows span y 10..26.
		assert!(lit.iter().all(|&(x, y)| (10..39).contains(&x) && (10..26).contains(&y)));
	}

	#[test]
	fn accented_labels_use_latin_glyphs() {
		assert!(glyph('ç').is_some());
		assert!(glyph('ã').is_some());
		assert!(glyph('S').is_some());
	}

	#[test]
	fn legend_labels_reach_the_png() {
		use crate::components::force_graph::{GraphData, LayoutConfig, Theme, spring_layout};
		use crate::registry::Registry;

		let data = GraphData::from_registry(&Registry::builtin());
		let layout = spring_layout(&data, &LayoutConfig::default());
		let scene = Scene::build(&data, &layout, &Theme::default());
		let bare = Scene {
			shapes: scene
				.shapes
				.iter()
				.filter(|s| !matches!(s, Shape::Text(_)))
				.cloned()
				.collect(),
			..scene.clone()
		};

		let Some(&Shape::Rect {
			x,
			y,
			width,
			height,
			..
		}) = scene.shapes.iter().rev().find(|s| matches!(s, Shape::Rect { .. }))
		else {
			panic!("scene has no legend box");
		};

		let (with_text, without) = (rasterize(&scene), rasterize(&bare));
		let mut differing = 0;
		for py in y as u32..(y + height) as u32 {
			for px in x as u32..(x + width) as u32 {
				if with_text.get_pixel(px, py) != without.get_pixel(px, py) {
					differing += 1;
				}
			}
		}
		assert!(differing > 100, "legend text painted {differing} pixels");
	}

	#[test]
	fn lines_and_triangles_are_painted() {
		let img = rasterize(&blank(vec![
			Shape::Line {
				from: (10.0, 10.5),
				to: (90.0, 10.5),
				color: Color::rgb(0, 255, 0),
				width: 3.0,
			},
			Shape::Triangle {
				points: [(50.0, 70.0), (30.0, 50.0), (70.0, 50.0)],
				fill: Color::rgb(0, 0, 255),
			},
		]));
		assert_eq!(*img.get_pixel(50, 10), Rgba([0, 255, 0, 255]));
		assert_eq!(*img.get_pixel(50, 55), Rgba([0, 0, 255, 255]));
		assert_eq!(*img.get_pixel(50, 75), Rgba([0, 0, 0, 255]));
	}
}
