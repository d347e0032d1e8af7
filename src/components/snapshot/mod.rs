//! Static rendering of the ecosystem graph.
//!
//! The layout and the [`Scene`] are computed once and painted by two backends:
//! SVG (always available) and PNG (behind the `raster` feature). Both carry
//! the title, node and port labels, and the legend text. A build without `raster` reports the PNG as unavailable instead
//! of failing, so the remaining outputs are still produced.

#[cfg(feature = "raster")]
pub mod raster;
pub mod scene;
pub mod svg;

use std::path::{Path, PathBuf};

use log::info;

pub use scene::{Anchor, Scene, Shape, Text};

use crate::error::{Error, Result};

/// Whether this build can produce PNG output.
pub const RASTER_AVAILABLE: bool = cfg!(feature = "raster");

/// Write the scene as SVG to `path`.
pub fn render_svg(scene: &Scene, path: &Path) -> Result<PathBuf> {
	std::fs::write(path, svg::to_svg(scene)).map_err(|e| Error::io(path, e))?;
	info!("ecosystem-map: wrote {}", path.display());
	Ok(path.to_path_buf())
}

/// Write the scene as PNG to `path`.
///
/// Returns `Ok(None)` when the crate was built without the `raster` feature.
#[cfg(feature = "raster")]
pub fn render_png(scene: &Scene, path: &Path) -> Result<Option<PathBuf>> {
	raster::write_png(scene, path)?;
	info!("ecosystem-map: wrote {}", path.display());
	Ok(Some(path.to_path_buf()))
}

/// Write the scene as PNG to `path`.
///
/// Returns `Ok(None)` when the crate was built without the `raster` feature.
#[cfg(not(feature = "raster"))]
pub fn render_png(_scene: &Scene, path: &Path) -> Result<Option<PathBuf>> {
	log::debug!(
		"ecosystem-map: raster feature disabled, skipping {}",
		path.display()
	);
	Ok(None)
}
