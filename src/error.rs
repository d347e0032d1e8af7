//! Error type shared by every output stage.

use std::path::PathBuf;

/// Errors produced while deriving or writing ecosystem artifacts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Writing or creating an output path failed.
	#[error("failed to write {}: {source}", path.display())]
	Io {
		/// Path that was being written.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},

	/// Registry or catalog serialization failed.
	#[error("failed to serialize JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// PNG encoding failed.
	#[cfg(feature = "raster")]
	#[error("failed to encode image: {0}")]
	Image(#[from] image::ImageError),

	/// A project connects to a key that is not in the registry (strict mode only).
	#[error("project `{from}` connects to unknown project `{to}`")]
	DanglingReference {
		/// Key of the project declaring the connection.
		from: String,
		/// Unknown key it points at.
		to: String,
	},
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
