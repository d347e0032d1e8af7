//! Architecture overview: the broader catalog behind the diagram, as cards.
//!
//! Unlike the diagram registry, the catalog covers frontend stacks, API
//! frameworks, shared packages, database usage, and standardization issues.

pub mod catalog;
pub mod page;

use serde::Serialize;

pub use catalog::{Catalog, Issues, Totals};
pub use page::render_page;

use crate::error::Result;

#[derive(Serialize)]
struct Meta<'a> {
	generated_at: &'a str,
	#[serde(flatten)]
	totals: &'a Totals,
}

#[derive(Serialize)]
struct Export<'a> {
	meta: Meta<'a>,
	#[serde(flatten)]
	catalog: &'a Catalog,
}

/// Pretty-printed JSON export of the catalog, stamped with `generated_at`.
pub fn to_json(catalog: &Catalog, generated_at: &str) -> Result<String> {
	let export = Export {
		meta: Meta {
			generated_at,
			totals: &catalog.totals,
		},
		catalog,
	};
	Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn export_starts_with_stamped_meta() {
		let json = to_json(&Catalog::builtin(), "2026-01-24T10:30:00").unwrap();
		assert!(json.starts_with("{\n  \"meta\": {\n    \"generated_at\": \"2026-01-24T10:30:00\""));

		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["meta"]["total_projects"], 28);
		assert_eq!(value["meta"]["total_tables"], 100);
		assert_eq!(value["databases"]["redis"]["port"], 6379);
		assert_eq!(value["shared_packages"]["@invistto/auth"]["exports"][0], "JwtAuthGuard");
	}

	#[test]
	fn export_keeps_non_ascii_text() {
		let json = to_json(&Catalog::builtin(), "now").unwrap();
		assert!(json.contains("Versões React inconsistentes"));
	}
}
