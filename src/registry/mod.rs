//! Static registry of the projects that make up the ecosystem.
//!
//! The registry is a literal table: it is built once, never mutated, and
//! iterated in declaration order. Every output (graph, report, JSON mirror)
//! is derived from it.

mod data;

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Role a project plays in the ecosystem. Drives color legends and node size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Central SSO gateway every app is launched from.
	Hub,
	/// Browser, desktop or mobile app.
	Frontend,
	/// HTTP API.
	Backend,
	/// Auxiliary process (gateway, worker, integration).
	Service,
	/// Data store.
	Database,
	/// Third-party system outside the ecosystem.
	External,
}

impl Category {
	/// All categories in legend order.
	pub const ALL: [Category; 6] = [
		Category::Hub,
		Category::Frontend,
		Category::Backend,
		Category::Service,
		Category::Database,
		Category::External,
	];

	/// Lower-case identifier used in JSON and in the embedded page data.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Hub => "hub",
			Category::Frontend => "frontend",
			Category::Backend => "backend",
			Category::Service => "service",
			Category::Database => "database",
			Category::External => "external",
		}
	}

	/// Legend label shown in rendered diagrams.
	pub fn label(self) -> &'static str {
		match self {
			Category::Hub => "Hub Central",
			Category::Frontend => "Frontend",
			Category::Backend => "Backend API",
			Category::Service => "Serviço",
			Category::Database => "Banco de Dados",
			Category::External => "Externo",
		}
	}

	/// Node radius in diagram units. Hubs and databases are drawn larger.
	pub fn radius(self) -> f64 {
		match self {
			Category::Hub => 30.0,
			Category::Database => 25.0,
			Category::External => 15.0,
			Category::Frontend | Category::Backend | Category::Service => 20.0,
		}
	}
}

/// One entry of the registry.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Project {
	/// Unique key. Serialized as the map key of the JSON mirror, not inline.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Role in the ecosystem.
	#[serde(rename = "kind")]
	pub category: Category,
	/// Development port, if the project listens on one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub port: Option<u16>,
	/// Path the app is served under in production.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<&'static str>,
	/// One-line summary.
	pub description: &'static str,
	/// Main frameworks, free text.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stack: Option<&'static str>,
	/// Host and port of a data store.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub host: Option<&'static str>,
	/// Lifecycle status; `ativo` marks a project in active use.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<&'static str>,
	/// Platforms an app ships on.
	#[serde(skip_serializing_if = "is_empty")]
	pub platforms: &'static [&'static str],
	/// Headline features.
	#[serde(skip_serializing_if = "is_empty")]
	pub features: &'static [&'static str],
	/// Domain modules of an API.
	#[serde(skip_serializing_if = "is_empty")]
	pub modules: &'static [&'static str],
	/// Lens laboratories an integration talks to.
	#[serde(skip_serializing_if = "is_empty")]
	pub labs: &'static [&'static str],
	/// Approximate table count of a data store.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tables: Option<&'static str>,
	/// Keys of the projects this one depends on. Unknown keys are tolerated.
	pub connects: &'static [&'static str],
	/// CSS hex color.
	pub color: &'static str,
}

impl Project {
	/// Empty template for struct-update syntax in the registry literal.
	pub const BLANK: Project = Project {
		key: "",
		name: "",
		category: Category::External,
		port: None,
		path: None,
		description: "",
		stack: None,
		host: None,
		status: None,
		platforms: &[],
		features: &[],
		modules: &[],
		labs: &[],
		tables: None,
		connects: &[],
		color: "#94a3b8",
	};

	/// Minimal project with a key, display name and category.
	pub const fn new(key: &'static str, name: &'static str, category: Category) -> Self {
		Project {
			key,
			name,
			category,
			..Self::BLANK
		}
	}

	/// Same project connecting to `connects`.
	pub const fn connecting(self, connects: &'static [&'static str]) -> Self {
		Project { connects, ..self }
	}

	/// Same project listening on `port`.
	pub const fn on_port(self, port: u16) -> Self {
		Project {
			port: Some(port),
			..self
		}
	}

	/// Whether the project is marked `ativo`.
	pub fn is_active(&self) -> bool {
		self.status == Some("ativo")
	}
}

fn is_empty(list: &&'static [&'static str]) -> bool {
	list.is_empty()
}

/// Aggregate numbers shown in diagram headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
	/// Number of registered projects.
	pub projects: usize,
	/// Projects marked active.
	pub active: usize,
	/// Distinct ports declared across the registry.
	pub ports_in_use: usize,
	/// Projects in the database category.
	pub databases: usize,
}

/// Ordered, read-only table of projects.
#[derive(Clone, Debug)]
pub struct Registry {
	projects: Vec<Project>,
}

impl Registry {
	/// Wrap an arbitrary project list, keeping its order.
	pub fn new(projects: impl Into<Vec<Project>>) -> Self {
		Self {
			projects: projects.into(),
		}
	}

	/// The ecosystem as currently deployed.
	pub fn builtin() -> Self {
		Self::new(data::PROJECTS)
	}

	/// Project registered under `key`.
	pub fn get(&self, key: &str) -> Option<&Project> {
		self.projects.iter().find(|p| p.key == key)
	}

	/// Whether `key` is registered.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Position of `key` in insertion order.
	pub fn index_of(&self, key: &str) -> Option<usize> {
		self.projects.iter().position(|p| p.key == key)
	}

	/// Number of projects.
	pub fn len(&self) -> usize {
		self.projects.len()
	}

	/// Whether the registry has no projects.
	pub fn is_empty(&self) -> bool {
		self.projects.is_empty()
	}

	/// Projects in registry order.
	pub fn iter(&self) -> impl Iterator<Item = &Project> {
		self.projects.iter()
	}

	/// Connections whose target is not in the registry, as `(from, to)` pairs.
	pub fn dangling_references(&self) -> Vec<(&'static str, &'static str)> {
		self.projects
			.iter()
			.flat_map(|p| p.connects.iter().map(move |&to| (p.key, to)))
			.filter(|(_, to)| !self.contains(to))
			.collect()
	}

	/// Header numbers derived from the current table.
	pub fn stats(&self) -> RegistryStats {
		let ports: BTreeSet<u16> = self.projects.iter().filter_map(|p| p.port).collect();
		RegistryStats {
			projects: self.projects.len(),
			active: self.projects.iter().filter(|p| p.is_active()).count(),
			ports_in_use: ports.len(),
			databases: self
				.projects
				.iter()
				.filter(|p| p.category == Category::Database)
				.count(),
		}
	}
}

/// Serialized as a JSON object keyed by project key, in registry order.
impl Serialize for Registry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.projects.len()))?;
		for project in &self.projects {
			map.serialize_entry(project.key, project)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_keys_are_unique() {
		let registry = Registry::builtin();
		let keys: BTreeSet<_> = registry.iter().map(|p| p.key).collect();
		assert_eq!(keys.len(), registry.len());
	}

	#[test]
	fn builtin_has_no_dangling_references() {
		assert!(Registry::builtin().dangling_references().is_empty());
	}

	#[test]
	fn dangling_references_are_reported_in_order() {
		let registry = Registry::new(vec![
			Project::new("web", "Web", Category::Frontend).connecting(&["api", "ghost"]),
			Project::new("api", "API", Category::Backend).connecting(&["db", "cache"]),
		]);
		assert_eq!(
			registry.dangling_references(),
			vec![("web", "ghost"), ("api", "db"), ("api", "cache")]
		);
	}

	#[test]
	fn stats_count_distinct_ports() {
		let registry = Registry::new(vec![
			Project::new("a", "A", Category::Frontend).on_port(5173),
			Project::new("b", "B", Category::Frontend).on_port(5173),
			Project::new("c", "C", Category::Database).on_port(3305),
			Project::new("d", "D", Category::External),
		]);
		let stats = registry.stats();
		assert_eq!(stats.projects, 4);
		assert_eq!(stats.ports_in_use, 2);
		assert_eq!(stats.databases, 1);
		assert_eq!(stats.active, 0);
	}

	#[test]
	fn json_mirror_keeps_registry_order() {
		let registry = Registry::new(vec![
			Project::new("zeta", "Zeta", Category::Backend),
			Project::new("alpha", "Alpha", Category::Backend),
		]);
		let json = serde_json::to_string(&registry).unwrap();
		let zeta = json.find("\"zeta\"").unwrap();
		let alpha = json.find("\"alpha\"").unwrap();
		assert!(zeta < alpha);
		assert!(json.contains("\"kind\":\"backend\""));
		assert!(!json.contains("\"port\""));
	}
}
