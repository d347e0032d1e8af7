//! Graph data derived from the registry: nodes, links, and unresolved references.

use log::{debug, warn};
use serde::Serialize;

use crate::components::markup::script_json;
use crate::error::{Error, Result};
use crate::registry::{Category, Registry};

/// A node in the graph, one per registry project.
#[derive(Clone, Debug, Serialize)]
pub struct GraphNode {
	/// Position of the project in registry order. Links refer to nodes by this index.
	pub id: usize,
	/// Registry key of the project.
	pub key: String,
	/// Display label.
	pub name: String,
	/// Category of the project.
	#[serde(rename = "type")]
	pub kind: Category,
	/// Development port.
	pub port: Option<u16>,
	/// Tooltip text.
	#[serde(rename = "desc")]
	pub description: String,
	/// Framework summary shown in the tooltip.
	pub stack: Option<String>,
	/// CSS hex color.
	pub color: String,
	/// Production path the app is mounted under.
	pub path: Option<String>,
	/// Drawn radius; derived from the category.
	pub radius: f64,
}

/// A directed edge between two nodes, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GraphLink {
	/// Source node index.
	pub source: usize,
	/// Target node index.
	pub target: usize,
}

/// A connection that names a key missing from the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DanglingLink {
	/// Key of the project declaring the connection.
	pub from: String,
	/// Key that is not in the registry.
	pub to: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GraphData {
	/// Nodes in registry order.
	pub nodes: Vec<GraphNode>,
	/// Resolved connections, self-connections included.
	pub links: Vec<GraphLink>,
	/// References dropped while building `links`. Not part of the embedded page data.
	#[serde(skip)]
	pub dangling: Vec<DanglingLink>,
}

impl GraphData {
	/// Build nodes in registry order and one link per resolvable connection.
	///
	/// Connections to unknown keys are dropped with a warning and kept in
	/// [`GraphData::dangling`].
	pub fn from_registry(registry: &Registry) -> Self {
		let nodes = registry
			.iter()
			.enumerate()
			.map(|(id, project)| GraphNode {
				id,
				key: project.key.to_string(),
				name: project.name.to_string(),
				kind: project.category,
				port: project.port,
				description: project.description.to_string(),
				stack: project.stack.map(str::to_string),
				color: project.color.to_string(),
				path: project.path.map(str::to_string),
				radius: project.category.radius(),
			})
			.collect();

		let mut links = Vec::new();
		let mut dangling = Vec::new();
		for (source, project) in registry.iter().enumerate() {
			for &target_key in project.connects {
				match registry.index_of(target_key) {
					Some(target) => links.push(GraphLink { source, target }),
					None => {
						warn!(
							"ecosystem-map: `{}` connects to unknown project `{}`, skipping edge",
							project.key, target_key
						);
						dangling.push(DanglingLink {
							from: project.key.to_string(),
							to: target_key.to_string(),
						});
					}
				}
			}
		}

		let data = Self {
			nodes,
			links,
			dangling,
		};
		debug!(
			"ecosystem-map: derived {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		data
	}

	/// Like [`GraphData::from_registry`] but fails on the first unknown reference.
	pub fn from_registry_strict(registry: &Registry) -> Result<Self> {
		let data = Self::from_registry(registry);
		match data.dangling.first() {
			Some(link) => Err(Error::DanglingReference {
				from: link.from.clone(),
				to: link.to.clone(),
			}),
			None => Ok(data),
		}
	}

	/// Incoming plus outgoing link count for every node, indexed by node id.
	pub fn degrees(&self) -> Vec<usize> {
		let mut degrees = vec![0; self.nodes.len()];
		for link in &self.links {
			degrees[link.source] += 1;
			degrees[link.target] += 1;
		}
		degrees
	}

	/// Inline JavaScript literal for the node list.
	pub fn nodes_json(&self) -> Result<String> {
		script_json(&self.nodes)
	}

	/// Inline JavaScript literal for the link list.
	pub fn links_json(&self) -> Result<String> {
		script_json(&self.links)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::Project;

	fn sample() -> Registry {
		Registry::new(vec![
			Project::new("hub", "Hub", Category::Hub).connecting(&["auth"]),
			Project::new("auth", "Auth", Category::Backend).connecting(&["db", "missing"]),
			Project::new("db", "DB", Category::Database),
		])
	}

	#[test]
	fn one_node_per_project_in_registry_order() {
		let data = GraphData::from_registry(&sample());
		assert_eq!(data.nodes.len(), 3);
		let keys: Vec<_> = data.nodes.iter().map(|n| n.key.as_str()).collect();
		assert_eq!(keys, ["hub", "auth", "db"]);
		assert!(data.nodes.iter().enumerate().all(|(i, n)| n.id == i));
	}

	#[test]
	fn unknown_targets_produce_no_link() {
		let data = GraphData::from_registry(&sample());
		assert_eq!(
			data.links,
			vec![
				GraphLink {
					source: 0,
					target: 1
				},
				GraphLink {
					source: 1,
					target: 2
				},
			]
		);
		assert_eq!(
			data.dangling,
			vec![DanglingLink {
				from: "auth".into(),
				to: "missing".into()
			}]
		);
	}

	#[test]
	fn strict_mode_rejects_unknown_targets() {
		let err = GraphData::from_registry_strict(&sample()).unwrap_err();
		assert!(matches!(
			err,
			Error::DanglingReference { ref from, ref to } if from == "auth" && to == "missing"
		));
	}

	#[test]
	fn builtin_registry_resolves_every_connection() {
		let registry = Registry::builtin();
		let data = GraphData::from_registry_strict(&registry).unwrap();
		let declared: usize = registry.iter().map(|p| p.connects.len()).sum();
		assert_eq!(data.nodes.len(), registry.len());
		assert_eq!(data.links.len(), declared);
	}

	#[test]
	fn derivation_is_deterministic() {
		let registry = Registry::builtin();
		let a = GraphData::from_registry(&registry);
		let b = GraphData::from_registry(&registry);
		assert_eq!(a.links, b.links);
		assert_eq!(a.nodes_json().unwrap(), b.nodes_json().unwrap());
	}

	#[test]
	fn degrees_count_both_ends() {
		let data = GraphData::from_registry(&sample());
		assert_eq!(data.degrees(), vec![1, 2, 1]);
	}

	#[test]
	fn node_json_uses_page_field_names() {
		let data = GraphData::from_registry(&sample());
		let json = data.nodes_json().unwrap();
		assert!(json.contains("\"type\":\"hub\""));
		assert!(json.contains("\"desc\":\"\""));
		assert!(json.contains("\"radius\":30.0"));
	}
}
