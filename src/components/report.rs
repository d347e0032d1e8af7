//! Console listing of the registry, grouped by category.

use std::fmt::Write;

use crate::registry::{Category, Project, Registry};

/// Group projects by category, ordered by each category's first appearance.
///
/// Every project lands in exactly one group.
pub fn group_by_category(registry: &Registry) -> Vec<(Category, Vec<&Project>)> {
	let mut groups: Vec<(Category, Vec<&Project>)> = Vec::new();
	for project in registry.iter() {
		match groups.iter_mut().find(|(c, _)| *c == project.category) {
			Some((_, members)) => members.push(project),
			None => groups.push((project.category, vec![project])),
		}
	}
	groups
}

fn render_line(out: &mut String, project: &Project) {
	let port = project.port.map(|p| format!(":{p}")).unwrap_or_default();
	let _ = writeln!(
		out,
		"   • {:<20} {:<8} {}",
		project.name, port, project.description
	);
}

/// Render the grouped listing.
pub fn render(registry: &Registry) -> String {
	let mut out = String::new();
	for (category, members) in group_by_category(registry) {
		let _ = writeln!(
			out,
			"\n📁 {} ({})",
			category.as_str().to_uppercase(),
			members.len()
		);
		for project in members {
			render_line(&mut out, project);
		}
	}
	out
}

/// Print the grouped listing to stdout.
pub fn print(registry: &Registry) {
	print!("{}", render(registry));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_partition_the_registry() {
		let registry = Registry::builtin();
		let groups = group_by_category(&registry);

		let total: usize = groups.iter().map(|(_, m)| m.len()).sum();
		assert_eq!(total, registry.len());

		for project in registry.iter() {
			let hits = groups
				.iter()
				.flat_map(|(_, m)| m.iter())
				.filter(|p| p.key == project.key)
				.count();
			assert_eq!(hits, 1, "{} appears {hits} times", project.key);
		}
		for (category, members) in &groups {
			assert!(members.iter().all(|p| p.category == *category));
		}
	}

	#[test]
	fn group_order_follows_first_appearance() {
		let registry = Registry::new(vec![
			Project::new("db", "DB", Category::Database),
			Project::new("web", "Web", Category::Frontend),
			Project::new("cache", "Cache", Category::Database),
		]);
		let order: Vec<_> = group_by_category(&registry)
			.into_iter()
			.map(|(c, members)| (c, members.len()))
			.collect();
		assert_eq!(order, vec![(Category::Database, 2), (Category::Frontend, 1)]);
	}

	#[test]
	fn lines_are_padded_and_ports_optional() {
		let registry = Registry::new(vec![
			Project {
				description: "Autenticação",
				..Project::new("auth", "Auth API", Category::Backend).on_port(3001)
			},
			Project {
				description: "Externa",
				..Project::new("sao", "SAO", Category::External)
			},
		]);
		let text = render(&registry);
		assert!(text.contains("\n📁 BACKEND (1)\n"));
		assert!(text.contains("   • Auth API             :3001    Autenticação\n"));
		assert!(text.contains("   • SAO                           Externa\n"));
	}
}
