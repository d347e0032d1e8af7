//! Force-directed graph model of the ecosystem.
//!
//! Turns the registry into graph data and lays it out:
//! - Node and link derivation with stable index assignment
//! - Seeded spring layout via the `force_graph` simulation
//! - Category colors and legend shared by every renderer
//!
//! # Example
//!
//! ```
//! use ecosystem_map::registry::Registry;
//! use ecosystem_map::components::force_graph::{GraphData, LayoutConfig, spring_layout};
//!
//! let data = GraphData::from_registry(&Registry::builtin());
//! let layout = spring_layout(&data, &LayoutConfig::default());
//! assert_eq!(layout.positions.len(), data.nodes.len());
//! ```

pub mod layout;
pub mod theme;
mod types;

pub use layout::{Layout, LayoutConfig, spring_layout};
pub use theme::{Color, LegendEntry, Theme, legend_entries};
pub use types::{DanglingLink, GraphData, GraphLink, GraphNode};
