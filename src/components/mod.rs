//! Rendering stages, from registry graph to every output format.

pub mod force_graph;
pub mod interactive;
pub mod markup;
pub mod overview;
pub mod report;
pub mod snapshot;
