//! Graph layer: the indexed petgraph wrapper over loaded ontology data.

pub mod indexed;

pub use indexed::{IndexedOntologyGraph, OntologyStableGraph};
