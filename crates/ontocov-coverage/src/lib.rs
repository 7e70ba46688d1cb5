//! # ontocov-coverage
//!
//! The coverage engine. Wraps a `petgraph` ontology graph and computes,
//! for every registered disease class, whether the target annotation
//! property restricts the class directly or anywhere up its named
//! subclass ancestry.

pub mod coverage;
pub mod graph;

pub use coverage::ancestors::named_ancestors;
pub use coverage::direct::has_direct_annotation;
pub use coverage::CoverageAnalyzer;
pub use graph::indexed::IndexedOntologyGraph;

pub use ontocov_core::{
    AnalysisConfig, CoverageError, CoverageFlags, CoverageReport, CoverageResult, CoverageSummary,
    DiseaseRegistry, Iri, Term,
};
