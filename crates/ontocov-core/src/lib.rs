//! # ontocov-core
//!
//! Core vocabulary for ontology annotation coverage analysis: RDF-style
//! terms, the disease registry, analysis configuration, coverage report
//! models, and the error taxonomy.

pub mod config;
pub mod defaults;
pub mod errors;
pub mod models;
pub mod registry;
pub mod term;

pub use config::AnalysisConfig;
pub use errors::{CoverageError, CoverageResult};
pub use models::{CoverageFlags, CoverageReport, CoverageSummary};
pub use registry::DiseaseRegistry;
pub use term::{Iri, Term};
