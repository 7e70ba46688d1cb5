//! Coverage engine: direct restriction checks, named-ancestor closure,
//! and registry-wide aggregation.

pub mod aggregate;
pub mod ancestors;
pub mod direct;

use std::collections::HashSet;

use ontocov_core::config::AnalysisConfig;
use ontocov_core::models::CoverageReport;
use ontocov_core::registry::DiseaseRegistry;
use ontocov_core::term::Iri;

use crate::graph::indexed::IndexedOntologyGraph;

/// The analyzer wraps all coverage operations under one configuration.
pub struct CoverageAnalyzer {
    pub config: AnalysisConfig,
}

impl CoverageAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Does this class itself carry the target property restriction?
    pub fn direct(&self, graph: &IndexedOntologyGraph, class: &Iri) -> bool {
        direct::has_direct_annotation(graph, class, &self.config)
    }

    /// All named-class ancestors of a class, cycles tolerated.
    pub fn ancestors(&self, graph: &IndexedOntologyGraph, class: &Iri) -> HashSet<Iri> {
        ancestors::named_ancestors(graph, class, &self.config)
    }

    /// Compute coverage flags for every registered identifier.
    pub fn analyze(
        &self,
        graph: &IndexedOntologyGraph,
        registry: &DiseaseRegistry,
    ) -> CoverageReport {
        aggregate::run(graph, registry, &self.config)
    }
}

impl Default for CoverageAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
