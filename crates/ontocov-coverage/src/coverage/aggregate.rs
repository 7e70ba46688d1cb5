//! Registry-wide aggregation: one direct pass, one indirect pass.

use std::collections::HashMap;

use tracing::{debug, info};

use ontocov_core::config::AnalysisConfig;
use ontocov_core::models::{CoverageFlags, CoverageReport};
use ontocov_core::registry::DiseaseRegistry;
use ontocov_core::term::Iri;

use crate::coverage::{ancestors, direct};
use crate::graph::indexed::IndexedOntologyGraph;

/// Compute coverage flags for every registered identifier.
///
/// The indirect pass consults only the direct-flag store built over the
/// registry: ancestors outside the registry (upper-ontology classes)
/// contribute `false` by absence. Identifiers absent from the graph
/// degrade to `direct = false` with an empty ancestor set.
pub fn run(
    graph: &IndexedOntologyGraph,
    registry: &DiseaseRegistry,
    config: &AnalysisConfig,
) -> CoverageReport {
    // Direct pass.
    let mut direct_flags: HashMap<Iri, bool> = HashMap::with_capacity(registry.len());
    for (id, _) in registry.iter() {
        let flag = direct::has_direct_annotation(graph, id, config);
        direct_flags.insert(id.clone(), flag);
    }
    debug!(
        total = registry.len(),
        direct = direct_flags.values().filter(|f| **f).count(),
        "direct pass complete"
    );

    // Indirect pass: own flag OR any registered ancestor's direct flag.
    let mut report = CoverageReport::default();
    for (id, label) in registry.iter() {
        let own = direct_flags[id];
        let indirect = own
            || ancestors::named_ancestors(graph, id, config)
                .iter()
                .any(|ancestor| direct_flags.get(ancestor).copied().unwrap_or(false));

        let flags = CoverageFlags {
            direct: own,
            indirect,
        };
        report.by_id.insert(id.clone(), flags);
        // Duplicate labels collapse to the last identifier written.
        report.by_label.insert(label.to_string(), flags);
    }

    let summary = report.summary();
    info!(
        total = summary.total,
        direct = summary.direct,
        indirect = summary.indirect,
        "coverage analysis complete"
    );
    report
}
