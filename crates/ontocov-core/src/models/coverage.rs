//! Per-identifier coverage flags and the aggregated report.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::term::Iri;

/// Coverage of one identifier.
///
/// Invariant of any aggregator output: `direct` implies `indirect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageFlags {
    /// The class itself carries the target property restriction.
    pub direct: bool,
    /// The class or any transitive named-class ancestor carries it.
    pub indirect: bool,
}

/// Summary counts of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total: usize,
    pub direct: usize,
    pub indirect: usize,
}

/// Output of one coverage analysis run. Held in memory only, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Authoritative mapping, keyed by canonical identifier.
    pub by_id: HashMap<Iri, CoverageFlags>,
    /// Display view keyed by label. Distinct identifiers sharing a
    /// label collapse to the last one written.
    pub by_label: HashMap<String, CoverageFlags>,
}

impl CoverageReport {
    pub fn total(&self) -> usize {
        self.by_id.len()
    }

    pub fn direct_count(&self) -> usize {
        self.by_id.values().filter(|f| f.direct).count()
    }

    pub fn indirect_count(&self) -> usize {
        self.by_id.values().filter(|f| f.indirect).count()
    }

    pub fn flags(&self, id: &Iri) -> Option<CoverageFlags> {
        self.by_id.get(id).copied()
    }

    pub fn flags_for_label(&self, label: &str) -> Option<CoverageFlags> {
        self.by_label.get(label).copied()
    }

    pub fn summary(&self) -> CoverageSummary {
        CoverageSummary {
            total: self.total(),
            direct: self.direct_count(),
            indirect: self.indirect_count(),
        }
    }
}
