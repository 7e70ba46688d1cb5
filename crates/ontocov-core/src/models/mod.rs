//! Output models for a coverage analysis run.

pub mod coverage;

pub use coverage::{CoverageFlags, CoverageReport, CoverageSummary};
