//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::term::Iri;

/// Configuration for one coverage analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The annotation property whose restriction presence is measured.
    pub target_property: Iri,
    /// The subclass-of predicate followed for both restriction
    /// discovery and ancestor walking.
    pub subclass_predicate: Iri,
}

impl AnalysisConfig {
    /// Parse a TOML document, filling omitted fields with defaults.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_property: Iri::from(defaults::DEFAULT_TARGET_PROPERTY),
            subclass_predicate: Iri::from(defaults::DEFAULT_SUBCLASS_PREDICATE),
        }
    }
}
