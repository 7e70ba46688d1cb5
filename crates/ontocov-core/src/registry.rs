//! The disease registry: canonical identifier → display label.

use std::collections::HashMap;

use crate::errors::{CoverageError, CoverageResult};
use crate::term::Iri;

/// Identifiers under analysis, with their display labels.
///
/// Supplied by the ontology-loading collaborator and read-only
/// afterwards. Keys are canonical IRIs; labels are display-only and
/// not required to be unique.
#[derive(Debug, Clone, Default)]
pub struct DiseaseRegistry {
    labels: HashMap<Iri, String>,
}

impl DiseaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from identifier/label pairs. Fails on the first identifier
    /// registered twice with differing labels.
    pub fn from_pairs<I>(pairs: I) -> CoverageResult<Self>
    where
        I: IntoIterator<Item = (Iri, String)>,
    {
        let mut registry = Self::new();
        for (id, label) in pairs {
            registry.insert(id, label)?;
        }
        Ok(registry)
    }

    /// Register an identifier. Re-inserting the identical pair is a
    /// no-op; a conflicting label is an error.
    pub fn insert(&mut self, id: Iri, label: impl Into<String>) -> CoverageResult<()> {
        let label = label.into();
        match self.labels.get(&id) {
            Some(existing) if *existing != label => Err(CoverageError::DuplicateIdentifier {
                id: id.to_string(),
                existing: existing.clone(),
                rejected: label,
            }),
            Some(_) => Ok(()),
            None => {
                self.labels.insert(id, label);
                Ok(())
            }
        }
    }

    pub fn label(&self, id: &Iri) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &Iri) -> bool {
        self.labels.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate registered pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Iri, &str)> {
        self.labels.iter().map(|(id, label)| (id, label.as_str()))
    }
}
