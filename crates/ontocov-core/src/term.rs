//! RDF-style terms: named IRIs, anonymous (blank) nodes, and literals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable URI-like identifier for a named class, property, or other
/// named ontology term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_string())
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// A node in the ontology graph.
///
/// Restriction nodes parsed from OWL documents surface as `Anonymous`
/// terms; their id is graph-local and carries no meaning beyond
/// identity within one loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A named class or property, identified by IRI.
    Named(Iri),
    /// An anonymous (blank) node, e.g. an OWL restriction.
    Anonymous(String),
    /// A literal value, e.g. a label string.
    Literal(String),
}

impl Term {
    /// Named class from anything IRI-like.
    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::Named(iri.into())
    }

    /// Anonymous node with a graph-local id.
    pub fn blank(id: impl Into<String>) -> Self {
        Self::Anonymous(id.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// The IRI of a named term, if this is one.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Named(iri) => Some(iri),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(iri) => write!(f, "<{iri}>"),
            Self::Anonymous(id) => write!(f, "_:{id}"),
            Self::Literal(value) => write!(f, "\"{value}\""),
        }
    }
}
