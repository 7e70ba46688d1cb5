//! petgraph::StableGraph wrapper with Term nodes and predicate-IRI edges.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use ontocov_core::errors::{CoverageError, CoverageResult};
use ontocov_core::term::{Iri, Term};

/// The underlying directed graph type. Edge weights are predicate IRIs.
pub type OntologyStableGraph = StableGraph<Term, Iri, Directed>;

/// Wrapper providing indexed access to the ontology graph.
///
/// Populated once by the loading collaborator; read-only for the whole
/// analysis.
pub struct IndexedOntologyGraph {
    /// The petgraph stable graph.
    pub graph: OntologyStableGraph,
    /// Map from term → NodeIndex for O(1) lookup.
    pub node_index: HashMap<Term, NodeIndex>,
}

impl IndexedOntologyGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the node for a term.
    pub fn ensure_node(&mut self, term: Term) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&term) {
            return idx;
        }
        let idx = self.graph.add_node(term.clone());
        self.node_index.insert(term, idx);
        idx
    }

    /// Look up a node index by term.
    pub fn get_node(&self, term: &Term) -> Option<NodeIndex> {
        self.node_index.get(term).copied()
    }

    /// Look up the node for a named class.
    pub fn class_node(&self, iri: &Iri) -> Option<NodeIndex> {
        self.get_node(&Term::Named(iri.clone()))
    }

    /// Assert one triple, inserting both endpoints as needed.
    ///
    /// Literal subjects are rejected; everything else is accepted
    /// verbatim, well-formedness validation is out of scope.
    pub fn assert_triple(
        &mut self,
        subject: Term,
        predicate: Iri,
        object: Term,
    ) -> CoverageResult<()> {
        if matches!(subject, Term::Literal(_)) {
            return Err(CoverageError::InvalidSubject {
                term: subject.to_string(),
            });
        }
        let subject_idx = self.ensure_node(subject);
        let object_idx = self.ensure_node(object);
        self.graph.add_edge(subject_idx, object_idx, predicate);
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedOntologyGraph {
    fn default() -> Self {
        Self::new()
    }
}
