//! Direct-coverage check: is a class restricted by the target property?

use petgraph::visit::EdgeRef;

use ontocov_core::config::AnalysisConfig;
use ontocov_core::term::{Iri, Term};

use crate::graph::indexed::IndexedOntologyGraph;

/// Whether `class` has a subclass-of edge to an anonymous restriction
/// node that in turn references the target property.
///
/// A class absent from the graph, or with no subclass edges, reports
/// `false`. Named and literal subclass targets are skipped; only
/// anonymous nodes can encode restrictions.
pub fn has_direct_annotation(
    graph: &IndexedOntologyGraph,
    class: &Iri,
    config: &AnalysisConfig,
) -> bool {
    let idx = match graph.class_node(class) {
        Some(idx) => idx,
        None => return false,
    };
    let property = Term::Named(config.target_property.clone());

    for edge in graph.graph.edges(idx) {
        if *edge.weight() != config.subclass_predicate {
            continue;
        }
        let restriction = edge.target();
        if !matches!(graph.graph.node_weight(restriction), Some(Term::Anonymous(_))) {
            continue;
        }
        // Any predicate counts; only the object must match the property.
        for restriction_edge in graph.graph.edges(restriction) {
            if graph.graph.node_weight(restriction_edge.target()) == Some(&property) {
                return true;
            }
        }
    }
    false
}
