//! Named-ancestor closure over the subclass-of relation.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use ontocov_core::config::AnalysisConfig;
use ontocov_core::term::{Iri, Term};

use crate::graph::indexed::IndexedOntologyGraph;

/// All named classes reachable from `class` by repeatedly following
/// subclass-of edges whose target is itself a named class.
///
/// Anonymous restriction nodes and literals are neither followed nor
/// reported. Ontology data is not guaranteed acyclic, so the walk keeps
/// an explicit visited set and touches each node at most once. The
/// starting class is never reported, even when a cycle leads back to
/// it; callers check its own direct flag separately.
pub fn named_ancestors(
    graph: &IndexedOntologyGraph,
    class: &Iri,
    config: &AnalysisConfig,
) -> HashSet<Iri> {
    let mut ancestors = HashSet::new();
    let start = match graph.class_node(class) {
        Some(idx) => idx,
        None => return ancestors,
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    visited.insert(start);
    let mut frontier = vec![start];

    while let Some(idx) = frontier.pop() {
        for edge in graph.graph.edges(idx) {
            if *edge.weight() != config.subclass_predicate {
                continue;
            }
            let parent = edge.target();
            let Some(Term::Named(iri)) = graph.graph.node_weight(parent) else {
                continue;
            };
            if visited.insert(parent) {
                ancestors.insert(iri.clone());
                frontier.push(parent);
            }
        }
    }
    ancestors
}
