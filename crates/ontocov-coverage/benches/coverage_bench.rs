use criterion::{criterion_group, criterion_main, Criterion};

use ontocov_coverage::{
    AnalysisConfig, CoverageAnalyzer, DiseaseRegistry, IndexedOntologyGraph, Iri, Term,
};

fn class_iri(i: usize) -> Iri {
    Iri::new(format!("http://example.org/C{i}"))
}

/// Build a 200-class hierarchy: each class subclasses up to 3 lower
/// numbered classes; every 20th class carries the restriction pattern.
fn build_hierarchy(config: &AnalysisConfig) -> (IndexedOntologyGraph, DiseaseRegistry) {
    let n = 200;
    let mut graph = IndexedOntologyGraph::new();
    for i in 0..n {
        graph.ensure_node(Term::Named(class_iri(i)));
    }
    for i in 1..n {
        for j in 1..=3 {
            if i >= j * 7 {
                graph
                    .assert_triple(
                        Term::Named(class_iri(i)),
                        config.subclass_predicate.clone(),
                        Term::Named(class_iri(i - j * 7)),
                    )
                    .unwrap();
            }
        }
    }
    for i in (0..n).step_by(20) {
        let blank = format!("r{i}");
        graph
            .assert_triple(
                Term::Named(class_iri(i)),
                config.subclass_predicate.clone(),
                Term::blank(&blank),
            )
            .unwrap();
        graph
            .assert_triple(
                Term::blank(&blank),
                Iri::from("http://www.w3.org/2002/07/owl#onProperty"),
                Term::Named(config.target_property.clone()),
            )
            .unwrap();
    }
    let registry =
        DiseaseRegistry::from_pairs((0..n).map(|i| (class_iri(i), format!("class {i}")))).unwrap();
    (graph, registry)
}

fn bench_ancestor_closure(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let (graph, _) = build_hierarchy(&config);
    let analyzer = CoverageAnalyzer::new(config);

    c.bench_function("ancestor_closure_200_classes", |b| {
        b.iter(|| {
            analyzer.ancestors(&graph, &class_iri(199));
        });
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let (graph, registry) = build_hierarchy(&config);
    let analyzer = CoverageAnalyzer::new(config);

    c.bench_function("full_analysis_200_classes", |b| {
        b.iter(|| {
            analyzer.analyze(&graph, &registry);
        });
    });
}

criterion_group!(benches, bench_ancestor_closure, bench_full_analysis);
criterion_main!(benches);
