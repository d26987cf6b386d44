//! Integration tests for the two PageRank estimators
//!
//! Both estimators must agree on the same corpus and produce proper
//! probability distributions.

use linkrank_core::{
    estimate_by_iteration, estimate_by_sampling, Corpus, IterativeSolver, LinkRankError,
    StochasticEstimator,
};
use proptest::prelude::*;

fn cycle_corpus() -> Corpus {
    Corpus::from_iter([("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["A"])])
}

/// Four pages with a hub at 2.html
fn site_corpus() -> Corpus {
    Corpus::from_iter([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ])
}

#[test]
fn test_estimators_agree_on_cycle() {
    let iterated = estimate_by_iteration(&cycle_corpus(), 0.85, 0.001).unwrap();
    let sampled = StochasticEstimator::new()
        .with_samples(100_000)
        .with_seed(2024)
        .run(&cycle_corpus())
        .unwrap();

    let divergence = sampled.max_abs_diff(&iterated);
    assert!(divergence < 0.02, "estimators diverge by {}", divergence);
}

#[test]
fn test_estimators_agree_with_dangling_page() {
    let corpus = Corpus::from_iter([
        ("a", vec!["b", "c"]),
        ("b", vec!["c"]),
        ("c", vec![]),
        ("d", vec!["a", "c"]),
    ]);

    let iterated = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
    let sampled = StochasticEstimator::new()
        .with_samples(100_000)
        .with_seed(99)
        .run(&corpus)
        .unwrap();

    assert!(sampled.max_abs_diff(&iterated) < 0.02);
}

#[test]
fn test_site_corpus_ranks() {
    let ranks = estimate_by_iteration(&site_corpus(), 0.85, 0.001).unwrap();

    assert!((ranks.sum() - 1.0).abs() < 1e-3);
    assert_eq!(ranks.top_n(1)[0].0, "2.html");
    assert!(ranks.get("4.html").unwrap() < ranks.get("3.html").unwrap());
}

#[test]
fn test_single_page_both_estimators() {
    let corpus = Corpus::from_iter([("A", Vec::<String>::new())]);

    let sampled = estimate_by_sampling(&corpus, 0.85, 1000).unwrap();
    let iterated = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();

    assert_eq!(sampled.get("A"), Some(1.0));
    assert_eq!(iterated.get("A"), Some(1.0));
}

#[test]
fn test_caller_corpus_not_mutated() {
    let corpus = Corpus::from_iter([("a", vec![]), ("b", vec!["a"])]);
    let before = corpus.clone();

    estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
    estimate_by_sampling(&corpus, 0.85, 100).unwrap();

    assert_eq!(corpus, before);
}

#[test]
fn test_estimators_run_concurrently() {
    let corpus = std::sync::Arc::new(site_corpus());

    let sampling = {
        let corpus = corpus.clone();
        std::thread::spawn(move || {
            StochasticEstimator::new()
                .with_samples(20_000)
                .with_seed(5)
                .run(&corpus)
        })
    };
    let iterating = {
        let corpus = corpus.clone();
        std::thread::spawn(move || IterativeSolver::new().run(&corpus))
    };

    let sampled = sampling.join().unwrap().unwrap();
    let iterated = iterating.join().unwrap().unwrap();
    assert_eq!(sampled.len(), iterated.len());
}

#[test]
fn test_unknown_link_target_rejected() {
    let mut corpus = cycle_corpus();
    corpus.insert_link("A", "Z");

    let err = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap_err();
    assert!(err.is_domain_error());
    assert!(matches!(err, LinkRankError::UnknownLinkTarget { .. }));
}

fn arb_corpus() -> impl Strategy<Value = Corpus> {
    (1usize..10).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::btree_set(0..n, 0..n), n).prop_map(
            move |links| {
                let mut corpus = Corpus::new();
                for (i, targets) in links.into_iter().enumerate() {
                    let page = format!("{}.html", i);
                    corpus.insert_page(page.clone());
                    for t in targets.into_iter().filter(|&t| t != i) {
                        corpus.insert_link(page.clone(), format!("{}.html", t));
                    }
                }
                corpus
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_iteration_is_distribution(corpus in arb_corpus(), damping in 0.05f64..0.95) {
        let ranks = estimate_by_iteration(&corpus, damping, 0.001).unwrap();
        prop_assert_eq!(ranks.len(), corpus.len());
        prop_assert!((ranks.sum() - 1.0).abs() < 1e-3);
        prop_assert!(ranks.iter().all(|(_, r)| r >= 0.0));
    }

    #[test]
    fn prop_sampling_is_distribution(corpus in arb_corpus(), seed in any::<u64>()) {
        let ranks = StochasticEstimator::new()
            .with_samples(500)
            .with_seed(seed)
            .run(&corpus)
            .unwrap();
        prop_assert_eq!(ranks.len(), corpus.len());
        prop_assert!((ranks.sum() - 1.0).abs() < 1e-3);
        prop_assert!(ranks.iter().all(|(_, r)| r >= 0.0));
    }

    #[test]
    fn prop_iteration_is_deterministic(corpus in arb_corpus()) {
        let first = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
        let second = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_normalization_idempotent(corpus in arb_corpus()) {
        let once = corpus.normalized();
        prop_assert!(once.is_normalized());
        prop_assert_eq!(once.normalized(), once);
    }

    #[test]
    fn prop_dangling_equivalent_to_link_all(corpus in arb_corpus()) {
        let implicit = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
        let explicit = estimate_by_iteration(&corpus.normalized(), 0.85, 0.001).unwrap();
        prop_assert_eq!(implicit, explicit);
    }
}
