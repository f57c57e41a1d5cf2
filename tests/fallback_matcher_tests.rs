// Knowledge-base matcher behaviour through the public crate API

use chronos::knowledge::{
    DEFAULT_RESPONSES, FallbackMatcher, KNOWLEDGE_BASE, KnowledgeEntry, RandomSource, best_match,
    normalize, score_entry, select_response, validate_table,
};
use rstest::rstest;
use std::sync::Arc;

struct FixedIndex(usize);

impl RandomSource for FixedIndex {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

static WEIGHTED: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keywords: &["alpha"],
        response: "A",
        priority: 10,
    },
    KnowledgeEntry {
        keywords: &["beta"],
        response: "B",
        priority: 2,
    },
    KnowledgeEntry {
        keywords: &["un", "deux", "trois"],
        response: "C",
        priority: 2,
    },
    KnowledgeEntry {
        keywords: &["quatre"],
        response: "D",
        priority: 10,
    },
    KnowledgeEntry {
        keywords: &["gauche"],
        response: "E",
        priority: 3,
    },
    KnowledgeEntry {
        keywords: &["droite"],
        response: "F",
        priority: 3,
    },
];

static DEFAULTS: &[&str] = &["default-0", "default-1"];

fn entry_index(message: &str) -> Option<usize> {
    best_match(message, KNOWLEDGE_BASE)
        .map(|entry| KNOWLEDGE_BASE.iter().position(|e| std::ptr::eq(e, entry)).unwrap())
}

#[rstest]
#[case::clothing("Quels vêtements pour Florence 1504 ?", 0)]
#[case::florence("Parlez-moi de la Renaissance", 1)]
#[case::cretace_accented("Le Crétacé est-il sûr ?", 2)]
#[case::dinosaurs("Des dinosaures, un T-Rex ?", 3)]
#[case::paris("La tour Eiffel en 1889", 4)]
#[case::price("Combien ça coûte ?", 5)]
#[case::booking("Je voudrais réserver", 6)]
#[case::paradox("Puis-je changer le passé ?", 7)]
#[case::machine("Comment fonctionne la machine ?", 8)]
#[case::greeting("Bonjour", 9)]
#[case::thanks("Merci", 10)]
#[case::identity("Qui es-tu ?", 11)]
fn test_builtin_questions_resolve_to_expected_entry(#[case] message: &str, #[case] expected: usize) {
    assert_eq!(entry_index(message), Some(expected));
}

#[rstest]
#[case("Florence")]
#[case("FLORENCE")]
#[case("florence")]
fn test_case_invariance(#[case] message: &str) {
    assert_eq!(
        select_response(message, KNOWLEDGE_BASE),
        KNOWLEDGE_BASE[1].response
    );
}

#[test]
fn test_accent_invariance() {
    assert_eq!(entry_index("Crétacé"), entry_index("cretace"));
    assert_eq!(entry_index("CRÉTACÉ"), Some(2));
    assert_eq!(normalize("Médicis"), "medicis");
}

#[test]
fn test_unique_match_returns_response_verbatim() {
    assert_eq!(select_response("alpha", WEIGHTED), "A");
    assert_eq!(select_response("quatre", WEIGHTED), "D");
}

#[test]
fn test_priority_dominance() {
    assert_eq!(select_response("alpha et beta", WEIGHTED), "A");
    assert_eq!(score_entry("alpha et beta", &WEIGHTED[0]), Some(10));
    assert_eq!(score_entry("alpha et beta", &WEIGHTED[1]), Some(2));
}

#[test]
fn test_volume_dominance() {
    assert_eq!(score_entry("un deux trois", &WEIGHTED[2]), Some(6));
    assert_eq!(score_entry("un deux trois", &WEIGHTED[3]), None);
    assert_eq!(select_response("un deux trois", WEIGHTED), "C");
}

#[test]
fn test_tie_goes_to_earlier_entry_every_time() {
    for _ in 0..50 {
        assert_eq!(select_response("droite ou gauche", WEIGHTED), "E");
    }
}

#[test]
fn test_winner_has_maximal_score() {
    let message = normalize("Combien coûte une tenue pour Paris 1889 et le Crétacé ?");
    let winner = best_match(&message, KNOWLEDGE_BASE).unwrap();
    let best = KNOWLEDGE_BASE
        .iter()
        .filter_map(|e| score_entry(&message, e))
        .max()
        .unwrap();
    assert_eq!(score_entry(&message, winner), Some(best));
}

#[rstest]
#[case("xyzzyplugh123")]
#[case("")]
#[case("   ")]
#[case("🦖🦖🦖")]
fn test_no_match_returns_default(#[case] message: &str) {
    assert!(best_match(message, KNOWLEDGE_BASE).is_none());
    assert!(DEFAULT_RESPONSES.contains(&select_response(message, KNOWLEDGE_BASE)));
}

#[test]
fn test_injected_random_source_picks_default() {
    let matcher = FallbackMatcher::new(WEIGHTED, DEFAULTS, Arc::new(FixedIndex(1))).unwrap();
    assert_eq!(matcher.select_response("rien ici"), "default-1");

    let out_of_range = FallbackMatcher::new(WEIGHTED, DEFAULTS, Arc::new(FixedIndex(99))).unwrap();
    assert_eq!(out_of_range.select_response("rien ici"), "default-0");
}

#[test]
fn test_matcher_agrees_with_free_functions() {
    let matcher = FallbackMatcher::builtin();
    for message in [
        "Quels vêtements pour Florence 1504 ?",
        "Réservation pour le Crétacé",
        "Parlez-moi de Léonard de Vinci",
    ] {
        assert_eq!(
            matcher.select_response(message),
            select_response(message, KNOWLEDGE_BASE)
        );
    }
}

#[test]
fn test_builtin_table_is_valid() {
    assert!(validate_table(KNOWLEDGE_BASE, DEFAULT_RESPONSES).is_ok());
    assert!(validate_table(WEIGHTED, &[]).is_err());
    assert!(FallbackMatcher::new(WEIGHTED, &[], Arc::new(FixedIndex(0))).is_err());
}
