//! Fallback matcher
//!
//! Picks a canned reply for a free-text message by keyword scoring:
//! every entry scores `matched keywords * priority`, the strictly highest
//! score wins and earlier entries win ties. Keywords match as substrings of
//! the normalized message, not as whole words.

use std::sync::Arc;

use rand::Rng;

use super::normalize::normalize;
use super::table::{DEFAULT_RESPONSES, KNOWLEDGE_BASE};
use super::KnowledgeEntry;
use crate::error::{AppError, Result};

/// Source of the uniform draw used when no entry matches.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG, needs no synchronization between sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Number of `entry` keywords found in an already normalized message,
/// multiplied by the entry priority. `None` when nothing matched.
pub fn score_entry(normalized_message: &str, entry: &KnowledgeEntry) -> Option<u32> {
    let keywords: Vec<String> = entry.keywords.iter().map(|k| normalize(k)).collect();
    weighted_score(normalized_message, &keywords, entry.priority)
}

/// Shared scoring over keywords that are already normalized. Saturates
/// instead of overflowing on very large priorities.
fn weighted_score(normalized_message: &str, keywords: &[String], priority: u32) -> Option<u32> {
    let match_count = keywords
        .iter()
        .filter(|keyword| normalized_message.contains(keyword.as_str()))
        .count() as u32;

    (match_count > 0).then(|| match_count.saturating_mul(priority))
}

/// Deterministic half of the algorithm: the best scoring entry, if any.
pub fn best_match<'t>(message: &str, table: &'t [KnowledgeEntry]) -> Option<&'t KnowledgeEntry> {
    let normalized = normalize(message);
    pick_best(table.iter().map(|entry| (entry, score_entry(&normalized, entry))))
}

/// Selects a reply from `table`, or a random built-in default reply.
pub fn select_response(message: &str, table: &[KnowledgeEntry]) -> &'static str {
    match best_match(message, table) {
        Some(entry) => entry.response,
        None => DEFAULT_RESPONSES[ThreadRandom.pick(DEFAULT_RESPONSES.len())],
    }
}

/// Checks the invariants of a knowledge table and its default replies.
pub fn validate_table(table: &[KnowledgeEntry], defaults: &[&str]) -> Result<()> {
    if defaults.is_empty() {
        return Err(AppError::Config(
            "knowledge base needs at least one default response".to_string(),
        ));
    }

    for (index, entry) in table.iter().enumerate() {
        if entry.keywords.is_empty() {
            return Err(AppError::Config(format!(
                "knowledge entry #{} has no keywords",
                index
            )));
        }
        if entry.priority == 0 {
            return Err(AppError::Config(format!(
                "knowledge entry #{} has a zero priority",
                index
            )));
        }
    }

    Ok(())
}

fn pick_best<'t>(
    scored: impl Iterator<Item = (&'t KnowledgeEntry, Option<u32>)>,
) -> Option<&'t KnowledgeEntry> {
    let mut best: Option<(&KnowledgeEntry, u32)> = None;

    for (entry, score) in scored {
        let Some(score) = score else { continue };
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((entry, score));
        }
    }

    best.map(|(entry, _)| entry)
}

/// Matcher bound to a table, its defaults and a random source.
///
/// Keywords are normalized once at construction.
#[derive(Clone)]
pub struct FallbackMatcher {
    table: &'static [KnowledgeEntry],
    normalized_keywords: Arc<Vec<Vec<String>>>,
    defaults: &'static [&'static str],
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for FallbackMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackMatcher")
            .field("entries", &self.table.len())
            .field("defaults", &self.defaults.len())
            .field("random", &"Arc<dyn RandomSource>")
            .finish()
    }
}

impl Default for FallbackMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackMatcher {
    /// Validates and wraps a table.
    pub fn new(
        table: &'static [KnowledgeEntry],
        defaults: &'static [&'static str],
        random: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        validate_table(table, defaults)?;
        Ok(Self::new_unchecked(table, defaults, random))
    }

    /// The built-in Chronos knowledge base with a thread-local RNG.
    pub fn builtin() -> Self {
        Self::new_unchecked(KNOWLEDGE_BASE, DEFAULT_RESPONSES, Arc::new(ThreadRandom))
    }

    /// Same as [`FallbackMatcher::builtin`] with another random source.
    pub fn builtin_with_random(random: Arc<dyn RandomSource>) -> Self {
        Self::new_unchecked(KNOWLEDGE_BASE, DEFAULT_RESPONSES, random)
    }

    fn new_unchecked(
        table: &'static [KnowledgeEntry],
        defaults: &'static [&'static str],
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let normalized_keywords = table
            .iter()
            .map(|entry| entry.keywords.iter().map(|k| normalize(k)).collect())
            .collect();

        Self {
            table,
            normalized_keywords: Arc::new(normalized_keywords),
            defaults,
            random,
        }
    }

    pub fn entries(&self) -> &'static [KnowledgeEntry] {
        self.table
    }

    pub fn defaults(&self) -> &'static [&'static str] {
        self.defaults
    }

    /// Best scoring entry for `message`, without the random fallback.
    pub fn best_match(&self, message: &str) -> Option<&'static KnowledgeEntry> {
        let normalized = normalize(message);
        let table = self.table;

        pick_best(
            table
                .iter()
                .zip(self.normalized_keywords.iter())
                .map(|(entry, keywords)| {
                    (entry, weighted_score(&normalized, keywords, entry.priority))
                }),
        )
    }

    /// Reply for `message`: the winning entry, or a random default.
    pub fn select_response(&self, message: &str) -> &'static str {
        match self.best_match(message) {
            Some(entry) => entry.response,
            None => {
                let index = self.random.pick(self.defaults.len());
                // a draw outside 0..len falls back to the first default
                self.defaults
                    .get(index)
                    .or(self.defaults.first())
                    .copied()
                    .unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    static TIED: &[KnowledgeEntry] = &[
        KnowledgeEntry {
            keywords: &["alpha"],
            response: "first",
            priority: 4,
        },
        KnowledgeEntry {
            keywords: &["alpha", "beta"],
            response: "second",
            priority: 2,
        },
    ];

    #[test]
    fn test_score_entry_counts_each_keyword_once() {
        let entry = &KNOWLEDGE_BASE[0];
        let normalized = normalize("Quels vêtements pour Florence 1504 ?");
        // "vêtement", "vetement" and "1504"
        assert_eq!(score_entry(&normalized, entry), Some(30));
    }

    #[test]
    fn test_score_entry_without_match_is_none() {
        let entry = &KNOWLEDGE_BASE[3];
        assert_eq!(score_entry("rien du tout", entry), None);
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        // 1 * 4 == 2 * 2
        let winner = best_match("alpha beta", TIED).unwrap();
        assert_eq!(winner.response, "first");
    }

    static HEAVY: &[KnowledgeEntry] = &[
        KnowledgeEntry {
            keywords: &["a", "b"],
            response: "heavy",
            priority: u32::MAX,
        },
        KnowledgeEntry {
            keywords: &["a"],
            response: "light",
            priority: 2,
        },
    ];

    #[test]
    fn test_huge_priority_saturates() {
        assert_eq!(score_entry("a b", &HEAVY[0]), Some(u32::MAX));
        assert_eq!(best_match("a b", HEAVY).unwrap().response, "heavy");

        let matcher = FallbackMatcher::new(HEAVY, DEFAULT_RESPONSES, Arc::new(FixedIndex(0))).unwrap();
        assert_eq!(matcher.select_response("a b"), "heavy");
    }

    #[test]
    fn test_out_of_range_draw_uses_first_default() {
        let matcher = FallbackMatcher::builtin_with_random(Arc::new(FixedIndex(usize::MAX)));
        assert_eq!(matcher.select_response("xyzzyplugh123"), DEFAULT_RESPONSES[0]);
    }

    #[test]
    fn test_empty_table_never_matches() {
        assert!(best_match("bonjour", &[]).is_none());
    }

    #[test]
    fn test_matcher_uses_random_source_for_defaults() {
        let matcher = FallbackMatcher::builtin_with_random(Arc::new(FixedIndex(2)));
        assert_eq!(matcher.select_response("xyzzyplugh123"), DEFAULT_RESPONSES[2]);
    }

    #[test]
    fn test_matcher_agrees_with_free_function() {
        let matcher = FallbackMatcher::builtin();
        for message in [
            "Quels sont les protocoles de sécurité au Crétacé ?",
            "Que voir à Paris en 1889 ?",
            "combien ça coûte ?",
            "qui es-tu ?",
        ] {
            assert_eq!(
                matcher.best_match(message),
                best_match(message, KNOWLEDGE_BASE),
                "{}",
                message
            );
        }
    }

    #[test]
    fn test_builtin_table_is_valid() {
        assert!(validate_table(KNOWLEDGE_BASE, DEFAULT_RESPONSES).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_tables() {
        static NO_KEYWORDS: &[KnowledgeEntry] = &[KnowledgeEntry {
            keywords: &[],
            response: "x",
            priority: 1,
        }];
        static ZERO_PRIORITY: &[KnowledgeEntry] = &[KnowledgeEntry {
            keywords: &["x"],
            response: "x",
            priority: 0,
        }];

        let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);
        assert!(FallbackMatcher::new(NO_KEYWORDS, DEFAULT_RESPONSES, random.clone()).is_err());
        assert!(FallbackMatcher::new(ZERO_PRIORITY, DEFAULT_RESPONSES, random.clone()).is_err());
        assert!(FallbackMatcher::new(TIED, &[], random).is_err());
    }
}
