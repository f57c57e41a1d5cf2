//! Knowledge base module
//!
//! Local answers used when no language-model provider can reply: a static
//! keyword table, text normalization and the scoring matcher.

pub mod matcher;
pub mod normalize;
pub mod table;

use serde::Serialize;

pub use matcher::{
    FallbackMatcher, RandomSource, ThreadRandom, best_match, score_entry, select_response,
    validate_table,
};
pub use normalize::normalize;
pub use table::{DEFAULT_RESPONSES, KNOWLEDGE_BASE};

/// One canned answer and the keywords that select it.
///
/// Keywords may repeat across entries; scores are additive per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    /// Lowercase keywords, accented and unaccented spellings allowed
    pub keywords: &'static [&'static str],
    /// Reply text, in the Chronos persona
    pub response: &'static str,
    /// Weight multiplied by the number of matched keywords
    pub priority: u32,
}
