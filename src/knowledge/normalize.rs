//! Text normalization for keyword matching.

use unicode_normalization::UnicodeNormalization;

/// Lowercases `text`, decomposes it (NFD) and drops combining diacritical
/// marks (U+0300..=U+036F), so "Crétacé" becomes "cretace".
///
/// Punctuation and whitespace are left untouched.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
