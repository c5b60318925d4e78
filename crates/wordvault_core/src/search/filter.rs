//! Visible-subset derivation for the list view.
//!
//! # Responsibility
//! - Match records against the search query and tri-state learned filter.
//! - Tally aggregate counts over the full list.
//!
//! # Invariants
//! - Output preserves underlying list order; this is a filter, not a sort.
//! - An empty query matches every record.

use crate::model::word::Word;

/// Tri-state narrowing by the learned flag.
///
/// UI-facing names (`all`, `learned`, `notLearned`) enter exclusively
/// through [`FilterMode::parse`]; the mode itself never hits the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Learned,
    NotLearned,
}

impl FilterMode {
    /// Parses the UI-facing mode name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "learned" => Some(Self::Learned),
            "notLearned" => Some(Self::NotLearned),
            _ => None,
        }
    }
}

/// Aggregate tallies over the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordCounts {
    pub total: usize,
    pub learned: usize,
    pub not_learned: usize,
}

/// Derives the visible subsequence for `query` and `mode`.
///
/// A record matches when its lowercased source term contains the lowercased
/// query, or its translation contains the query verbatim (translations may
/// be non-Latin script, so no case folding there), or its id contains the
/// query as a literal substring.
pub fn visible<'a>(words: &'a [Word], query: &str, mode: FilterMode) -> Vec<&'a Word> {
    let query_lower = query.to_lowercase();
    words
        .iter()
        .filter(|word| match mode {
            FilterMode::All => true,
            FilterMode::Learned => word.learned,
            FilterMode::NotLearned => !word.learned,
        })
        .filter(|word| {
            word.source_term.to_lowercase().contains(&query_lower)
                || word.translation.contains(query)
                || word.id.contains(query)
        })
        .collect()
}

/// Tallies the full list for the filter selector labels.
pub fn tally(words: &[Word]) -> WordCounts {
    let learned = words.iter().filter(|word| word.learned).count();
    WordCounts {
        total: words.len(),
        learned,
        not_learned: words.len() - learned,
    }
}
