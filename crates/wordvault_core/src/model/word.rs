//! Word record model.
//!
//! # Responsibility
//! - Define the canonical vocabulary entry and its wire shape.
//! - Validate required fields at creation time.
//! - Provide the max-plus-one id assignment used by the list state.
//!
//! # Invariants
//! - `id` is stable and unique within one word list.
//! - `source_term` and `translation` are non-empty after trimming.
//! - Newly created records start with `learned = false` and empty `notes`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a word record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are decimal strings assigned by [`next_word_id`], but legacy
/// lists may carry other shapes (e.g. timestamp-derived ids); the alias
/// deliberately stays a plain string.
pub type WordId = String;

/// Lowest id handed out when the list holds no numeric ids at all.
const ID_FLOOR: u64 = 1;

/// Validation failure for word creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordValidationError {
    /// Source term is empty after trimming.
    EmptySourceTerm,
    /// Translation is empty after trimming.
    EmptyTranslation,
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySourceTerm => write!(f, "source term must not be empty"),
            Self::EmptyTranslation => write!(f, "translation must not be empty"),
        }
    }
}

impl Error for WordValidationError {}

/// Canonical vocabulary entry.
///
/// The serde field names are the persisted wire format; renaming a field
/// here changes the on-disk blob shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// List-unique stable id.
    pub id: WordId,
    /// The term being learned.
    pub source_term: String,
    /// Translation into the user's language; may be non-Latin script.
    pub translation: String,
    /// Whether the user considers this entry mastered.
    #[serde(default)]
    pub learned: bool,
    /// Free-form user notes; absent on the wire decodes as empty.
    #[serde(default)]
    pub notes: String,
}

impl Word {
    /// Creates a word record from raw form input.
    ///
    /// # Contract
    /// - Both terms are trimmed before validation and storage.
    /// - Returns a validation error when either term is empty after trimming.
    /// - `learned` starts `false`, `notes` starts empty.
    pub fn new(
        id: WordId,
        source_term: &str,
        translation: &str,
    ) -> Result<Self, WordValidationError> {
        let source_term = source_term.trim();
        if source_term.is_empty() {
            return Err(WordValidationError::EmptySourceTerm);
        }

        let translation = translation.trim();
        if translation.is_empty() {
            return Err(WordValidationError::EmptyTranslation);
        }

        Ok(Self {
            id,
            source_term: source_term.to_string(),
            translation: translation.to_string(),
            learned: false,
            notes: String::new(),
        })
    }
}

/// Returns the next free id for a list using max-plus-one assignment.
///
/// Non-numeric ids in the list (legacy timestamp-shaped values) are ignored
/// when computing the maximum; an empty or fully non-numeric list yields
/// the fixed floor id `"1"`. Ids come from hydrated blobs and are arbitrary
/// strings, so the increment must not trust the maximum to be incrementable:
/// a saturated numeric id falls back to the lowest unused decimal id.
pub fn next_word_id(words: &[Word]) -> WordId {
    let max = words
        .iter()
        .filter_map(|word| word.id.parse::<u64>().ok())
        .max();

    match max {
        None => ID_FLOOR.to_string(),
        Some(max) => match max.checked_add(1) {
            Some(next) => next.to_string(),
            None => lowest_unused_id(words),
        },
    }
}

/// Scans upward from the floor for a decimal id not present in the list.
///
/// Only reachable when a hydrated blob already carries the largest
/// representable numeric id; the list is finite, so a free id exists.
fn lowest_unused_id(words: &[Word]) -> WordId {
    let mut candidate = ID_FLOOR;
    loop {
        let id = candidate.to_string();
        if words.iter().all(|word| word.id != id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{next_word_id, Word, WordValidationError};

    #[test]
    fn new_trims_input_and_sets_defaults() {
        let word = Word::new("7".to_string(), "  book ", " کتاب ").unwrap();
        assert_eq!(word.id, "7");
        assert_eq!(word.source_term, "book");
        assert_eq!(word.translation, "کتاب");
        assert!(!word.learned);
        assert!(word.notes.is_empty());
    }

    #[test]
    fn new_rejects_blank_terms() {
        let err = Word::new("1".to_string(), "   ", "x").unwrap_err();
        assert_eq!(err, WordValidationError::EmptySourceTerm);

        let err = Word::new("1".to_string(), "x", "").unwrap_err();
        assert_eq!(err, WordValidationError::EmptyTranslation);
    }

    #[test]
    fn next_word_id_uses_max_plus_one() {
        let words = vec![
            Word::new("3".to_string(), "a", "b").unwrap(),
            Word::new("11".to_string(), "c", "d").unwrap(),
        ];
        assert_eq!(next_word_id(&words), "12");
    }

    #[test]
    fn next_word_id_skips_non_numeric_ids_and_has_a_floor() {
        assert_eq!(next_word_id(&[]), "1");

        let words = vec![Word::new("1699999999999x".to_string(), "a", "b").unwrap()];
        assert_eq!(next_word_id(&words), "1");

        let mixed = vec![
            Word::new("legacy-id".to_string(), "a", "b").unwrap(),
            Word::new("4".to_string(), "c", "d").unwrap(),
        ];
        assert_eq!(next_word_id(&mixed), "5");
    }

    #[test]
    fn next_word_id_does_not_overflow_on_saturated_ids() {
        let ceiling = u64::MAX.to_string();
        let words = vec![Word::new(ceiling.clone(), "a", "b").unwrap()];
        assert_eq!(next_word_id(&words), "1");

        let crowded = vec![
            Word::new(ceiling, "a", "b").unwrap(),
            Word::new("1".to_string(), "c", "d").unwrap(),
            Word::new("2".to_string(), "e", "f").unwrap(),
        ];
        assert_eq!(next_word_id(&crowded), "3");
    }
}
