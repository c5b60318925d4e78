//! Bundled starter dictionary.
//!
//! # Responsibility
//! - Provide the read-only seed word list used on first run.
//!
//! # Invariants
//! - The bundled JSON uses the same wire format as the persisted blob.
//! - Seed ids are decimal strings compatible with max-plus-one assignment.

use crate::model::word::Word;

const SEED_WORDS_JSON: &str = include_str!("seed_words.json");

/// Parses the bundled seed dataset.
///
/// The asset ships inside the binary; a parse failure is a build defect,
/// not a runtime condition, so this panics instead of returning a result.
pub fn seed_words() -> Vec<Word> {
    serde_json::from_str(SEED_WORDS_JSON).expect("bundled seed dataset is valid word-list JSON")
}
