//! Word list state container and mutation operations.
//!
//! # Responsibility
//! - Own the in-memory word list as the single source of truth for the UI.
//! - Apply add/remove/toggle/set-notes transitions with write-through
//!   persistence on every mutation.
//!
//! # Invariants
//! - Ids stay unique across the list; new records are prepended.
//! - A rejected `add` performs no mutation and no store write.
//! - Unknown-id mutations are silent no-ops but still write the unchanged
//!   list through (idempotent in effect).
//! - On a store write failure the in-memory state remains authoritative and
//!   the error is surfaced to the caller as a warning condition.

use crate::model::word::{next_word_id, Word};
use crate::repo::word_list_repo::{hydrate, persist, RepoResult};
use crate::search::filter::{tally, WordCounts};
use crate::store::KeyValueStore;
use log::{debug, info, warn};

/// State container for the vocabulary list.
///
/// Hydrates once at construction; every later read is served from memory
/// and every mutation is written through to the store before returning.
pub struct WordListService<S: KeyValueStore> {
    store: S,
    words: Vec<Word>,
}

impl<S: KeyValueStore> WordListService<S> {
    /// Hydrates the list from the store (or the seed dataset) exactly once.
    pub fn load(store: S) -> RepoResult<Self> {
        let words = hydrate(&store)?;
        Ok(Self { store, words })
    }

    /// Current in-memory list, most-recent-first.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Aggregate tallies over the full list.
    pub fn counts(&self) -> WordCounts {
        tally(&self.words)
    }

    /// Creates a word record and prepends it to the list.
    ///
    /// # Contract
    /// - Terms are trimmed; an empty term rejects the request without any
    ///   mutation or store write.
    /// - The new id is assigned max-plus-one over numeric ids in the list.
    /// - Returns the created record.
    pub fn add(&mut self, source_term: &str, translation: &str) -> RepoResult<Word> {
        let word = Word::new(next_word_id(&self.words), source_term, translation)?;
        self.words.insert(0, word.clone());
        self.write_through("word_add")?;
        info!(
            "event=word_add module=word_list status=ok id={} count={}",
            word.id,
            self.words.len()
        );
        Ok(word)
    }

    /// Removes the record with `id`; removal is idempotent in effect.
    pub fn remove(&mut self, id: &str) -> RepoResult<()> {
        let before = self.words.len();
        self.words.retain(|word| word.id != id);
        if self.words.len() == before {
            debug!("event=word_remove module=word_list status=noop id={id}");
        } else {
            info!(
                "event=word_remove module=word_list status=ok id={id} count={}",
                self.words.len()
            );
        }
        self.write_through("word_remove")
    }

    /// Flips the learned flag on the matching record; no-op on unknown id.
    pub fn toggle_learned(&mut self, id: &str) -> RepoResult<()> {
        match self.words.iter_mut().find(|word| word.id == id) {
            Some(word) => {
                word.learned = !word.learned;
                info!(
                    "event=word_toggle module=word_list status=ok id={id} learned={}",
                    word.learned
                );
            }
            None => debug!("event=word_toggle module=word_list status=noop id={id}"),
        }
        self.write_through("word_toggle")
    }

    /// Overwrites notes on the matching record; no-op on unknown id.
    pub fn set_notes(&mut self, id: &str, notes: &str) -> RepoResult<()> {
        match self.words.iter_mut().find(|word| word.id == id) {
            Some(word) => {
                word.notes = notes.to_string();
                info!("event=word_notes module=word_list status=ok id={id}");
            }
            None => debug!("event=word_notes module=word_list status=noop id={id}"),
        }
        self.write_through("word_notes")
    }

    fn write_through(&self, operation: &str) -> RepoResult<()> {
        persist(&self.store, &self.words).map_err(|err| {
            warn!(
                "event={operation} module=word_list status=write_failed error={err}"
            );
            err
        })
    }
}
