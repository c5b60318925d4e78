//! Word list blob persistence.
//!
//! # Responsibility
//! - Hydrate the word list from the store, falling back to the seed dataset.
//! - Write the full list back through the store on every mutation.
//!
//! # Invariants
//! - Hydration reads the store at most once per app lifetime; afterwards the
//!   in-memory list is authoritative and the store is write-through only.
//! - An unparsable persisted blob is never fatal: it is replaced by the seed
//!   dataset, which is persisted immediately.

use crate::model::word::{Word, WordValidationError};
use crate::seed::seed_words;
use crate::store::{KeyValueStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed store key holding the entire serialized word list.
pub const WORDS_STORE_KEY: &str = "words";

pub type RepoResult<T> = Result<T, WordListError>;

/// Error for word list state and persistence operations.
#[derive(Debug)]
pub enum WordListError {
    Validation(WordValidationError),
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for WordListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize word list: {err}"),
        }
    }
}

impl Error for WordListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<WordValidationError> for WordListError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for WordListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Reads the word list blob, establishing the seed dataset when needed.
///
/// # Contract
/// - Absent key: returns the seed list and persists it immediately.
/// - Present but unparsable blob: logs a warning, then behaves as absent.
/// - Store read/write failures propagate; they are not masked by the seed.
pub fn hydrate<S: KeyValueStore>(store: &S) -> RepoResult<Vec<Word>> {
    match store.get(WORDS_STORE_KEY)? {
        Some(blob) => match serde_json::from_str::<Vec<Word>>(&blob) {
            Ok(words) => {
                info!(
                    "event=hydrate module=word_list status=ok count={}",
                    words.len()
                );
                Ok(words)
            }
            Err(err) => {
                warn!(
                    "event=hydrate module=word_list status=fallback_seed error_code=blob_unparsable error={err}"
                );
                establish_seed(store)
            }
        },
        None => {
            info!("event=hydrate module=word_list status=seeding");
            establish_seed(store)
        }
    }
}

/// Writes the full word list under the fixed store key.
pub fn persist<S: KeyValueStore>(store: &S, words: &[Word]) -> RepoResult<()> {
    let blob = serde_json::to_string(words)?;
    store.set(WORDS_STORE_KEY, &blob)?;
    Ok(())
}

fn establish_seed<S: KeyValueStore>(store: &S) -> RepoResult<Vec<Word>> {
    let words = seed_words();
    persist(store, &words)?;
    info!(
        "event=hydrate module=word_list status=seeded count={}",
        words.len()
    );
    Ok(words)
}
