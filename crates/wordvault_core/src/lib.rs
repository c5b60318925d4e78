//! Core domain logic for WordVault.
//! This crate is the single source of truth for word-list invariants.

pub mod cursor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;

pub use cursor::NavigationCursor;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::word::{next_word_id, Word, WordId, WordValidationError};
pub use repo::word_list_repo::{hydrate, persist, RepoResult, WordListError, WORDS_STORE_KEY};
pub use search::filter::{tally, visible, FilterMode, WordCounts};
pub use seed::seed_words;
pub use service::word_list_service::WordListService;
pub use store::{
    open_store, open_store_in_memory, KeyValueStore, SqliteKeyValueStore, StoreError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
