//! FFI use-case API for the mobile-UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the UI-transient state (service handle, navigation cursor) that
//!   is never persisted.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - This layer never filters or persists on its own; it delegates to core.
//! - One user intent runs at a time: the state mutex serializes intents and
//!   each mutation completes its write-through before the lock is released.

use log::info;
use std::sync::{Mutex, OnceLock};
use wordvault_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_store,
    ping as ping_inner, visible, FilterMode, NavigationCursor, SqliteKeyValueStore, Word,
    WordListService,
};

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

struct AppState {
    service: WordListService<SqliteKeyValueStore>,
    cursor: NavigationCursor,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Word record DTO mirrored to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordItem {
    pub id: String,
    pub source_term: String,
    pub translation: String,
    pub learned: bool,
    pub notes: String,
}

impl WordItem {
    fn from_word(word: &Word) -> Self {
        Self {
            id: word.id.clone(),
            source_term: word.source_term.clone(),
            translation: word.translation.clone(),
            learned: word.learned,
            notes: word.notes.clone(),
        }
    }
}

/// List response envelope: visible rows plus full-list tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListResponse {
    /// Rows matching the query and filter, list order preserved.
    pub items: Vec<WordItem>,
    /// Tally over the FULL list, not the visible subset.
    pub total: usize,
    pub learned: usize,
    pub not_learned: usize,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutation intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional affected word ID.
    pub word_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl WordActionResponse {
    fn success(message: impl Into<String>, word_id: Option<String>) -> Self {
        Self {
            ok: true,
            word_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            word_id: None,
            message: message.into(),
        }
    }
}

/// Detail view response carrying the currently open record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDetailResponse {
    pub ok: bool,
    /// The open record, so the UI can re-render notes buffer and toggles.
    pub word: Option<WordItem>,
    pub message: String,
}

impl WordDetailResponse {
    fn showing(word: &Word) -> Self {
        Self {
            ok: true,
            word: Some(WordItem::from_word(word)),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            word: None,
            message: message.into(),
        }
    }
}

/// Opens the word store and hydrates the list, once per process.
///
/// # FFI contract
/// - Sync call; performs store bootstrap and first-run seeding.
/// - Repeat calls are accepted and leave the already-open store untouched.
/// - Never panics; failures come back in the response message.
#[flutter_rust_bridge::frb(sync)]
pub fn open_word_store(db_path: String) -> WordActionResponse {
    if APP_STATE.get().is_some() {
        return WordActionResponse::success("word store already open", None);
    }

    let store = match open_store(&db_path) {
        Ok(store) => store,
        Err(err) => return WordActionResponse::failure(format!("failed to open store: {err}")),
    };

    let service = match WordListService::load(store) {
        Ok(service) => service,
        Err(err) => {
            return WordActionResponse::failure(format!("failed to hydrate word list: {err}"))
        }
    };

    let state = AppState {
        service,
        cursor: NavigationCursor::new(),
    };

    match APP_STATE.set(Mutex::new(state)) {
        Ok(()) => {
            info!("event=store_ready module=ffi status=ok");
            WordActionResponse::success("word store open", None)
        }
        // A concurrent open won the race; its state is just as valid.
        Err(_) => WordActionResponse::success("word store already open", None),
    }
}

/// Lists visible words for the given query and filter, with live counts.
///
/// Input semantics:
/// - `query`: free search text; empty matches everything.
/// - `filter`: one of `all|learned|notLearned`.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unsupported filter names return an empty item list with a message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_words(query: String, filter: String) -> WordListResponse {
    with_state(
        |state| {
            let counts = state.service.counts();
            let Some(mode) = FilterMode::parse(&filter) else {
                return WordListResponse {
                    items: Vec::new(),
                    total: counts.total,
                    learned: counts.learned,
                    not_learned: counts.not_learned,
                    message: format!(
                        "unsupported filter `{filter}`; expected all|learned|notLearned"
                    ),
                };
            };

            let items = visible(state.service.words(), &query, mode)
                .into_iter()
                .map(WordItem::from_word)
                .collect();
            WordListResponse {
                items,
                total: counts.total,
                learned: counts.learned,
                not_learned: counts.not_learned,
                message: String::new(),
            }
        },
        |message| WordListResponse {
            items: Vec::new(),
            total: 0,
            learned: 0,
            not_learned: 0,
            message,
        },
    )
}

/// Adds a word from the add form.
///
/// # FFI contract
/// - Sync call; performs the write-through before returning.
/// - Validation failures return `ok = false` with the reason, so the UI can
///   keep the form open instead of silently aborting.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_word(source_term: String, translation: String) -> WordActionResponse {
    with_state(
        |state| match state.service.add(&source_term, &translation) {
            Ok(word) => WordActionResponse::success("word added", Some(word.id)),
            Err(err) => WordActionResponse::failure(err.to_string()),
        },
        |message| WordActionResponse::failure(message),
    )
}

/// Deletes a word from the list view. Idempotent in effect.
///
/// # FFI contract
/// - Sync call; performs the write-through before returning.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_word(id: String) -> WordActionResponse {
    with_state(
        |state| match state.service.remove(&id) {
            Ok(()) => WordActionResponse::success("word deleted", Some(id.clone())),
            Err(err) => WordActionResponse::failure(err.to_string()),
        },
        |message| WordActionResponse::failure(message),
    )
}

/// Flips the learned flag on a word. No-op on unknown ids.
///
/// # FFI contract
/// - Sync call; performs the write-through before returning.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_learned(id: String) -> WordActionResponse {
    with_state(
        |state| match state.service.toggle_learned(&id) {
            Ok(()) => WordActionResponse::success("learned flag toggled", Some(id.clone())),
            Err(err) => WordActionResponse::failure(err.to_string()),
        },
        |message| WordActionResponse::failure(message),
    )
}

/// Saves the notes buffer of the detail editor onto a word.
///
/// # FFI contract
/// - Sync call; performs the write-through before returning.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn save_notes(id: String, notes: String) -> WordActionResponse {
    with_state(
        |state| match state.service.set_notes(&id, &notes) {
            Ok(()) => WordActionResponse::success("notes saved", Some(id.clone())),
            Err(err) => WordActionResponse::failure(err.to_string()),
        },
        |message| WordActionResponse::failure(message),
    )
}

/// Opens the detail view on a word, anchoring the navigation cursor.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unknown ids return `ok = false` and leave the cursor unset.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn open_word(id: String) -> WordDetailResponse {
    with_state(
        |state| {
            if !state.cursor.open(state.service.words(), &id) {
                return WordDetailResponse::failure(format!("word not found: {id}"));
            }
            match state.cursor.current(state.service.words()) {
                Some(word) => WordDetailResponse::showing(word),
                None => WordDetailResponse::failure("word list is empty"),
            }
        },
        |message| WordDetailResponse::failure(message),
    )
}

/// Advances the detail view to the next word in the FULL list, wrapping.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Requires an open detail view; otherwise returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn next_word() -> WordDetailResponse {
    with_state(
        |state| {
            state.cursor.next(state.service.words().len());
            match state.cursor.current(state.service.words()) {
                Some(word) => WordDetailResponse::showing(word),
                None => WordDetailResponse::failure("no word open"),
            }
        },
        |message| WordDetailResponse::failure(message),
    )
}

/// Moves the detail view to the previous word in the FULL list, wrapping.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Requires an open detail view; otherwise returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn previous_word() -> WordDetailResponse {
    with_state(
        |state| {
            state.cursor.previous(state.service.words().len());
            match state.cursor.current(state.service.words()) {
                Some(word) => WordDetailResponse::showing(word),
                None => WordDetailResponse::failure("no word open"),
            }
        },
        |message| WordDetailResponse::failure(message),
    )
}

/// Closes the detail view, clearing the navigation cursor.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn close_word() -> WordActionResponse {
    with_state(
        |state| {
            state.cursor.close();
            WordActionResponse::success("detail view closed", None)
        },
        |message| WordActionResponse::failure(message),
    )
}

fn with_state<T>(
    on_ready: impl FnOnce(&mut AppState) -> T,
    on_missing: impl FnOnce(String) -> T,
) -> T {
    match APP_STATE.get() {
        Some(mutex) => {
            let mut guard = match mutex.lock() {
                Ok(guard) => guard,
                // Mutations finish their write-through before unlocking, so
                // a poisoned state is still internally consistent.
                Err(poisoned) => poisoned.into_inner(),
            };
            on_ready(&mut guard)
        }
        None => on_missing("word store is not open; call open_word_store first".to_string()),
    }
}
