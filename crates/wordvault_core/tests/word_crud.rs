use std::collections::HashSet;
use wordvault_core::store::StoreResult;
use wordvault_core::{
    open_store_in_memory, KeyValueStore, SqliteKeyValueStore, StoreError, Word, WordListError,
    WordListService, WORDS_STORE_KEY,
};

/// Store double that hydrates fine but refuses every write.
struct WriteFailingStore {
    blob: String,
}

impl KeyValueStore for WriteFailingStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(Some(self.blob.clone()))
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }
}

fn service_with(words: &[(&str, &str, &str, bool)]) -> WordListService<SqliteKeyValueStore> {
    let store = open_store_in_memory().unwrap();
    let list: Vec<Word> = words
        .iter()
        .map(|(id, source, translation, learned)| {
            let mut word = Word::new(id.to_string(), source, translation).unwrap();
            word.learned = *learned;
            word
        })
        .collect();
    store
        .set(WORDS_STORE_KEY, &serde_json::to_string(&list).unwrap())
        .unwrap();
    WordListService::load(store).unwrap()
}

#[test]
fn add_prepends_and_assigns_fresh_unique_id() {
    let mut service = service_with(&[("1", "cat", "x", false)]);

    let added = service.add("dog", "y").unwrap();
    assert_eq!(added.id, "2");

    let words = service.words();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].id, "2");
    assert_eq!(words[0].source_term, "dog");
    assert_eq!(words[1].id, "1");

    let ids: HashSet<&str> = words.iter().map(|word| word.id.as_str()).collect();
    assert_eq!(ids.len(), words.len());
}

#[test]
fn add_rejects_blank_fields_without_mutating() {
    let mut service = service_with(&[("1", "cat", "x", false)]);
    let before = service.words().to_vec();

    let err = service.add("", "x").unwrap_err();
    assert!(matches!(err, WordListError::Validation(_)));

    let err = service.add("x", "  ").unwrap_err();
    assert!(matches!(err, WordListError::Validation(_)));

    assert_eq!(service.words(), before.as_slice());
}

#[test]
fn remove_deletes_matching_record_and_is_idempotent() {
    let mut service = service_with(&[("1", "cat", "x", false), ("2", "dog", "y", false)]);

    service.remove("1").unwrap();
    assert_eq!(service.words().len(), 1);
    assert_eq!(service.words()[0].id, "2");

    service.remove("1").unwrap();
    assert_eq!(service.words().len(), 1);
}

#[test]
fn toggle_learned_twice_restores_original_flag() {
    let mut service = service_with(&[("1", "cat", "x", false)]);

    service.toggle_learned("1").unwrap();
    assert!(service.words()[0].learned);

    service.toggle_learned("1").unwrap();
    assert!(!service.words()[0].learned);
}

#[test]
fn unknown_id_operations_leave_the_list_unchanged() {
    let mut service = service_with(&[("1", "cat", "x", true)]);
    let before = service.words().to_vec();

    service.remove("99").unwrap();
    service.toggle_learned("99").unwrap();
    service.set_notes("99", "nope").unwrap();

    assert_eq!(service.words(), before.as_slice());
}

#[test]
fn set_notes_overwrites_only_the_matching_record() {
    let mut service = service_with(&[("1", "cat", "x", false), ("2", "dog", "y", false)]);

    service.set_notes("2", "a loyal animal").unwrap();

    assert_eq!(service.words()[1].notes, "a loyal animal");
    assert!(service.words()[0].notes.is_empty());
}

#[test]
fn counts_tally_the_full_list() {
    let mut service = service_with(&[
        ("1", "cat", "x", true),
        ("2", "dog", "y", false),
        ("3", "fish", "z", false),
    ]);

    let counts = service.counts();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.learned, 1);
    assert_eq!(counts.not_learned, 2);

    service.toggle_learned("2").unwrap();
    assert_eq!(service.counts().learned, 2);
}

#[test]
fn write_failure_surfaces_error_but_memory_stays_authoritative() {
    let list = vec![Word::new("1".to_string(), "cat", "گربه").unwrap()];
    let store = WriteFailingStore {
        blob: serde_json::to_string(&list).unwrap(),
    };
    let mut service = WordListService::load(store).unwrap();

    let err = service.add("dog", "سگ").unwrap_err();
    assert!(matches!(err, WordListError::Store(_)));

    // The mutation stuck in memory despite the failed write-through.
    assert_eq!(service.words().len(), 2);
    assert_eq!(service.words()[0].source_term, "dog");

    let err = service.toggle_learned("1").unwrap_err();
    assert!(matches!(err, WordListError::Store(_)));
    assert!(service.words()[1].learned);
}

#[test]
fn add_over_empty_list_starts_at_the_floor_id() {
    let store = open_store_in_memory().unwrap();
    store.set(WORDS_STORE_KEY, "[]").unwrap();
    let mut service = WordListService::load(store).unwrap();

    let added = service.add("cat", "گربه").unwrap();
    assert_eq!(added.id, "1");
}
