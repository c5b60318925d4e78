use wordvault_core::{Word, WordValidationError};

#[test]
fn word_new_sets_defaults() {
    let word = Word::new("1".to_string(), "cat", "گربه").unwrap();

    assert_eq!(word.id, "1");
    assert_eq!(word.source_term, "cat");
    assert_eq!(word.translation, "گربه");
    assert!(!word.learned);
    assert!(word.notes.is_empty());
}

#[test]
fn word_serialization_uses_expected_wire_fields() {
    let mut word = Word::new("7".to_string(), "night", "شب").unwrap();
    word.learned = true;
    word.notes = "plural: شب‌ها".to_string();

    let json = serde_json::to_value(&word).unwrap();
    assert_eq!(json["id"], "7");
    assert_eq!(json["source_term"], "night");
    assert_eq!(json["translation"], "شب");
    assert_eq!(json["learned"], true);
    assert_eq!(json["notes"], "plural: شب‌ها");

    let decoded: Word = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, word);
}

#[test]
fn missing_optional_wire_fields_decode_to_defaults() {
    let value = serde_json::json!({
        "id": "3",
        "source_term": "water",
        "translation": "آب"
    });

    let word: Word = serde_json::from_value(value).unwrap();
    assert!(!word.learned);
    assert!(word.notes.is_empty());
}

#[test]
fn creation_rejects_empty_required_fields() {
    let err = Word::new("1".to_string(), "", "x").unwrap_err();
    assert_eq!(err, WordValidationError::EmptySourceTerm);

    let err = Word::new("1".to_string(), "x", "   ").unwrap_err();
    assert_eq!(err, WordValidationError::EmptyTranslation);
}
