use super::*;

#[test]
fn default_has_four_empty_entries() {
    let set = CredentialSet::default();
    assert_eq!(set.len(), 4);
    for p in Provider::ALL {
        assert_eq!(set.get(p), "");
        assert!(!set.has(p));
    }
}

#[test]
fn serializes_as_object_keyed_by_provider_id() {
    let mut set = CredentialSet::default();
    set.set(Provider::OpenAi, "sk-1");
    let v: serde_json::Value = serde_json::to_value(&set).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "qianwen": "", "openai": "sk-1", "doubao": "", "deepseek": "" })
    );
}

#[test]
fn partial_blob_is_filled_to_four_entries() {
    let set: CredentialSet = serde_json::from_str(r#"{ "doubao": "d" }"#).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.get(Provider::Doubao), "d");
    assert_eq!(set.get(Provider::Qianwen), "");
}

#[test]
fn load_missing_key_gives_defaults() {
    let storage = MemoryStorage::new();
    assert_eq!(CredentialSet::load(&storage), CredentialSet::default());
}

#[test]
fn corrupt_blob_loads_as_defaults() {
    let mut storage = MemoryStorage::new();
    storage.set_item(CREDENTIALS_KEY, "{not json").unwrap();
    assert_eq!(CredentialSet::load(&storage), CredentialSet::default());
}

#[test]
fn save_then_load_in_memory() {
    let mut storage = MemoryStorage::new();
    let mut set = CredentialSet::default();
    set.set(Provider::DeepSeek, "ds");
    set.save(&mut storage).unwrap();
    assert_eq!(CredentialSet::load(&storage), set);
}

#[test]
fn save_overwrites_wholesale() {
    let mut storage = MemoryStorage::new();
    let mut first = CredentialSet::default();
    first.set(Provider::Qianwen, "q");
    first.save(&mut storage).unwrap();

    let mut second = CredentialSet::default();
    second.set(Provider::OpenAi, "o");
    second.save(&mut storage).unwrap();

    let loaded = CredentialSet::load(&storage);
    assert_eq!(loaded.get(Provider::Qianwen), "");
    assert_eq!(loaded.get(Provider::OpenAi), "o");
}

#[test]
fn quota_overflow_is_a_storage_error() {
    let mut storage = MemoryStorage::with_quota(16);
    let err = CredentialSet::default().save(&mut storage).unwrap_err();
    assert!(matches!(err, AnimatorError::Storage(_)));
    assert!(storage.get_item(CREDENTIALS_KEY).unwrap().is_none());
}

#[test]
fn file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");
    let mut storage = FileStorage::new(&path);
    assert!(storage.get_item(CREDENTIALS_KEY).unwrap().is_none());

    let mut set = CredentialSet::default();
    set.set(Provider::Doubao, "db");
    set.save(&mut storage).unwrap();
    storage.set_item("other", "kept").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(CredentialSet::load(&reopened), set);
    assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("kept"));
}

#[test]
fn debug_hides_secrets() {
    let mut set = CredentialSet::default();
    set.set(Provider::OpenAi, "sk-secret");
    let s = format!("{set:?}");
    assert!(!s.contains("sk-secret"));
    assert!(s.contains("<set>"));
}
