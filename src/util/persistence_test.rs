use super::*;

const KEY: &str = "theme-preference";

#[test]
fn load_preference_is_unset_when_key_absent() {
    let store = MemoryStore::new();
    assert_eq!(load_preference(&store, KEY).unwrap(), Preference::UNSET);
}

#[test]
fn load_preference_reads_stored_theme() {
    let store = MemoryStore::with_item(KEY, "dark");
    assert_eq!(load_preference(&store, KEY).unwrap(), Preference::new(Theme::Dark));
}

#[test]
fn load_preference_treats_garbage_as_unset() {
    for raw in ["", "Dark", "auto", "true"] {
        let store = MemoryStore::with_item(KEY, raw);
        assert!(!load_preference(&store, KEY).unwrap().is_set(), "{raw:?}");
    }
}

#[test]
fn save_then_clear_round_trips_through_the_key() {
    let store = MemoryStore::new();
    save_preference(&store, KEY, Theme::Light).unwrap();
    assert_eq!(store.peek(KEY).as_deref(), Some("light"));

    clear_preference(&store, KEY).unwrap();
    assert_eq!(store.peek(KEY), None);
}

#[test]
fn other_keys_are_untouched() {
    let store = MemoryStore::with_item("unrelated", "keep");
    save_preference(&store, KEY, Theme::Dark).unwrap();
    clear_preference(&store, KEY).unwrap();
    assert_eq!(store.peek("unrelated").as_deref(), Some("keep"));
}

#[test]
fn offline_store_fails_every_operation() {
    let store = MemoryStore::with_item(KEY, "dark");
    store.set_offline(true);
    assert_eq!(load_preference(&store, KEY), Err(StoreError::Unavailable));
    assert_eq!(save_preference(&store, KEY, Theme::Light), Err(StoreError::Unavailable));
    assert_eq!(clear_preference(&store, KEY), Err(StoreError::Unavailable));
    assert_eq!(store.peek(KEY).as_deref(), Some("dark"));
}
