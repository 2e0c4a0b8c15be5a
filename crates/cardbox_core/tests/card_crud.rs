use cardbox_core::{CardStore, MemoryStorage};
use std::collections::HashSet;

fn empty_store() -> CardStore<MemoryStorage> {
    let mut store = CardStore::with_defaults(MemoryStorage::new());
    store.load().unwrap();
    store
}

#[test]
fn every_add_yields_a_unique_id_and_grows_by_one() {
    let mut store = empty_store();
    for i in 0..50 {
        store.add(format!("card {i}"), "", vec![]);
    }

    assert_eq!(store.cards().len(), 50);
    let ids: HashSet<_> = store.cards().iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn ids_increase_in_creation_order() {
    let mut store = empty_store();
    store.add("a", "", vec![]);
    store.add("b", "", vec![]);
    store.add("c", "", vec![]);

    let ids: Vec<_> = store.cards().iter().map(|card| card.id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn update_replaces_fields_but_preserves_id_and_created_at() {
    let mut store = empty_store();
    store.add("draft", "old body", vec!["old".into()]);
    let original = store.cards()[0].clone();

    store.update(
        original.id,
        "final",
        "new body",
        vec!["new".into(), "extra".into()],
    );

    let updated = store.find_by_id(original.id).unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.content, "new body");
    assert_eq!(updated.tags, vec!["new".to_string(), "extra".to_string()]);
}

#[test]
fn update_unknown_id_leaves_collection_unchanged() {
    let mut store = empty_store();
    store.add("only", "body", vec!["tag".into()]);
    let snapshot: Vec<_> = store.cards().to_vec();

    store.update(snapshot[0].id + 999, "ghost", "nothing", vec![]);

    assert_eq!(store.cards(), snapshot.as_slice());
}

#[test]
fn delete_removes_exactly_the_matching_card_preserving_order() {
    let mut store = empty_store();
    store.add("first", "", vec![]);
    store.add("second", "", vec![]);
    store.add("third", "", vec![]);
    let middle_id = store.cards()[1].id;

    store.delete(middle_id);

    let titles: Vec<_> = store
        .cards()
        .iter()
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "third"]);
}

#[test]
fn delete_absent_id_is_a_no_op() {
    let mut store = empty_store();
    store.add("keep", "", vec![]);
    let snapshot: Vec<_> = store.cards().to_vec();

    store.delete(snapshot[0].id + 1);

    assert_eq!(store.cards(), snapshot.as_slice());
}

#[test]
fn delete_clears_matching_edit_target() {
    let mut store = empty_store();
    store.add("editing", "", vec![]);
    store.add("other", "", vec![]);
    let edited_id = store.cards()[0].id;
    let other_id = store.cards()[1].id;

    store.set_edit_target(Some(edited_id));
    store.delete(other_id);
    assert_eq!(store.edit_target(), Some(edited_id));

    store.delete(edited_id);
    assert_eq!(store.edit_target(), None);
}

#[test]
fn add_two_then_delete_first_leaves_only_the_second() {
    let mut store = empty_store();
    store.add("first", "", vec![]);
    store.add("second", "", vec![]);
    let first_id = store.cards()[0].id;

    store.delete(first_id);

    let listed = store.list_filtered("");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "second");
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let mut store = empty_store();
    store.add("a", "", vec![]);
    let known = store.cards()[0].id;

    assert!(store.find_by_id(known).is_some());
    assert!(store.find_by_id(known + 1).is_none());
}
