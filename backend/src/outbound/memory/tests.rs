//! Behaviour of the in-memory user store.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryUserStore {
    InMemoryUserStore::new()
}

fn candidate(name: &str) -> User {
    User::new(0, name, format!("{}@example.com", name.to_lowercase()), 30)
}

#[rstest]
fn new_store_is_empty(store: InMemoryUserStore) {
    assert!(store.list_all().expect("list").is_empty());
}

#[rstest]
fn create_assigns_sequential_ids_from_one(store: InMemoryUserStore) {
    let first = store.create(candidate("Ada")).expect("create");
    let second = store.create(candidate("Grace")).expect("create");
    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
}

#[rstest]
fn create_discards_candidate_id(store: InMemoryUserStore) {
    let created = store
        .create(User::new(42, "Ada", "ada@example.com", 36))
        .expect("create");
    assert_eq!(created.id(), 1);
    assert!(store.get_by_id(42).expect("get").is_none());
}

#[rstest]
fn get_by_id_returns_created_record(store: InMemoryUserStore) {
    let original = candidate("Ada");
    let created = store.create(original.clone()).expect("create");
    let fetched = store.get_by_id(created.id()).expect("get").expect("present");
    assert_eq!(fetched, original.with_id(created.id()));
}

#[rstest]
fn list_all_preserves_insertion_order(store: InMemoryUserStore) {
    for name in ["Ada", "Grace", "Edsger"] {
        store.create(candidate(name)).expect("create");
    }
    let names: Vec<String> = store
        .list_all()
        .expect("list")
        .iter()
        .map(|user| user.name().to_owned())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Edsger"]);
}

#[rstest]
fn ids_are_not_reused_after_delete(store: InMemoryUserStore) {
    let first = store.create(candidate("Ada")).expect("create");
    assert!(store.delete(first.id()).expect("delete"));
    let second = store.create(candidate("Grace")).expect("create");
    assert_eq!(second.id(), 2);
}

#[rstest]
fn update_overwrites_fields_and_keeps_id(store: InMemoryUserStore) {
    let created = store.create(candidate("Ada")).expect("create");
    let replacement = User::new(99, "Grace", "grace@example.com", 45);
    assert!(store.update(created.id(), &replacement).expect("update"));

    let fetched = store.get_by_id(created.id()).expect("get").expect("present");
    assert_eq!(fetched, replacement.with_id(created.id()));
    assert!(!store.exists(99).expect("exists"));
}

#[rstest]
fn update_of_missing_id_leaves_collection_unchanged(store: InMemoryUserStore) {
    store.create(candidate("Ada")).expect("create");
    let before = store.list_all().expect("list");

    let updated = store
        .update(999, &candidate("Grace"))
        .expect("update");

    assert!(!updated);
    assert_eq!(store.list_all().expect("list"), before);
}

#[rstest]
fn delete_removes_exactly_one_record_once(store: InMemoryUserStore) {
    let ada = store.create(candidate("Ada")).expect("create");
    let grace = store.create(candidate("Grace")).expect("create");

    assert!(store.delete(ada.id()).expect("delete"));
    assert!(!store.delete(ada.id()).expect("second delete"));

    let remaining = store.list_all().expect("list");
    assert_eq!(remaining, vec![grace]);
}

#[rstest]
fn delete_of_missing_id_reports_false(store: InMemoryUserStore) {
    assert!(!store.delete(1).expect("delete"));
}

#[rstest]
fn exists_tracks_lifecycle(store: InMemoryUserStore) {
    let created = store.create(candidate("Ada")).expect("create");
    assert!(store.exists(created.id()).expect("exists"));
    store.delete(created.id()).expect("delete");
    assert!(!store.exists(created.id()).expect("exists"));
}

#[rstest]
fn concurrent_creates_yield_gapless_unique_ids() {
    const WORKERS: usize = 16;
    const PER_WORKER: usize = 25;
    let store = Arc::new(InMemoryUserStore::new());

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_WORKER)
                    .map(|n| {
                        store
                            .create(candidate(&format!("W{worker}N{n}")))
                            .expect("create")
                            .id()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        for id in handle.join().expect("worker thread") {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }

    let total = i64::try_from(WORKERS * PER_WORKER).expect("fits in i64");
    assert_eq!(ids, (1..=total).collect::<BTreeSet<_>>());
    assert_eq!(store.list_all().expect("list").len(), WORKERS * PER_WORKER);
}

#[rstest]
fn poisoned_guard_surfaces_store_error() {
    let store = Arc::new(InMemoryUserStore::new());
    let poisoner = Arc::clone(&store);
    let outcome = thread::spawn(move || {
        let _guard = poisoner.state.lock().expect("first lock");
        panic!("writer crashed");
    })
    .join();
    assert!(outcome.is_err());

    let error = store.list_all().expect_err("poisoned guard");
    assert_eq!(error, UserStoreError::poisoned("list_all"));
}
