//! In-memory record store.
//!
//! Two independent collections (timelines, careers), each with its own id
//! counter. Nothing is persisted; a restart loses every record.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::models::career::CareerBody;
use crate::models::record::{NewRecord, Record};
use crate::models::timeline::TimelineBody;

struct CollectionInner<T> {
    /// Next id to hand out. Only ever increases, so ids are never reused.
    next_id: u64,
    records: HashMap<u64, Record<T>>,
}

/// One kind of record, keyed by sequential id.
///
/// Every operation takes the lock once and never holds it across an await,
/// so `create` (id assignment + insert) is atomic under concurrent requests.
pub struct Collection<T> {
    inner: RwLock<CollectionInner<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(CollectionInner {
                next_id: 1,
                records: HashMap::new(),
            }),
        }
    }
}

impl<T: Clone> Collection<T> {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new record, assigning the next id and stamping `created_at`.
    pub fn create(&self, new: NewRecord<T>) -> Record<T> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = Record {
            id,
            owner_id: new.owner_id,
            title: new.title,
            created_at: Utc::now(),
            body: new.body,
        };
        inner.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: u64) -> Option<Record<T>> {
        self.inner.read().records.get(&id).cloned()
    }

    /// All records whose owner equals `owner_id` (`None` matches `None`),
    /// newest first. Records created within the same clock tick fall back
    /// to id order, so the later one still comes first.
    pub fn list_by_owner(&self, owner_id: Option<u64>) -> Vec<Record<T>> {
        let mut records: Vec<Record<T>> = self
            .inner
            .read()
            .records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }

    /// Removes the record. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> bool {
        self.inner.write().records.remove(&id).is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide store, built once in `main` and shared through `AppState`.
#[derive(Default)]
pub struct RecordStore {
    timelines: Collection<TimelineBody>,
    careers: Collection<CareerBody>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timelines(&self) -> &Collection<TimelineBody> {
        &self.timelines
    }

    pub fn careers(&self) -> &Collection<CareerBody> {
        &self.careers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(title: &str, owner_id: Option<u64>) -> NewRecord<String> {
        NewRecord {
            owner_id,
            title: title.to_string(),
            body: format!("body of {title}"),
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let collection = Collection::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| collection.create(new_note(&format!("n{i}"), None)).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let collection = Collection::new();
        let first = collection.create(new_note("a", None));
        let second = collection.create(new_note("b", None));
        assert!(collection.delete(second.id));
        assert!(collection.delete(first.id));

        let third = collection.create(new_note("c", None));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_get_returns_created_record_unchanged() {
        let collection = Collection::new();
        let created = collection.create(new_note("a", None));

        let fetched = collection.get(created.id).unwrap();
        assert_eq!(fetched, created);
        // Reads never mutate: a second read is identical, timestamp included.
        assert_eq!(collection.get(created.id).unwrap(), fetched);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let collection: Collection<String> = Collection::new();
        assert!(collection.get(1).is_none());
        assert!(collection.get(0).is_none());
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let collection = Collection::new();
        let created = collection.create(new_note("a", None));

        assert!(collection.delete(created.id));
        assert!(collection.get(created.id).is_none());
        assert!(!collection.delete(created.id));
        assert!(!collection.delete(99));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_list_by_owner_is_newest_first() {
        let collection = Collection::new();
        for title in ["a", "b", "c"] {
            collection.create(new_note(title, None));
        }

        let listed = collection.list_by_owner(None);
        let ids: Vec<u64> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[test]
    fn test_list_by_owner_matches_owner_exactly() {
        let collection = Collection::new();
        collection.create(new_note("anon", None));
        collection.create(new_note("seven", Some(7)));
        collection.create(new_note("eight", Some(8)));

        let anon: Vec<String> = collection
            .list_by_owner(None)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(anon, vec!["anon".to_string()]);

        let seven = collection.list_by_owner(Some(7));
        assert_eq!(seven.len(), 1);
        assert_eq!(seven[0].title, "seven");

        assert!(collection.list_by_owner(Some(9)).is_empty());
    }

    #[test]
    fn test_deleted_records_leave_listing() {
        let collection = Collection::new();
        let a = collection.create(new_note("a", None));
        let b = collection.create(new_note("b", None));
        collection.delete(a.id);

        let ids: Vec<u64> = collection.list_by_owner(None).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b.id]);
    }

    #[test]
    fn test_collections_have_independent_counters() {
        let timelines: Collection<String> = Collection::new();
        let careers: Collection<String> = Collection::new();

        assert_eq!(timelines.create(new_note("t1", None)).id, 1);
        assert_eq!(careers.create(new_note("c1", None)).id, 1);
        assert_eq!(timelines.create(new_note("t2", None)).id, 2);
        assert_eq!(careers.create(new_note("c2", None)).id, 2);
        assert_eq!(careers.create(new_note("c3", None)).id, 3);
        assert_eq!(timelines.len(), 2);
        assert_eq!(careers.len(), 3);
    }

    #[test]
    fn test_record_store_starts_empty() {
        let store = RecordStore::new();
        assert!(store.timelines().is_empty());
        assert!(store.careers().is_empty());
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        use std::sync::Arc;

        let collection: Arc<Collection<String>> = Arc::new(Collection::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let collection = Arc::clone(&collection);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| collection.create(new_note(&format!("{t}-{i}"), None)).id)
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=400).collect::<Vec<u64>>());
    }
}
