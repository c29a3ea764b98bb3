//! Item List Store
//!
//! Owns the ordered shopping list and the only operations allowed to
//! change it. Each successful mutation returns a [`Change`] describing
//! what happened, which callers forward to a persistence gateway.

mod change;
mod counts;

pub use change::Change;
pub use counts::{DerivedCounts, ListStatus};

use std::collections::HashSet;

use crate::domain::{next_id, validate_new_item, Entity, Item, ItemId, StoreError, ValidationError};

/// Outcome of replacing the list with records loaded from a gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HydrateReport {
    pub accepted: usize,
    pub skipped: usize,
}

/// Ordered item list plus the most recent error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemListStore {
    items: Vec<Item>,
    last_error: Option<StoreError>,
    loading: bool,
}

impl ItemListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Whether a gateway load is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a gateway load as started; adds are refused until it finishes
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a gateway load started with [`Self::begin_load`]
    ///
    /// Loaded records replace the list. On failure the current items stay
    /// and the error is recorded.
    pub fn finish_load(&mut self, result: Result<Vec<Item>, StoreError>) -> Option<HydrateReport> {
        self.loading = false;
        if self.last_error == Some(StoreError::Validation(ValidationError::StillLoading)) {
            self.last_error = None;
        }
        match result {
            Ok(records) => Some(self.hydrate(records)),
            Err(err) => {
                self.report_transport_failure(err);
                None
            }
        }
    }

    /// Validate raw input and append a new item
    pub fn add(&mut self, name: &str, quantity_text: &str, unit: &str) -> Result<Change, ValidationError> {
        let validated = if self.loading {
            Err(ValidationError::StillLoading)
        } else {
            validate_new_item(name, quantity_text, unit, &self.items)
        };
        let new_item = match validated {
            Ok(new_item) => new_item,
            Err(err) => {
                log::debug!("[STORE] Rejected add {:?}: {}", name, err);
                self.last_error = Some(err.into());
                return Err(err);
            }
        };

        let item = new_item.into_item(next_id(&self.items));
        log::debug!("[STORE] Added #{} {:?}", item.id, item.name);
        self.items.push(item.clone());
        self.last_error = None;
        Ok(Change::Added(item))
    }

    /// Flip the purchased flag; unknown ids are ignored
    pub fn toggle_purchased(&mut self, id: ItemId) -> Option<Change> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        let purchased = item.toggle();
        self.last_error = None;
        Some(Change::Toggled { id, purchased })
    }

    /// Remove an item, keeping the order of the rest; unknown ids are ignored
    pub fn delete(&mut self, id: ItemId) -> Option<Change> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        log::debug!("[STORE] Removed #{} {:?}", removed.id, removed.name);
        self.last_error = None;
        Some(Change::Removed(removed))
    }

    pub fn derived_counts(&self) -> DerivedCounts {
        DerivedCounts::of(&self.items)
    }

    pub fn status(&self) -> ListStatus {
        self.derived_counts().status(self.items.len())
    }

    /// Record a failed gateway call without touching the list
    pub fn report_transport_failure(&mut self, err: StoreError) {
        log::warn!("[STORE] {}", err);
        self.last_error = Some(err);
    }

    /// Replace the list with loaded records, dropping any that would break
    /// id/name uniqueness or the positive-quantity rule
    pub fn hydrate(&mut self, records: Vec<Item>) -> HydrateReport {
        let mut report = HydrateReport::default();
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut items = Vec::with_capacity(records.len());

        for mut record in records {
            record.name = record.name.trim().to_string();
            record.unit = record.unit.trim().to_string();

            let reason = if record.name.is_empty() || record.unit.is_empty() {
                Some("missing name or unit")
            } else if !(record.quantity.is_finite() && record.quantity > 0.0) {
                Some("non-positive quantity")
            } else if ids.contains(&record.id) {
                Some("duplicate id")
            } else if names.contains(&record.name) {
                Some("duplicate name")
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    log::warn!("[STORE] Skipping record #{} {:?}: {}", record.id, record.name, reason);
                    report.skipped += 1;
                }
                None => {
                    ids.insert(record.id);
                    names.insert(record.name.clone());
                    items.push(record);
                    report.accepted += 1;
                }
            }
        }

        self.items = items;
        log::info!("[STORE] Hydrated {} items ({} skipped)", report.accepted, report.skipped);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ItemListStore {
        let mut store = ItemListStore::new();
        for name in names {
            store.add(name, "1", "pcs").unwrap();
        }
        store
    }

    fn names(store: &ItemListStore) -> Vec<&str> {
        store.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut store = ItemListStore::new();
        let change = store.add("Milk", "2", "L").unwrap();

        assert_eq!(store.len(), 1);
        let item = &store.items()[0];
        assert_eq!(change, Change::Added(item.clone()));
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit, "L");
        assert!(!item.purchased);
        assert_eq!(store.derived_counts(), DerivedCounts { remaining: 1, all_purchased: false });
    }

    #[test]
    fn test_rejected_add_leaves_list_unchanged() {
        let mut store = store_with(&["Milk"]);
        let before = store.items().to_vec();

        assert_eq!(store.add("", "2", "L"), Err(ValidationError::MissingField));
        assert_eq!(store.add("Eggs", "-3", "pcs"), Err(ValidationError::InvalidQuantity));
        assert_eq!(store.add("Milk", "1", "L"), Err(ValidationError::DuplicateName));

        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.last_error(), Some(&StoreError::Validation(ValidationError::DuplicateName)));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut store = ItemListStore::new();
        let _ = store.add("Milk", "abc", "L");
        assert!(store.last_error().is_some());

        store.add("Milk", "1", "L").unwrap();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_ids_are_unique_and_not_reused_while_present() {
        let mut store = store_with(&["A", "B", "C"]);
        let b = store.items()[1].id;
        store.delete(b);
        store.add("D", "1", "pcs").unwrap();

        let ids: HashSet<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = store_with(&["Milk"]);
        let before = store.clone();
        assert_eq!(store.toggle_purchased(999), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = store_with(&["Milk"]);
        let id = store.items()[0].id;

        assert_eq!(store.toggle_purchased(id), Some(Change::Toggled { id, purchased: true }));
        assert_eq!(store.toggle_purchased(id), Some(Change::Toggled { id, purchased: false }));
        assert!(!store.get(id).unwrap().purchased);
    }

    #[test]
    fn test_all_purchased() {
        let mut store = store_with(&["Milk", "Bread"]);
        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        for id in ids {
            store.toggle_purchased(id);
        }
        assert_eq!(store.derived_counts(), DerivedCounts { remaining: 0, all_purchased: true });
        assert_eq!(store.status(), ListStatus::AllPurchased);
    }

    #[test]
    fn test_delete_only_item() {
        let mut store = store_with(&["Milk"]);
        let id = store.items()[0].id;
        store.toggle_purchased(id);

        let change = store.delete(id).unwrap();
        assert!(matches!(change, Change::Removed(ref item) if item.id == id));
        assert!(store.is_empty());
        assert!(!store.derived_counts().all_purchased);
        assert_eq!(store.status(), ListStatus::Hidden);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        let c = store.items()[2].id;
        store.delete(c);
        assert_eq!(names(&store), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.delete(42), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_transport_failure_keeps_items() {
        let mut store = store_with(&["Milk"]);
        store.report_transport_failure(StoreError::transport("add the item", "timeout"));
        assert_eq!(store.len(), 1);
        assert!(matches!(store.last_error(), Some(StoreError::Transport { .. })));
    }

    #[test]
    fn test_hydrate_skips_invalid_records() {
        let mut store = store_with(&["Old"]);
        let report = store.hydrate(vec![
            Item::new(1, " Milk ".to_string(), 2.0, "L".to_string()),
            Item::new(2, "Bread".to_string(), 0.0, "pcs".to_string()),
            Item::new(1, "Eggs".to_string(), 6.0, "pcs".to_string()),
            Item::new(3, "Milk".to_string(), 1.0, "L".to_string()),
            Item::new(4, "".to_string(), 1.0, "L".to_string()),
            Item::new(5, "Flour".to_string(), 1.5, "kg".to_string()),
        ]);

        assert_eq!(report, HydrateReport { accepted: 2, skipped: 4 });
        assert_eq!(names(&store), vec!["Milk", "Flour"]);
    }

    #[test]
    fn test_add_after_hydrate_continues_ids() {
        let mut store = ItemListStore::new();
        store.hydrate(vec![Item::new(41, "Milk".to_string(), 2.0, "L".to_string())]);
        let change = store.add("Bread", "1", "pcs").unwrap();
        assert_eq!(change.id(), 42);
    }

    #[test]
    fn test_add_after_hydrating_max_id_gets_distinct_id() {
        let mut store = ItemListStore::new();
        store.hydrate(vec![Item::new(u32::MAX, "Milk".to_string(), 1.0, "L".to_string())]);

        let change = store.add("Bread", "1", "pcs").unwrap();
        assert_ne!(change.id(), u32::MAX);

        let ids: HashSet<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_add_refused_while_loading() {
        let mut store = ItemListStore::new();
        store.begin_load();

        assert_eq!(store.add("Bread", "1", "pcs"), Err(ValidationError::StillLoading));
        assert!(store.is_empty());
        assert_eq!(store.last_error(), Some(&StoreError::Validation(ValidationError::StillLoading)));

        store.finish_load(Ok(vec![Item::new(1, "Milk".to_string(), 2.0, "L".to_string())]));
        assert!(!store.is_loading());
        assert!(store.last_error().is_none());
        let change = store.add("Bread", "1", "pcs").unwrap();
        assert_eq!(change.id(), 2);
        assert_eq!(names(&store), vec!["Milk", "Bread"]);
    }

    #[test]
    fn test_failed_load_keeps_items_and_reports() {
        let mut store = store_with(&["Milk"]);
        store.begin_load();

        let report = store.finish_load(Err(StoreError::transport("load the list", "timeout")));
        assert_eq!(report, None);
        assert!(!store.is_loading());
        assert_eq!(names(&store), vec!["Milk"]);
        assert!(matches!(store.last_error(), Some(StoreError::Transport { .. })));

        store.add("Bread", "1", "pcs").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_toggle_clears_transport_error() {
        let mut store = store_with(&["Milk"]);
        let id = store.items()[0].id;
        store.report_transport_failure(StoreError::transport("add the item", "timeout"));

        store.toggle_purchased(id).unwrap();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_delete_clears_validation_error() {
        let mut store = store_with(&["Milk"]);
        let id = store.items()[0].id;
        let _ = store.add("Milk", "1", "L");
        assert_eq!(store.last_error(), Some(&StoreError::Validation(ValidationError::DuplicateName)));

        store.delete(id).unwrap();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_unknown_id_keeps_error() {
        let mut store = store_with(&["Milk"]);
        let _ = store.add("", "1", "L");
        let expected = Some(StoreError::Validation(ValidationError::MissingField));

        assert_eq!(store.toggle_purchased(999), None);
        assert_eq!(store.last_error().cloned(), expected);
        assert_eq!(store.delete(999), None);
        assert_eq!(store.last_error().cloned(), expected);
    }
}
