use super::*;
use crate::catalog::SymptomId;

fn set(ids: &[u32]) -> SymptomSet {
	ids.iter().copied().map(SymptomId).collect()
}

fn entry(area: u32, ids: &[u32]) -> AreaSelection {
	AreaSelection::new(AreaId(area), set(ids))
}

fn assert_invariants(store: &SelectionStore) {
	for (i, left) in store.entries().iter().enumerate() {
		assert!(!left.symptom_ids.is_empty(), "entry {i} is empty");
		for right in &store.entries()[i + 1..] {
			assert_ne!(left.area_id, right.area_id, "duplicate area entry");
		}
	}
}

#[test]
fn get_on_missing_area_is_empty() {
	let store = SelectionStore::new();
	assert!(store.get(AreaId(1)).is_empty());
}

#[test]
fn reconcile_covers_every_case() {
	let mut store = SelectionStore::new();

	assert_eq!(store.reconcile(AreaId(1), SymptomSet::new()), Reconciliation::Unchanged);
	assert!(store.is_empty());

	assert_eq!(store.reconcile(AreaId(1), set(&[3])), Reconciliation::Inserted);
	assert_eq!(store.entries(), &[entry(1, &[3])]);

	assert_eq!(store.reconcile(AreaId(1), set(&[3, 4])), Reconciliation::Updated);
	assert_eq!(store.entries(), &[entry(1, &[3, 4])]);

	assert_eq!(store.reconcile(AreaId(1), SymptomSet::new()), Reconciliation::Removed);
	assert!(store.is_empty());
}

#[test]
fn new_areas_are_appended_in_order() {
	let mut store = SelectionStore::new();
	store.reconcile(AreaId(2), set(&[7]));
	store.reconcile(AreaId(1), set(&[3]));
	store.reconcile(AreaId(2), set(&[7, 8]));

	let areas: Vec<AreaId> = store.iter().map(|entry| entry.area_id).collect();
	assert_eq!(areas, [AreaId(2), AreaId(1)]);
	assert_invariants(&store);
}

#[test]
fn reconcile_is_idempotent() {
	let cases: [&[u32]; 3] = [&[], &[5], &[5, 1, 9]];
	for ids in cases {
		let mut once = SelectionStore::from_entries(vec![entry(1, &[2]), entry(4, &[1])]);
		once.reconcile(AreaId(4), set(ids));

		let mut twice = once.clone();
		twice.reconcile(AreaId(4), set(ids));

		assert_eq!(once, twice, "reconcile(4, {ids:?}) was not idempotent");
		assert_invariants(&twice);
	}
}

#[test]
fn get_after_reconcile_returns_same_members() {
	let mut store = SelectionStore::from_entries(vec![entry(1, &[1])]);
	let wanted = set(&[9, 2, 4]);
	store.reconcile(AreaId(3), wanted.clone());
	assert!(store.get(AreaId(3)).same_members(&wanted));

	store.reconcile(AreaId(1), set(&[6]));
	assert!(store.get(AreaId(1)).same_members(&set(&[6])));
}

#[test]
fn adopted_lists_drop_empty_entries() {
	let store = SelectionStore::from_entries(vec![entry(1, &[]), entry(2, &[4])]);
	assert_eq!(store.entries(), &[entry(2, &[4])]);
}

#[test]
fn duplicate_entries_only_touch_first_match() {
	let mut store = SelectionStore::from_entries(vec![entry(1, &[1]), entry(1, &[2])]);
	assert_eq!(store.get(AreaId(1)), set(&[1]));

	store.reconcile(AreaId(1), set(&[5]));
	assert_eq!(store.entries(), &[entry(1, &[5]), entry(1, &[2])]);

	store.reconcile(AreaId(1), SymptomSet::new());
	assert_eq!(store.entries(), &[entry(1, &[2])]);
}

#[test]
fn symptom_set_toggle_keeps_recent_order() {
	let mut symptoms = SymptomSet::new();
	assert_eq!(symptoms.toggle(SymptomId(4)), Toggle::Added);
	assert_eq!(symptoms.toggle(SymptomId(1)), Toggle::Added);
	assert_eq!(symptoms.toggle(SymptomId(2)), Toggle::Added);
	assert_eq!(symptoms.last(), Some(SymptomId(2)));

	assert_eq!(symptoms.toggle(SymptomId(1)), Toggle::Removed);
	assert_eq!(symptoms.as_slice(), &[SymptomId(4), SymptomId(2)]);
}

#[test]
fn symptom_set_collapses_duplicates() {
	let symptoms = set(&[3, 1, 3]);
	assert_eq!(symptoms.as_slice(), &[SymptomId(3), SymptomId(1)]);
	assert!(symptoms.same_members(&set(&[1, 3])));
	assert!(!symptoms.same_members(&set(&[1])));
}

#[test]
fn store_uses_camel_case_wire_form() {
	let mut store = SelectionStore::new();
	store.reconcile(AreaId(1), set(&[3, 2]));

	let json = serde_json::to_value(&store).expect("serialize");
	assert_eq!(json, serde_json::json!([{ "areaId": 1, "symptomIds": [3, 2] }]));

	let parsed: SelectionStore = serde_json::from_value(json).expect("deserialize");
	assert_eq!(parsed, store);
}

#[test]
fn deserialized_store_drops_empty_entries() {
	let parsed: SelectionStore = serde_json::from_str(
		r#"[{"areaId": 1, "symptomIds": []}, {"areaId": 2, "symptomIds": [7]}]"#,
	)
	.expect("deserialize");

	assert_invariants(&parsed);
	assert_eq!(parsed.entries(), &[entry(2, &[7])]);
}
