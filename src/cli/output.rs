use anyhow::Result;
use bodymap::{Catalog, Directory, SelectionStore};

/// One line per area: `Area: symptom, symptom`.
pub(crate) fn format_plain(store: &SelectionStore, catalog: &Catalog) -> String {
	if store.is_empty() {
		return "No symptoms selected".to_string();
	}

	store
		.iter()
		.map(|entry| {
			let area = catalog
				.area_name(entry.area_id)
				.map(str::to_string)
				.unwrap_or_else(|| format!("Area {}", entry.area_id));
			let symptoms: Vec<String> = entry
				.symptom_ids
				.iter()
				.map(|id| {
					catalog
						.symptoms(entry.area_id)
						.iter()
						.find(|symptom| symptom.id == id)
						.map(|symptom| symptom.name.clone())
						.unwrap_or_else(|| format!("#{id}"))
				})
				.collect();
			format!("{area}: {}", symptoms.join(", "))
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn print_plain(store: &SelectionStore, catalog: &Catalog) {
	println!("{}", format_plain(store, catalog));
}

pub(crate) fn print_json(store: &SelectionStore) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(store)?);
	Ok(())
}

/// List area groups with their member area names.
pub(crate) fn print_groups(catalog: &Catalog) {
	for group in catalog.groups() {
		let areas: Vec<&str> = group
			.areas()
			.iter()
			.filter_map(|area| catalog.area_name(*area))
			.collect();
		println!("{}: {}", group.name(), areas.join(", "));
	}
}

#[cfg(test)]
mod tests {
	use bodymap::{AreaId, SymptomId, SymptomSet, builtin_catalog};

	use super::*;

	#[test]
	fn plain_output_uses_catalog_names() {
		let catalog = builtin_catalog().expect("catalog");
		let mut store = SelectionStore::new();
		store.reconcile(AreaId(1), [SymptomId(2), SymptomId(1)].into_iter().collect());
		store.reconcile(AreaId(10), SymptomSet::from(vec![SymptomId(1)]));

		assert_eq!(
			format_plain(&store, &catalog),
			"Head: Dizziness, Headache\nGeneral: Fatigue"
		);
	}

	#[test]
	fn plain_output_reports_empty_selection() {
		let catalog = builtin_catalog().expect("catalog");
		assert_eq!(
			format_plain(&SelectionStore::new(), &catalog),
			"No symptoms selected"
		);
	}
}
