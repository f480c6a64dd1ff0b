use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bodymap::{Catalog, FnListener, Picker, PickerConfig, SelectionStore, tui};
use log::{debug, info};

use crate::settings::ResolvedConfig;

/// Opens the picker on the configured selection list and persists the result.
pub(crate) struct PickerWorkflow {
	config: ResolvedConfig,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	pub(crate) fn catalog(&self) -> &Catalog {
		&self.config.catalog
	}

	/// Run the picker until it is closed and return the final selection list.
	pub(crate) fn run(&self) -> Result<SelectionStore> {
		let mut store = match &self.config.selection_path {
			Some(path) => load_selection(path)?,
			None => SelectionStore::new(),
		};

		let picker_config =
			PickerConfig::new(self.config.group.clone(), self.config.initial_area);
		let picker = Picker::open(picker_config, &self.config.catalog, &mut store).with_listener(
			FnListener::new(
				|store: &SelectionStore| {
					debug!("selection now covers {} area(s)", store.len());
				},
				|| info!("picker closed"),
			),
		);
		tui::run(picker)?;

		if let Some(path) = &self.config.selection_path {
			save_selection(path, &store)?;
		}
		Ok(store)
	}
}

/// Read a JSON selection list. A missing file yields an empty list.
pub(crate) fn load_selection(path: &Path) -> Result<SelectionStore> {
	if !path.exists() {
		return Ok(SelectionStore::new());
	}
	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read selection file {}", path.display()))?;
	serde_json::from_str(&text)
		.with_context(|| format!("failed to parse selection file {}", path.display()))
}

pub(crate) fn save_selection(path: &Path, store: &SelectionStore) -> Result<()> {
	let json = serde_json::to_string_pretty(store)?;
	fs::write(path, json)
		.with_context(|| format!("failed to write selection file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use bodymap::{AreaId, SymptomId};

	use super::*;

	#[test]
	fn missing_selection_file_starts_empty() {
		let dir = tempfile::tempdir().expect("tempdir");
		let store = load_selection(&dir.path().join("none.json")).expect("load");
		assert!(store.is_empty());
	}

	#[test]
	fn selection_file_round_trips_and_drops_empty_entries() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("selection.json");
		fs::write(
			&path,
			r#"[{"areaId": 1, "symptomIds": [3]}, {"areaId": 2, "symptomIds": []}]"#,
		)
		.expect("write");

		let mut store = load_selection(&path).expect("load");
		assert_eq!(store.len(), 1);

		store.reconcile(AreaId(2), [SymptomId(7)].into_iter().collect());
		save_selection(&path, &store).expect("save");

		let reloaded = load_selection(&path).expect("reload");
		assert_eq!(reloaded, store);
	}

	#[test]
	fn malformed_selection_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("selection.json");
		fs::write(&path, "{not json").expect("write");
		assert!(load_selection(&path).is_err());
	}
}
