use std::path::PathBuf;

use bodymap::{AreaGroup, AreaId, Catalog, Directory};

/// Validated settings ready to open the picker.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) catalog: Catalog,
	/// `None` when the bundled catalog is used.
	pub(crate) catalog_path: Option<PathBuf>,
	pub(crate) group: AreaGroup,
	pub(crate) initial_area: AreaId,
	pub(crate) selection_path: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(crate) fn summary(&self) -> String {
		let catalog = self
			.catalog_path
			.as_ref()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "bundled".to_string());
		let area = self
			.catalog
			.area_name(self.initial_area)
			.map(|name| format!("{} ({name})", self.initial_area))
			.unwrap_or_else(|| self.initial_area.to_string());
		let selection = self
			.selection_path
			.as_ref()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "none".to_string());

		[
			format!("catalog: {catalog}"),
			format!("group: {}", self.group.name()),
			format!("initial area: {area}"),
			format!("selection file: {selection}"),
		]
		.join("\n")
	}

	pub(crate) fn print_summary(&self) {
		eprintln!("{}", self.summary());
	}
}
