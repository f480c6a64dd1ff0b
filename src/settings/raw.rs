use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use bodymap::{AreaGroup, AreaId, Catalog, builtin_catalog};
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Configuration file representation before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) catalog: CatalogSection,
	pub(super) picker: PickerSection,
	pub(super) selection: SelectionSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) group: Option<String>,
	pub(super) initial_area: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SelectionSection {
	pub(super) path: Option<PathBuf>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = &cli.catalog {
			self.catalog.path = Some(path.clone());
		}
		if let Some(group) = &cli.group {
			self.picker.group = Some(group.clone());
		}
		if let Some(area) = cli.area {
			self.picker.initial_area = Some(area);
		}
		if let Some(path) = &cli.selection {
			self.selection.path = Some(path.clone());
		}
	}

	/// Load the catalog and resolve the group and first tab against it.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let catalog = match &self.catalog.path {
			Some(path) => Catalog::from_path(path)
				.with_context(|| format!("failed to load catalog {}", path.display()))?,
			None => builtin_catalog().context("bundled catalog is invalid")?,
		};

		let initial_area = match self.picker.initial_area {
			Some(id) => {
				ensure!(id > 0, "picker.initial_area must be a positive area id");
				Some(AreaId(id))
			}
			None => None,
		};

		let group = resolve_group(&catalog, self.picker.group.as_deref(), initial_area)?;
		let initial_area = initial_area.unwrap_or_else(|| group.first());

		Ok(ResolvedConfig {
			catalog,
			catalog_path: self.catalog.path,
			group,
			initial_area,
			selection_path: self.selection.path,
		})
	}
}

fn resolve_group(
	catalog: &Catalog,
	name: Option<&str>,
	initial_area: Option<AreaId>,
) -> Result<AreaGroup> {
	if let Some(name) = name {
		return catalog.group(name).cloned().ok_or_else(|| {
			let known: Vec<&str> = catalog.groups().iter().map(AreaGroup::name).collect();
			anyhow!(
				"unknown area group '{name}' (available: {})",
				known.join(", ")
			)
		});
	}

	let group = initial_area
		.and_then(|area| catalog.group_for_area(area))
		.unwrap_or_else(|| catalog.default_group());
	Ok(group.clone())
}
