//! Read-only directory of body areas and the symptoms each area offers.
//!
//! The picker only ever talks to the [`Directory`] trait. [`Catalog`] is the
//! bundled implementation, deserialized from TOML and validated once at load
//! time so lookups never need to report failure.

mod builtin;
mod error;
mod ids;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub use builtin::builtin_catalog;
pub use error::CatalogError;
pub use ids::{AreaId, SymptomId};

/// A selectable condition belonging to one area's catalog.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Symptom {
	pub id: SymptomId,
	pub name: String,
}

impl Symptom {
	pub fn new(id: impl Into<SymptomId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}
}

/// A body region with its own tab and symptom list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
	pub id: AreaId,
	pub name: String,
	pub symptoms: Vec<Symptom>,
}

/// Ordered, non-empty set of areas rendered together as tabs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaGroup {
	name: String,
	areas: Vec<AreaId>,
}

impl AreaGroup {
	/// Build a group, rejecting an empty area list.
	pub fn new(name: impl Into<String>, areas: Vec<AreaId>) -> Result<Self, CatalogError> {
		let name = name.into();
		if areas.is_empty() {
			return Err(CatalogError::EmptyGroup { name });
		}
		Ok(Self { name, areas })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn areas(&self) -> &[AreaId] {
		&self.areas
	}

	/// First area of the group. Always present.
	pub fn first(&self) -> AreaId {
		self.areas[0]
	}

	pub fn contains(&self, area: AreaId) -> bool {
		self.areas.contains(&area)
	}

	/// Tab index of `area` within the group.
	pub fn position(&self, area: AreaId) -> Option<usize> {
		self.areas.iter().position(|candidate| *candidate == area)
	}
}

/// Lookup interface consumed by the picker.
///
/// Implementations are pure and synchronous. Unknown areas resolve to `None`
/// or an empty symptom list.
pub trait Directory {
	/// Display name of the area.
	fn area_name(&self, area: AreaId) -> Option<&str>;

	/// Symptoms offered by the area, in display order.
	fn symptoms(&self, area: AreaId) -> &[Symptom];
}

/// Validated, in-memory body-map catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
	areas: Vec<Area>,
	index: HashMap<AreaId, usize>,
	groups: Vec<AreaGroup>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
	#[serde(default)]
	areas: Vec<RawArea>,
	#[serde(default)]
	groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawArea {
	id: u32,
	name: String,
	#[serde(default)]
	symptoms: Vec<RawSymptom>,
}

#[derive(Debug, Deserialize)]
struct RawSymptom {
	id: u32,
	name: String,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
	name: String,
	areas: Vec<u32>,
}

impl Catalog {
	/// Parse and validate a catalog from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
		let raw: RawCatalog = toml::from_str(text)?;
		Self::from_raw(raw)
	}

	/// Read a catalog file from disk.
	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text)
	}

	fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
		let mut areas = Vec::with_capacity(raw.areas.len());
		let mut index = HashMap::new();

		for raw_area in raw.areas {
			if raw_area.id == 0 {
				return Err(CatalogError::ZeroAreaId);
			}
			let id = AreaId(raw_area.id);
			if index.insert(id, areas.len()).is_some() {
				return Err(CatalogError::DuplicateArea { area: id });
			}

			let mut seen = HashSet::new();
			let mut symptoms = Vec::with_capacity(raw_area.symptoms.len());
			for raw_symptom in raw_area.symptoms {
				if raw_symptom.id == 0 {
					return Err(CatalogError::ZeroSymptomId { area: id });
				}
				let symptom_id = SymptomId(raw_symptom.id);
				if !seen.insert(symptom_id) {
					return Err(CatalogError::DuplicateSymptom {
						area: id,
						symptom: symptom_id,
					});
				}
				symptoms.push(Symptom::new(symptom_id, raw_symptom.name));
			}

			areas.push(Area {
				id,
				name: raw_area.name,
				symptoms,
			});
		}

		if raw.groups.is_empty() {
			return Err(CatalogError::NoGroups);
		}

		let mut group_names = HashSet::new();
		let mut groups = Vec::with_capacity(raw.groups.len());
		for raw_group in raw.groups {
			if !group_names.insert(raw_group.name.clone()) {
				return Err(CatalogError::DuplicateGroup {
					name: raw_group.name,
				});
			}
			let members: Vec<AreaId> = raw_group.areas.into_iter().map(AreaId).collect();
			if let Some(missing) = members.iter().find(|area| !index.contains_key(area)) {
				return Err(CatalogError::UnknownArea {
					group: raw_group.name,
					area: *missing,
				});
			}
			groups.push(AreaGroup::new(raw_group.name, members)?);
		}

		Ok(Self {
			areas,
			index,
			groups,
		})
	}

	pub fn areas(&self) -> &[Area] {
		&self.areas
	}

	pub fn area(&self, id: AreaId) -> Option<&Area> {
		self.index.get(&id).map(|position| &self.areas[*position])
	}

	pub fn groups(&self) -> &[AreaGroup] {
		&self.groups
	}

	/// Look up a group by its display name, ignoring ASCII case.
	pub fn group(&self, name: &str) -> Option<&AreaGroup> {
		self.groups
			.iter()
			.find(|group| group.name.eq_ignore_ascii_case(name))
	}

	/// Group containing `area`, first match in catalog order.
	pub fn group_for_area(&self, area: AreaId) -> Option<&AreaGroup> {
		self.groups.iter().find(|group| group.contains(area))
	}

	/// The first group in the catalog. Validation guarantees one exists.
	pub fn default_group(&self) -> &AreaGroup {
		&self.groups[0]
	}
}

impl Directory for Catalog {
	fn area_name(&self, area: AreaId) -> Option<&str> {
		self.area(area).map(|area| area.name.as_str())
	}

	fn symptoms(&self, area: AreaId) -> &[Symptom] {
		self.area(area)
			.map(|area| area.symptoms.as_slice())
			.unwrap_or(&[])
	}
}
