use std::path::PathBuf;

use thiserror::Error;

use super::{AreaId, SymptomId};

/// Errors raised while loading or validating a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse catalog: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("area ids must be positive")]
	ZeroAreaId,

	#[error("symptom ids in area {area} must be positive")]
	ZeroSymptomId { area: AreaId },

	#[error("area {area} is defined more than once")]
	DuplicateArea { area: AreaId },

	#[error("symptom {symptom} is defined more than once in area {area}")]
	DuplicateSymptom { area: AreaId, symptom: SymptomId },

	/// An area group without members. Groups drive the tab bar and must
	/// always have a first tab.
	#[error("area group '{name}' has no areas")]
	EmptyGroup { name: String },

	#[error("area group '{group}' references unknown area {area}")]
	UnknownArea { group: String, area: AreaId },

	#[error("area group '{name}' is defined more than once")]
	DuplicateGroup { name: String },

	#[error("catalog defines no area groups")]
	NoGroups,
}
