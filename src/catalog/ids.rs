use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a body area. Unique across the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub u32);

/// Identifier of a symptom. Unique within the area that offers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomId(pub u32);

impl fmt::Display for AreaId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl fmt::Display for SymptomId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<u32> for AreaId {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl From<u32> for SymptomId {
	fn from(value: u32) -> Self {
		Self(value)
	}
}
