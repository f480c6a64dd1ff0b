use thiserror::Error;

use crate::catalog::{AreaId, SymptomId};

/// Rejected picker transitions. Every check runs before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
	#[error("area {area} is not part of area group '{group}'")]
	AreaNotInGroup { area: AreaId, group: String },

	#[error("symptom {symptom} is not offered by area {area}")]
	UnknownSymptom { area: AreaId, symptom: SymptomId },

	#[error("picker has been closed")]
	Closed,
}
