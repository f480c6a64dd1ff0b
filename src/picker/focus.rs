use crate::catalog::{AreaId, Directory, SymptomId};

/// Request to bring a toggle control into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
	pub symptom: SymptomId,
	/// Index of the control in the focused area's [`RenderList`].
	pub position: usize,
}

/// Symptom ids of one area in the order their controls are displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderList {
	area: Option<AreaId>,
	symptoms: Vec<SymptomId>,
}

impl RenderList {
	pub fn for_area<D: Directory + ?Sized>(directory: &D, area: AreaId) -> Self {
		Self {
			area: Some(area),
			symptoms: directory.symptoms(area).iter().map(|symptom| symptom.id).collect(),
		}
	}

	pub fn area(&self) -> Option<AreaId> {
		self.area
	}

	pub fn position(&self, symptom: SymptomId) -> Option<usize> {
		self.symptoms.iter().position(|candidate| *candidate == symptom)
	}

	pub fn get(&self, position: usize) -> Option<SymptomId> {
		self.symptoms.get(position).copied()
	}

	pub fn len(&self) -> usize {
		self.symptoms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symptoms.is_empty()
	}

	/// Scroll target for `symptom`, if it has a control in this list.
	pub fn scroll_to(&self, symptom: SymptomId) -> Option<ScrollRequest> {
		self.position(symptom)
			.map(|position| ScrollRequest { symptom, position })
	}
}
