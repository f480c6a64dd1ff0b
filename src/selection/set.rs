use serde::{Deserialize, Serialize};

use crate::catalog::SymptomId;

/// Result of flipping one symptom's membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
	Added,
	Removed,
}

/// Duplicate-free list of symptom ids kept in most-recent-toggle order.
///
/// Additions append, removals drop the id in place, so [`SymptomSet::last`]
/// is always the most recently added symptom still selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SymptomId>", into = "Vec<SymptomId>")]
pub struct SymptomSet {
	ids: Vec<SymptomId>,
}

impl SymptomSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, id: SymptomId) -> bool {
		self.ids.contains(&id)
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn last(&self) -> Option<SymptomId> {
		self.ids.last().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = SymptomId> + '_ {
		self.ids.iter().copied()
	}

	pub fn as_slice(&self) -> &[SymptomId] {
		&self.ids
	}

	/// Add `id` if absent, remove it if present.
	pub fn toggle(&mut self, id: SymptomId) -> Toggle {
		match self.ids.iter().position(|existing| *existing == id) {
			Some(index) => {
				self.ids.remove(index);
				Toggle::Removed
			}
			None => {
				self.ids.push(id);
				Toggle::Added
			}
		}
	}

	/// Membership equality, ignoring toggle order.
	pub fn same_members(&self, other: &SymptomSet) -> bool {
		self.len() == other.len() && self.iter().all(|id| other.contains(id))
	}
}

impl FromIterator<SymptomId> for SymptomSet {
	fn from_iter<I: IntoIterator<Item = SymptomId>>(iter: I) -> Self {
		let mut ids = Vec::new();
		for id in iter {
			if !ids.contains(&id) {
				ids.push(id);
			}
		}
		Self { ids }
	}
}

impl From<Vec<SymptomId>> for SymptomSet {
	fn from(ids: Vec<SymptomId>) -> Self {
		ids.into_iter().collect()
	}
}

impl From<SymptomSet> for Vec<SymptomId> {
	fn from(set: SymptomSet) -> Self {
		set.ids
	}
}

impl<'a> IntoIterator for &'a SymptomSet {
	type Item = SymptomId;
	type IntoIter = std::iter::Copied<std::slice::Iter<'a, SymptomId>>;

	fn into_iter(self) -> Self::IntoIter {
		self.ids.iter().copied()
	}
}
