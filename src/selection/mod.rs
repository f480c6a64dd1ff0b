//! Session-wide record of chosen symptoms, one entry per body area.
//!
//! [`SelectionStore`] is owned by whoever opens the picker. The picker borrows
//! it mutably and edits it only through [`SelectionStore::reconcile`], which
//! keeps two invariants:
//!
//! * no two entries share an area id;
//! * no entry carries an empty symptom set.
//!
//! Lookups use a linear first-match scan. A list adopted from elsewhere that
//! already contains duplicate area entries is tolerated: only the first match
//! is read or edited.

mod set;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::AreaId;

pub use set::{SymptomSet, Toggle};

/// Symptoms chosen in one area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSelection {
	pub area_id: AreaId,
	pub symptom_ids: SymptomSet,
}

impl AreaSelection {
	pub fn new(area_id: AreaId, symptom_ids: SymptomSet) -> Self {
		Self {
			area_id,
			symptom_ids,
		}
	}
}

/// Edit applied by [`SelectionStore::reconcile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
	/// A new entry was appended.
	Inserted,
	/// An existing entry had its symptom set replaced.
	Updated,
	/// An existing entry was removed because its new set was empty.
	Removed,
	/// No entry existed and the new set was empty.
	Unchanged,
}

/// Ordered list of [`AreaSelection`] entries.
///
/// Deserializing goes through [`SelectionStore::from_entries`], so an adopted
/// list never carries empty entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AreaSelection>", into = "Vec<AreaSelection>")]
pub struct SelectionStore {
	entries: Vec<AreaSelection>,
}

impl SelectionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adopt an existing list, dropping entries whose symptom set is empty.
	pub fn from_entries(entries: Vec<AreaSelection>) -> Self {
		let before = entries.len();
		let entries: Vec<_> = entries
			.into_iter()
			.filter(|entry| !entry.symptom_ids.is_empty())
			.collect();
		if entries.len() != before {
			debug!(
				"dropped {} empty area selection(s) from adopted list",
				before - entries.len()
			);
		}
		Self { entries }
	}

	/// Symptoms chosen for `area`, or an empty set when there is no entry.
	pub fn get(&self, area: AreaId) -> SymptomSet {
		self.find(area)
			.map(|index| self.entries[index].symptom_ids.clone())
			.unwrap_or_default()
	}

	/// Replace the symptom set for `area`, inserting or removing its entry as
	/// needed. Repeating a call with the same arguments leaves the list as it
	/// was after the first call.
	pub fn reconcile(&mut self, area: AreaId, symptoms: SymptomSet) -> Reconciliation {
		let outcome = match (self.find(area), symptoms.is_empty()) {
			(Some(index), true) => {
				self.entries.remove(index);
				Reconciliation::Removed
			}
			(Some(index), false) => {
				self.entries[index].symptom_ids = symptoms;
				Reconciliation::Updated
			}
			(None, false) => {
				self.entries.push(AreaSelection::new(area, symptoms));
				Reconciliation::Inserted
			}
			(None, true) => Reconciliation::Unchanged,
		};
		debug!("reconciled area {area}: {outcome:?}");
		outcome
	}

	pub fn entries(&self) -> &[AreaSelection] {
		&self.entries
	}

	pub fn iter(&self) -> impl Iterator<Item = &AreaSelection> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn into_entries(self) -> Vec<AreaSelection> {
		self.entries
	}

	fn find(&self, area: AreaId) -> Option<usize> {
		self.entries.iter().position(|entry| entry.area_id == area)
	}
}

impl From<Vec<AreaSelection>> for SelectionStore {
	fn from(entries: Vec<AreaSelection>) -> Self {
		Self::from_entries(entries)
	}
}

impl From<SelectionStore> for Vec<AreaSelection> {
	fn from(store: SelectionStore) -> Self {
		store.entries
	}
}

#[cfg(test)]
mod tests;
