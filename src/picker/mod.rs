//! Tabbed symptom picker controller.
//!
//! A [`Picker`] shows one area of an [`AreaGroup`] at a time. Entering an
//! area loads its active symptoms from the caller's [`SelectionStore`]; every
//! toggle writes the full active set straight back through
//! [`SelectionStore::reconcile`], so switching tabs never loses edits.

mod error;
mod focus;
mod listener;

use log::{debug, warn};

use crate::catalog::{AreaGroup, AreaId, Directory, SymptomId};
use crate::selection::{Reconciliation, SelectionStore, SymptomSet, Toggle};

pub use error::PickerError;
pub use focus::{RenderList, ScrollRequest};
pub use listener::{FnListener, PickerListener};

/// Parameters for opening a picker.
#[derive(Clone, Debug)]
pub struct PickerConfig {
	pub area_group: AreaGroup,
	/// Tab shown first. Falls back to the group's first area when the id is
	/// not a member of the group.
	pub initial_area: AreaId,
}

impl PickerConfig {
	pub fn new(area_group: AreaGroup, initial_area: AreaId) -> Self {
		Self {
			area_group,
			initial_area,
		}
	}
}

/// What a single toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
	pub change: Toggle,
	pub reconciliation: Reconciliation,
	/// Set when a symptom was added; locates its control in the render list.
	pub scroll: Option<ScrollRequest>,
}

/// Area view controller bound to a caller-owned selection store.
pub struct Picker<'a, D: Directory + ?Sized> {
	directory: &'a D,
	store: &'a mut SelectionStore,
	group: AreaGroup,
	focus: AreaId,
	active: SymptomSet,
	render_list: RenderList,
	listener: Option<Box<dyn PickerListener + 'a>>,
	closed: bool,
}

impl<'a, D: Directory + ?Sized> Picker<'a, D> {
	/// Open a picker on `store`. The store stays borrowed, and is only
	/// mutated by this picker, until the picker is dropped.
	pub fn open(config: PickerConfig, directory: &'a D, store: &'a mut SelectionStore) -> Self {
		let PickerConfig {
			area_group,
			initial_area,
		} = config;

		let focus = if area_group.contains(initial_area) {
			initial_area
		} else {
			let fallback = area_group.first();
			warn!(
				"initial area {initial_area} is not in group '{}'; showing area {fallback}",
				area_group.name()
			);
			fallback
		};

		let mut picker = Self {
			directory,
			store,
			group: area_group,
			focus,
			active: SymptomSet::new(),
			render_list: RenderList::default(),
			listener: None,
			closed: false,
		};
		picker.enter(focus);
		picker
	}

	/// Attach callbacks for selection changes and close requests.
	pub fn with_listener(mut self, listener: impl PickerListener + 'a) -> Self {
		self.listener = Some(Box::new(listener));
		self
	}

	pub fn focus(&self) -> AreaId {
		self.focus
	}

	pub fn active(&self) -> &SymptomSet {
		&self.active
	}

	pub fn group(&self) -> &AreaGroup {
		&self.group
	}

	pub fn render_list(&self) -> &RenderList {
		&self.render_list
	}

	pub fn directory(&self) -> &'a D {
		self.directory
	}

	pub fn store(&self) -> &SelectionStore {
		self.store
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Show `area`, reloading its active symptoms from the store.
	pub fn switch_tab(&mut self, area: AreaId) -> Result<(), PickerError> {
		self.ensure_open()?;
		if !self.group.contains(area) {
			return Err(PickerError::AreaNotInGroup {
				area,
				group: self.group.name().to_string(),
			});
		}
		self.enter(area);
		debug!("switched to area {area}");
		Ok(())
	}

	/// Move to the next tab, wrapping at the end of the group.
	pub fn next_tab(&mut self) -> Result<AreaId, PickerError> {
		self.step_tab(1)
	}

	/// Move to the previous tab, wrapping at the start of the group.
	pub fn previous_tab(&mut self) -> Result<AreaId, PickerError> {
		let len = self.group.areas().len();
		self.step_tab(len - 1)
	}

	/// Flip `symptom` in the focused area and reconcile the result.
	pub fn toggle_symptom(&mut self, symptom: SymptomId) -> Result<ToggleOutcome, PickerError> {
		self.ensure_open()?;
		if self.render_list.position(symptom).is_none() {
			return Err(PickerError::UnknownSymptom {
				area: self.focus,
				symptom,
			});
		}

		let change = self.active.toggle(symptom);
		let reconciliation = self.store.reconcile(self.focus, self.active.clone());
		if let Some(listener) = self.listener.as_mut() {
			listener.selection_changed(self.store);
		}

		let scroll = match change {
			Toggle::Added => self
				.active
				.last()
				.and_then(|last| self.render_list.scroll_to(last)),
			Toggle::Removed => None,
		};

		Ok(ToggleOutcome {
			change,
			reconciliation,
			scroll,
		})
	}

	/// Dismiss the picker. The store keeps its last reconciled state.
	pub fn close(&mut self) -> Result<(), PickerError> {
		self.ensure_open()?;
		self.closed = true;
		if let Some(listener) = self.listener.as_mut() {
			listener.close_requested();
		}
		debug!("picker closed with {} area selection(s)", self.store.len());
		Ok(())
	}

	fn enter(&mut self, area: AreaId) {
		self.focus = area;
		self.active = self.store.get(area);
		self.render_list = RenderList::for_area(self.directory, area);
	}

	fn step_tab(&mut self, offset: usize) -> Result<AreaId, PickerError> {
		self.ensure_open()?;
		let areas = self.group.areas();
		let current = self.group.position(self.focus).unwrap_or(0);
		let next = areas[(current + offset) % areas.len()];
		self.switch_tab(next)?;
		Ok(next)
	}

	fn ensure_open(&self) -> Result<(), PickerError> {
		if self.closed {
			Err(PickerError::Closed)
		} else {
			Ok(())
		}
	}
}
