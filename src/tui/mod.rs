//! Terminal front-end for the symptom picker.
//!
//! [`PickerApp`] owns a [`Picker`] plus the purely visual state (cursor row,
//! list viewport). All selection changes go through the picker.

mod actions;
mod render;
mod runtime;
mod theme;

use ratatui::widgets::ListState;

use crate::catalog::Directory;
use crate::picker::{Picker, ScrollRequest};

pub use runtime::run;
pub use theme::Theme;

/// Interactive screen state wrapped around a [`Picker`].
pub struct PickerApp<'a, D: Directory + ?Sized> {
	picker: Picker<'a, D>,
	cursor: usize,
	list_state: ListState,
	/// Rows visible in the symptom list at the last draw.
	viewport_rows: usize,
	theme: Theme,
	status: Option<String>,
}

impl<'a, D: Directory + ?Sized> PickerApp<'a, D> {
	pub fn new(picker: Picker<'a, D>) -> Self {
		let mut list_state = ListState::default();
		list_state.select(Some(0));
		Self {
			picker,
			cursor: 0,
			list_state,
			viewport_rows: 0,
			theme: Theme::default(),
			status: None,
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn picker(&self) -> &Picker<'a, D> {
		&self.picker
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// First symptom row currently shown in the list viewport.
	pub fn scroll_offset(&self) -> usize {
		self.list_state.offset()
	}

	/// Release the picker, e.g. to end its borrow of the selection store.
	pub fn into_picker(self) -> Picker<'a, D> {
		self.picker
	}

	fn set_cursor(&mut self, cursor: usize) {
		self.cursor = cursor;
		self.list_state.select(Some(cursor));
	}

	/// Shift the viewport so the requested control is on screen.
	fn reveal(&mut self, request: ScrollRequest) {
		let rows = self.viewport_rows.max(1);
		let offset = self.list_state.offset();
		if request.position < offset {
			*self.list_state.offset_mut() = request.position;
		} else if request.position >= offset + rows {
			*self.list_state.offset_mut() = request.position + 1 - rows;
		}
	}

	fn reset_view(&mut self) {
		self.set_cursor(0);
		*self.list_state.offset_mut() = 0;
	}
}
