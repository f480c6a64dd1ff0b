use crate::selection::SelectionStore;

/// Callbacks the picker fires toward whoever opened it.
pub trait PickerListener {
	/// Called after every reconciliation with the updated store.
	fn selection_changed(&mut self, _store: &SelectionStore) {}

	/// Called once when the picker is dismissed.
	fn close_requested(&mut self) {}
}

/// Adapts a pair of closures into a [`PickerListener`].
pub struct FnListener<C, X> {
	on_change: C,
	on_close: X,
}

impl<C, X> FnListener<C, X>
where
	C: FnMut(&SelectionStore),
	X: FnMut(),
{
	pub fn new(on_change: C, on_close: X) -> Self {
		Self {
			on_change,
			on_close,
		}
	}
}

impl<C, X> PickerListener for FnListener<C, X>
where
	C: FnMut(&SelectionStore),
	X: FnMut(),
{
	fn selection_changed(&mut self, store: &SelectionStore) {
		(self.on_change)(store);
	}

	fn close_requested(&mut self) {
		(self.on_close)();
	}
}
