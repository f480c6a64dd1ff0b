//! Body-map symptom picker.
//!
//! The library tracks which symptoms a user has chosen in each body area and
//! keeps that record in sync while the user moves between area tabs. The
//! [`tui`] module renders the picker in a terminal.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod picker;
pub mod products;
pub mod selection;
pub mod tui;

pub use catalog::{
	Area, AreaGroup, AreaId, Catalog, CatalogError, Directory, Symptom, SymptomId, builtin_catalog,
};
pub use picker::{
	FnListener, Picker, PickerConfig, PickerError, PickerListener, RenderList, ScrollRequest,
	ToggleOutcome,
};
pub use selection::{AreaSelection, Reconciliation, SelectionStore, SymptomSet, Toggle};
