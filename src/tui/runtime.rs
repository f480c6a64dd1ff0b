use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::PickerApp;
use crate::catalog::Directory;
use crate::picker::Picker;

/// Construct a [`PickerApp`] for `picker` and run it until the user closes it.
pub fn run<'a, D: Directory + ?Sized>(picker: Picker<'a, D>) -> Result<Picker<'a, D>> {
	let mut app = PickerApp::new(picker);
	app.run()?;
	Ok(app.into_picker())
}

impl<'a, D: Directory + ?Sized> PickerApp<'a, D> {
	/// Pump terminal events until the picker is closed. Each key press is
	/// handled completely before the next one is read.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(Duration::from_millis(250))? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if self.handle_key(key)? {
						return Ok(());
					}
				}
				_ => {}
			}
		}
	}
}
