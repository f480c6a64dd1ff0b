use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::PickerApp;
use crate::catalog::Directory;
use crate::selection::Toggle;

impl<'a, D: Directory + ?Sized> PickerApp<'a, D> {
	/// Apply one key press. Returns `true` once the picker has been closed.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => {
				self.picker.close()?;
				return Ok(true);
			}
			KeyCode::Right | KeyCode::Tab => {
				self.picker.next_tab()?;
				self.reset_view();
			}
			KeyCode::Left | KeyCode::BackTab => {
				self.picker.previous_tab()?;
				self.reset_view();
			}
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Char(' ') | KeyCode::Enter => self.toggle_at_cursor()?,
			_ => {}
		}
		Ok(false)
	}

	fn toggle_at_cursor(&mut self) -> Result<()> {
		let Some(symptom) = self.picker.render_list().get(self.cursor) else {
			return Ok(());
		};
		let outcome = self.picker.toggle_symptom(symptom)?;
		if let Some(request) = outcome.scroll {
			self.reveal(request);
		}
		let name = self
			.picker
			.directory()
			.symptoms(self.picker.focus())
			.iter()
			.find(|candidate| candidate.id == symptom)
			.map(|candidate| candidate.name.as_str())
			.unwrap_or("symptom");
		self.status = Some(match outcome.change {
			Toggle::Added => format!("Added {name}"),
			Toggle::Removed => format!("Removed {name}"),
		});
		Ok(())
	}

	fn move_cursor_up(&mut self) {
		if self.cursor > 0 {
			self.set_cursor(self.cursor - 1);
		}
	}

	fn move_cursor_down(&mut self) {
		if self.cursor + 1 < self.picker.render_list().len() {
			self.set_cursor(self.cursor + 1);
		}
	}
}
