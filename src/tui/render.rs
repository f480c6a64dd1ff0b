use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use super::PickerApp;
use crate::catalog::Directory;

const HELP: &str = "←/→ area  ↑/↓ move  space toggle  esc done";
const TOGGLED_MARK: &str = "[x] ";
const UNTOGGLED_MARK: &str = "[ ] ";

impl<'a, D: Directory + ?Sized> PickerApp<'a, D> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(frame.area());

		self.render_tabs(frame, layout[0]);
		self.render_symptoms(frame, layout[1]);
		self.render_footer(frame, layout[2]);
	}

	fn render_tabs(&self, frame: &mut Frame, area: Rect) {
		let directory = self.picker.directory();
		let group = self.picker.group();
		let store = self.picker.store();
		let selected = group.position(self.picker.focus()).unwrap_or(0);

		let titles: Vec<Line<'static>> = group
			.areas()
			.iter()
			.enumerate()
			.map(|(index, area)| {
				let name = directory
					.area_name(*area)
					.map(str::to_string)
					.unwrap_or_else(|| format!("Area {area}"));
				let chosen = store.get(*area).len();
				let label = if chosen == 0 {
					format!(" {name} ")
				} else {
					format!(" {name} ({chosen}) ")
				};
				let style = if index == selected {
					self.theme.tab_active_style()
				} else {
					self.theme.tab_inactive_style()
				};
				Line::from(label).style(style)
			})
			.collect();

		let block = Block::default()
			.borders(Borders::ALL)
			.title(format!(" {} ", group.name()));
		let tabs = Tabs::new(titles)
			.select(selected)
			.divider("|")
			.highlight_style(self.theme.tab_active_style())
			.block(block);
		frame.render_widget(tabs, area);
	}

	fn render_symptoms(&mut self, frame: &mut Frame, area: Rect) {
		let directory = self.picker.directory();
		let active = self.picker.active();
		let items: Vec<ListItem<'static>> = directory
			.symptoms(self.picker.focus())
			.iter()
			.map(|symptom| {
				let toggled = active.contains(symptom.id);
				let (mark, style) = if toggled {
					(TOGGLED_MARK, self.theme.toggled_style())
				} else {
					(UNTOGGLED_MARK, self.theme.untoggled_style())
				};
				ListItem::new(Line::from(vec![
					Span::styled(mark, style),
					Span::styled(symptom.name.clone(), style),
				]))
			})
			.collect();

		let block = Block::default().borders(Borders::ALL).title(" Symptoms ");
		self.viewport_rows = block.inner(area).height as usize;

		let list = List::new(items)
			.block(block)
			.highlight_style(self.theme.cursor_style());
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let status = self.status.as_deref().unwrap_or_default();
		let help_width = HELP.width() as u16;
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Min(1), Constraint::Length(help_width)])
			.split(area);

		frame.render_widget(
			Paragraph::new(status.to_string()).style(self.theme.toggled_style()),
			columns[0],
		);
		frame.render_widget(
			Paragraph::new(HELP).style(self.theme.help_style()),
			columns[1],
		);
	}
}
