use ratatui::style::{Color, Modifier, Style};

const TEAL: Color = Color::Rgb(20, 184, 166);
const SLATE: Color = Color::Rgb(30, 41, 59);
const MUTED: Color = Color::Rgb(100, 116, 139);

/// Colours used by the picker screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
	pub accent: Color,
	pub header_fg: Color,
	pub header_bg: Color,
	pub muted: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			accent: TEAL,
			header_fg: Color::White,
			header_bg: SLATE,
			muted: MUTED,
		}
	}
}

impl Theme {
	pub fn tab_active_style(&self) -> Style {
		Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
	}

	pub fn tab_inactive_style(&self) -> Style {
		Style::default().fg(self.header_fg)
	}

	pub fn toggled_style(&self) -> Style {
		Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
	}

	pub fn untoggled_style(&self) -> Style {
		Style::default()
	}

	pub fn cursor_style(&self) -> Style {
		Style::default().bg(self.header_bg).fg(self.header_fg)
	}

	pub fn help_style(&self) -> Style {
		Style::default().fg(self.muted)
	}
}
