//! Color themes for the browser chrome.

use ratatui::style::{Color, Modifier, Style};

/// Palette and derived styles for every widget the browser draws.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub foreground: Color,
    pub muted: Color,
    pub error: Color,
    pub header_bg: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn row_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn empty_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Names of the built-in themes, in presentation order.
pub fn names() -> Vec<&'static str> {
    vec!["nebula", "amarr", "caldari"]
}

/// Look a theme up by name, case-insensitively.
pub fn by_name(name: &str) -> Option<Theme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "nebula" => Some(nebula()),
        "amarr" => Some(amarr()),
        "caldari" => Some(caldari()),
        _ => None,
    }
}

pub fn default_theme() -> Theme {
    nebula()
}

fn nebula() -> Theme {
    Theme {
        accent: Color::LightCyan,
        foreground: Color::Gray,
        muted: Color::DarkGray,
        error: Color::LightRed,
        header_bg: Color::Black,
        selection_bg: Color::DarkGray,
    }
}

fn amarr() -> Theme {
    Theme {
        accent: Color::Yellow,
        foreground: Color::White,
        muted: Color::DarkGray,
        error: Color::LightRed,
        header_bg: Color::Black,
        selection_bg: Color::Rgb(80, 64, 16),
    }
}

fn caldari() -> Theme {
    Theme {
        accent: Color::LightBlue,
        foreground: Color::Gray,
        muted: Color::DarkGray,
        error: Color::LightRed,
        header_bg: Color::Rgb(8, 16, 32),
        selection_bg: Color::Rgb(24, 48, 80),
    }
}
