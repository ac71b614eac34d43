//! Accent-driven UI theme
//!
//! The settings panel picks one of four accent colors; every styled
//! surface derives from the resulting [`Theme`].

use ratatui::style::{Color, Style, Stylize};

/// Selectable accent colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Indigo,
    Purple,
    Emerald,
    Rose,
}

impl Accent {
    pub const ALL: [Accent; 4] = [Accent::Indigo, Accent::Purple, Accent::Emerald, Accent::Rose];

    pub fn name(&self) -> &'static str {
        match self {
            Accent::Indigo => "Indigo",
            Accent::Purple => "Purple",
            Accent::Emerald => "Emerald",
            Accent::Rose => "Rose",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Accent::Indigo => Color::Rgb(99, 102, 241),
            Accent::Purple => Color::Rgb(168, 85, 247),
            Accent::Emerald => Color::Rgb(16, 185, 129),
            Accent::Rose => Color::Rgb(244, 63, 94),
        }
    }
}

/// Styles for every themed surface in the UI
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub accent: Style,
    pub border: Style,
    pub border_focus: Style,
    pub border_edit: Style,
    pub border_grabbed: Style,
    pub title: Style,
    pub dim: Style,
    pub selection: Style,
    pub ok: Style,
    pub user_msg: Style,
    pub assistant_msg: Style,
}

impl Theme {
    pub fn from_accent(accent: Accent) -> Self {
        let accent_color = accent.color();
        Theme {
            accent: Style::default().fg(accent_color),
            border: Style::default().fg(Color::DarkGray),
            border_focus: Style::default().fg(accent_color),
            border_edit: Style::default().fg(Color::Yellow),
            border_grabbed: Style::default().fg(Color::Yellow).bold(),
            title: Style::default().fg(accent_color).bold(),
            dim: Style::default().fg(Color::DarkGray),
            selection: Style::default().fg(Color::Yellow).bold(),
            ok: Style::default().fg(Color::Green),
            user_msg: Style::default().fg(accent_color),
            assistant_msg: Style::default().fg(Color::Gray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_has_a_distinct_color() {
        let mut colors: Vec<Color> = Accent::ALL.iter().map(|a| a.color()).collect();
        colors.dedup();
        assert_eq!(colors.len(), Accent::ALL.len());
    }
}
