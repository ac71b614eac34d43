use ratatui::{prelude::*, widgets::*};

use crate::models::ChatRole;
use crate::theme::Theme;

/// Renders the category tab strip
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize, theme: &Theme) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(theme.dim)
        .highlight_style(theme.title)
        .divider("|")
}

/// Display width of a string in terminal columns; CJK characters
/// occupy two columns each
pub fn display_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

/// Transcript prefix for a chat role
pub fn role_prefix(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => ">> ",
        ChatRole::Assistant => "ai ",
    }
}

/// Centered popup area, sized as a percentage of the full frame
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_terminal_columns() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("chat"), 4);
        // wide characters take two columns each
        assert_eq!(display_width("搜索"), 4);
        assert_eq!(display_width("AI 目录"), 7);
    }
}
