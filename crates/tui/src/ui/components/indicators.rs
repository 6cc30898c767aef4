use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// Page indicator dots under the carousel, numbered for direct selection.
///
/// Nothing is drawn for a single page or none.
pub fn render(frame: &mut Frame<'_>, area: Rect, current: usize, pages: usize, theme: &Theme) {
    if let Some(line) = indicator_line(current, pages, theme) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

fn indicator_line(current: usize, pages: usize, theme: &Theme) -> Option<Line<'static>> {
    if pages <= 1 {
        return None;
    }

    let mut spans = Vec::with_capacity(pages * 2);
    for index in 0..pages {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let (dot, color) = if index == current {
            ("●", theme.accent)
        } else {
            ("○", theme.dim)
        };
        let label = if index < 9 {
            format!("{}{dot}", index + 1)
        } else {
            dot.to_string()
        };
        spans.push(Span::styled(label, Style::default().fg(color)));
    }
    Some(Line::from(spans))
}
