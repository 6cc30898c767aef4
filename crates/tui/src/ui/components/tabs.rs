use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::Filter;

use crate::ui::theme::Theme;

/// Renders the category filter as a row of tabs.
pub fn render_filter_tabs(frame: &mut Frame<'_>, area: Rect, active: Filter, theme: &Theme) {
    frame.render_widget(Paragraph::new(filter_line(active, theme)), area);
}

fn filter_line(active: Filter, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let label = filter.label();
        if *filter == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.text_muted)));
        }
    }

    Line::from(spans)
}
