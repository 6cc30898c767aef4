pub mod item_form;
pub mod ledger;
pub mod salary_form;

use ratatui::{Frame, layout::Rect, style::Style, text::Span, widgets::Paragraph};

use crate::ui::theme::Theme;

/// A single-line input: value plus a cursor while focused.
pub(crate) fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(format!("{value}{cursor}"), style)),
        area,
    );
}
