use engine::coerce_salary;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::centered_box, screens::render_input, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_area = centered_box(40, 7, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(Span::styled(" Salary ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Preview
        ])
        .margin(1)
        .split(inner);

    render_input(frame, rows[0], &state.salary_input, true, theme);

    // Input that does not parse is saved as zero.
    let preview = coerce_salary(&state.salary_input).format(state.currency);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("saves as {preview}"),
            Style::default().fg(theme.dim),
        )),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use engine::{Currency, Session};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn previews_coerced_salary() {
        let mut state = AppState::new(Session::default(), Currency::Usd);
        state.salary_input = "abc".to_string();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("saves as $ 0.00"));
    }
}
