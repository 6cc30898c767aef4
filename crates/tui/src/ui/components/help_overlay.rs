use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::{components::centered_rect, theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    frame.render_widget(Paragraph::new(help_lines(theme)).block(block), popup);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let heading = |h: &'static str| Line::from(Span::styled(h, Style::default().fg(theme.text)));

    vec![
        heading("Ledger"),
        Line::from(vec![key("s"), Span::raw(" edit salary  "), key("a"), Span::raw(" add item")]),
        Line::from(vec![
            key("e"),
            Span::raw(" edit selected  "),
            key("d"),
            Span::raw(" delete selected"),
        ]),
        Line::from(""),
        heading("Carousel"),
        Line::from(vec![key("f"), Span::raw(" cycle filter (All, Debts, Goals)")]),
        Line::from(vec![
            key("←/h"),
            Span::raw(" previous page  "),
            key("→/l"),
            Span::raw(" next page  "),
            key("1-9"),
            Span::raw(" jump to page"),
        ]),
        Line::from(vec![key("↑/k ↓/j"), Span::raw(" select item on the page")]),
        Line::from(vec![
            key("drag"),
            Span::raw(" left-click drag sideways to swipe pages"),
        ]),
        Line::from(""),
        heading("Forms"),
        Line::from(vec![
            key("Tab"),
            Span::raw(" next field  "),
            key("Space/←→"),
            Span::raw(" switch category  "),
            key("Enter"),
            Span::raw(" save  "),
            key("Esc"),
            Span::raw(" cancel"),
        ]),
        Line::from(Span::styled(
            "Title and amount are required; bad salary input counts as zero.",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(vec![key("q"), Span::raw(" quit  "), key("Ctrl+C"), Span::raw(" quit anywhere")]),
    ]
}
