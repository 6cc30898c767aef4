use engine::Category;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, ItemField, Mode},
    ui::{
        components::{centered_box, money::category_color},
        screens::render_input,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = match state.mode {
        Mode::EditItem(_) => " Edit item ",
        _ => " Add item ",
    };

    let card_area = centered_box(56, 14, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Category
            Constraint::Length(2), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit hint
        ])
        .margin(1)
        .split(inner);

    let form = &state.form;
    for (field, row) in ItemField::ALL.iter().zip(rows.iter()) {
        let focused = form.focus == *field;
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);

        let label_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.dim)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field.label(), label_style)),
            parts[0],
        );

        match field {
            ItemField::Title => render_input(frame, parts[1], &form.draft.title, focused, theme),
            ItemField::Amount => render_input(frame, parts[1], &form.draft.amount, focused, theme),
            ItemField::Description => {
                render_input(frame, parts[1], &form.draft.description, focused, theme);
            }
            ItemField::Category => frame.render_widget(
                Paragraph::new(category_line(form.draft.category, theme)),
                parts[1],
            ),
        }
    }

    let hint_style = if form.draft.is_submittable() {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dim)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("Enter to save, Esc to cancel", hint_style)),
        rows[5],
    );
}

fn category_line(selected: Category, theme: &Theme) -> Line<'static> {
    let option = |category: Category| {
        if category == selected {
            Span::styled(
                format!("[{}]", category.label()),
                Style::default()
                    .fg(category_color(category, theme))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" {} ", category.label()),
                Style::default().fg(theme.text_muted),
            )
        }
    };

    Line::from(vec![option(Category::Debt), Span::raw(" "), option(Category::Goal)])
}
