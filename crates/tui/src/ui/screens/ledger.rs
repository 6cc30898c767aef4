use engine::{Category, FinanceItem, PAGE_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            indicators,
            money::{budget_gauge, category_color, styled_category_amount, styled_remaining},
            tabs::render_filter_tabs,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Totals
            Constraint::Length(3), // Budget gauge
            Constraint::Min(0),    // Carousel
        ])
        .split(area);

    render_totals(frame, layout[0], state, theme);
    render_budget(frame, layout[1], state, theme);
    render_carousel(frame, layout[2], state, theme);
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let totals = state.session.totals();
    let items = state.session.ledger().items();
    let debts = items.iter().filter(|item| item.is_debt()).count();
    let goals = items.iter().filter(|item| item.is_goal()).count();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let plain = |amount: engine::MoneyCents| {
        Span::styled(amount.format(state.currency), Style::default().fg(theme.text))
    };

    StatCard::new("Salary", plain(totals.salary), theme)
        .subtitle("s to edit")
        .render(frame, cols[0]);
    StatCard::new(
        "Debts",
        styled_category_amount(totals.debts, Category::Debt, state.currency, theme),
        theme,
    )
    .subtitle(count_label(debts))
    .render(frame, cols[1]);
    StatCard::new(
        "Goals",
        styled_category_amount(totals.goals, Category::Goal, state.currency, theme),
        theme,
    )
    .subtitle(count_label(goals))
    .render(frame, cols[2]);

    let remaining = StatCard::new(
        "Remaining",
        styled_remaining(totals.remaining, state.currency, theme),
        theme,
    );
    let remaining = if totals.is_over_budget() {
        remaining.subtitle("Over budget")
    } else {
        remaining.subtitle("left this month")
    };
    remaining.render(frame, cols[3]);
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}

fn render_budget(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let totals = state.session.totals();
    Card::new("Budget", theme).render_with(frame, area, budget_gauge(&totals, theme));
}

fn render_carousel(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Items", theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter tabs
            Constraint::Length(1), // Spacer
            Constraint::Length(6), // Page of cards
            Constraint::Length(1), // Indicators
            Constraint::Min(0),
        ])
        .split(inner);

    let filter = state.session.filter();
    render_filter_tabs(frame, rows[0], filter, theme);

    let page = state.session.current_page_items();
    if page.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                filter.empty_message(),
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            rows[2],
        );
        return;
    }

    // Short pages keep full-width slots so cards do not stretch.
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PAGE_SIZE as u32); PAGE_SIZE])
        .split(rows[2]);

    for (index, (item, slot)) in page.iter().zip(slots.iter()).enumerate() {
        render_item(frame, *slot, item, index == state.selected, state, theme);
    }

    indicators::render(
        frame,
        rows[3],
        state.session.current_page(),
        state.session.page_count(),
        theme,
    );
}

fn render_item(
    frame: &mut Frame<'_>,
    area: Rect,
    item: &FinanceItem,
    selected: bool,
    state: &AppState,
    theme: &Theme,
) {
    let badge = Span::styled(
        item.category.label(),
        Style::default()
            .fg(category_color(item.category, theme))
            .add_modifier(Modifier::BOLD),
    );
    let amount = styled_category_amount(item.amount, item.category, state.currency, theme);
    let amount_style = amount.style.add_modifier(Modifier::BOLD);
    let description = match &item.description {
        Some(text) => Span::styled(text.clone(), Style::default().fg(theme.text_muted)),
        None => Span::styled("no description", Style::default().fg(theme.dim)),
    };

    let lines = vec![
        Line::from(badge),
        Line::from(amount.style(amount_style)),
        Line::from(description),
    ];

    Card::new(&item.title, theme)
        .focused(selected)
        .render_with(frame, area, Paragraph::new(lines));
}
