use engine::{Category, Currency, MoneyCents, Totals};
use ratatui::{style::Style, symbols, text::Span, widgets::LineGauge};

use crate::ui::theme::Theme;

/// Remaining balance: positive (or zero) in green, over budget in red.
#[must_use]
pub fn styled_remaining(amount: MoneyCents, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    Span::styled(amount.format(currency), Style::default().fg(color))
}

/// An amount colored by the category it belongs to.
#[must_use]
pub fn styled_category_amount(
    amount: MoneyCents,
    category: Category,
    currency: Currency,
    theme: &Theme,
) -> Span<'static> {
    Span::styled(
        amount.format(currency),
        Style::default().fg(category_color(category, theme)),
    )
}

pub fn category_color(category: Category, theme: &Theme) -> ratatui::style::Color {
    match category {
        Category::Debt => theme.negative,
        Category::Goal => theme.goal,
    }
}

/// Line gauge of the salary share taken by debts and goals.
///
/// Green below 70%, accent up to 100%, red when over budget.
#[must_use]
pub fn budget_gauge(totals: &Totals, theme: &Theme) -> LineGauge<'static> {
    let ratio = totals.committed_ratio();
    let color = if totals.is_over_budget() {
        theme.negative
    } else if ratio < 0.7 {
        theme.positive
    } else {
        theme.accent
    };

    LineGauge::default()
        .filled_style(Style::default().fg(color))
        .line_set(symbols::line::THICK)
        .label(format!("{:>3.0}% committed", ratio * 100.0))
        .ratio(ratio)
}
