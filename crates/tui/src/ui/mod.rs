pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, ledger screen, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Ledger
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::ledger::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);

    match state.mode {
        Mode::EditSalary => screens::salary_form::render(frame, area, state, &theme),
        Mode::AddItem | Mode::EditItem(_) => screens::item_form::render(frame, area, state, &theme),
        Mode::Help => components::help_overlay::render(frame, area, &theme),
        Mode::Browse => {}
    }
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let pages = state.session.page_count();
    let page = if pages == 0 {
        "-".to_string()
    } else {
        format!("{}/{pages}", state.session.current_page() + 1)
    };
    let changed = state
        .last_change
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Currency", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.currency.code())),
        Span::styled("Filter", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.session.filter().label())),
        Span::styled("Page", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {page}  ")),
        Span::styled("Changed", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {changed}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::for_mode(state.mode);
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
