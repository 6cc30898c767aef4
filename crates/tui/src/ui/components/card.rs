use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Rounded panel used for totals, the carousel and each item.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
        }
    }

    /// Focused cards get the accent border (selected item, active panel).
    pub fn focused(self, focused: bool) -> Self {
        Self { focused, ..self }
    }

    pub fn block(&self) -> Block<'a> {
        let theme = self.theme;
        let border = if self.focused {
            theme.border_focused
        } else {
            theme.border
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.surface))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme.accent),
            ))
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    /// Draws only the border, for callers that lay out the inside themselves.
    pub fn render_frame(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(self.block(), area);
    }

    pub fn render_with<W: Widget>(&self, frame: &mut Frame<'_>, area: Rect, content: W) {
        let inner = self.inner(area);
        self.render_frame(frame, area);
        frame.render_widget(content, inner);
    }
}

/// One of the totals along the top: a bold amount and a dim note under it.
pub struct StatCard<'a> {
    title: &'a str,
    value: Span<'static>,
    note: Option<String>,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: Span<'static>, theme: &'a Theme) -> Self {
        Self {
            title,
            value,
            note: None,
            theme,
        }
    }

    pub fn subtitle(self, note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..self
        }
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let bold = self.value.style.add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(self.value.style(bold))];
        lines.extend(
            self.note
                .map(|note| Line::from(Span::styled(note, Style::default().fg(self.theme.dim)))),
        );

        Card::new(self.title, self.theme).render_with(frame, area, Paragraph::new(lines));
    }
}
