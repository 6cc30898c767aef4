use ratatui::{style::Style, text::Span};

use crate::{app::Mode, ui::theme::Theme};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Hints for the bottom bar in the given mode.
pub fn for_mode(mode: Mode) -> Vec<KeyHint> {
    match mode {
        Mode::Browse => browse(),
        Mode::EditSalary => vec![
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "cancel"),
        ],
        Mode::AddItem | Mode::EditItem(_) => form_editing(),
        Mode::Help => vec![KeyHint::new("Esc", "close")],
    }
}

pub fn browse() -> Vec<KeyHint> {
    vec![
        KeyHint::new("s", "salary"),
        KeyHint::new("a", "add"),
        KeyHint::new("e", "edit"),
        KeyHint::new("d", "delete"),
        KeyHint::new("f", "filter"),
        KeyHint::new("←→", "page"),
        KeyHint::new("↑↓", "select"),
        KeyHint::new("?", "help"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn form_editing() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("Space", "category"),
        KeyHint::new("Enter", "save"),
        KeyHint::new("Esc", "cancel"),
    ]
}
