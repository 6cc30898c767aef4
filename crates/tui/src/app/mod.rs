use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use engine::{Category, Currency, Filter, ItemDraft, Navigation, Session};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    EditSalary,
    AddItem,
    EditItem(Uuid),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Title,
    Amount,
    Category,
    Description,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::Title,
        ItemField::Amount,
        ItemField::Category,
        ItemField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Description => "Description (optional)",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemForm {
    pub draft: ItemDraft,
    pub focus: ItemField,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            draft: ItemDraft::default(),
            focus: ItemField::Title,
        }
    }
}

impl ItemForm {
    fn editing(draft: ItemDraft) -> Self {
        Self {
            draft,
            focus: ItemField::Title,
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ItemField::Title => Some(&mut self.draft.title),
            ItemField::Amount => Some(&mut self.draft.amount),
            ItemField::Description => Some(&mut self.draft.description),
            ItemField::Category => None,
        }
    }

    fn input(&mut self, ch: char) {
        if let Some(field) = self.active_text_mut() {
            field.push(ch);
            return;
        }
        match ch {
            'd' | 'D' => self.draft.category = Category::Debt,
            'g' | 'G' => self.draft.category = Category::Goal,
            ' ' => self.draft.category = self.draft.category.toggled(),
            _ => {}
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.active_text_mut() {
            field.pop();
        }
    }

    fn toggle_category(&mut self) {
        if self.focus == ItemField::Category {
            self.draft.category = self.draft.category.toggled();
        }
    }
}

/// Everything the view renders, owned by the event loop.
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub currency: Currency,
    pub mode: Mode,
    /// Selected row within the current carousel page.
    pub selected: usize,
    pub salary_input: String,
    pub form: ItemForm,
    pub last_change: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: Session, currency: Currency) -> Self {
        Self {
            session,
            currency,
            mode: Mode::Browse,
            selected: 0,
            salary_input: String::new(),
            form: ItemForm::default(),
            last_change: None,
            should_quit: false,
        }
    }

    pub fn selected_item_id(&self) -> Option<Uuid> {
        self.session
            .current_page_items()
            .get(self.selected)
            .map(|item| item.id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse(action),
            Mode::EditSalary => self.handle_salary(action),
            Mode::AddItem | Mode::EditItem(_) => self.handle_item_form(action),
            Mode::Help => {
                if matches!(
                    action,
                    AppAction::Cancel | AppAction::Submit | AppAction::Input('?')
                ) {
                    self.mode = Mode::Browse;
                }
            }
        }
    }

    /// Feeds left-button drags to the carousel; other mouse events are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != Mode::Browse {
            return;
        }
        let x = f64::from(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.session.drag_start(x),
            MouseEventKind::Drag(MouseButton::Left) => self.session.drag_move(x),
            MouseEventKind::Up(MouseButton::Left) => {
                let before = self.session.current_page();
                self.session.drag_end();
                if self.session.current_page() != before {
                    self.selected = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::Left => self.navigate(Navigation::Retreat),
            AppAction::Right => self.navigate(Navigation::Advance),
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Input(ch) => self.handle_browse_char(ch),
            _ => {}
        }
    }

    fn handle_browse_char(&mut self, ch: char) {
        match ch {
            'q' | 'Q' => self.should_quit = true,
            's' | 'S' => {
                self.salary_input = self.session.ledger().salary().to_string();
                self.mode = Mode::EditSalary;
            }
            'a' | 'A' => {
                self.form = ItemForm::default();
                self.mode = Mode::AddItem;
            }
            'e' | 'E' => self.open_edit(),
            'd' | 'D' => self.delete_selected(),
            'f' | 'F' => {
                let next = self.session.filter().next();
                self.set_filter(next);
            }
            'h' => self.navigate(Navigation::Retreat),
            'l' => self.navigate(Navigation::Advance),
            'k' => self.select_prev(),
            'j' => self.select_next(),
            '?' => self.mode = Mode::Help,
            '1'..='9' => {
                let index = ch as usize - '1' as usize;
                if self.session.select_page(index) {
                    self.selected = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_salary(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => self.mode = Mode::Browse,
            AppAction::Submit => {
                self.session.set_salary(&self.salary_input);
                self.touch();
                self.mode = Mode::Browse;
            }
            AppAction::Backspace => {
                self.salary_input.pop();
            }
            AppAction::Input(ch) => self.salary_input.push(ch),
            _ => {}
        }
    }

    fn handle_item_form(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => {
                self.form = ItemForm::default();
                self.mode = Mode::Browse;
            }
            AppAction::NextField | AppAction::Down => self.form.focus = self.form.focus.next(),
            AppAction::PrevField | AppAction::Up => self.form.focus = self.form.focus.prev(),
            AppAction::Left | AppAction::Right => self.form.toggle_category(),
            AppAction::Backspace => self.form.backspace(),
            AppAction::Input(ch) => self.form.input(ch),
            AppAction::Submit => self.submit_item_form(),
            _ => {}
        }
    }

    fn submit_item_form(&mut self) {
        let result = match self.mode {
            Mode::AddItem => self.session.add_item(&self.form.draft).map(|_| ()),
            Mode::EditItem(id) => self.session.update_item(id, &self.form.draft),
            _ => return,
        };

        match result {
            Ok(()) => {
                self.form = ItemForm::default();
                self.mode = Mode::Browse;
                self.clamp_selection();
                self.touch();
            }
            Err(err) => {
                tracing::debug!("item form not submitted: {err}");
            }
        }
    }

    fn open_edit(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        match self.session.begin_edit(id) {
            Ok(draft) => {
                self.form = ItemForm::editing(draft);
                self.mode = Mode::EditItem(id);
            }
            Err(err) => tracing::debug!("cannot edit item: {err}"),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        if self.session.delete_item(id).is_some() {
            self.clamp_selection();
            self.touch();
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        self.session.set_filter(filter);
        self.selected = 0;
    }

    fn navigate(&mut self, navigation: Navigation) {
        let before = self.session.current_page();
        self.session.navigate(navigation);
        if self.session.current_page() != before {
            self.selected = 0;
        }
    }

    fn select_next(&mut self) {
        let len = self.session.current_page_items().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.session.current_page_items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn touch(&mut self) {
        self.last_change = Some(Local::now());
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let session = config.session()?;
        let currency = config.currency()?;
        tracing::info!(
            items = session.ledger().len(),
            salary = %session.ledger().salary(),
            "session started"
        );
        Ok(Self {
            state: AppState::new(session, currency),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.state.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.state.handle_key(key);
                    }
                    Event::Mouse(mouse) => self.state.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        tracing::info!("session ended");
        Ok(())
    }
}
