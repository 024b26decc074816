//! # Application State
//!
//! One explicit struct for everything the window shows: form, list,
//! filter, focus and the status line.

use inventory_core::InventoryItem;

use super::{FilterSelector, FormField, FormState, ListView};

/// Which control receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Filter,
    Buttons,
    Table,
}

impl Focus {
    /// Tab order.
    const ORDER: [Focus; 7] = [
        Focus::Field(FormField::Number),
        Focus::Field(FormField::Category),
        Focus::Field(FormField::Name),
        Focus::Field(FormField::Quantity),
        Focus::Filter,
        Focus::Buttons,
        Focus::Table,
    ];

    fn step(self, delta: isize) -> Focus {
        let len = Self::ORDER.len() as isize;
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(index + delta).rem_euclid(len) as usize]
    }
}

/// The action buttons, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    ViewAll,
    Add,
    Update,
    Delete,
    Close,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::ViewAll,
        Button::Add,
        Button::Update,
        Button::Delete,
        Button::Close,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::ViewAll => "View All",
            Button::Add => "Add",
            Button::Update => "Update",
            Button::Delete => "Delete",
            Button::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Outcome of the last command, shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

/// Everything the window shows.
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub list: ListView,
    pub filter: FilterSelector,
    pub focus: Focus,
    /// Index into [`Button::ALL`].
    pub button: usize,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            form: FormState::default(),
            list: ListView::default(),
            filter: FilterSelector::default(),
            focus: Focus::Field(FormField::Number),
            button: 0,
            status: None,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(-1);
    }

    /// The button under the button-bar cursor.
    pub fn focused_button(&self) -> Button {
        Button::ALL[self.button.min(Button::ALL.len() - 1)]
    }

    pub fn cycle_button(&mut self, delta: isize) {
        let len = Button::ALL.len() as isize;
        self.button = (self.button as isize + delta).rem_euclid(len) as usize;
    }

    /// Moves the table cursor and mirrors the new row into the form.
    ///
    /// Nothing happens when the list is empty or the cursor is already at
    /// the boundary; the form keeps whatever was typed.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(row) = self.list.move_cursor(delta) {
            self.form.load(row);
        }
    }

    /// Same as [`move_selection`](Self::move_selection) with an absolute index.
    pub fn select_row(&mut self, index: usize) {
        if let Some(row) = self.list.move_to(index) {
            self.form.load(row);
        }
    }

    /// Shows a fresh query result.
    ///
    /// When the clamped cursor now sits on a different row, that row is
    /// loaded into the form like any other cursor change.
    pub fn replace_rows(&mut self, rows: Vec<InventoryItem>) {
        let before = self.cursor_id();
        self.list.replace(rows);
        self.sync_form(before);
    }

    /// Drops one row from the display, with the same form rule as
    /// [`replace_rows`](Self::replace_rows).
    pub fn remove_row(&mut self, id: i64) -> bool {
        let before = self.cursor_id();
        let removed = self.list.remove(id);
        self.sync_form(before);
        removed
    }

    /// Whether the form text was loaded from the row under the cursor.
    pub fn form_matches_cursor(&self) -> bool {
        self.cursor_id().is_some() && self.cursor_id() == self.form.source()
    }

    fn cursor_id(&self) -> Option<i64> {
        self.list.cursor_row().map(|row| row.id)
    }

    fn sync_form(&mut self, before: Option<i64>) {
        match self.list.cursor_row() {
            Some(row) if Some(row.id) != before => self.form.load(row),
            Some(_) => {}
            None => self.form.detach(),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            level: StatusLevel::Info,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            level: StatusLevel::Error,
            message: message.into(),
        });
    }
}
