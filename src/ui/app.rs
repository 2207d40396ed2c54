use chrono::{DateTime, Local};
use std::path::PathBuf;
use uuid::Uuid;

use super::theme::Palette;
use crate::config::Config;
use crate::ledger::{CategoryTotal, Ledger, Summary};
use crate::models::{Theme, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    History,
    Settings,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Overview, Self::History, Self::Settings]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::History => write!(f, "History"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// What the edit prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Name,
    Budget,
    Transaction,
}

impl EditTarget {
    pub(crate) fn prompt(&self) -> &'static str {
        match self {
            Self::Name => "name> ",
            Self::Budget => "budget> ",
            Self::Transaction => "add <amount> [category] [description]> ",
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: Uuid, description: String },
    ResetAll,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) now: DateTime<Local>,

    // Edit prompt
    pub(crate) edit_target: Option<EditTarget>,
    pub(crate) edit_input: String,

    // Ledger snapshot, refreshed after every mutation
    pub(crate) name: String,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) summary: Summary,
    pub(crate) category_totals: Vec<CategoryTotal>,
    pub(crate) categories: Vec<String>,
    pub(crate) transaction_count: usize,

    // History (filtered, newest first)
    pub(crate) history: Vec<Transaction>,
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,
    pub(crate) category_filter: String,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Settings carried from config
    pub(crate) currency: String,
    pub(crate) export_dir: PathBuf,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config, ledger: &Ledger) -> Self {
        let summary = ledger.compute_summary();
        let mut app = Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            now: Local::now(),

            edit_target: None,
            edit_input: String::new(),

            name: String::new(),
            theme: Theme::default(),
            palette: Palette::for_theme(Theme::default()),
            summary,
            category_totals: Vec::new(),
            categories: Vec::new(),
            transaction_count: 0,

            history: Vec::new(),
            history_index: 0,
            history_scroll: 0,
            category_filter: String::new(),

            pending_action: None,
            confirm_message: String::new(),

            currency: config.currency.clone(),
            export_dir: config.export_dir.clone(),

            visible_rows: 20,
        };
        app.refresh(ledger);
        if ledger.needs_name() {
            app.begin_edit(EditTarget::Name);
        }
        app
    }

    /// Re-derive every view from the ledger.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.name = ledger.name().to_string();
        self.theme = ledger.theme();
        self.palette = Palette::for_theme(self.theme);
        self.summary = ledger.compute_summary();
        self.category_totals = ledger.aggregate_by_category();
        self.categories = ledger.distinct_categories();
        self.transaction_count = ledger.transactions().len();

        if !self.category_filter.is_empty() && !self.categories.contains(&self.category_filter) {
            self.category_filter.clear();
        }
        self.refresh_history(ledger);
    }

    pub(crate) fn refresh_history(&mut self, ledger: &Ledger) {
        self.history = ledger
            .filter_transactions(&self.search_input, &self.category_filter)
            .into_iter()
            .rev()
            .cloned()
            .collect();
        if self.history_index >= self.history.len() {
            self.history_index = self.history.len().saturating_sub(1);
        }
        if self.history_scroll > self.history_index {
            self.history_scroll = self.history_index;
        }
    }

    /// Advance the category filter: all → first category → … → last → all.
    pub(crate) fn cycle_category_filter(&mut self, ledger: &Ledger) {
        self.category_filter = if self.category_filter.is_empty() {
            self.categories.first().cloned().unwrap_or_default()
        } else {
            self.categories
                .iter()
                .position(|c| *c == self.category_filter)
                .and_then(|i| self.categories.get(i + 1))
                .cloned()
                .unwrap_or_default()
        };
        self.history_index = 0;
        self.history_scroll = 0;
        self.refresh_history(ledger);
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.history.get(self.history_index)
    }

    pub(crate) fn begin_edit(&mut self, target: EditTarget) {
        self.edit_target = Some(target);
        self.edit_input.clear();
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn end_edit(&mut self) {
        self.edit_target = None;
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn ask_confirm(&mut self, action: PendingAction, message: impl Into<String>) {
        self.pending_action = Some(action);
        self.confirm_message = message.into();
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn tick(&mut self) {
        self.now = Local::now();
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn format(&self, amount: rust_decimal::Decimal) -> String {
        super::util::format_amount(amount, &self.currency)
    }
}
