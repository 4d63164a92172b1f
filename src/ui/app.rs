use anyhow::Result;

use super::form::EntryForm;
use super::util::scroll_into_view;
use crate::db::Database;
use crate::error::PeriodError;
use crate::models::{PeriodKey, PeriodRecord};
use crate::periods::{self, FlowGraph, Metrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Entry,
    Visualize,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Entry, Self::Visualize]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "Enter data"),
            Self::Visualize => write!(f, "Visualize"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// A loaded period together with everything derived from it for display.
#[derive(Debug, Clone)]
pub(crate) struct PlottedPeriod {
    pub(crate) key: String,
    pub(crate) record: PeriodRecord,
    pub(crate) metrics: Metrics,
    pub(crate) graph: FlowGraph,
}

impl PlottedPeriod {
    pub(crate) fn new(key: String, record: PeriodRecord) -> Self {
        let metrics = periods::compute_metrics(&record);
        let graph = periods::build_flow_graph(&record);
        Self {
            key,
            record,
            metrics,
            graph,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) edit_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    // Entry
    pub(crate) form: EntryForm,

    // Visualize
    pub(crate) periods: Vec<String>,
    pub(crate) period_index: usize,
    pub(crate) period_scroll: usize,
    pub(crate) plotted: Option<PlottedPeriod>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(currency: impl Into<String>) -> Self {
        Self {
            running: true,
            screen: Screen::Entry,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            edit_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: currency.into(),

            form: EntryForm::new(PeriodKey::current(), PeriodKey::year_options()),

            periods: Vec::new(),
            period_index: 0,
            period_scroll: 0,
            plotted: None,

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh_periods(&mut self, db: &Database) -> Result<()> {
        self.periods = periods::list_periods(db)?;
        if self.period_index >= self.periods.len() {
            self.period_index = self.periods.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Save the entry form, then clear it for the next submission.
    pub(crate) fn save_form(&mut self, db: &mut Database) -> Result<()> {
        let form = self.form.to_period_form();
        let key = form.period.to_string();
        periods::save_record(db, form)?;
        self.form.clear();
        self.refresh_periods(db)?;
        self.select_period_row(&key);
        if self.plotted.as_ref().is_some_and(|p| p.key == key) {
            let record = periods::load_record(db, &key)?;
            self.plotted = Some(PlottedPeriod::new(key.clone(), record));
        }
        self.set_status(format!("Data saved! ({key})"));
        Ok(())
    }

    /// Load `key` and derive its metrics and flow graph. A malformed or
    /// unknown key is reported on the status line, not as an error.
    pub(crate) fn plot(&mut self, db: &Database, key: &str) -> Result<()> {
        let loaded = key
            .parse::<PeriodKey>()
            .and_then(|period| periods::load_record(db, &period.to_string()));
        match loaded {
            Ok(record) => {
                self.plotted = Some(PlottedPeriod::new(key.to_string(), record));
                self.select_period_row(key);
                self.set_status(format!("Plotted {key}"));
                Ok(())
            }
            Err(e @ (PeriodError::NotFound { .. } | PeriodError::InvalidPeriodKey { .. })) => {
                self.set_status(e.to_string());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn plot_selected(&mut self, db: &Database) -> Result<()> {
        match self.periods.get(self.period_index).cloned() {
            Some(key) => self.plot(db, &key),
            None => {
                self.set_status("No saved periods yet");
                Ok(())
            }
        }
    }

    /// Enter edit mode for the selected form field, if it takes typed input.
    pub(crate) fn begin_edit(&mut self) {
        if !self.form.current_field().is_editable() {
            self.set_status("Use +/- to change month and year");
            return;
        }
        if let Some(seed) = self.form.edit_seed() {
            self.edit_input = seed;
            self.input_mode = InputMode::Editing;
        }
    }

    pub(crate) fn commit_edit(&mut self) {
        let input = std::mem::take(&mut self.edit_input);
        if let Err(msg) = self.form.apply_edit(&input) {
            self.set_status(msg);
        }
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    /// Highlight `key` in the period list and scroll it into view.
    fn select_period_row(&mut self, key: &str) {
        if let Some(idx) = self.periods.iter().position(|p| p == key) {
            self.period_index = idx;
            let page = self.period_page();
            scroll_into_view(idx, &mut self.period_scroll, page);
        }
    }

    /// Rows of the period list that fit inside its bordered block.
    pub(crate) fn period_page(&self) -> usize {
        self.visible_rows.saturating_sub(2).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
