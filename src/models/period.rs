use chrono::{Datelike, Local, Month};
use std::str::FromStr;

use super::category::{Amounts, CategoryKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::error::PeriodError;

pub(crate) const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Look up a month by its English name or a prefix of at least three
/// letters, ignoring case.
pub(crate) fn month_from_name(name: &str) -> Option<Month> {
    let lower = name.to_lowercase();
    MONTHS.iter().copied().find(|m| {
        let full = m.name().to_lowercase();
        full == lower || (lower.chars().count() >= 3 && full.starts_with(&lower))
    })
}

/// A (year, month) budgeting unit. Displays as `"{year}_{MonthName}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PeriodKey {
    pub year: i32,
    pub month: Month,
}

impl PeriodKey {
    pub(crate) fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub(crate) fn current() -> Self {
        let today = Local::now().date_naive();
        let month = MONTHS
            .get(today.month0() as usize)
            .copied()
            .unwrap_or(Month::January);
        Self::new(today.year(), month)
    }

    /// Years offered by the entry form: this year and next.
    pub(crate) fn year_options() -> [i32; 2] {
        let year = Local::now().year();
        [year, year + 1]
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.year, self.month.name())
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError::InvalidPeriodKey { key: s.to_string() };
        let (year, month) = s.split_once('_').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month = MONTHS
            .iter()
            .find(|m| m.name() == month)
            .copied()
            .ok_or_else(invalid)?;
        Ok(Self::new(year, month))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PeriodRecord {
    pub incomes: Amounts,
    pub expenses: Amounts,
    pub comment: String,
}

/// Form data submitted for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PeriodForm {
    pub period: PeriodKey,
    pub incomes: Amounts,
    pub expenses: Amounts,
    pub comment: String,
}

impl PeriodForm {
    /// All canonical labels present with amount 0.
    pub(crate) fn blank(period: PeriodKey) -> Self {
        Self {
            period,
            incomes: Amounts::zeroed(INCOME_CATEGORIES),
            expenses: Amounts::zeroed(EXPENSE_CATEGORIES),
            comment: String::new(),
        }
    }

    /// Set an amount by label, routing to incomes or expenses.
    pub(crate) fn set_amount(&mut self, label: &str, amount: u32) -> Result<(), PeriodError> {
        match CategoryKind::of_label(label) {
            Some(CategoryKind::Income) => self.incomes.set(label, amount),
            Some(CategoryKind::Expense) => self.expenses.set(label, amount),
            None => Err(PeriodError::UnknownCategory {
                label: label.to_string(),
            }),
        }
    }
}
