use crate::models::PeriodRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Metrics {
    pub total_income: i64,
    pub total_expense: i64,
    /// Negative when expenses exceed income.
    pub remaining: i64,
}

impl Metrics {
    pub(crate) fn from_record(record: &PeriodRecord) -> Self {
        let total_income = record.incomes.total();
        let total_expense = record.expenses.total();
        Self {
            total_income,
            total_expense,
            remaining: total_income - total_expense,
        }
    }

    pub(crate) fn is_over_budget(&self) -> bool {
        self.remaining < 0
    }
}
