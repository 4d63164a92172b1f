use crate::models::{CategoryKind, PeriodForm, PeriodKey, EXPENSE_CATEGORIES, INCOME_CATEGORIES};

/// Increment applied by `+`/`-` on amount fields.
pub(crate) const AMOUNT_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Month,
    Year,
    Amount(CategoryKind, &'static str),
    Comment,
}

impl FormField {
    pub(crate) fn is_editable(&self) -> bool {
        matches!(self, Self::Amount(..) | Self::Comment)
    }
}

/// State of the entry screen: the period selectors, one amount per label and
/// the comment.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    years: [i32; 2],
    data: PeriodForm,
    pub(crate) selected: usize,
}

impl EntryForm {
    pub(crate) fn new(period: PeriodKey, years: [i32; 2]) -> Self {
        let period = if years.contains(&period.year) {
            period
        } else {
            PeriodKey::new(years[0], period.month)
        };
        Self {
            years,
            data: PeriodForm::blank(period),
            selected: 0,
        }
    }

    pub(crate) fn period(&self) -> PeriodKey {
        self.data.period
    }

    pub(crate) fn comment(&self) -> &str {
        &self.data.comment
    }

    pub(crate) fn years(&self) -> [i32; 2] {
        self.years
    }

    pub(crate) fn fields() -> Vec<FormField> {
        let mut fields = vec![FormField::Month, FormField::Year];
        for kind in [CategoryKind::Income, CategoryKind::Expense] {
            fields.extend(kind.labels().iter().map(|l| FormField::Amount(kind, *l)));
        }
        fields.push(FormField::Comment);
        fields
    }

    pub(crate) fn field_count() -> usize {
        2 + INCOME_CATEGORIES.len() + EXPENSE_CATEGORIES.len() + 1
    }

    pub(crate) fn current_field(&self) -> FormField {
        Self::fields()
            .get(self.selected)
            .copied()
            .unwrap_or(FormField::Month)
    }

    pub(crate) fn amount(&self, kind: CategoryKind, label: &str) -> u32 {
        let amounts = match kind {
            CategoryKind::Income => &self.data.incomes,
            CategoryKind::Expense => &self.data.expenses,
        };
        amounts.get(label).unwrap_or(0)
    }

    pub(crate) fn move_down(&mut self) {
        if self.selected + 1 < Self::field_count() {
            self.selected += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn select_period(&mut self, period: PeriodKey) {
        self.data.period = period;
    }

    /// Step the selected field: months and years cycle, amounts move by
    /// `AMOUNT_STEP` and never go below zero.
    pub(crate) fn adjust(&mut self, delta: i32) {
        match self.current_field() {
            FormField::Month => {
                let month = self.data.period.month;
                self.data.period.month = if delta >= 0 {
                    month.succ()
                } else {
                    month.pred()
                };
            }
            FormField::Year => {
                let idx = self
                    .years
                    .iter()
                    .position(|y| *y == self.data.period.year)
                    .unwrap_or(0);
                self.data.period.year = self.years[(idx + 1) % self.years.len()];
            }
            FormField::Amount(kind, label) => {
                let current = self.amount(kind, label);
                let next = if delta >= 0 {
                    current.saturating_add(AMOUNT_STEP)
                } else {
                    current.saturating_sub(AMOUNT_STEP)
                };
                self.set_amount(label, next);
            }
            FormField::Comment => {}
        }
    }

    fn set_amount(&mut self, label: &'static str, amount: u32) {
        let result = self.data.set_amount(label, amount);
        debug_assert!(result.is_ok(), "form label {label} has no amount slot");
    }

    /// Text to seed the edit line with for the selected field.
    pub(crate) fn edit_seed(&self) -> Option<String> {
        match self.current_field() {
            FormField::Amount(kind, label) => Some(self.amount(kind, label).to_string()),
            FormField::Comment => Some(self.data.comment.clone()),
            FormField::Month | FormField::Year => None,
        }
    }

    /// Apply typed input to the selected field.
    pub(crate) fn apply_edit(&mut self, input: &str) -> Result<(), String> {
        match self.current_field() {
            FormField::Amount(_, label) => {
                let amount = parse_amount(input)?;
                self.set_amount(label, amount);
                Ok(())
            }
            FormField::Comment => {
                self.data.comment = input.to_string();
                Ok(())
            }
            FormField::Month | FormField::Year => Err("Field is not editable".into()),
        }
    }

    pub(crate) fn to_period_form(&self) -> PeriodForm {
        self.data.clone()
    }

    /// Reset amounts and comment, keeping the selected period.
    pub(crate) fn clear(&mut self) {
        self.data.incomes.reset();
        self.data.expenses.reset();
        self.data.comment.clear();
        self.selected = 0;
    }
}

/// Parse a non-negative whole amount, accepting spaces as digit grouping.
pub(crate) fn parse_amount(input: &str) -> Result<u32, String> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(0);
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("Not a whole non-negative amount: {input}"));
    }
    cleaned
        .parse::<u32>()
        .map_err(|_| format!("Amount too large: {input}"))
}
