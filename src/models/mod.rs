mod category;
mod period;

pub(crate) use category::{Amounts, CategoryKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub(crate) use period::{month_from_name, PeriodForm, PeriodKey, PeriodRecord};

#[cfg(test)]
mod tests;
