use crate::error::PeriodError;

pub(crate) const INCOME_CATEGORIES: &[&str] = &["Lønn", "Annen inntekt"];

pub(crate) const EXPENSE_CATEGORIES: &[&str] = &[
    "Lån hus",
    "Lån bil",
    "Mat",
    "Forsikringer",
    "Kommunale avgifter",
    "Diverse utgifter",
    "Sparing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The fixed label set for this kind.
    pub(crate) fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_CATEGORIES,
            Self::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Which label set `label` belongs to, if any.
    pub(crate) fn of_label(label: &str) -> Option<Self> {
        if INCOME_CATEGORIES.contains(&label) {
            Some(Self::Income)
        } else if EXPENSE_CATEGORIES.contains(&label) {
            Some(Self::Expense)
        } else {
            None
        }
    }
}

/// Per-record amounts keyed by category label, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Amounts {
    entries: Vec<(String, u32)>,
}

impl Amounts {
    /// One zero entry per label, in the given order.
    pub(crate) fn zeroed(labels: &[&str]) -> Self {
        Self {
            entries: labels.iter().map(|l| (l.to_string(), 0)).collect(),
        }
    }

    pub(crate) fn push(&mut self, label: impl Into<String>, amount: u32) {
        self.entries.push((label.into(), amount));
    }

    /// Overwrite the amount of an existing label.
    pub(crate) fn set(&mut self, label: &str, amount: u32) -> Result<(), PeriodError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(l, _)| l == label)
            .ok_or_else(|| PeriodError::UnknownCategory {
                label: label.to_string(),
            })?;
        entry.1 = amount;
        Ok(())
    }

    pub(crate) fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, amount)| *amount)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(l, a)| (l.as_str(), *a))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn total(&self) -> i64 {
        self.entries.iter().map(|(_, a)| i64::from(*a)).sum()
    }

    pub(crate) fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.1 = 0;
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Amounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(l, a)| (l.into(), a)).collect(),
        }
    }
}
