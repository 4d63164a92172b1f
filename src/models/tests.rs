#![allow(clippy::unwrap_used)]

use chrono::Month;

use super::period::MONTHS;
use super::*;
use crate::error::PeriodError;

// ── PeriodKey ─────────────────────────────────────────────────

#[test]
fn test_period_key_display() {
    let key = PeriodKey::new(2024, Month::January);
    assert_eq!(key.to_string(), "2024_January");
    assert_eq!(
        PeriodKey::new(2025, Month::September).to_string(),
        "2025_September"
    );
}

#[test]
fn test_period_key_parse() {
    let key: PeriodKey = "2024_March".parse().unwrap();
    assert_eq!(key.year, 2024);
    assert_eq!(key.month, Month::March);
}

#[test]
fn test_period_key_roundtrip() {
    // Every month should roundtrip through Display -> FromStr
    for month in MONTHS {
        let key = PeriodKey::new(2026, month);
        let back: PeriodKey = key.to_string().parse().unwrap();
        assert_eq!(key, back, "Roundtrip failed for {key}");
    }
}

#[test]
fn test_period_key_rejects_malformed() {
    for bad in [
        "",
        "2024",
        "2024-January",
        "abcd_January",
        "2024_Smarch",
        "2024_january",
        "2024_Jan",
    ] {
        let result = bad.parse::<PeriodKey>();
        assert!(
            matches!(result, Err(PeriodError::InvalidPeriodKey { .. })),
            "Expected rejection for {bad:?}"
        );
    }
}

#[test]
fn test_year_options_are_consecutive() {
    let [this_year, next_year] = PeriodKey::year_options();
    assert_eq!(next_year, this_year + 1);
    assert_eq!(PeriodKey::current().year, this_year);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_category_label_sets() {
    assert_eq!(INCOME_CATEGORIES.len(), 2);
    assert_eq!(EXPENSE_CATEGORIES.len(), 7);
    assert_eq!(INCOME_CATEGORIES[0], "Lønn");
    assert!(EXPENSE_CATEGORIES.contains(&"Lån hus"));
    assert!(EXPENSE_CATEGORIES.contains(&"Sparing"));
}

#[test]
fn test_category_kind_of_label() {
    assert_eq!(CategoryKind::of_label("Lønn"), Some(CategoryKind::Income));
    assert_eq!(CategoryKind::of_label("Mat"), Some(CategoryKind::Expense));
    assert_eq!(CategoryKind::of_label("Groceries"), None);
}

#[test]
fn test_category_kind_parse_roundtrip() {
    for kind in [CategoryKind::Income, CategoryKind::Expense] {
        assert_eq!(CategoryKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(CategoryKind::parse("INCOME"), Some(CategoryKind::Income));
    assert_eq!(CategoryKind::parse("transfer"), None);
}

// ── Amounts ───────────────────────────────────────────────────

#[test]
fn test_amounts_zeroed_keeps_label_order() {
    let amounts = Amounts::zeroed(EXPENSE_CATEGORIES);
    let labels: Vec<&str> = amounts.iter().map(|(l, _)| l).collect();
    assert_eq!(labels, EXPENSE_CATEGORIES);
    assert_eq!(amounts.total(), 0);
}

#[test]
fn test_amounts_set_and_get() {
    let mut amounts = Amounts::zeroed(INCOME_CATEGORIES);
    amounts.set("Lønn", 30000).unwrap();
    assert_eq!(amounts.get("Lønn"), Some(30000));
    assert_eq!(amounts.get("Annen inntekt"), Some(0));
    assert_eq!(amounts.get("Mat"), None);
}

#[test]
fn test_amounts_set_unknown_label() {
    let mut amounts = Amounts::zeroed(INCOME_CATEGORIES);
    let err = amounts.set("Mat", 10).unwrap_err();
    assert!(matches!(err, PeriodError::UnknownCategory { label } if label == "Mat"));
}

#[test]
fn test_amounts_total_does_not_overflow_u32() {
    let amounts: Amounts = [("a", u32::MAX), ("b", u32::MAX)].into_iter().collect();
    assert_eq!(amounts.total(), 2 * i64::from(u32::MAX));
}

#[test]
fn test_amounts_reset() {
    let mut amounts: Amounts = [("Lønn", 100), ("Annen inntekt", 50)].into_iter().collect();
    amounts.reset();
    assert_eq!(amounts.len(), 2);
    assert_eq!(amounts.total(), 0);
}

// ── PeriodForm ────────────────────────────────────────────────

#[test]
fn test_period_form_blank() {
    let form = PeriodForm::blank(PeriodKey::new(2024, Month::May));
    assert_eq!(form.incomes.len(), 2);
    assert_eq!(form.expenses.len(), 7);
    assert!(form.comment.is_empty());
    assert_eq!(form.incomes.total() + form.expenses.total(), 0);
}

#[test]
fn test_period_form_set_amount_routes_by_label() {
    let mut form = PeriodForm::blank(PeriodKey::new(2024, Month::May));
    form.set_amount("Lønn", 30000).unwrap();
    form.set_amount("Mat", 5000).unwrap();
    assert_eq!(form.incomes.get("Lønn"), Some(30000));
    assert_eq!(form.expenses.get("Mat"), Some(5000));
    assert!(form.set_amount("Bonus", 1).is_err());
}

#[test]
fn test_month_from_name() {
    assert_eq!(month_from_name("January"), Some(Month::January));
    assert_eq!(month_from_name("september"), Some(Month::September));
    assert_eq!(month_from_name("Sep"), Some(Month::September));
    assert_eq!(month_from_name("ju"), None);
    assert_eq!(month_from_name("Juni"), None);
    assert_eq!(month_from_name(""), None);
}
