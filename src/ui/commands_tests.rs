#![allow(clippy::unwrap_used)]

use chrono::Month;

use super::app::{App, InputMode, Screen};
use super::commands::*;
use super::form::FormField;
use crate::db::Database;
use crate::models::{CategoryKind, PeriodKey};

fn setup() -> (App, Database) {
    (App::new("NOK"), Database::open_in_memory().unwrap())
}

fn select(app: &mut App, target: FormField) {
    app.form.selected = super::form::EntryForm::fields()
        .iter()
        .position(|f| *f == target)
        .unwrap();
}

// ── Registry ──────────────────────────────────────────────────

#[test]
fn test_aliases_share_descriptions() {
    for (short, long) in [("q", "quit"), ("e", "entry"), ("v", "visualize"), ("w", "save")] {
        assert_eq!(
            COMMANDS.get(short).unwrap().description,
            COMMANDS.get(long).unwrap().description
        );
    }
}

#[test]
fn test_unknown_command_sets_status() {
    let (mut app, mut db) = setup();
    handle_command("frobnicate now", &mut app, &mut db).unwrap();
    assert_eq!(app.status_message, "Unknown command: frobnicate");
    assert!(app.running);
}

#[test]
fn test_blank_command_is_noop() {
    let (mut app, mut db) = setup();
    handle_command("   ", &mut app, &mut db).unwrap();
    assert!(app.status_message.is_empty());
}

#[test]
fn test_quit() {
    let (mut app, mut db) = setup();
    handle_command("q", &mut app, &mut db).unwrap();
    assert!(!app.running);
}

// ── Save / plot flow ──────────────────────────────────────────

#[test]
fn test_save_then_plot() {
    let (mut app, mut db) = setup();
    let period = app.form.period().to_string();
    select(&mut app, FormField::Amount(CategoryKind::Income, "Lønn"));
    app.form.apply_edit("30000").unwrap();
    select(&mut app, FormField::Amount(CategoryKind::Expense, "Mat"));
    app.form.apply_edit("5000").unwrap();

    handle_command("save", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Data saved!"));
    // Form clears on submit
    assert_eq!(app.form.amount(CategoryKind::Income, "Lønn"), 0);
    assert_eq!(app.periods, vec![period.clone()]);

    handle_command(&format!("plot {period}"), &mut app, &mut db).unwrap();
    assert_eq!(app.screen, Screen::Visualize);
    let plotted = app.plotted.as_ref().unwrap();
    assert_eq!(plotted.key, period);
    assert_eq!(plotted.metrics.total_income, 30000);
    assert_eq!(plotted.metrics.total_expense, 5000);
    assert_eq!(plotted.metrics.remaining, 25000);
    assert_eq!(plotted.graph.nodes.len(), 10);
}

#[test]
fn test_plot_unknown_period_reports_not_found() {
    let (mut app, mut db) = setup();
    handle_command("plot 1999_May", &mut app, &mut db).unwrap();
    assert_eq!(app.status_message, "Period not found: 1999_May");
    assert!(app.plotted.is_none());
}

#[test]
fn test_plot_without_periods() {
    let (mut app, mut db) = setup();
    handle_command("p", &mut app, &mut db).unwrap();
    assert_eq!(app.status_message, "No saved periods yet");
}

#[test]
fn test_plot_selected_after_two_saves() {
    let (mut app, mut db) = setup();
    let [this_year, next_year] = app.form.years();
    app.form.select_period(PeriodKey::new(this_year, Month::March));
    handle_command("w", &mut app, &mut db).unwrap();
    app.form.select_period(PeriodKey::new(next_year, Month::April));
    handle_command("w", &mut app, &mut db).unwrap();

    // The most recent save is selected
    assert_eq!(app.period_index, 1);
    handle_command("plot", &mut app, &mut db).unwrap();
    let key = format!("{next_year}_April");
    assert_eq!(app.plotted.as_ref().unwrap().key, key);
}

// ── Period / clear ────────────────────────────────────────────

#[test]
fn test_period_command() {
    let (mut app, mut db) = setup();
    let year = app.form.years()[1];
    handle_command(&format!("period {year} mar"), &mut app, &mut db).unwrap();
    assert_eq!(app.form.period(), PeriodKey::new(year, Month::March));
    assert_eq!(app.screen, Screen::Entry);
}

#[test]
fn test_period_command_rejects_bad_input() {
    let (mut app, mut db) = setup();
    let before = app.form.period();
    handle_command("period 1900 March", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Year must be"));
    handle_command("period", &mut app, &mut db).unwrap();
    assert!(app.status_message.starts_with("Usage"));
    assert_eq!(app.form.period(), before);
}

#[test]
fn test_parse_period_args() {
    let years = [2024, 2025];
    assert_eq!(
        parse_period_args("2025 december", years).unwrap(),
        PeriodKey::new(2025, Month::December)
    );
    assert_eq!(
        parse_period_args("2024 Jun", years).unwrap(),
        PeriodKey::new(2024, Month::June)
    );
    assert!(parse_period_args("2024 ju", years).is_err());
    assert!(parse_period_args("abc March", years).is_err());
    assert!(parse_period_args("2024 Smarch", years).is_err());
}

#[test]
fn test_clear_command() {
    let (mut app, mut db) = setup();
    select(&mut app, FormField::Comment);
    app.form.apply_edit("skal bort").unwrap();
    handle_command("clear", &mut app, &mut db).unwrap();
    assert!(app.form.comment().is_empty());
}

// ── Field editing ─────────────────────────────────────────────

#[test]
fn test_edit_amount_through_app() {
    let (mut app, _db) = setup();
    select(&mut app, FormField::Amount(CategoryKind::Expense, "Mat"));
    app.begin_edit();
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.edit_input, "0");

    app.edit_input = "4 500".into();
    app.commit_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form.amount(CategoryKind::Expense, "Mat"), 4500);
}

#[test]
fn test_edit_selector_stays_normal() {
    let (mut app, _db) = setup();
    select(&mut app, FormField::Month);
    app.begin_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Use +/- to change month and year");
}

#[test]
fn test_cancel_edit_keeps_value() {
    let (mut app, _db) = setup();
    select(&mut app, FormField::Comment);
    app.begin_edit();
    app.edit_input = "draft".into();
    app.cancel_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.form.comment().is_empty());
    assert_eq!(app.status_message, "Edit cancelled");
}

// ── Period list scrolling ─────────────────────────────────────

#[test]
fn test_saved_and_plotted_rows_stay_on_screen() {
    let (mut app, mut db) = setup();
    app.visible_rows = 5;
    let page = app.period_page();
    assert_eq!(page, 3);

    let [this_year, next_year] = app.form.years();
    let mut month = Month::January;
    for i in 0..10 {
        let year = if i < 6 { this_year } else { next_year };
        app.form.select_period(PeriodKey::new(year, month));
        handle_command("w", &mut app, &mut db).unwrap();
        month = month.succ();
    }
    assert_eq!(app.periods.len(), 10);
    assert_eq!(app.period_index, 9);
    assert!(app.period_index >= app.period_scroll);
    assert!(app.period_index < app.period_scroll + page);

    handle_command(&format!("plot {this_year}_January"), &mut app, &mut db).unwrap();
    assert_eq!(app.period_index, 0);
    assert_eq!(app.period_scroll, 0);

    handle_command(&format!("plot {next_year}_September"), &mut app, &mut db).unwrap();
    assert_eq!(app.period_index, 8);
    assert!(app.period_index >= app.period_scroll);
    assert!(app.period_index < app.period_scroll + page);
}

#[test]
fn test_resave_refreshes_plotted_period() {
    let (mut app, mut db) = setup();
    let period = app.form.period();
    select(&mut app, FormField::Amount(CategoryKind::Income, "Lønn"));
    app.form.apply_edit("1000").unwrap();
    handle_command("w", &mut app, &mut db).unwrap();
    handle_command(&format!("plot {period}"), &mut app, &mut db).unwrap();
    assert_eq!(app.plotted.as_ref().unwrap().metrics.total_income, 1000);

    app.form.select_period(period);
    select(&mut app, FormField::Amount(CategoryKind::Income, "Lønn"));
    app.form.apply_edit("2500").unwrap();
    handle_command("w", &mut app, &mut db).unwrap();

    let plotted = app.plotted.as_ref().unwrap();
    assert_eq!(plotted.key, period.to_string());
    assert_eq!(plotted.metrics.total_income, 2500);
}

#[test]
fn test_saving_other_period_keeps_plot() {
    let (mut app, mut db) = setup();
    let [this_year, next_year] = app.form.years();
    app.form.select_period(PeriodKey::new(this_year, Month::March));
    handle_command("w", &mut app, &mut db).unwrap();
    handle_command(&format!("plot {this_year}_March"), &mut app, &mut db).unwrap();

    app.form.select_period(PeriodKey::new(next_year, Month::March));
    handle_command("w", &mut app, &mut db).unwrap();
    assert_eq!(
        app.plotted.as_ref().unwrap().key,
        format!("{this_year}_March")
    );
}

#[test]
fn test_plot_malformed_key_reports_format() {
    let (mut app, mut db) = setup();
    handle_command("plot 2024-jan", &mut app, &mut db).unwrap();
    assert!(
        app.status_message.starts_with("Invalid period key: '2024-jan'"),
        "unexpected status: {}",
        app.status_message
    );
    assert!(app.plotted.is_none());
}
