use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::models::{month_from_name, PeriodForm, PeriodKey};
use crate::periods;
use crate::ui::form::parse_amount;
use crate::ui::util::{format_amount, pad_right};

pub(crate) fn as_cli(args: &[String], db: &mut Database, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "list" | "ls" => cli_list(db),
        "show" => cli_show(&args[2..], db, config),
        "save" => cli_save(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budgetflow: monthly income and expense tracker");
    println!();
    println!("Usage: budgetflow [command]");
    println!();
    println!("Commands:");
    println!("  (none)                              Launch interactive TUI");
    println!("  list                                List saved periods");
    println!("  show <year>_<Month>                 Print totals and flows for a period");
    println!("  save <year> <month> [Label=amount]  Save a period (unlisted labels are 0)");
    println!("    --comment <text>                  Comment stored with the period");
    println!("  --help, -h                          Show this help");
    println!("  --version, -V                       Show version");
}

fn cli_list(db: &Database) -> Result<()> {
    let keys = periods::list_periods(db)?;
    if keys.is_empty() {
        println!("No saved periods.");
        return Ok(());
    }
    for key in &keys {
        println!("  {key}");
    }
    println!();
    println!("{} saved period(s)", keys.len());
    Ok(())
}

fn cli_show(args: &[String], db: &Database, config: &Config) -> Result<()> {
    let key: PeriodKey = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: budgetflow show <year>_<Month>"))?
        .parse()?;
    let record = periods::load_record(db, &key.to_string())?;
    let metrics = periods::compute_metrics(&record);
    let graph = periods::build_flow_graph(&record);
    let currency = config.currency.as_str();

    println!();
    println!("  {key}");
    println!("  {}", "─".repeat(40));
    println!(
        "  Total income:     {:>16}",
        format_amount(metrics.total_income, currency)
    );
    println!(
        "  Total expenses:   {:>16}",
        format_amount(metrics.total_expense, currency)
    );
    println!(
        "  Remaining:        {:>16}",
        format_amount(metrics.remaining, currency)
    );
    if record.incomes.is_empty() && record.expenses.is_empty() {
        println!("  (no amounts recorded)");
    }
    if !record.comment.is_empty() {
        println!("  Comment:          {}", record.comment);
    }

    println!();
    println!("  Flows");
    println!("  {}", "─".repeat(40));
    for edge in &graph.edges {
        let source = graph.label(edge.source);
        let target = graph.label(edge.target);
        println!(
            "  {} -> {} {:>16}",
            pad_right(source, 20),
            pad_right(target, 20),
            format_amount(i64::from(edge.weight), currency)
        );
    }
    println!();
    Ok(())
}

fn cli_save(args: &[String], db: &mut Database) -> Result<()> {
    let form = parse_save_args(args)?;
    let key = form.period.to_string();
    periods::save_record(db, form)?;
    info!(period = %key, "saved from command line");
    println!("Data saved! ({key})");
    Ok(())
}

/// Parse `<year> <month> [Label=amount ...] [--comment <text>]` into a form.
/// Labels not given keep amount 0.
pub(crate) fn parse_save_args(args: &[String]) -> Result<PeriodForm> {
    let usage = "Usage: budgetflow save <year> <month> [Label=amount ...] [--comment <text>]";
    let (year, month) = match args {
        [year, month, ..] => (year, month),
        _ => anyhow::bail!(usage),
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year: {year}"))?;
    let month = month_from_name(month).ok_or_else(|| anyhow::anyhow!("Unknown month: {month}"))?;

    let mut form = PeriodForm::blank(PeriodKey::new(year, month));
    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        if arg == "--comment" {
            form.comment = rest
                .next()
                .ok_or_else(|| anyhow::anyhow!("--comment needs a value"))?
                .clone();
            continue;
        }
        let (label, amount) = arg
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected Label=amount, got: {arg}"))?;
        let amount = parse_amount(amount).map_err(|e| anyhow::anyhow!(e))?;
        form.set_amount(label.trim(), amount)?;
    }
    Ok(form)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
