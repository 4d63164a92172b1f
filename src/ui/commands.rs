use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::db::Database;
use crate::models::{month_from_name, PeriodKey};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("e", "Go to Enter data", cmd_entry, r);
    register_command!("entry", "Go to Enter data", cmd_entry, r);
    register_command!("v", "Go to Visualize", cmd_visualize, r);
    register_command!("visualize", "Go to Visualize", cmd_visualize, r);
    register_command!("w", "Save the entry form", cmd_save, r);
    register_command!("save", "Save the entry form", cmd_save, r);
    register_command!("p", "Plot a period (e.g. :p 2024_January)", cmd_plot, r);
    register_command!(
        "plot",
        "Plot a period (e.g. :plot 2024_January)",
        cmd_plot,
        r
    );
    register_command!(
        "period",
        "Select form period (e.g. :period 2024 March)",
        cmd_period,
        r
    );
    register_command!("clear", "Clear the entry form", cmd_clear, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

/// Dispatch one `:` command line.
pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    let (name, args) = match input.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (input, ""),
    };
    match COMMANDS.get(name) {
        Some(cmd) => (cmd.run)(args, app, db),
        None => {
            app.set_status(format!("Unknown command: {name}"));
            Ok(())
        }
    }
}

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_entry(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Entry;
    Ok(())
}

fn cmd_visualize(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Visualize;
    app.refresh_periods(db)
}

fn cmd_save(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.save_form(db)
}

fn cmd_plot(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Visualize;
    app.refresh_periods(db)?;
    if args.is_empty() {
        app.plot_selected(db)
    } else {
        app.plot(db, args)
    }
}

fn cmd_period(args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    match parse_period_args(args, app.form.years()) {
        Ok(period) => {
            app.form.select_period(period);
            app.screen = Screen::Entry;
            app.set_status(format!("Period: {period}"));
        }
        Err(msg) => app.set_status(msg),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.form.clear();
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// Parse `<year> <month>` where the year must be one the form offers and the
/// month is a full English name or its three-letter prefix, any case.
pub(crate) fn parse_period_args(args: &str, years: [i32; 2]) -> Result<PeriodKey, String> {
    let usage = || "Usage: :period <year> <month>".to_string();
    let mut parts = args.split_whitespace();
    let year = parts.next().ok_or_else(usage)?;
    let month = parts.next().ok_or_else(usage)?;

    let year: i32 = year.parse().map_err(|_| format!("Invalid year: {year}"))?;
    if !years.contains(&year) {
        return Err(format!("Year must be {} or {}", years[0], years[1]));
    }
    let month = month_from_name(month).ok_or_else(|| format!("Unknown month: {month}"))?;
    Ok(PeriodKey::new(year, month))
}
