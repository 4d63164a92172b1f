mod config;
mod db;
mod error;
mod logging;
mod models;
mod periods;
mod run;
mod ui;

use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    config.ensure_dirs()?;
    logging::init(&config.log_path, &config.log_filter)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        db = %config.db_path.display(),
        "starting budgetflow"
    );

    let mut db = db::Database::open(&config.db_path)?;

    match args.len() {
        1 => run::as_tui(&mut db, &config),
        _ => run::as_cli(&args, &mut db, &config),
    }
}
