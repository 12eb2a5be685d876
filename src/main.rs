mod db;
mod models;
mod run;

use anyhow::{Context, Result};

/// Store file, resolved against the working directory.
const DB_FILE_NAME: &str = "expenses.db";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let db_path = get_db_path()?;
    run::print_discovery(&db_path, &mut std::io::stdout())?;

    let tracker = db::Tracker::open(&db_path)?;
    log::info!("tracking expenses in {}", tracker.table());
    run::as_cli(tracker)
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    Ok(cwd.join(DB_FILE_NAME))
}
