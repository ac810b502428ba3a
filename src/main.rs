mod config;
mod db;
mod error;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let paths = config::AppPaths::resolve()?;
    if let Err(e) = config::init_logging(&paths.log_path) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    tracing::info!(data_dir = %paths.data_dir.display(), "starting");

    let storage = db::SqliteKeyValueStore::open(&paths.db_path)?;
    let mut store = store::ExpenseStore::open(Box::new(storage));

    match args.len() {
        1 => run::as_tui(&mut store),
        _ => run::as_cli(&args, &mut store),
    }
}
