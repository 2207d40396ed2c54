mod config;
mod export;
mod ledger;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    logging::init(&config.log_path(), &config.log_filter)?;

    let store = store::FileStore::open(&config.data_dir).with_context(|| {
        format!("Failed to open ledger store in {}", config.data_dir.display())
    })?;
    let mut ledger = ledger::Ledger::open(store::LedgerRepository::new(Box::new(store)));

    match args.len() {
        1 => run::as_tui(&config, &mut ledger),
        2.. => run::as_cli(&args, &config, &mut ledger),
        _ => {
            eprintln!("Usage: pocketbudget [command]");
            Ok(())
        }
    }
}
