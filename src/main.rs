use crate::batch::run_batch;
use crate::cli::Cli;
use clap::Parser;

mod batch;
mod cli;
mod config;
mod domain;
mod errors;
mod logging;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_tracing();

    // 1️⃣ Build the run config: defaults, then config file, then flags
    let cfg = match Cli::parse().into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Sample every file; per-file failures are logged and skipped
    run_batch(&cfg);
}
