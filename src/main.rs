use std::{
    io::stdout,
    process::exit,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use sparse_life::{config::USAGE, pattern, Config, Driver, Error, HashedWorld, Result};
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let world: HashedWorld = match &config.pattern {
        Some(path) => pattern::load(path)?,
        None => pattern::glider(),
    };

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))?;

    let report = Driver::new(world, &config).run(&mut stdout().lock(), &stop)?;
    tracing::info!(
        generations = report.generations,
        population = report.population,
        reason = ?report.reason,
        "done"
    );
    Ok(())
}

pub fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sparse_life=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("[error] {error}");
        if matches!(
            error,
            Error::MissingValue(_) | Error::InvalidValue { .. } | Error::UnknownArgument(_)
        ) {
            eprintln!("{USAGE}");
        }
        exit(1);
    }
}
