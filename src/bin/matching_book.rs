// src/bin/matching_book.rs

use matching_book::command::Dispatcher;
use std::io::{self, BufWriter};
use tracing::{Level, info};

fn setup_logger() {
    let level = std::env::var("LOGLEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    setup_logger();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BOOK".to_string());
    info!("Starting matching session for {}", symbol);

    let mut dispatcher = Dispatcher::new(&symbol);
    let stdin = io::stdin();
    let stdout = io::stdout();
    dispatcher.run(stdin.lock(), BufWriter::new(stdout.lock()))?;

    info!(
        "Session for {} finished with {} resting orders",
        symbol,
        dispatcher.book().order_count()
    );
    Ok(())
}
