//! Contact book - main entry point
//!
//! An interactive, in-memory contact book: add contacts, phone numbers and
//! birthdays from a line-oriented prompt. State lives for the process
//! lifetime only.

use anyhow::{Context, Result};
use contact_book::{AddressBook, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize logging (stderr only to avoid polluting the prompt stream
    // on stdout). RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!("Birthday window: {} days", config.birthday_window_days);

    // The one address book for this session: created here, handed to the
    // loop, dropped on exit.
    let mut book = AddressBook::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    contact_book::repl::run(&mut book, &config, stdin.lock(), stdout.lock())?;

    info!("Session ended with {} contact(s) in the book", book.len());
    Ok(())
}
