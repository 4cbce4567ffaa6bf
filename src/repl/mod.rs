//! The command loop: text in, address-book calls, text out.
//!
//! Reads one command per line from `input`, dispatches it against the
//! address book, and writes replies to `output`. All typed failures collapse
//! into the fixed user-facing strings at this boundary; the loop only
//! terminates on `close`/`exit` or end of input, never on a failed command.

pub mod command;

pub use command::Command;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{BookError, CommandError};
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::debug;

/// Fixed reply for validation, arity, missing-phone, and duplicate-birthday
/// failures. No distinction is surfaced between a wrong argument count and a
/// bad value.
const MSG_GIVE_NAME_AND_PHONE: &str = "Give me name and phone please.";

/// Fixed reply for lookups of contacts that do not exist.
const MSG_NO_SUCH_RECORD: &str = "No such record exists";

/// Fixed reply for unrecognized commands.
const MSG_INVALID_COMMAND: &str = "Invalid command.";

/// Run the REPL until `close`/`exit` or end of input.
///
/// Generic over the input/output streams so sessions can be scripted in
/// tests; `main` passes locked stdin/stdout. Blank lines are skipped without
/// a reply. End of input behaves like `exit`.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    config: &Config,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                debug!("rejected input: {}", err);
                writeln!(output, "{}", reply_for_command_error(&err))?;
                continue;
            }
        };

        if command == Command::Exit {
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        writeln!(output, "{}", dispatch(book, config, command))?;
    }
}

/// Execute one parsed command against the book and produce the reply line.
///
/// Typed failures collapse into the fixed user-facing strings here; the
/// detail is kept for the debug log.
pub fn dispatch(book: &mut AddressBook, config: &Config, command: Command) -> String {
    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add {
            name,
            phone,
            birthday,
        } => book.add_contact(&name, &phone, birthday.as_deref()),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => book.change_phone(&name, &old_phone, &new_phone),
        Command::Phone { name } => book.phones(&name),
        Command::All => Ok(book.render_all()),
        Command::AddBirthday { name, birthday } => book.add_birthday(&name, &birthday),
        Command::ShowBirthday { name } => book.show_birthday(&name),
        Command::Birthdays => Ok(book.upcoming_birthdays(
            Local::now().date_naive(),
            config.birthday_window_days,
        )),
        // The loop exits before dispatching Exit; kept total for direct calls.
        Command::Exit => Ok("Good bye!".to_string()),
    };

    result.unwrap_or_else(|err| {
        debug!("command failed: {}", err);
        reply_for_book_error(&err).to_string()
    })
}

fn reply_for_book_error(err: &BookError) -> &'static str {
    match err {
        BookError::ContactNotFound(_) => MSG_NO_SUCH_RECORD,
        BookError::PhoneNotFound(_)
        | BookError::BirthdayAlreadySet
        | BookError::Validation(_) => MSG_GIVE_NAME_AND_PHONE,
    }
}

fn reply_for_command_error(err: &CommandError) -> &'static str {
    match err {
        CommandError::Unknown(_) => MSG_INVALID_COMMAND,
        CommandError::BadArity { .. } | CommandError::Empty => MSG_GIVE_NAME_AND_PHONE,
    }
}
