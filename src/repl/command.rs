//! Command-line parsing for the REPL.
//!
//! One command per line, whitespace-tokenized; the command token is matched
//! case-insensitively, arguments are taken verbatim.

use crate::error::CommandError;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone> [birthday]`
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// `change <name> <old_phone> <new_phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <birthday>`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `close` / `exit`
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// # Errors
    ///
    /// `CommandError::Empty` for a blank line, `CommandError::Unknown` for
    /// an unrecognized command token, and `CommandError::BadArity` when the
    /// argument count does not match the command (extra arguments included).
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match command.as_str() {
            "hello" => Self::no_args(&command, &args, Command::Hello),
            "add" => match args.as_slice() {
                [name, phone] => Ok(Command::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                    birthday: None,
                }),
                [name, phone, birthday] => Ok(Command::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                    birthday: Some((*birthday).to_string()),
                }),
                _ => Err(CommandError::BadArity {
                    command: command.clone(),
                }),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone] => Ok(Command::Change {
                    name: (*name).to_string(),
                    old_phone: (*old_phone).to_string(),
                    new_phone: (*new_phone).to_string(),
                }),
                _ => Err(CommandError::BadArity {
                    command: command.clone(),
                }),
            },
            "phone" => match args.as_slice() {
                [name] => Ok(Command::Phone {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::BadArity {
                    command: command.clone(),
                }),
            },
            "all" => Self::no_args(&command, &args, Command::All),
            "add-birthday" => match args.as_slice() {
                [name, birthday] => Ok(Command::AddBirthday {
                    name: (*name).to_string(),
                    birthday: (*birthday).to_string(),
                }),
                _ => Err(CommandError::BadArity {
                    command: command.clone(),
                }),
            },
            "show-birthday" => match args.as_slice() {
                [name] => Ok(Command::ShowBirthday {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::BadArity {
                    command: command.clone(),
                }),
            },
            "birthdays" => Self::no_args(&command, &args, Command::Birthdays),
            "close" | "exit" => Self::no_args(&command, &args, Command::Exit),
            _ => Err(CommandError::Unknown(command.clone())),
        }
    }

    fn no_args(command: &str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
        if args.is_empty() {
            Ok(parsed)
        } else {
            Err(CommandError::BadArity {
                command: command.to_string(),
            })
        }
    }
}
