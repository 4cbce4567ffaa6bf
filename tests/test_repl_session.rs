//! Scripted REPL sessions checked against exact transcripts.
//!
//! The loop is generic over its input/output streams, so each test feeds a
//! whole session through a cursor and asserts on everything the user would
//! have seen, prompts included.

use chrono::{Datelike, Days, Local};
use contact_book::{repl, AddressBook, Config};
use std::io::Cursor;

fn run_session(input: &str) -> String {
    let mut book = AddressBook::new();
    run_session_with(&mut book, input)
}

fn run_session_with(book: &mut AddressBook, input: &str) -> String {
    let mut output = Vec::new();
    let config = Config::default();
    repl::run(book, &config, Cursor::new(input.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_hello_then_exit_transcript() {
    let transcript = run_session("hello\nexit\n");
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: How can I help you?\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_close_terminates_like_exit() {
    let transcript = run_session("close\n");
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_end_of_input_terminates_cleanly() {
    // No exit command at all: the loop says goodbye at EOF.
    let transcript = run_session("hello\n");
    assert!(transcript.ends_with("Good bye!\n"));
}

#[test]
fn test_blank_lines_reprompt_without_reply() {
    let transcript = run_session("\n   \nexit\n");
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Enter a command: Enter a command: Good bye!\n"
    );
}

#[test]
fn test_add_and_phone_flow() {
    let transcript = run_session(
        "add alice 1234567890\n\
         add alice 0987654321\n\
         phone alice\n\
         exit\n",
    );
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Contact added.\n\
         Enter a command: Phone added to contact alice.\n\
         Enter a command: 1234567890, 0987654321\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_change_and_all_flow() {
    let transcript = run_session(
        "add bob 1112223333 01-01-2000\n\
         change bob 1112223333 4445556666\n\
         all\n\
         exit\n",
    );
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Contact added.\n\
         Enter a command: Phone number updated.\n\
         Enter a command: bob: 4445556666 (born 01-01-2000)\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_birthday_commands_flow() {
    let transcript = run_session(
        "add alice 1234567890\n\
         show-birthday alice\n\
         add-birthday alice 24-03-1995\n\
         show-birthday alice\n\
         add-birthday alice 25-03-1995\n\
         exit\n",
    );
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Contact added.\n\
         Enter a command: No birthday set for alice.\n\
         Enter a command: Birthday added.\n\
         Enter a command: 24-03-1995\n\
         Enter a command: Give me name and phone please.\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_birthdays_command_uses_the_current_date() {
    // A birthday three days from now (year 2000 keeps Feb 29 valid).
    let upcoming = Local::now().date_naive() + Days::new(3);
    let birthday = format!("{:02}-{:02}-2000", upcoming.day(), upcoming.month());

    let transcript = run_session(&format!(
        "add bob 1112223333 {}\nbirthdays\nexit\n",
        birthday
    ));
    assert!(transcript.contains(&format!("{}: bob", upcoming)));
}

#[test]
fn test_birthdays_command_with_nothing_upcoming() {
    let transcript = run_session("birthdays\nexit\n");
    assert!(transcript.contains("No upcoming birthdays.\n"));
}

#[test]
fn test_unknown_command_reports_and_leaves_state_unchanged() {
    let mut book = AddressBook::new();
    let transcript = run_session_with(&mut book, "frobnicate\nall\nexit\n");

    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Invalid command.\n\
         Enter a command: No contacts saved.\n\
         Enter a command: Good bye!\n"
    );
    assert!(book.is_empty());
}

#[test]
fn test_arity_and_lookup_error_replies() {
    let transcript = run_session(
        "add alice\n\
         phone ghost\n\
         add alice notaphone\n\
         exit\n",
    );
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: Give me name and phone please.\n\
         Enter a command: No such record exists\n\
         Enter a command: Give me name and phone please.\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_command_token_is_case_insensitive() {
    let transcript = run_session("HELLO\nExit\n");
    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: How can I help you?\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_state_survives_across_commands_within_a_session() {
    let mut book = AddressBook::new();
    run_session_with(&mut book, "add alice 1234567890\nexit\n");

    // The caller owns the book; a second session sees the same records.
    let transcript = run_session_with(&mut book, "phone alice\nexit\n");
    assert!(transcript.contains("1234567890\n"));
}
