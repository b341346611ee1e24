#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rolodex_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rolodex"));
    cmd.env("ROLODEX_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("ROLODEX_LOG");
    cmd
}

#[test]
fn test_add_and_list_contacts() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["add", "Alice", "1234567890"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact Alice with phone 1234567890 added.",
        ));

    rolodex_cmd(&home)
        .args(["add-birthday", "alice", "05.06.1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday for alice added."));

    rolodex_cmd(&home)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: Alice, phones: 1234567890, birthday: 05.06.1990",
        ));

    assert!(home.path().join("addressbook.json").exists());
}

#[test]
fn test_duplicate_add_fails() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["add", "Alice", "1234567890"])
        .assert()
        .success();

    rolodex_cmd(&home)
        .args(["add", "Alice", "1111111111"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact already exists"));
}

#[test]
fn test_invalid_phone_is_reported() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["add", "Alice", "12-34"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The phone number must contain only 10 digits",
        ));

    assert!(!home.path().join("addressbook.json").exists());
}

#[test]
fn test_phone_lookup_and_change() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["add", "Bob", "5555555555"])
        .assert()
        .success();

    rolodex_cmd(&home)
        .args(["change", "Bob", "5555555555", "6666666666"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone for Bob changed from 5555555555 to 6666666666.",
        ));

    rolodex_cmd(&home)
        .args(["phone", "6666666666"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Bob"));

    rolodex_cmd(&home)
        .args(["phone", "5555555555"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number not found"));
}

#[test]
fn test_one_shot_failure_prints_prompt_text() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["show-birthday", "Nobody"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Contact not found"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_delete_missing_contact_succeeds() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["delete", "Nobody"])
        .assert()
        .success();
}

#[test]
fn test_interactive_session() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .write_stdin(
            "hello\n\
             add Alice 1234567890\n\
             add Alice\n\
             show-birthday Alice\n\
             jump\n\
             \n\
             all\n\
             exit\n\
             all\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact Alice with phone 1234567890 added."))
        .stdout(predicate::str::contains("Not enough arguments."))
        .stdout(predicate::str::contains("No birthday for Alice."))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Please enter a command."))
        .stdout(predicate::str::contains("Contact name: Alice, phones: 1234567890"))
        .stdout(predicate::str::contains("Good bye!"));

    // The session saved its changes
    rolodex_cmd(&home)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Alice"));
}

#[test]
fn test_interactive_session_ends_at_eof() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .arg("repl")
        .write_stdin("add Carol 0000000001\n")
        .assert()
        .success();

    rolodex_cmd(&home)
        .args(["phone", "0000000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Carol"));
}

#[test]
fn test_interactive_session_survives_non_utf8_line() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .write_stdin(b"hello\n\xff\xfe\nadd Alice 1234567890\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Contact Alice with phone 1234567890 added."))
        .stdout(predicate::str::contains("Good bye!"));

    rolodex_cmd(&home)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Alice, phones: 1234567890"));
}

#[test]
fn test_corrupt_book_starts_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("addressbook.json"), "not json at all").unwrap();

    rolodex_cmd(&home)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts saved."));
}

#[test]
fn test_birthdays_with_wide_window() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .args(["add", "Dana", "1234567890"])
        .assert()
        .success();

    rolodex_cmd(&home)
        .args(["add-birthday", "Dana", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format. Use DD.MM.YYYY"));

    // A window of a full year covers any birthday this calendar year
    rolodex_cmd(&home)
        .args(["add-birthday", "Dana", "01.07.1990"])
        .assert()
        .success();

    rolodex_cmd(&home)
        .args(["birthdays", "--days", "366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana - 01.07.1990"));

    rolodex_cmd(&home)
        .args(["show-birthday", "dana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday for dana - 01.07.1990."));
}

#[test]
fn test_birthdays_empty_book() {
    let home = TempDir::new().unwrap();

    rolodex_cmd(&home)
        .arg("birthdays")
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming birthdays."));
}

#[test]
fn test_config_and_book_override() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.json");

    rolodex_cmd(&home)
        .args(["config", "upcoming-days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upcoming-days set to 3"));

    rolodex_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("upcoming-days = 3"))
        .stdout(predicate::str::contains("book-file = addressbook.json"));

    rolodex_cmd(&home)
        .args(["config", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: nonsense"));

    rolodex_cmd(&home)
        .args(["--book", custom.to_str().unwrap(), "add", "Eve", "9999999999"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("addressbook.json").exists());
}
