use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn addrbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_and_change_phone() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Anna 0501234567\nchange Anna 0501234567 0509999999\nphone Anna\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Phone number for Anna updated."))
        .stdout(predicate::str::contains("0509999999"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_data_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Anna 0501234567\nadd-email Anna anna@example.com\nadd-note buy milk\nadd-tag 1 home\nclose\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("contacts.json").exists());
    assert!(temp_dir.path().join("notes.json").exists());

    addrbook(temp_dir.path())
        .write_stdin("all\nfind-tag home\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("anna@example.com"))
        .stdout(predicate::str::contains("buy milk"));
}

#[test]
fn test_end_of_input_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Bob 0671112233\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    let saved = std::fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap();
    assert!(saved.contains("0671112233"));
}

#[test]
fn test_corrupt_file_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("contacts.json"), "{ definitely not json").unwrap();

    addrbook(temp_dir.path())
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts saved yet."));
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Anna 12345\nfrobnicate\nphone Ghost\nadd Anna 0501234567\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number '12345'"))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Contact Ghost not found."))
        .stdout(predicate::str::contains("Contact added."));
}

#[test]
fn test_data_dir_from_env() {
    let temp_dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("addrbook")
        .unwrap()
        .env("ADDRBOOK_HOME", temp_dir.path())
        .env("NO_COLOR", "1")
        .write_stdin("add-note from env\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 1 added."));

    assert!(temp_dir.path().join("notes.json").exists());
}

#[test]
fn test_config_is_saved() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("config birthday_window_days 30\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday_window_days set to 30"));

    addrbook(temp_dir.path())
        .write_stdin("config\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday_window_days = 30"));
}

#[test]
fn test_invalid_utf8_line_does_not_lose_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin(&b"add Anna 0501234567\n\xff\xfe\nexit\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("not valid UTF-8"))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Good bye!"));

    let saved = std::fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap();
    assert!(saved.contains("0501234567"));
}

#[test]
fn test_exhausted_note_ids_are_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("notes.json"),
        r#"{"last_id":4294967295,"notes":{}}"#,
    )
    .unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add-note hi\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("note id space exhausted"))
        .stdout(predicate::str::contains("Good bye!"));
}
