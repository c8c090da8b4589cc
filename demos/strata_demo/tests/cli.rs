//! Process-level checks of the demo binary.

use assert_cmd::Command;
use tempfile::TempDir;

fn demo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("strata_demo").expect("demo binary builds");
    cmd.env("HOME", home.path()).env_remove("STRATA_DEMO_recipient");
    cmd
}

#[test]
fn environment_sets_recipient() {
    let home = TempDir::new().expect("create home");
    demo(&home)
        .env("STRATA_DEMO_recipient", "Ferris")
        .assert()
        .success()
        .stdout("Hello, Ferris.\n");
}

#[test]
fn home_file_and_flags_combine() {
    let home = TempDir::new().expect("create home");
    let dir = home.path().join(".flagconf");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("STRATA_DEMO_.yml"), "salutation: Howdy\nrecipient: file")
        .expect("write config");
    demo(&home)
        .args(["--recipient", "cli"])
        .assert()
        .success()
        .stdout("Howdy, cli.\n");
}

#[test]
fn declined_confirmation_exits_with_failure() {
    let home = TempDir::new().expect("create home");
    demo(&home)
        .arg("--strata-confirm")
        .write_stdin("no\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn help_exits_successfully() {
    let home = TempDir::new().expect("create home");
    demo(&home).arg("--help").assert().success();
}

#[test]
fn unparseable_environment_value_is_skipped() {
    let home = TempDir::new().expect("create home");
    demo(&home)
        .env("STRATA_DEMO_excited", "1")
        .env("STRATA_DEMO_recipient", "Ferris")
        .assert()
        .success()
        .stdout("Hello, Ferris.\n");
}
