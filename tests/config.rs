use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command(temp: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sizeconv").expect("binary exists");
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("xdg-config").path())
        .env("LC_ALL", "C");
    cmd
}

#[test]
fn config_defaults_apply_to_later_commands() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp)
        .args(["config", "--set-decimals", "1", "--set-locale", "de_DE.UTF-8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default decimal places set to 1."))
        .stdout(predicate::str::contains("Default locale set to 'de-DE'."));

    let config_path = temp.child("xdg-config/sizeconv/config.toml");
    let contents = fs::read_to_string(config_path.path()).unwrap();
    assert!(contents.contains("decimal_places = 1"));
    assert!(contents.contains("locale = \"de-DE\""));

    command(&temp).args(["best", "1536"]).assert().success().stdout("1,5 KB\n");

    // Flags still win over the file.
    command(&temp)
        .args(["best", "1536", "-d", "3", "-l", "invariant"])
        .assert()
        .success()
        .stdout("1.500 KB\n");
}

#[test]
fn config_rejects_unknown_locale() {
    let temp = assert_fs::TempDir::new().unwrap();
    command(&temp)
        .args(["config", "--set-locale", "xx_YY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported locale 'xx_YY'"));

    temp.child("xdg-config/sizeconv/config.toml").assert(predicate::path::missing());
}

#[test]
fn broken_config_file_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("xdg-config/sizeconv/config.toml").write_str("decimal_places = \"two\"").unwrap();

    command(&temp)
        .args(["format", "1", "--unit", "KB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn out_of_range_decimal_places_in_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("xdg-config/sizeconv/config.toml").write_str("decimal_places = 70000").unwrap();

    command(&temp)
        .args(["best", "1536"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("decimal_places must be at most 1100 (got 70000)"));
}

#[test]
fn unknown_locale_in_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("xdg-config/sizeconv/config.toml").write_str("locale = \"xx_YY\"").unwrap();

    command(&temp)
        .args(["format", "1", "--unit", "KB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported locale 'xx_YY'"));
}

#[test]
fn set_decimals_is_bounded() {
    let temp = assert_fs::TempDir::new().unwrap();
    command(&temp).args(["config", "--set-decimals", "1101"]).assert().failure().code(2);

    temp.child("xdg-config/sizeconv/config.toml").assert(predicate::path::missing());
}

#[test]
fn config_path_prints_location() {
    let temp = assert_fs::TempDir::new().unwrap();
    command(&temp)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sizeconv/config.toml"));
}
