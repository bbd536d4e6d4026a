use assert_cmd::Command;
use predicates::prelude::*;

fn command() -> Command {
    let mut cmd = Command::cargo_bin("sizeconv").expect("binary exists");
    cmd.env("LC_ALL", "C");
    cmd
}

#[test]
fn alias_cv_works_like_convert() {
    let temp = assert_fs::TempDir::new().unwrap();
    command()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["cv", "3", "-f", "MB", "-t", "KB", "--raw"])
        .assert()
        .success()
        .stdout("3072\n");
}

#[test]
fn alias_bu_works_like_best() {
    let temp = assert_fs::TempDir::new().unwrap();
    command()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["bu", "0"])
        .assert()
        .success()
        .stdout("0.00 B\n");
}

#[test]
fn alias_fmt_works_like_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    command()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["fmt", "1536", "-u", "KB"])
        .assert()
        .success()
        .stdout("1536.00 KB\n");
}

#[test]
fn alias_cfg_works_like_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    command()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["cfg", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
