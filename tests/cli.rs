// Drives the compiled binary through piped stdin. Output is plain text
// because stdout is not a TTY, so no screen clearing codes appear.

use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn single_value_range_is_won_in_one_round() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{ "RangeMin": "7", "RangeMax": "7" }"#)?;

    let assert = Command::cargo_bin("hilo")?
        .arg("--config")
        .arg(&config)
        .arg("--no-pause")
        .write_stdin("Ada\n\n7\nn\n")
        .assert()
        .success();

    let stdout = stdout_of(assert.get_output());
    assert!(stdout.contains("range [7-7]"));
    assert!(stdout.contains("Round 1 !"));
    assert!(stdout.contains("Congratulations [Player 1 - Ada], you found your Secret Number!"));
    assert!(stdout.contains("WALL OF FAME"));
    assert!(stdout.contains(" - 1 Guesses - Ada"));
    Ok(())
}

#[test]
fn pauses_wait_for_enter() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{ "RangeMin": 1, "RangeMax": 1 }"#)?;

    // welcome pause, players, guess, winners pause, restart answer
    let assert = Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(&config)
        .write_stdin("\nAda\n\n1\n\nn\n")
        .assert()
        .success();

    let stdout = stdout_of(assert.get_output());
    assert_eq!(stdout.matches("Press [ENTER] to continue").count(), 2);
    assert!(stdout.contains("Type [Y] to play again"));
    Ok(())
}

#[test]
fn command_line_bounds_override_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{ "RangeMin": 1, "RangeMax": 100 }"#)?;

    let assert = Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(&config)
        .args(["--range-min", "-2", "--range-max", "-2", "--no-pause"])
        .write_stdin("Ada\n\n-2\nn\n")
        .assert()
        .success();

    assert!(stdout_of(assert.get_output()).contains("range [-2--2]"));
    Ok(())
}

#[test]
fn inverted_range_aborts_before_the_game() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{ "RangeMin": 10, "RangeMax": 1 }"#)?;

    let assert = Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(&config)
        .write_stdin("Ada\n")
        .assert()
        .failure();

    let output = assert.get_output();
    assert!(stdout_of(output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("greater than maximum"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure();
    Ok(())
}

#[test]
fn no_settings_anywhere_aborts_before_the_game() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = tempdir()?;
    let config_home = tempdir()?;

    let assert = Command::cargo_bin("hilo")?
        .current_dir(cwd.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .arg("--no-pause")
        .write_stdin("Ada\n\n")
        .assert()
        .failure();

    let output = assert.get_output();
    assert!(stdout_of(output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--init-config"));
    Ok(())
}

#[test]
fn closed_stdin_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{ "RangeMin": 1, "RangeMax": 9 }"#)?;

    Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(&config)
        .arg("--no-pause")
        .write_stdin("Ada\n\n")
        .assert()
        .success();
    Ok(())
}

#[test]
fn init_config_writes_settings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("conf").join("settings.json");

    Command::cargo_bin("hilo")?
        .arg("-c")
        .arg(&config)
        .args(["--init-config", "--range-max", "500"])
        .assert()
        .success();

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config)?)?;
    assert_eq!(written["RangeMin"], 1);
    assert_eq!(written["RangeMax"], 500);
    Ok(())
}

#[test]
fn init_config_never_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = tempdir()?;
    let existing = cwd.path().join("settings.json");
    fs::write(&existing, r#"{ "RangeMin": 3, "RangeMax": 4 }"#)?;

    Command::cargo_bin("hilo")?
        .current_dir(cwd.path())
        .arg("--init-config")
        .assert()
        .failure();

    assert_eq!(
        fs::read_to_string(&existing)?,
        r#"{ "RangeMin": 3, "RangeMax": 4 }"#
    );
    Ok(())
}
