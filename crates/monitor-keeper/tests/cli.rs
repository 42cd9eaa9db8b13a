use std::process::Command;

fn monitor_keeper() -> Command {
    Command::new(env!("CARGO_BIN_EXE_monitor-keeper"))
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = monitor_keeper();
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute monitor-keeper");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keeps window positions"));
    assert!(stdout.contains("restore"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = monitor_keeper();
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute monitor-keeper");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("monitor-keeper"));
}

#[test]
fn daemon_subcommand_is_hidden_from_help() {
    let output = monitor_keeper()
        .arg("--help")
        .output()
        .expect("failed to execute monitor-keeper");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.lines().any(|l| l.trim_start().starts_with("daemon")));
}

#[test]
fn unknown_subcommand_fails() {
    let output = monitor_keeper()
        .arg("tile")
        .output()
        .expect("failed to execute monitor-keeper");

    assert!(!output.status.success());
}
