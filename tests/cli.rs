//! End-to-end tests driving the built `entrypoint` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn entrypoint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_entrypoint"))
        .args(args)
        .env_remove("ENTRYPOINT_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run entrypoint: {e}"))
}

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

struct Greeting {
    _dir: TempDir,
    config: PathBuf,
    props: PathBuf,
    out: PathBuf,
}

/// `{"greeting.j2": "<tmp>/out.txt"}`, template `Hello {{ props.name }}`, props `name: World`.
fn greeting() -> Greeting {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    write(dir.path(), "conf/greeting.j2", "Hello {{ props.name }}");
    let config = write(
        dir.path(),
        "conf/config.yml",
        &format!("greeting.j2: {}\n", out.display()),
    );
    let props = write(dir.path(), "props.yml", "name: World\n");
    Greeting {
        _dir: dir,
        config,
        props,
        out,
    }
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_help_mentions_config() {
    let output = entrypoint(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--dry-run"));
}

#[cfg(unix)]
#[test]
fn test_renders_then_launches_command() {
    let g = greeting();

    let output = entrypoint(&[
        "--config",
        s(&g.config),
        "--props",
        s(&g.props),
        "--",
        "echo",
        "launched",
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&g.out).unwrap(), "Hello World");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("{}: OK", g.out.display())));
    assert!(stdout.contains("Launching: echo launched"));
    assert!(stdout.contains("launched\n"));
}

#[cfg(unix)]
#[test]
fn test_existing_destination_kept_without_override() {
    let g = greeting();
    fs::write(&g.out, "OLD").unwrap();

    let output = entrypoint(&["--config", s(&g.config), "--props", s(&g.props), "--", "true"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&g.out).unwrap(), "OLD");
}

#[cfg(unix)]
#[test]
fn test_override_rewrites_existing_destination() {
    let g = greeting();
    fs::write(&g.out, "OLD").unwrap();

    let output = entrypoint(&[
        "--config",
        s(&g.config),
        "--props",
        s(&g.props),
        "--override",
        "--",
        "true",
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&g.out).unwrap(), "Hello World");
}

#[test]
fn test_dry_run_prints_without_writing() {
    let g = greeting();

    let output = entrypoint(&[
        "--config",
        s(&g.config),
        "--props",
        s(&g.props),
        "--dry-run",
        "--",
        "false",
    ]);

    assert!(output.status.success());
    assert!(!g.out.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello World"));
    assert!(!stdout.contains("Launching"));
}

#[cfg(unix)]
#[test]
fn test_exit_code_comes_from_launched_command() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yml", "{}\n");

    let output = entrypoint(&["--config", s(&config), "--", "sh", "-c", "exit 7"]);

    assert_eq!(output.status.code(), Some(7));
}

#[cfg(unix)]
#[test]
fn test_launched_command_inherits_environment() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yml", "{}\n");

    let output = Command::new(env!("CARGO_BIN_EXE_entrypoint"))
        .args(["--config", s(&config), "--", "sh", "-c", "echo \"value=$PASSED_THROUGH\""])
        .env("PASSED_THROUGH", "yes")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("value=yes"));
}

#[test]
fn test_missing_config_fails_without_launch() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("launched");
    let missing = dir.path().join("missing.yml");

    let output = entrypoint(&["--config", s(&missing), "--", "touch", s(&marker)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config file not found"));
    assert!(!marker.exists());
}

#[test]
fn test_missing_command_is_an_error() {
    let g = greeting();

    let output = entrypoint(&["--config", s(&g.config), "--props", s(&g.props)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no command to launch"));
    assert!(!g.out.exists());
}

#[test]
fn test_undefined_variable_aborts_launch() {
    let g = greeting();
    let marker = g.config.with_file_name("launched");

    // No props: `props.name` is undefined.
    let output = entrypoint(&["--config", s(&g.config), "--", "touch", s(&marker)]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("greeting.j2"));
    assert!(!g.out.exists());
    assert!(!marker.exists());
}

#[test]
fn test_unknown_command_is_launch_error() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yml", "{}\n");

    let output = entrypoint(&["--config", s(&config), "--", "entrypoint-test-no-such-program"]);

    assert_eq!(output.status.code(), Some(5));
}
