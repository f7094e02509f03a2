use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

#[cfg(windows)]
const SEP: &str = ";";
#[cfg(not(windows))]
const SEP: &str = ":";

fn longomatch() -> Command {
    let mut cmd = Command::cargo_bin("longomatch").unwrap();
    cmd.env_remove("LONGOMATCH_INSTALL_ROOT")
        .env_remove("LONGOMATCH_RUNTIME_LIBRARY")
        .env_remove("LONGOMATCH_ASSEMBLY");
    cmd
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn dry_run_prints_the_plan() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let plugins = root
        .join("lib")
        .join("longomatch")
        .join("plugins")
        .join("gstreamer-0.10");
    let module_path = [
        display(&root.join("lib").join("mono").join("4.5")),
        display(&root.join("lib").join("mono").join("4.5").join("Facades")),
        display(&root.join("lib").join("gtk-sharp-2.0")),
        display(&root.join("lib").join("longomatch")),
    ]
    .join(SEP);

    longomatch()
        .arg("--dry-run")
        .arg("--install-root")
        .arg(root)
        .env("PATH", "/usr/bin")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Using PATH /usr/bin{}{}\n",
            SEP,
            display(&plugins)
        )))
        .stdout(predicate::str::contains(format!(
            "Using MONO_PATH {}\n",
            module_path
        )))
        .stdout(predicate::str::contains(format!(
            "Using runtime dirs {} {}",
            display(&root.join("lib")),
            display(&root.join("etc"))
        )));
}

#[test]
fn install_root_can_come_from_the_environment() {
    let dir = tempfile::tempdir().unwrap();

    longomatch()
        .arg("--dry-run")
        .env("LONGOMATCH_INSTALL_ROOT", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(display(&dir.path().join("etc"))));
}

#[test]
fn empty_install_root_is_fatal() {
    longomatch()
        .arg("--install-root")
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("installation directory is empty"));
}

#[test]
fn missing_runtime_stops_before_the_environment_is_touched() {
    let dir = tempfile::tempdir().unwrap();

    longomatch()
        .arg("--install-root")
        .arg(dir.path())
        .arg("--no-launch")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Using PATH").not())
        .stderr(predicate::str::contains("cannot start the runtime"));
}
