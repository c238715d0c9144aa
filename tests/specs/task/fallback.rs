//! Fallback specs
//!
//! Verify unknown tasks reach a class's fallback command.

use crate::prelude::*;

const MAKE_TASKFILE: &str = r#"
[[class]]
name = "Make"
fallback = "echo make {task} {args}"

[[class.task]]
name = "clean"
desc = "remove build output"
run = "echo cleaning"

[[class]]
name = "Release"
extends = "Make"
"#;

#[test]
fn unknown_task_runs_fallback() {
    let temp = Project::empty();
    temp.file("Tkfile.toml", MAKE_TASKFILE);

    temp.tk()
        .args(&["install", "DESTDIR=/tmp"])
        .passes()
        .stdout_eq("make install DESTDIR=/tmp\n");
}

#[test]
fn declared_task_wins_over_fallback() {
    let temp = Project::empty();
    temp.file("Tkfile.toml", MAKE_TASKFILE);

    temp.tk().args(&["clean"]).passes().stdout_eq("cleaning\n");
}

#[test]
fn fallback_is_inherited() {
    let temp = Project::empty();
    temp.file("Tkfile.toml", MAKE_TASKFILE);

    temp.tk()
        .args(&["--class", "Release", "--dry-run", "all"])
        .passes()
        .stdout_eq("echo make all \n");
}
