//! Dispatch specs
//!
//! Verify task resolution, alias handling, option parsing and execution.

use crate::prelude::*;

#[test]
fn no_arguments_runs_default_task() {
    let temp = Project::scripts();

    temp.tk().passes().stdout_eq("default task\n");
}

#[test]
fn task_command_runs_in_shell() {
    let temp = Project::scripts();

    temp.tk().args(&["animal", "fish"]).passes().stdout_eq("fish\n");
}

#[test]
fn dry_run_prints_the_command() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--dry-run", "animal", "fish"])
        .passes()
        .stdout_eq("echo fish\n");
}

#[test]
fn alias_dispatches_to_target() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--dry-run", "--", "-T", "fish"])
        .passes()
        .stdout_eq("echo fish\n");
}

#[test]
fn long_alias_dispatches_to_target() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--dry-run", "--", "--foo", "bar"])
        .passes()
        .stdout_eq("echo bar {force}\n");
}

#[test]
fn options_fill_placeholders() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--dry-run", "foo", "bar", "--force"])
        .passes()
        .stdout_eq("echo bar true\n");
}

#[test]
fn subclass_merges_inherited_options() {
    let temp = Project::scripts();

    temp.tk()
        .args(&[
            "--class",
            "MyChildScript",
            "--dry-run",
            "animal",
            "bird",
            "--force",
            "--param",
            "1.0",
            "--other",
            "tweets",
        ])
        .passes()
        .stdout_eq("echo bird 1.0 tweets\n");
}

#[test]
fn subclass_inherits_default_task() {
    let temp = Project::scripts();

    temp.tk()
        .env("TK_CLASS", "MyChildScript")
        .passes()
        .stdout_eq("default task\n");
}

#[test]
fn json_format_quotes_the_command() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--dry-run", "--format", "json", "zoo"])
        .passes()
        .stdout_eq("\"echo zoo\"\n");
}

#[test]
fn failing_command_exit_code_is_propagated() {
    let temp = Project::empty();
    temp.file(
        "Tkfile.toml",
        r#"
[[class]]
name = "Broken"

[[class.task]]
name = "fail"
desc = "exit with a status"
usage = "fail CODE"
run = "exit {CODE}"
"#,
    );

    temp.tk().args(&["fail", "4"]).fails().code(4).stdout_empty();
}
