//! Help specs
//!
//! Verify the task summary and per-task detail output.

use crate::prelude::*;

#[test]
fn help_lists_every_task() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["help"])
        .passes()
        .stdout_has("Tasks:\n")
        .stdout_matches(r"(?m)^  help \[TASK\] +describe available tasks$")
        .stdout_matches(r"(?m)^  zoo +zoo around$")
        .stdout_matches(r"(?m)^  animal TYPE +horse around$")
        .stdout_matches(r"(?m)^  foo BAR \[--force\] +do some fooing$")
        .stdout_matches(r"(?m)^  example_default_task +example!$");
}

#[test]
fn help_summary_uses_first_description_line() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["help"])
        .passes()
        .stdout_has("do some fooing")
        .stdout_lacks("This is more info");
}

#[test]
fn help_for_one_task_prints_full_description() {
    let temp = Project::scripts();

    temp.tk().args(&["help", "foo"]).passes().stdout_eq(
        "foo BAR [--force]\ndo some fooing\n  This is more info!\n  Everyone likes more info!\n",
    );
}

#[test]
fn help_accepts_aliases() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["help", "-T"])
        .passes()
        .stdout_eq("animal TYPE\nhorse around\n");
}

#[test]
fn help_shows_inherited_options() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--class", "MyChildScript", "help", "zoo"])
        .passes()
        .stdout_eq("zoo [--force] --param=PARAM\nzoo around\n");
}

#[test]
fn help_for_unknown_task_fails() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["help", "nope"])
        .fails()
        .stderr_has("could not find task \"nope\"");
}
