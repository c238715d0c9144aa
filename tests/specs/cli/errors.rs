//! Error specs
//!
//! Verify failures exit non-zero with a helpful message on stderr.

use crate::prelude::*;

#[test]
fn unknown_task_lists_available_tasks() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["nope"])
        .fails()
        .stdout_empty()
        .stderr_has("could not find task \"nope\"")
        .stderr_has("Tasks:")
        .stderr_has("zoo around");
}

#[test]
fn missing_required_option_shows_task_usage() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--class", "MyChildScript", "zoo"])
        .fails()
        .stderr_has("no value provided for required option --param of task \"zoo\"")
        .stderr_has("zoo [--force] --param=PARAM");
}

#[test]
fn invalid_numeric_value_is_rejected() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--class", "MyChildScript", "animal", "cat", "--param", "lots"])
        .fails()
        .stderr_has("invalid value for --param: \"lots\"");
}

#[test]
fn alias_to_missing_task_is_reported() {
    let temp = Project::empty();
    temp.file(
        "Tkfile.toml",
        r#"
[[class]]
name = "Dangling"
map = { "b" = "build" }
"#,
    );

    temp.tk()
        .args(&["b"])
        .fails()
        .stderr_has("alias \"b\" maps to unknown task \"build\"");
}

#[test]
fn malformed_taskfile_is_reported_with_path() {
    let temp = Project::empty();
    temp.file("Tkfile.toml", "[[class]]\nname = 3\n");

    temp.tk().args(&["help"]).fails().stderr_has("Tkfile.toml");
}

#[test]
fn unknown_class_lists_known_classes() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["--class", "Nope", "help"])
        .fails()
        .stderr_has("class 'Nope' not found")
        .stderr_has("known classes: MyScript, MyChildScript");
}
