//! Configuration specs
//!
//! Verify how tk finds its taskfiles and picks a class.

use crate::prelude::*;

#[test]
fn taskfile_is_found_from_a_subdirectory() {
    let temp = Project::scripts();
    std::fs::create_dir_all(temp.path().join("src/deep")).unwrap();

    temp.tk()
        .current_dir(&temp.path().join("src/deep"))
        .args(&["zoo"])
        .passes()
        .stdout_eq("zoo\n");
}

#[test]
fn file_flag_selects_taskfile() {
    let temp = Project::empty();
    temp.file("tasks/other.toml", SCRIPTS_TASKFILE);

    temp.tk()
        .args(&["--file", "tasks/other.toml", "zoo"])
        .passes()
        .stdout_eq("zoo\n");
}

#[test]
fn file_env_lists_taskfiles() {
    let temp = Project::empty();
    let main = temp.file("tasks/main.toml", SCRIPTS_TASKFILE);
    let extra = temp.file(
        "tasks/extra.toml",
        r#"
[[class]]
name = "MyScript"

[[class.task]]
name = "bird"
desc = "tweet"
run = "echo tweet"
"#,
    );
    let joined = format!("{}:{}", main.display(), extra.display());

    temp.tk()
        .env("TK_FILE", joined)
        .args(&["bird"])
        .passes()
        .stdout_eq("tweet\n");
}

#[test]
fn first_class_of_first_file_is_the_default() {
    let temp = Project::scripts();

    temp.tk()
        .args(&["help"])
        .passes()
        .stdout_lacks("--param");
}

#[test]
fn missing_taskfile_is_reported() {
    let temp = Project::empty();

    temp.tk()
        .args(&["help"])
        .fails()
        .stderr_has("no Tkfile.toml found");
}

#[test]
fn log_filter_enables_diagnostics() {
    let temp = Project::scripts();

    temp.tk()
        .env("TK_LOG", "debug")
        .args(&["--dry-run", "zoo"])
        .passes()
        .stderr_has("loaded taskfile")
        .stdout_eq("echo zoo\n");
}
