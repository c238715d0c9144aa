//! Shared helpers for CLI specs

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use predicates::prelude::*;

/// Taskfile mirroring a small inheritance chain
pub const SCRIPTS_TASKFILE: &str = r#"
[[class]]
name = "MyScript"
group = "script"
default_task = "example_default_task"
map = { "-T" = "animal", "-f" = "foo", "--foo" = "foo" }

[[class.task]]
name = "zoo"
desc = "zoo around"
run = "echo zoo"

[[class.task]]
name = "animal"
usage = "animal TYPE"
desc = "horse around"
run = "echo {TYPE}"

[[class.task]]
name = "foo"
usage = "foo BAR"
desc = """
do some fooing
  This is more info!
  Everyone likes more info!
"""
options = { force = "boolean" }
run = "echo {BAR} {force}"

[[class.task]]
name = "example_default_task"
desc = "example!"
run = "echo default task"

[[class]]
name = "MyChildScript"
extends = "MyScript"
default_options = { force = "boolean", param = "numeric" }

[[class.task]]
name = "zoo"
desc = "zoo around"
options = { param = "required" }
run = "echo zoo {param}"

[[class.task]]
name = "animal"
usage = "animal TYPE"
desc = "horse around"
options = { other = "optional" }
run = "echo {TYPE} {param} {other}"
"#;

/// Temporary project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with `Tkfile.toml` holding [`SCRIPTS_TASKFILE`]
    pub fn scripts() -> Self {
        let project = Self::empty();
        project.file("Tkfile.toml", SCRIPTS_TASKFILE);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `tk` running in the project root with a clean environment
    pub fn tk(&self) -> Cli {
        Cli::new(self.path())
    }
}

/// Builder for one `tk` invocation
pub struct Cli {
    cmd: Command,
}

impl Cli {
    fn new(cwd: &Path) -> Self {
        let mut cmd = Command::cargo_bin("tk").unwrap();
        cmd.current_dir(cwd)
            .env_remove("TK_FILE")
            .env_remove("TK_CLASS")
            .env_remove("TK_LOG");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn passes(mut self) -> Run {
        Run(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Run {
        Run(self.cmd.assert().failure())
    }
}

/// Finished invocation with chainable output checks
pub struct Run(Assert);

impl Run {
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.0.get_output().stdout).into_owned();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Run(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stdout_matches(self, pattern: &str) -> Self {
        Run(self.0.stdout(predicate::str::is_match(pattern).unwrap()))
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        Run(self.0.stdout(predicate::str::contains(needle).not()))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Run(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stdout_empty(self) -> Self {
        Run(self.0.stdout(predicate::str::is_empty()))
    }

    pub fn code(self, expected: i32) -> Self {
        Run(self.0.code(expected))
    }
}
