// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation configuration: which taskfiles to load and which class to run.

use std::path::{Path, PathBuf};

use tk_core::{ClassId, Registry};
use tk_taskfile::TASKFILE_NAME;

use crate::error::TkError;
use crate::output::OutputFormat;
use crate::Cli;

/// Environment variable listing taskfiles, separated by `:`
pub const FILE_ENV: &str = "TK_FILE";

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Taskfiles in load order
    pub taskfiles: Vec<PathBuf>,
    /// Class requested on the command line or via TK_CLASS
    pub class: Option<String>,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Self, TkError> {
        let taskfiles = if !cli.files.is_empty() {
            cli.files.clone()
        } else if let Some(files) = files_from_env() {
            files
        } else {
            let cwd = std::env::current_dir()
                .map_err(|e| TkError::new("cannot read the working directory").with_source(e))?;
            vec![find_taskfile(&cwd).ok_or_else(|| TkError::no_taskfile(&cwd))?]
        };

        Ok(Self {
            taskfiles,
            class: cli.class.clone(),
            dry_run: cli.dry_run,
            format: cli.format,
        })
    }

    /// Requested class, or the first class declared by the first taskfile
    pub fn target_class(&self, registry: &Registry) -> Result<ClassId, TkError> {
        if let Some(name) = &self.class {
            return registry
                .class_named(name)
                .ok_or_else(|| TkError::unknown_class(name, registry));
        }

        let first = self
            .taskfiles
            .first()
            .and_then(|path| path.canonicalize().ok())
            .and_then(|path| registry.extensions().classes_defined_in(&path).first().copied());
        first.ok_or_else(|| TkError::empty_taskfiles(&self.taskfiles))
    }
}

fn files_from_env() -> Option<Vec<PathBuf>> {
    let raw = std::env::var(FILE_ENV).ok()?;
    let files: Vec<PathBuf> = raw
        .split(':')
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect();
    (!files.is_empty()).then_some(files)
}

/// Nearest `Tkfile.toml` in `start` or any parent directory
pub fn find_taskfile(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(TASKFILE_NAME))
        .find(|candidate| candidate.is_file())
}
