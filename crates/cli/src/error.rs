// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors printed by `tk`
//!
//! A failed run prints one `error:` line, then any `->` context lines,
//! numbered suggestions and finally the help text for the class or task
//! involved. Dispatch errors pick that help excerpt themselves.

use std::fmt;
use std::path::{Path, PathBuf};

use tk_core::{help, ClassId, DispatchError, Registry};

/// A failed `tk` run as shown on stderr
#[derive(Debug)]
pub struct TkError {
    /// Printed after `error:`
    pub message: String,
    /// Facts about the taskfiles or class, one `->` line each
    pub context: Vec<String>,
    /// Commands or edits worth trying
    pub suggestions: Vec<String>,
    /// Task summary or task detail, printed last
    pub help: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            help: None,
            source: None,
        }
    }

    /// Add a `->` line, e.g. which classes the taskfiles declare.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a numbered suggestion, usually a `tk` command line.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Help text from the registry, printed verbatim.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Keep an IO or load error reachable through `source()`.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        if let Some(help) = &self.help {
            writeln!(f)?;
            write!(f, "{}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for TkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl TkError {
    /// Error for a failed dispatch, with the help excerpt that fits it.
    pub fn from_dispatch(err: &DispatchError, registry: &Registry, class: ClassId) -> Self {
        let class_name = registry.class(class).name();
        let detail = err
            .task()
            .and_then(|task| help::detail(registry, class, task).ok());

        let base = match err {
            DispatchError::TaskNotFound(task) => TkError::new(err.to_string())
                .with_context(format!("class '{}' declares no task or alias '{}'", class_name, task))
                .with_suggestion("List available tasks: tk help")
                .with_help(help::summary(registry, class)),
            DispatchError::AmbiguousAlias { alias, target } => TkError::new(err.to_string())
                .with_context(format!(
                    "the alias '{}' points at '{}', which no class in the chain declares",
                    alias, target
                ))
                .with_suggestion("Fix the alias target in the taskfile's map table")
                .with_help(help::summary(registry, class)),
            DispatchError::MissingRequiredOption { task, option } => TkError::new(err.to_string())
                .with_suggestion(format!("Pass a value: tk {} --{}=VALUE", task, option))
                .with_suggestion(format!("Show usage: tk help {}", task)),
            DispatchError::InvalidOptionValue { task, .. } => TkError::new(err.to_string())
                .with_suggestion(format!("Show usage: tk help {}", task)),
            DispatchError::TaskFailed { .. } => TkError::new(err.to_string()),
        };

        match (detail, err) {
            (Some(detail), DispatchError::MissingRequiredOption { .. })
            | (Some(detail), DispatchError::InvalidOptionValue { .. }) => base.with_help(detail),
            _ => base,
        }
    }

    /// Error for when no taskfile can be found.
    pub fn no_taskfile(start: &Path) -> Self {
        TkError::new("no Tkfile.toml found")
            .with_context(format!(
                "searched {} and its parent directories",
                start.display()
            ))
            .with_suggestion("Create a Tkfile.toml in the project root")
            .with_suggestion("Point at a taskfile: tk --file path/to/tasks.toml")
    }

    /// Error for a class name no taskfile defines.
    pub fn unknown_class(name: &str, registry: &Registry) -> Self {
        let known: Vec<&str> = registry.classes().map(|c| c.name()).collect();
        let err = TkError::new(format!("class '{}' not found", name));
        if known.is_empty() {
            err.with_context("the loaded taskfiles declare no classes")
        } else {
            err.with_context(format!("known classes: {}", known.join(", ")))
                .with_suggestion("Pick one of the known classes with --class")
        }
    }

    /// Error for taskfiles that declare no classes at all.
    pub fn empty_taskfiles(files: &[PathBuf]) -> Self {
        let mut err = TkError::new("no classes to dispatch against");
        for file in files {
            err = err.with_context(format!("{} declares no [[class]] entries", file.display()));
        }
        err.with_suggestion("Add a [[class]] table, or select one with --class")
    }
}
