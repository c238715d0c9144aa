// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Taskfile TOML parsing
//!
//! Classes and tasks are arrays of tables (`[[class]]`, `[[class.task]]`)
//! so their declaration order survives parsing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tk_core::{OptionKind, OptionMap, OptionSpec};

/// Errors that can occur during taskfile parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A parsed taskfile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Taskfile {
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDef>,
}

/// One `[[class]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    pub name: String,
    /// Parent class; must already be defined when this entry is loaded
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub default_task: Option<String>,
    /// Alias token -> task name
    #[serde(default)]
    pub map: BTreeMap<String, String>,
    #[serde(default)]
    pub default_options: BTreeMap<String, OptionDef>,
    /// Command template run for task names no class declares
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskDef>,
}

/// One `[[class.task]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TaskDef {
    pub name: String,
    /// Defaults to the task name
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub options: BTreeMap<String, OptionDef>,
    /// Command template rendered when the task runs
    pub run: String,
}

/// An option written either as a bare kind or as a table
///
/// ```toml
/// force = "boolean"
/// param = { kind = "numeric", short = "p" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OptionDef {
    Kind(OptionKind),
    Full {
        kind: OptionKind,
        #[serde(default)]
        short: Option<char>,
    },
}

impl OptionDef {
    pub fn to_spec(&self, name: &str) -> OptionSpec {
        match self {
            OptionDef::Kind(kind) => OptionSpec::new(name, *kind),
            OptionDef::Full { kind, short } => OptionSpec {
                name: name.to_string(),
                kind: *kind,
                short: *short,
            },
        }
    }
}

/// Convert declared options into an [`OptionMap`]
pub fn to_option_map(defs: &BTreeMap<String, OptionDef>) -> OptionMap {
    defs.iter()
        .map(|(name, def)| (name.clone(), def.to_spec(name)))
        .collect()
}

impl TaskDef {
    pub fn usage(&self) -> &str {
        self.usage.as_deref().unwrap_or(&self.name)
    }
}

/// Parse a taskfile from TOML content
pub fn parse_taskfile(content: &str) -> Result<Taskfile, ParseError> {
    let taskfile: Taskfile = toml::from_str(content)?;
    for class in &taskfile.classes {
        validate_class(class)?;
    }
    Ok(taskfile)
}

fn validate_class(class: &ClassDef) -> Result<(), ParseError> {
    if class.name.trim().is_empty() {
        return Err(ParseError::MissingField("class.name".to_string()));
    }
    if class.extends.as_deref() == Some(class.name.as_str()) {
        return Err(ParseError::InvalidFormat(format!(
            "class.{} cannot extend itself",
            class.name
        )));
    }

    let mut seen = HashSet::new();
    for task in &class.tasks {
        if task.name.trim().is_empty() {
            return Err(ParseError::MissingField(format!(
                "class.{}.task.name",
                class.name
            )));
        }
        if task.name.contains(char::is_whitespace) {
            return Err(ParseError::InvalidFormat(format!(
                "class.{}.task.{}: task names cannot contain whitespace",
                class.name, task.name
            )));
        }
        if !seen.insert(task.name.as_str()) {
            return Err(ParseError::InvalidFormat(format!(
                "class.{}.task.{} is declared twice",
                class.name, task.name
            )));
        }
    }

    for (alias, target) in &class.map {
        if alias.is_empty() || target.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "class.{}.map: aliases and targets cannot be empty",
                class.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
