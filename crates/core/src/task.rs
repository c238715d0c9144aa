// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task descriptors
//!
//! A task is a named, invocable unit of a command class. Tasks are
//! immutable once declared; redeclaring a name swaps in a new [`Task`].

use crate::option::{OptionMap, OptionValues};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Boxed error returned by task handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Callable bound to a task: receives positional arguments and coerced options
pub type Handler =
    Arc<dyn Fn(&[String], &OptionValues) -> Result<Value, HandlerError> + Send + Sync>;

/// Name of the built-in help task
pub const HELP_TASK: &str = "help";

const DYNAMIC_DESCRIPTION: &str = "A dynamically-generated task";

/// What running a task does
#[derive(Clone)]
pub enum TaskAction {
    /// Call a declared handler
    Handler(Handler),
    /// Render help text for the class
    Help,
    /// No declaration matched; the caller may fall back to dynamic invocation
    Dynamic,
}

impl fmt::Debug for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskAction::Handler(_) => f.write_str("Handler(..)"),
            TaskAction::Help => f.write_str("Help"),
            TaskAction::Dynamic => f.write_str("Dynamic"),
        }
    }
}

/// A declared task
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    /// Describes positional arguments, e.g. `animal TYPE`
    pub usage: String,
    /// Free text; may span several lines
    pub description: String,
    /// Option specs. Tasks handed out by the registry carry class defaults
    /// merged with the task's overrides; stored declarations hold only the
    /// overrides.
    pub options: OptionMap,
    pub action: TaskAction,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        description: impl Into<String>,
        options: OptionMap,
        handler: Handler,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            description: description.into(),
            options,
            action: TaskAction::Handler(handler),
        }
    }

    /// The built-in `help [TASK]` task every class inherits
    pub fn help() -> Self {
        Self {
            name: HELP_TASK.to_string(),
            usage: "help [TASK]".to_string(),
            description: "describe available tasks".to_string(),
            options: OptionMap::new(),
            action: TaskAction::Help,
        }
    }

    /// Sentinel returned by lookups that match nothing
    pub fn dynamic(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: DYNAMIC_DESCRIPTION.to_string(),
            options: OptionMap::new(),
            action: TaskAction::Dynamic,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.action, TaskAction::Dynamic)
    }

    pub fn is_help(&self) -> bool {
        matches!(self.action, TaskAction::Help)
    }

    /// First line of the description, used by summary listings
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("")
    }

    /// Usage followed by one token per option, e.g. `foo BAR [--force]`
    pub fn formatted_usage(&self) -> String {
        let flags = self.flags_usage();
        if flags.is_empty() {
            self.usage.clone()
        } else {
            format!("{} {}", self.usage, flags)
        }
    }

    /// Option tokens alone, space separated
    pub fn flags_usage(&self) -> String {
        self.options
            .values()
            .map(|spec| spec.usage_token())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Wrap a closure as a [`Handler`]
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&[String], &OptionValues) -> Result<Value, HandlerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
