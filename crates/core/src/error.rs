// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for class definition and dispatch

use crate::task::HandlerError;
use thiserror::Error;

/// Errors raised while defining classes during setup
#[derive(Debug, Error)]
pub enum DefineError {
    #[error("class not found: {0}")]
    UnknownClass(String),
    #[error("class {class} already extends {existing}, cannot reopen it as a subclass of {requested}")]
    ParentMismatch {
        class: String,
        existing: String,
        requested: String,
    },
}

/// Errors raised by a single dispatch attempt
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not find task \"{0}\"")]
    TaskNotFound(String),
    #[error("no value provided for required option --{option} of task \"{task}\"")]
    MissingRequiredOption { task: String, option: String },
    #[error("invalid value for --{option}: \"{value}\" ({reason})")]
    InvalidOptionValue {
        task: String,
        option: String,
        value: String,
        reason: String,
    },
    #[error("alias \"{alias}\" maps to unknown task \"{target}\"")]
    AmbiguousAlias { alias: String, target: String },
    #[error("task \"{task}\" failed: {source}")]
    TaskFailed {
        task: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Declared task the error relates to; `None` when no task was resolved
    pub fn task(&self) -> Option<&str> {
        match self {
            DispatchError::MissingRequiredOption { task, .. }
            | DispatchError::InvalidOptionValue { task, .. }
            | DispatchError::TaskFailed { task, .. } => Some(task),
            DispatchError::TaskNotFound(_) | DispatchError::AmbiguousAlias { .. } => None,
        }
    }
}
