// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help text rendering

use crate::class::ClassId;
use crate::error::DispatchError;
use crate::registry::{Lookup, Registry};

/// Spacing added after the widest usage and option columns
const COLUMN_PADDING: usize = 4;

/// One line per task, descriptions aligned in a single column
///
/// The description column starts after the widest usage plus the widest
/// option list, so every summary line lines up.
pub fn summary(registry: &Registry, class: ClassId) -> String {
    let tasks = registry.all_tasks(class);
    let usage_width = tasks.iter().map(|t| t.usage.len()).max().unwrap_or(0);
    let flags_width = tasks
        .iter()
        .map(|t| t.flags_usage().len())
        .max()
        .unwrap_or(0);
    let width = usage_width + flags_width + COLUMN_PADDING;

    let mut out = String::from("Tasks:\n");
    for task in &tasks {
        let line = format!("  {:<width$}{}", task.formatted_usage(), task.summary());
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Full usage line followed by the description exactly as declared
pub fn detail(registry: &Registry, class: ClassId, name: &str) -> Result<String, DispatchError> {
    let canonical = registry.resolve_alias(class, name);
    let task = match registry.lookup(class, canonical) {
        Lookup::Found(task) => task,
        Lookup::Dynamic(_) => return Err(DispatchError::TaskNotFound(name.to_string())),
    };

    let mut out = task.formatted_usage();
    out.push('\n');
    out.push_str(&task.description);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
