// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-template rendering
//!
//! A task's `run` string is rendered against the invocation that reached
//! it. Available placeholders:
//!
//! - `{NAME}` for each positional named in the usage line (`animal TYPE`)
//! - `{option}` for each option that was supplied
//! - `{args}` for every positional argument, space separated
//! - `{task}` for the task name
//! - `${VAR:-default}` for environment variables

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tk_core::OptionValues;

// Regex pattern for {name} placeholders - this is a constant valid pattern
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_-]*)\}").expect("constant regex pattern is valid")
});

// Regex pattern for ${VAR:-default} environment variable expansion
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+):-([^}]*)\}").expect("constant regex pattern is valid"));

/// Placeholder names declared by a usage line
///
/// `animal TYPE [NAME] FILES...` yields `TYPE`, `NAME`, `FILES...`; the
/// first word is the task name and is skipped.
pub fn usage_params(usage: &str) -> Vec<String> {
    usage
        .split_whitespace()
        .skip(1)
        .map(|word| word.trim_matches(|c| matches!(c, '[' | ']' | '<' | '>')))
        .filter(|word| !word.is_empty() && !word.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// Template variables for one invocation
pub fn invocation_vars(
    task: &str,
    usage: &str,
    args: &[String],
    options: &OptionValues,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("task".to_string(), task.to_string());
    vars.insert("args".to_string(), args.join(" "));

    let mut remaining = args;
    for param in usage_params(usage) {
        if let Some(variadic) = param.strip_suffix("...") {
            vars.insert(variadic.to_string(), remaining.join(" "));
            remaining = &[];
            continue;
        }
        if let Some((first, rest)) = remaining.split_first() {
            vars.insert(param, first.clone());
            remaining = rest;
        }
    }

    for (name, value) in options {
        vars.insert(name.clone(), display_value(value));
    }
    vars
}

/// Render `template`: environment first, then invocation variables
///
/// Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
    let expanded = ENV_PATTERN.replace_all(template, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[2].to_string())
    });

    VAR_PATTERN
        .replace_all(&expanded, |caps: &regex::Captures| {
            vars.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
