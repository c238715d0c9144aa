// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for task results

use clap::ValueEnum;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a task's return value in the specified format
///
/// Text prints strings raw and anything else as compact JSON.
pub fn render(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Print a task's return value in the specified format
pub fn print(value: &Value, format: OutputFormat) {
    println!("{}", render(value, format));
}
