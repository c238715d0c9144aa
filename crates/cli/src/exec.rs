// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executing the command a task returned

use anyhow::{Context, Result};
use serde_json::Value;
use std::process::{Command, ExitCode, ExitStatus};
use tracing::{debug, info};

use crate::config::Config;
use crate::output;

/// Shell used to run rendered commands
const SHELL: &str = "sh";

/// Act on a task's return value
///
/// Strings are shell commands: printed under `--dry-run`, otherwise run.
/// `null` means the task had nothing to do. Other values are printed.
pub fn finish(value: &Value, config: &Config) -> Result<ExitCode> {
    match value {
        Value::String(command) if config.dry_run => {
            output::print(value, config.format);
            debug!(command = %command, "dry run");
            Ok(ExitCode::SUCCESS)
        }
        Value::String(command) => run(command),
        Value::Null => Ok(ExitCode::SUCCESS),
        other => {
            output::print(other, config.format);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(command: &str) -> Result<ExitCode> {
    info!(command = %command, "running");
    let status = Command::new(SHELL)
        .arg("-c")
        .arg(command)
        .status()
        .with_context(|| format!("failed to spawn {} for: {}", SHELL, command))?;
    debug!(status = %status, "command finished");
    Ok(exit_code(status))
}

/// Exit code mirroring the child's; signals map to failure
fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}
