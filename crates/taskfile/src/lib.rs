// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Taskfile parsing and loading

mod loader;
mod parser;
mod template;

pub use loader::{Fallbacks, LoadError, Loaded, Loader, NoFallback};
pub use parser::{
    parse_taskfile, to_option_map, ClassDef, OptionDef, ParseError, TaskDef, Taskfile,
};
pub use template::{invocation_vars, render, usage_params};

/// Conventional taskfile name looked up from the working directory
pub const TASKFILE_NAME: &str = "Tkfile.toml";
