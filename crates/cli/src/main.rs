// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk - run tasks declared in taskfiles

mod config;
mod error;
mod exec;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tk_core::{Dispatcher, Outcome};
use tk_taskfile::{Loaded, Loader};
use tracing::debug;

use crate::config::Config;
use crate::error::TkError;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "tk",
    version,
    about = "Run tasks declared in Tkfile.toml",
    after_help = "Run `tk help` to list the tasks of the selected class."
)]
pub(crate) struct Cli {
    /// Taskfile to load (repeatable; defaults to $TK_FILE or the nearest Tkfile.toml)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Class to dispatch against (defaults to the first class of the first taskfile)
    #[arg(long, env = "TK_CLASS")]
    pub class: Option<String>,

    /// Print the command a task would run instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for printed values
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by TK_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Task name or alias followed by its arguments and options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TASK")]
    pub args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::resolve(&cli)?;
    let loaded = load(&config)?;
    let class = config.target_class(&loaded.registry)?;
    debug!(
        class = loaded.registry.class(class).name(),
        args = ?cli.args,
        "dispatching"
    );

    let mut dispatcher = Dispatcher::new(&loaded.registry, class);
    if loaded
        .fallbacks
        .template_for(&loaded.registry, class)
        .is_some()
    {
        dispatcher = dispatcher.with_dynamic(&loaded.fallbacks);
    }

    match dispatcher.dispatch(&cli.args) {
        Ok(Outcome::Help(text)) => {
            print!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Returned(value)) => exec::finish(&value, &config),
        Err(e) => {
            eprint!("{}", TkError::from_dispatch(&e, &loaded.registry, class));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load(config: &Config) -> Result<Loaded> {
    let mut loader = Loader::new();
    for path in &config.taskfiles {
        loader.load_file(path)?;
    }
    Ok(loader.finish())
}
