// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk-core: declarative task definition and dispatch
//!
//! This crate provides:
//! - Option specs and the override-merge resolver for inherited options
//! - Command classes with inheritable group names, default tasks and aliases
//! - A registry that tracks classes, their subclasses and defining files
//! - A dispatcher that turns an argument vector into a typed task call
//! - Summary and detail help rendering

pub mod class;
pub mod dispatch;
pub mod error;
pub mod extension;
pub mod help;
pub mod option;
pub mod registry;
pub mod resolve;
pub mod task;

#[cfg(test)]
mod fixtures;

pub use class::{ClassBuilder, ClassId, CommandClass, DEFAULT_GROUP};
pub use dispatch::{
    parse_args, DynamicCall, DynamicHandler, Dispatcher, Outcome, ParsedArgs,
};
pub use error::{DefineError, DispatchError};
pub use extension::ExtensionRegistry;
pub use option::{option_map, OptionKind, OptionKindError, OptionMap, OptionSpec, OptionValues};
pub use registry::{Lookup, Registry};
pub use resolve::{merge_aliases, merge_options};
pub use task::{handler, Handler, HandlerError, Task, TaskAction, HELP_TASK};
