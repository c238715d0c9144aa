// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument dispatch
//!
//! Turns one argument vector into a task invocation:
//!
//! 1. select the task (default task, alias resolution, lookup)
//! 2. split the remaining tokens into positionals and raw options
//! 3. coerce raw options per their kind and enforce required ones
//! 4. call the handler, or render help for the built-in help task
//!
//! Dispatch only reads the registry, so any number of threads may
//! dispatch against a shared `&Registry` at once.

use crate::class::ClassId;
use crate::error::DispatchError;
use crate::help;
use crate::option::{OptionKind, OptionMap, OptionSpec, OptionValues};
use crate::registry::{Lookup, Registry};
use crate::task::{HandlerError, Task, TaskAction};
use serde_json::{Number, Value};
use tracing::debug;

/// What a dispatch produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Value returned by a task handler or the dynamic fallback
    Returned(Value),
    /// Rendered help text
    Help(String),
}

impl Outcome {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::Help(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::Help(_) => None,
        }
    }
}

/// A call to a task name no class declares
#[derive(Debug)]
pub struct DynamicCall<'a> {
    pub registry: &'a Registry,
    pub class: ClassId,
    pub task: &'a str,
    pub args: &'a [String],
    pub options: &'a OptionValues,
}

/// Fallback for task names that match no declaration
pub trait DynamicHandler: Send + Sync {
    fn invoke(&self, call: &DynamicCall<'_>) -> Result<Value, HandlerError>;
}

/// Positionals and coerced options split out of an argument list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    pub args: Vec<String>,
    pub options: OptionValues,
}

/// Dispatches argument vectors against one class
pub struct Dispatcher<'r> {
    registry: &'r Registry,
    class: ClassId,
    dynamic: Option<&'r dyn DynamicHandler>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r Registry, class: ClassId) -> Self {
        Self {
            registry,
            class,
            dynamic: None,
        }
    }

    /// Route unknown task names to `handler` instead of failing
    pub fn with_dynamic(mut self, handler: &'r dyn DynamicHandler) -> Self {
        self.dynamic = Some(handler);
        self
    }

    /// Run one invocation
    pub fn dispatch<S: AsRef<str>>(&self, argv: &[S]) -> Result<Outcome, DispatchError> {
        let (token, rest): (&str, &[S]) = match argv.split_first() {
            Some((first, rest)) => (first.as_ref(), rest),
            None => (self.registry.default_task(self.class), &[]),
        };
        let rest: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
        let name = self.registry.resolve_alias(self.class, token);
        if name != token {
            debug!(alias = token, task = name, "resolved alias");
        }

        let task = match self.registry.lookup(self.class, name) {
            Lookup::Found(task) => task,
            Lookup::Dynamic(sentinel) if name != token => {
                return Err(DispatchError::AmbiguousAlias {
                    alias: token.to_string(),
                    target: sentinel.name,
                });
            }
            Lookup::Dynamic(sentinel) => return self.dispatch_dynamic(&sentinel, &rest),
        };

        debug!(class = self.registry.class(self.class).name(), task = %task.name, "dispatching");
        match &task.action {
            TaskAction::Help => self.help(&rest),
            TaskAction::Handler(handler) => {
                let parsed = parse_args(&task, &rest)?;
                handler(&parsed.args, &parsed.options)
                    .map(Outcome::Returned)
                    .map_err(|source| DispatchError::TaskFailed {
                        task: task.name.clone(),
                        source,
                    })
            }
            TaskAction::Dynamic => self.dispatch_dynamic(&task, &rest),
        }
    }

    fn help(&self, rest: &[&str]) -> Result<Outcome, DispatchError> {
        match rest.first() {
            None => Ok(Outcome::Help(help::summary(self.registry, self.class))),
            Some(name) => help::detail(self.registry, self.class, name).map(Outcome::Help),
        }
    }

    fn dispatch_dynamic(&self, sentinel: &Task, rest: &[&str]) -> Result<Outcome, DispatchError> {
        let Some(dynamic) = self.dynamic else {
            return Err(DispatchError::TaskNotFound(sentinel.name.clone()));
        };
        debug!(task = %sentinel.name, "no declared task, using dynamic fallback");

        // unknown tasks still honour the class-wide options
        let scoped = Task {
            options: self.registry.opts(self.class),
            ..sentinel.clone()
        };
        let parsed = parse_args(&scoped, rest)?;
        let call = DynamicCall {
            registry: self.registry,
            class: self.class,
            task: &sentinel.name,
            args: &parsed.args,
            options: &parsed.options,
        };
        dynamic
            .invoke(&call)
            .map(Outcome::Returned)
            .map_err(|source| DispatchError::TaskFailed {
                task: sentinel.name.clone(),
                source,
            })
    }
}

/// Split `tokens` into positionals and coerced options for `task`
pub fn parse_args<S: AsRef<str>>(task: &Task, tokens: &[S]) -> Result<ParsedArgs, DispatchError> {
    let mut parsed = ParsedArgs::default();
    let mut raw: Vec<(&OptionSpec, Option<String>)> = Vec::new();
    let mut iter = tokens.iter().map(AsRef::as_ref);

    while let Some(token) = iter.next() {
        if token == "--" {
            parsed.args.extend(iter.by_ref().map(str::to_string));
            break;
        }
        let Some((spec, inline)) = match_option(&task.options, token) else {
            parsed.args.push(token.to_string());
            continue;
        };
        let value = match inline {
            Some(value) => Some(value.to_string()),
            None if spec.kind.takes_value() => match iter.next() {
                Some(next) => Some(next.to_string()),
                None => {
                    return Err(DispatchError::InvalidOptionValue {
                        task: task.name.clone(),
                        option: spec.name.clone(),
                        value: String::new(),
                        reason: "expected a value".to_string(),
                    })
                }
            },
            None => None,
        };
        raw.push((spec, value));
    }

    for (spec, value) in raw {
        let coerced = coerce(&task.name, spec, value.as_deref())?;
        parsed.options.insert(spec.name.clone(), coerced);
    }

    for spec in task.options.values() {
        if spec.kind.is_required() && !parsed.options.contains_key(&spec.name) {
            return Err(DispatchError::MissingRequiredOption {
                task: task.name.clone(),
                option: spec.name.clone(),
            });
        }
    }

    Ok(parsed)
}

/// Match `--name`, `--name=value` or `-c` against known options
fn match_option<'a, 't>(
    options: &'a OptionMap,
    token: &'t str,
) -> Option<(&'a OptionSpec, Option<&'t str>)> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (long, None),
        };
        return options.get(name).map(|spec| (spec, inline));
    }
    let mut chars = token.strip_prefix('-')?.chars();
    let short = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    options
        .values()
        .find(|spec| spec.short == Some(short))
        .map(|spec| (spec, None))
}

/// Coerce a raw option value according to its kind
pub fn coerce(task: &str, spec: &OptionSpec, raw: Option<&str>) -> Result<Value, DispatchError> {
    let invalid = |value: &str, reason: &str| DispatchError::InvalidOptionValue {
        task: task.to_string(),
        option: spec.name.clone(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match (spec.kind, raw) {
        (OptionKind::Boolean, None) => Ok(Value::Bool(true)),
        (OptionKind::Boolean, Some(raw)) => match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(invalid(other, "expected true or false")),
        },
        (OptionKind::Numeric, Some(raw)) => parse_number(raw)
            .map(Value::Number)
            .ok_or_else(|| invalid(raw, "expected a number")),
        (
            OptionKind::String | OptionKind::StringRequired | OptionKind::StringOptional,
            Some(raw),
        ) => Ok(Value::String(raw.to_string())),
        (_, None) => Err(invalid("", "expected a value")),
    }
}

/// Integers stay integers; anything with a fraction or exponent is a float
fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Number::from(int));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
