// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command classes and the declaration builder
//!
//! A [`CommandClass`] owns the settings it declares explicitly. Unset
//! settings are inherited from its parent when the registry resolves them.

use crate::option::OptionMap;
use crate::registry::Registry;
use crate::task::{Handler, Task};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Group name used when no class in the chain declares one
pub const DEFAULT_GROUP: &str = "standard";

/// Handle to a class stored in a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named set of tasks plus class-wide settings
#[derive(Debug, Clone)]
pub struct CommandClass {
    pub(crate) id: ClassId,
    pub(crate) name: String,
    pub(crate) parent: Option<ClassId>,
    pub(crate) group_name: Option<String>,
    pub(crate) default_task: Option<String>,
    pub(crate) default_options: OptionMap,
    pub(crate) aliases: BTreeMap<String, String>,
    pub(crate) tasks: Vec<Arc<Task>>,
}

impl CommandClass {
    pub(crate) fn new(id: ClassId, name: String, parent: Option<ClassId>) -> Self {
        Self {
            id,
            name,
            parent,
            group_name: None,
            default_task: None,
            default_options: OptionMap::new(),
            aliases: BTreeMap::new(),
            tasks: Vec::new(),
        }
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    /// Explicitly declared group name, not inherited
    pub fn own_group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Explicitly declared default task, not inherited
    pub fn own_default_task(&self) -> Option<&str> {
        self.default_task.as_deref()
    }

    /// Options declared on this class alone
    pub fn own_default_options(&self) -> &OptionMap {
        &self.default_options
    }

    /// Aliases declared on this class alone
    pub fn own_aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Tasks declared on this class, in declaration order
    ///
    /// Options here are the task-level overrides only; use
    /// [`Registry::lookup`](crate::Registry::lookup) for resolved options.
    pub fn own_tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub(crate) fn own_task(&self, name: &str) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Insert or replace a task, keeping the original position on replace.
    /// Returns true when an existing task was replaced.
    pub(crate) fn put_task(&mut self, task: Arc<Task>) -> bool {
        match self.tasks.iter_mut().find(|t| t.name == task.name) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => {
                self.tasks.push(task);
                false
            }
        }
    }
}

#[derive(Debug, Default)]
struct Pending {
    usage: Option<String>,
    description: Option<String>,
    options: OptionMap,
}

/// Declarative surface for one class
///
/// `desc` and `method_options` stage state for the next `def`, which binds
/// it to the declared task and clears it.
pub struct ClassBuilder<'r> {
    registry: &'r mut Registry,
    class: ClassId,
    pending: Pending,
}

impl<'r> ClassBuilder<'r> {
    pub(crate) fn new(registry: &'r mut Registry, class: ClassId) -> Self {
        Self {
            registry,
            class,
            pending: Pending::default(),
        }
    }

    pub fn id(&self) -> ClassId {
        self.class
    }

    pub fn group(&mut self, name: impl Into<String>) -> &mut Self {
        self.registry.class_entry(self.class).group_name = Some(name.into());
        self
    }

    pub fn default_task(&mut self, name: impl Into<String>) -> &mut Self {
        self.registry.class_entry(self.class).default_task = Some(name.into());
        self
    }

    /// Route `alias` to `task`; the target is checked at dispatch time
    pub fn map(&mut self, alias: impl Into<String>, task: impl Into<String>) -> &mut Self {
        self.registry
            .class_entry(self.class)
            .aliases
            .insert(alias.into(), task.into());
        self
    }

    /// Route several aliases to one task
    pub fn map_many<I, S>(&mut self, aliases: I, task: &str) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            self.map(alias, task);
        }
        self
    }

    /// Merge entries into the class-wide option baseline
    pub fn default_options(&mut self, options: OptionMap) -> &mut Self {
        self.registry
            .class_entry(self.class)
            .default_options
            .extend(options);
        self
    }

    /// Stage usage and description for the next declared task
    pub fn desc(&mut self, usage: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.pending.usage = Some(usage.into());
        self.pending.description = Some(description.into());
        self
    }

    /// Stage option overrides for the next declared task
    pub fn method_options(&mut self, options: OptionMap) -> &mut Self {
        self.pending.options.extend(options);
        self
    }

    /// Declare a task from the staged state, then clear it
    pub fn def(&mut self, name: &str, handler: Handler) -> &mut Self {
        let pending = std::mem::take(&mut self.pending);
        let usage = pending.usage.unwrap_or_else(|| name.to_string());
        let description = pending.description.unwrap_or_default();
        self.registry.declare(
            self.class,
            name,
            &usage,
            &description,
            pending.options,
            handler,
        );
        self
    }
}
