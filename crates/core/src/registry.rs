// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task registry
//!
//! The registry owns every [`CommandClass`] together with the
//! [`ExtensionRegistry`] that records how they were defined. It is
//! populated during a single-threaded setup phase through `&mut self`
//! and is read-only afterwards; every query below takes `&self`.
//!
//! Inheritance is resolved by walking an explicit ancestor chain rather
//! than by storing copies on each class, so a parent's settings are
//! always visible to children declared before or after them.

use crate::class::{ClassBuilder, ClassId, CommandClass, DEFAULT_GROUP};
use crate::error::DefineError;
use crate::extension::ExtensionRegistry;
use crate::option::OptionMap;
use crate::resolve::{merge_aliases, merge_options};
use crate::task::{Handler, Task, HELP_TASK};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a task lookup
#[derive(Debug, Clone)]
pub enum Lookup {
    /// A declared (or built-in) task
    Found(Arc<Task>),
    /// No ancestor declares the name; carries the dynamic sentinel
    Dynamic(Task),
}

impl Lookup {
    /// The task descriptor, declared or sentinel
    pub fn task(&self) -> &Task {
        match self {
            Lookup::Found(task) => task,
            Lookup::Dynamic(task) => task,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Lookup::Dynamic(_))
    }
}

/// Owner of all command classes
///
/// Class ids are only meaningful for the registry that issued them.
/// Queries taking a [`ClassId`] panic when the id is out of range, as a
/// foreign id may be; [`Registry::get_class`] and [`Registry::contains`]
/// check an id first.
#[derive(Debug)]
pub struct Registry {
    classes: Vec<CommandClass>,
    by_name: HashMap<String, ClassId>,
    extensions: ExtensionRegistry,
    help: Arc<Task>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
            extensions: ExtensionRegistry::new(),
            help: Arc::new(Task::help()),
        }
    }

    // ------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------

    /// Define a class, or reopen it if the name is already taken
    ///
    /// A new class is registered exactly once. Reopening records `source`
    /// as an additional defining unit. Passing `None` as the parent when
    /// reopening keeps the existing parent.
    pub fn define_class(
        &mut self,
        name: &str,
        parent: Option<ClassId>,
        source: &Path,
    ) -> Result<ClassId, DefineError> {
        if let Some(&id) = self.by_name.get(name) {
            let existing = self.classes[id.0].parent;
            if parent.is_some() && parent != existing {
                return Err(DefineError::ParentMismatch {
                    class: name.to_string(),
                    existing: self.describe_parent(existing),
                    requested: self.describe_parent(parent),
                });
            }
            if self.extensions.record_source(id, source) {
                debug!(class = name, source = %source.display(), "reopened class");
            }
            return Ok(id);
        }

        let id = ClassId(self.classes.len());
        self.classes.push(CommandClass::new(id, name.to_string(), parent));
        self.by_name.insert(name.to_string(), id);
        self.extensions.register(id, parent, source);
        debug!(
            class = name,
            parent = parent.map(|p| self.classes[p.0].name.as_str()),
            source = %source.display(),
            "defined class"
        );
        Ok(id)
    }

    /// Define a class extending the class called `parent`
    pub fn define_subclass(
        &mut self,
        name: &str,
        parent: &str,
        source: &Path,
    ) -> Result<ClassId, DefineError> {
        let parent = self
            .class_named(parent)
            .ok_or_else(|| DefineError::UnknownClass(parent.to_string()))?;
        self.define_class(name, Some(parent), source)
    }

    /// Declarative builder for `class`
    pub fn class_mut(&mut self, class: ClassId) -> ClassBuilder<'_> {
        ClassBuilder::new(self, class)
    }

    pub(crate) fn class_entry(&mut self, class: ClassId) -> &mut CommandClass {
        &mut self.classes[class.0]
    }

    /// Create or replace a task on `class`
    ///
    /// Only `overrides` is stored on the class. The returned task has its
    /// options resolved against the class's current defaults; later
    /// queries resolve again, so defaults added afterwards still apply.
    pub fn declare(
        &mut self,
        class: ClassId,
        name: &str,
        usage: &str,
        description: &str,
        overrides: OptionMap,
        handler: Handler,
    ) -> Arc<Task> {
        let declared = Arc::new(Task::new(name, usage, description, overrides, handler));

        let entry = self.class_entry(class);
        if entry.put_task(Arc::clone(&declared)) {
            warn!(class = %entry.name, task = name, "task redeclared, replacing previous");
        } else {
            debug!(class = %entry.name, task = name, "declared task");
        }
        self.resolve_task(class, &declared)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// # Panics
    ///
    /// Panics if `class` is out of range for this registry, which happens
    /// with an id issued by another registry. Use [`Registry::get_class`]
    /// when the id's origin is not known.
    pub fn class(&self, class: ClassId) -> &CommandClass {
        &self.classes[class.0]
    }

    /// Checked form of [`Registry::class`]; `None` for ids past the end of
    /// this registry
    pub fn get_class(&self, class: ClassId) -> Option<&CommandClass> {
        self.classes.get(class.0)
    }

    /// Whether `class` names a class of this registry
    pub fn contains(&self, class: ClassId) -> bool {
        self.get_class(class).is_some()
    }

    pub fn class_named(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// `class` followed by its ancestors, nearest first
    pub fn ancestors(&self, class: ClassId) -> Vec<ClassId> {
        let mut chain = Vec::new();
        let mut current = Some(class);
        // parents are always registered before their children, so no cycles
        while let Some(id) = current {
            chain.push(id);
            current = self.classes[id.0].parent;
        }
        chain
    }

    /// Nearest explicitly declared group name, or `"standard"`
    pub fn group_name(&self, class: ClassId) -> &str {
        self.ancestors(class)
            .into_iter()
            .find_map(|id| self.classes[id.0].group_name.as_deref())
            .unwrap_or(DEFAULT_GROUP)
    }

    /// Effective class-wide default options, root ancestor first in the merge
    pub fn opts(&self, class: ClassId) -> OptionMap {
        let chain = self.ancestors(class);
        merge_options(
            chain
                .iter()
                .rev()
                .map(|id| &self.classes[id.0].default_options),
        )
    }

    /// Effective alias table, child entries winning
    pub fn aliases(&self, class: ClassId) -> BTreeMap<String, String> {
        let chain = self.ancestors(class);
        merge_aliases(chain.iter().rev().map(|id| &self.classes[id.0].aliases))
    }

    /// Canonical task name for `token`; unmapped tokens pass through
    pub fn resolve_alias<'a>(&'a self, class: ClassId, token: &'a str) -> &'a str {
        self.ancestors(class)
            .into_iter()
            .find_map(|id| self.classes[id.0].aliases.get(token))
            .map(String::as_str)
            .unwrap_or(token)
    }

    /// Find a task on `class` or its ancestors
    ///
    /// Falls back to the built-in help task, then to the dynamic sentinel.
    pub fn lookup(&self, class: ClassId, name: &str) -> Lookup {
        let declared = self
            .ancestors(class)
            .into_iter()
            .find_map(|id| self.classes[id.0].own_task(name).map(|task| (id, task)));
        match declared {
            Some((owner, task)) => Lookup::Found(self.resolve_task(owner, task)),
            None if name == HELP_TASK => Lookup::Found(Arc::clone(&self.help)),
            None => Lookup::Dynamic(Task::dynamic(name)),
        }
    }

    /// Nearest explicitly declared default task name, or `help`
    pub fn default_task(&self, class: ClassId) -> &str {
        self.ancestors(class)
            .into_iter()
            .find_map(|id| self.classes[id.0].default_task.as_deref())
            .unwrap_or(HELP_TASK)
    }

    /// Declared and inherited tasks for help listings
    ///
    /// Starts with the built-in help task, then walks from the root
    /// ancestor down. An override keeps the position of the task it
    /// replaces.
    pub fn all_tasks(&self, class: ClassId) -> Vec<Arc<Task>> {
        let mut tasks: Vec<Arc<Task>> = vec![Arc::clone(&self.help)];
        for id in self.ancestors(class).into_iter().rev() {
            for task in &self.classes[id.0].tasks {
                let resolved = self.resolve_task(id, task);
                match tasks.iter_mut().find(|t| t.name == task.name) {
                    Some(slot) => *slot = resolved,
                    None => tasks.push(resolved),
                }
            }
        }
        tasks
    }

    /// Every class in registration order
    pub fn classes(&self) -> impl Iterator<Item = &CommandClass> {
        self.classes.iter()
    }

    /// Declared task with its options merged over `owner`'s defaults
    fn resolve_task(&self, owner: ClassId, declared: &Task) -> Arc<Task> {
        let defaults = self.opts(owner);
        Arc::new(Task {
            options: merge_options([&defaults, &declared.options]),
            ..declared.clone()
        })
    }

    fn describe_parent(&self, parent: Option<ClassId>) -> String {
        parent
            .map(|p| self.classes[p.0].name.clone())
            .unwrap_or_else(|| "nothing".to_string())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
