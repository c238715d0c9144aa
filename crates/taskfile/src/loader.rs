// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Taskfile loader: applies parsed taskfiles to a [`Registry`].
//!
//! Each file is a source unit identified by its canonical path. Loading
//! the same class name from several files reopens it, so every file is
//! recorded as a defining unit of that class.
//!
//! # Example
//!
//! ```ignore
//! let mut loader = Loader::new();
//! loader.load_file(Path::new("Tkfile.toml"))?;
//! let loaded = loader.finish();
//! let class = loaded.registry.class_named("Build").unwrap();
//! Dispatcher::new(&loaded.registry, class)
//!     .with_dynamic(&loaded.fallbacks)
//!     .dispatch(&["compile", "--release"])?;
//! ```

use crate::parser::{parse_taskfile, to_option_map, ClassDef, ParseError, Taskfile};
use crate::template::{invocation_vars, render};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tk_core::{
    handler, ClassId, DefineError, DynamicCall, DynamicHandler, Handler, HandlerError, Registry,
};
use tracing::{debug, info};

/// Errors that can occur during taskfile loading
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading a taskfile
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{path}: class {class} extends unknown class {parent}")]
    UnknownParent {
        path: PathBuf,
        class: String,
        parent: String,
    },

    #[error("{path}: {source}")]
    Define {
        path: PathBuf,
        #[source]
        source: DefineError,
    },
}

/// Fallback templates per class, consulted nearest ancestor first
#[derive(Debug, Clone, Default)]
pub struct Fallbacks {
    templates: HashMap<ClassId, String>,
}

impl Fallbacks {
    /// Template used for `class`, inherited from the nearest ancestor
    pub fn template_for(&self, registry: &Registry, class: ClassId) -> Option<&str> {
        registry
            .ancestors(class)
            .into_iter()
            .find_map(|id| self.templates.get(&id))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Error returned when no class in the chain declares a fallback
#[derive(Debug, Error)]
#[error("could not find task \"{0}\"")]
pub struct NoFallback(pub String);

impl DynamicHandler for Fallbacks {
    fn invoke(&self, call: &DynamicCall<'_>) -> Result<Value, HandlerError> {
        let template = self
            .template_for(call.registry, call.class)
            .ok_or_else(|| NoFallback(call.task.to_string()))?;
        let vars = invocation_vars(call.task, call.task, call.args, call.options);
        Ok(Value::String(render(template, &vars)))
    }
}

/// Result of loading one or more taskfiles
#[derive(Debug)]
pub struct Loaded {
    pub registry: Registry,
    pub fallbacks: Fallbacks,
}

/// Accumulates taskfiles into one registry during setup
#[derive(Debug, Default)]
pub struct Loader {
    registry: Registry,
    fallbacks: Fallbacks,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, parse and apply the taskfile at `path`
    ///
    /// Returns the classes the file defined or reopened, in order.
    pub fn load_file(&mut self, path: &Path) -> Result<Vec<ClassId>, LoadError> {
        let source = path.canonicalize().map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = std::fs::read_to_string(&source).map_err(|source_err| LoadError::Io {
            path: source.clone(),
            source: source_err,
        })?;
        let classes = self.load_str(&source, &content)?;
        info!(path = %source.display(), classes = classes.len(), "loaded taskfile");
        Ok(classes)
    }

    /// Parse and apply taskfile `content` as source unit `source`
    pub fn load_str(&mut self, source: &Path, content: &str) -> Result<Vec<ClassId>, LoadError> {
        let taskfile = parse_taskfile(content).map_err(|e| LoadError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;
        self.apply(source, &taskfile)
    }

    /// Apply an already parsed taskfile
    pub fn apply(&mut self, source: &Path, taskfile: &Taskfile) -> Result<Vec<ClassId>, LoadError> {
        taskfile
            .classes
            .iter()
            .map(|class| self.apply_class(source, class))
            .collect()
    }

    fn apply_class(&mut self, source: &Path, def: &ClassDef) -> Result<ClassId, LoadError> {
        let parent = match &def.extends {
            Some(parent) => Some(self.registry.class_named(parent).ok_or_else(|| {
                LoadError::UnknownParent {
                    path: source.to_path_buf(),
                    class: def.name.clone(),
                    parent: parent.clone(),
                }
            })?),
            None => None,
        };
        let id = self
            .registry
            .define_class(&def.name, parent, source)
            .map_err(|e| LoadError::Define {
                path: source.to_path_buf(),
                source: e,
            })?;

        let mut class = self.registry.class_mut(id);
        if let Some(group) = &def.group {
            class.group(group.as_str());
        }
        if let Some(task) = &def.default_task {
            class.default_task(task.as_str());
        }
        for (alias, task) in &def.map {
            class.map(alias.as_str(), task.as_str());
        }
        if !def.default_options.is_empty() {
            class.default_options(to_option_map(&def.default_options));
        }
        for task in &def.tasks {
            class
                .desc(task.usage(), task.desc.clone().unwrap_or_default())
                .method_options(to_option_map(&task.options))
                .def(&task.name, run_handler(&task.name, task.usage(), &task.run));
        }

        if let Some(fallback) = &def.fallback {
            self.fallbacks.templates.insert(id, fallback.clone());
        }
        debug!(class = %def.name, tasks = def.tasks.len(), "applied class");
        Ok(id)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// End setup; the registry is read-only from here on
    pub fn finish(self) -> Loaded {
        Loaded {
            registry: self.registry,
            fallbacks: self.fallbacks,
        }
    }
}

/// Handler that renders `template` and returns the command as a string
fn run_handler(task: &str, usage: &str, template: &str) -> Handler {
    let task = task.to_string();
    let usage = usage.to_string();
    let template = template.to_string();
    handler(move |args, options| {
        let vars = invocation_vars(&task, &usage, args, options);
        Ok(Value::String(render(&template, &vars)))
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
