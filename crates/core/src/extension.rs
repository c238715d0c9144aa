// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extension tracking: which classes exist, who extends whom, and which
//! source units defined them.
//!
//! All collections are append-only. A class is registered once; a source
//! unit may record the same class again only if it has not yet done so.

use crate::class::ClassId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    all: Vec<ClassId>,
    children: HashMap<ClassId, Vec<ClassId>>,
    by_file: HashMap<PathBuf, Vec<ClassId>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly defined class
    pub(crate) fn register(&mut self, class: ClassId, parent: Option<ClassId>, source: &Path) {
        self.all.push(class);
        if let Some(parent) = parent {
            self.children.entry(parent).or_default().push(class);
        }
        self.record_source(class, source);
    }

    /// Note that `source` (re)opens `class`. Returns false if already recorded.
    pub(crate) fn record_source(&mut self, class: ClassId, source: &Path) -> bool {
        let classes = self.by_file.entry(source.to_path_buf()).or_default();
        if classes.contains(&class) {
            return false;
        }
        classes.push(class);
        true
    }

    /// Every registered class, in registration order
    pub fn all_classes(&self) -> &[ClassId] {
        &self.all
    }

    /// Direct subclasses of `class`, in registration order
    pub fn subclasses_of(&self, class: ClassId) -> &[ClassId] {
        self.children.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Classes defined or reopened by `source`, in declaration order
    pub fn classes_defined_in(&self, source: &Path) -> &[ClassId] {
        self.by_file.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every source unit that contributed to `class`
    pub fn sources_of(&self, class: ClassId) -> Vec<&Path> {
        let mut sources: Vec<&Path> = self
            .by_file
            .iter()
            .filter(|(_, classes)| classes.contains(&class))
            .map(|(path, _)| path.as_path())
            .collect();
        sources.sort();
        sources
    }

    pub fn contains(&self, class: ClassId) -> bool {
        self.all.contains(&class)
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
