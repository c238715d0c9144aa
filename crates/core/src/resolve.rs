// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Override-merge across an ancestor chain
//!
//! Scopes are supplied root first, most-derived last. A key present in a
//! later scope replaces the same key from any earlier one; keys a later
//! scope does not mention pass through unchanged.

use crate::option::OptionMap;
use std::collections::BTreeMap;

/// Merge option specs from root scope to most-derived scope
///
/// Replacing a key replaces its whole spec; there is no per-field merge.
pub fn merge_options<'a, I>(scopes: I) -> OptionMap
where
    I: IntoIterator<Item = &'a OptionMap>,
{
    merge_scopes(scopes)
}

/// Merge alias tables from root scope to most-derived scope
pub fn merge_aliases<'a, I>(scopes: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a BTreeMap<String, String>>,
{
    merge_scopes(scopes)
}

fn merge_scopes<'a, V, I>(scopes: I) -> BTreeMap<String, V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = &'a BTreeMap<String, V>>,
{
    let mut merged = BTreeMap::new();
    for scope in scopes {
        for (key, value) in scope {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
