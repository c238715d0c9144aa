// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option specifications
//!
//! An [`OptionSpec`] describes one named command-line flag: how its raw
//! text is coerced and whether it must be present. Specs are grouped into
//! an [`OptionMap`] keyed by option name.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Option specs keyed by option name
pub type OptionMap = BTreeMap<String, OptionSpec>;

/// Coerced option values keyed by option name
pub type OptionValues = serde_json::Map<String, serde_json::Value>;

/// Error parsing an option kind name
#[derive(Debug, Error, PartialEq)]
#[error("unknown option kind: {0} (expected boolean, numeric, string, required or optional)")]
pub struct OptionKindError(pub String);

/// How an option's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Presence sets the option to `true`; consumes no value token
    Boolean,
    /// Value is parsed as an integer or floating-point number
    Numeric,
    /// Value is kept as text
    String,
    /// Value is kept as text and the option must be supplied
    #[serde(rename = "required")]
    StringRequired,
    /// Value is kept as text; absence is not an error
    #[serde(rename = "optional")]
    StringOptional,
}

impl OptionKind {
    /// Whether the option consumes a value token
    pub fn takes_value(self) -> bool {
        !matches!(self, OptionKind::Boolean)
    }

    /// Whether absence after parsing is an error
    pub fn is_required(self) -> bool {
        matches!(self, OptionKind::StringRequired)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Boolean => "boolean",
            OptionKind::Numeric => "numeric",
            OptionKind::String => "string",
            OptionKind::StringRequired => "required",
            OptionKind::StringOptional => "optional",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = OptionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boolean" | "bool" => Ok(OptionKind::Boolean),
            "numeric" | "number" => Ok(OptionKind::Numeric),
            "string" => Ok(OptionKind::String),
            "required" => Ok(OptionKind::StringRequired),
            "optional" => Ok(OptionKind::StringOptional),
            other => Err(OptionKindError(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for OptionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single named option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub name: String,
    pub kind: OptionKind,
    /// Single-character alias matched as `-c`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            short: None,
        }
    }

    /// Attach a short alias
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Help token for this option, e.g. `[--force]` or `[--param=N]`
    ///
    /// Boolean options render bare. Numeric options use an `N` placeholder,
    /// text options use the upper-cased option name. Required options drop
    /// the surrounding brackets.
    pub fn usage_token(&self) -> String {
        let placeholder = self.name.to_uppercase().replace('-', "_");
        match self.kind {
            OptionKind::Boolean => format!("[--{}]", self.name),
            OptionKind::Numeric => format!("[--{}=N]", self.name),
            OptionKind::String | OptionKind::StringOptional => {
                format!("[--{}={}]", self.name, placeholder)
            }
            OptionKind::StringRequired => format!("--{}={}", self.name, placeholder),
        }
    }
}

/// Build an [`OptionMap`] from `(name, kind)` pairs
pub fn option_map<'a, I>(entries: I) -> OptionMap
where
    I: IntoIterator<Item = (&'a str, OptionKind)>,
{
    entries
        .into_iter()
        .map(|(name, kind)| (name.to_string(), OptionSpec::new(name, kind)))
        .collect()
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
