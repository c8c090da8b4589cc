//! The flat mapping produced by one resolution pass.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Where a resolved value was read from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Origin {
    /// A configuration file in the file list.
    File(PathBuf),
    /// A process environment variable, by its full name.
    Env(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Env(name) => write!(f, "environment variable {name}"),
        }
    }
}

/// A raw string value together with its [`Origin`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedValue {
    /// Unparsed value; type coercion belongs to the receiving argument.
    pub value: String,
    /// Source that supplied the value.
    pub origin: Origin,
}

/// Setting name to raw value, last writer wins.
///
/// Built fresh for every resolution pass. Files are inserted first, in list
/// order, and environment variables last, so a later insert for the same key
/// always represents the stronger source.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ResolvedMap {
    entries: BTreeMap<String, ResolvedValue>,
}

impl ResolvedMap {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        origin: Origin,
    ) -> Option<ResolvedValue> {
        self.entries.insert(
            key.into(),
            ResolvedValue {
                value: value.into(),
                origin,
            },
        )
    }

    /// Moves every entry of `other` into `self`, overwriting collisions.
    pub fn overlay(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Returns the entry stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.entries.get(key)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|entry| entry.value.as_str())
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
