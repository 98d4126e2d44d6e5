//! Identity domain entities
//!
//! Email addresses are turned into user identifiers by taking their local part.
//! When that differs from the identifier Stackalytics knows the user by, an
//! alias mapping translates it.

use std::collections::{BTreeSet, HashMap};

/// Extract the user token from an email address
///
/// Returns the trimmed text before the first `@`. A token without `@` is
/// returned whole (trimmed).
pub fn email_prefix(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local.trim(),
        None => email.trim(),
    }
}

/// Email-prefix → canonical identifier table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMapping {
    aliases: HashMap<String, String>,
}

impl IdentityMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias; a later entry for the same prefix replaces the earlier one
    pub fn insert(&mut self, prefix: impl Into<String>, id: impl Into<String>) {
        self.aliases.insert(prefix.into(), id.into());
    }

    /// The canonical identifier for `prefix`, or `prefix` itself when unmapped
    pub fn resolve<'a>(&'a self, prefix: &'a str) -> &'a str {
        self.aliases.get(prefix).map_or(prefix, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for IdentityMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (prefix, id) in iter {
            mapping.insert(prefix, id);
        }
        mapping
    }
}

/// Deduplicated set of user identifiers
///
/// Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSet(BTreeSet<String>);

impl UserSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the identifier was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for UserSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut users = Self::new();
        for id in iter {
            users.insert(id);
        }
        users
    }
}
