//! Identity resolution
//!
//! Turns a file of email addresses into the set of identifiers to query.
//! Both input files are single-line, comma-delimited text; only the first line
//! is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::entities::{email_prefix, IdentityMapping, UserSet};
use crate::error::InputError;

/// Read the first line of `path` and split it into comma-delimited tokens
///
/// An empty file yields no tokens.
pub fn read_tokens(path: &Path) -> Result<Vec<String>, InputError> {
    let read_error = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(read_error)?;

    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(line.split(',').map(str::to_string).collect())
}

/// Build an alias table from `prefix:id` tokens
///
/// Blank tokens are skipped. The split happens at the first `:`, so the
/// identifier itself may contain colons.
pub fn parse_identity_mapping<S: AsRef<str>>(
    path: &Path,
    tokens: &[S],
) -> Result<IdentityMapping, InputError> {
    let mut mapping = IdentityMapping::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let Some((prefix, id)) = token.split_once(':') else {
            return Err(InputError::MalformedAlias {
                path: path.to_path_buf(),
                entry: token.to_string(),
            });
        };
        mapping.insert(prefix.trim(), id.trim());
    }
    Ok(mapping)
}

/// Resolves email addresses to user identifiers through an optional alias table
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    mapping: IdentityMapping,
}

impl IdentityResolver {
    pub fn new(mapping: IdentityMapping) -> Self {
        Self { mapping }
    }

    /// Load the alias file once; without a path every prefix maps to itself
    pub fn from_alias_file(path: Option<&Path>) -> Result<Self, InputError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let mapping = parse_identity_mapping(path, &read_tokens(path)?)?;
        if mapping.is_empty() {
            tracing::warn!(path = %path.display(), "Alias file has no entries");
        }
        tracing::debug!(path = %path.display(), aliases = mapping.len(), "Loaded alias file");
        Ok(Self::new(mapping))
    }

    /// Map each email to its identifier, dropping duplicates and blank entries
    pub fn resolve_emails<S: AsRef<str>>(&self, emails: &[S]) -> UserSet {
        emails
            .iter()
            .map(|email| email_prefix(email.as_ref()))
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| self.mapping.resolve(prefix))
            .collect()
    }

    /// Read an email list file and resolve its entries
    pub fn resolve_file(&self, path: &Path) -> Result<UserSet, InputError> {
        let emails = read_tokens(path)?;
        let users = self.resolve_emails(&emails);
        if users.is_empty() {
            tracing::warn!(path = %path.display(), "Email list has no addresses");
        }
        tracing::debug!(
            path = %path.display(),
            emails = emails.len(),
            users = users.len(),
            "Resolved email list"
        );
        Ok(users)
    }
}

/// Resolve the email list at `email_path`, applying the alias file if given
pub fn resolve(email_path: &Path, alias_path: Option<&Path>) -> Result<UserSet, InputError> {
    IdentityResolver::from_alias_file(alias_path)?.resolve_file(email_path)
}
