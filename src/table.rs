use std::borrow::Cow;

use crate::endpoint::Endpoint;
use crate::error::TableError;

/// Worldwide CM servers known to accept bootstrap connections.
pub const CM_SERVERS: &[&str] = &[
    "146.66.155.38:27017",
    "155.133.248.38:27017",
    "162.254.198.44:27017",
    "162.254.197.39:27017",
    "155.133.226.76:27017",
];

/// Ordered, read-only list of raw `host:port` strings.
///
/// Entries are not checked on construction. Call [`EndpointTable::validate`]
/// to fail fast; otherwise a bad entry only surfaces when it is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    entries: Vec<Cow<'static, str>>,
}

impl EndpointTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|s| Cow::Owned(s.into())).collect(),
        }
    }

    pub fn from_static(entries: &'static [&'static str]) -> Self {
        Self {
            entries: entries.iter().map(|s| Cow::Borrowed(*s)).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_static(CM_SERVERS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|s| s.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|s| s.as_ref())
    }

    pub fn entries(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.iter().any(|e| e == entry)
    }

    /// Parses the entry at `index`.
    pub fn parse_at(&self, index: usize) -> Result<Endpoint, TableError> {
        let entry = self.get(index).ok_or(TableError::IndexOutOfBounds {
            index,
            len: self.len(),
        })?;
        entry
            .parse::<Endpoint>()
            .map_err(|source| TableError::MalformedTableEntry {
                index,
                entry: entry.to_string(),
                source,
            })
    }

    /// Parses every entry, stopping at the first malformed one.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.is_empty() {
            return Err(TableError::Empty);
        }
        for index in 0..self.len() {
            self.parse_at(index)?;
        }
        Ok(())
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::builtin()
    }
}
