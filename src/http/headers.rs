//! Ordered, case-insensitive, multi-value header container.
//!
//! HTTP/1.1 headers are case-insensitive per spec, but fingerprinting
//! detectors check both exact casing and header order, so entries are kept
//! as `(original_name, value)` pairs in strict insertion order. Appending to
//! an existing name concatenates values joined by `", "` under the first
//! inserted casing for that name.

use std::fmt;

/// A header map that preserves insertion order and original casing while
/// matching names case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    /// Headers as (original_name, joined_value) pairs.
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from an ordered sequence of pairs, preserving the sequence's
    /// enumeration order. Repeated names concatenate per [`Headers::append`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.append(name, value);
        }
        headers
    }

    /// Get the joined value for a name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// True if a header with this name exists (case-insensitive).
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Overwrite a header (case-insensitive). All prior entries matching the
    /// name are removed and a single entry is inserted at the position of the
    /// first removed entry, or at the end if none existed.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        let first = self
            .entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(&name));
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));

        match first {
            Some(index) => self.entries.insert(index, (name, value)),
            None => self.entries.push((name, value)),
        }
    }

    /// Append a value (case-insensitive match). An existing entry keeps its
    /// position and first-seen casing, with the new value concatenated onto
    /// the joined value; otherwise a new entry is inserted at the end.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            existing.push_str(", ");
            existing.push_str(&value);
        } else {
            self.entries.push((name, value));
        }
    }

    /// Remove all entries matching the name (case-insensitive).
    pub fn delete(&mut self, name: &str) {
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    /// Iterate `(name, value)` pairs in insertion order. Restartable and
    /// non-destructive.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of distinct header entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no headers are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.entries() {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
