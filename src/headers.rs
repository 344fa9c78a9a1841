use crate::constants::header;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Ordered header collection with case-insensitive name lookup.
///
/// Entries are keyed by the ASCII-lowercased name but remember the
/// display-case name they were first inserted with.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: IndexMap<String, Header>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    name: String,
    value: String,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a header. `Vary` values are merged instead of
    /// replaced so repeated inserts never drop existing cache keys.
    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }
        self.insert(name, value);
    }

    /// Inserts a header only when no value is present yet. Lets a
    /// downstream handler's explicit choice win over a blanket policy.
    pub fn set_if_absent<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if self.contains(&name) {
            return;
        }
        self.set(name, value);
    }

    /// Merges a token into the `Vary` header: existing tokens are kept,
    /// duplicates are dropped case-insensitively, whitespace-only input is
    /// a no-op.
    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        let mut entries: Vec<String> = self
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if !entries
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(incoming))
        {
            entries.push(incoming.to_string());
        }

        self.insert(header::VARY.to_string(), entries.join(", "));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Merges another collection into this one, routing `Vary` values
    /// through the deduplicating merge.
    pub fn extend(&mut self, other: HeaderCollection) {
        for (_, entry) in other.entries {
            if entry.name.eq_ignore_ascii_case(header::VARY) {
                self.add_vary(entry.value);
            } else {
                self.insert(entry.name, entry.value);
            }
        }
    }

    /// Iterates over `(display name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, value: String) {
        let key = name.to_ascii_lowercase();
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().value = value,
            Entry::Vacant(entry) => {
                entry.insert(Header { name, value });
            }
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderCollection
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut collection = Self::new();
        for (name, value) in iter {
            collection.set(name, value);
        }
        collection
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
