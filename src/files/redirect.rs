use std::collections::HashMap;

/// Exact-match table of request path to redirect target.
///
/// No prefix or wildcard matching: `/old` does not match `/old/` or
/// `/old/page`.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Target for `path`, if it is a configured key.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RedirectTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
