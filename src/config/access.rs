use super::*;

/// Read-only view over one group of a parsed config.
///
/// Views borrow the tree; asking for a subgroup hands out a new view over the
/// same mapping without copying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigView<'a> {
    items: &'a Group,
}

/// What a key holds, as seen through a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Scalar(&'a str),
    Group(ConfigView<'a>),
}

impl<'a> Entry<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Scalar(s) => Entry::Scalar(s),
            Value::Group(items) => Entry::Group(ConfigView::new(items)),
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Entry::Scalar(s) => Some(s),
            Entry::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<ConfigView<'a>> {
        match self {
            Entry::Group(view) => Some(*view),
            Entry::Scalar(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Entry::Group(_))
    }
}

impl<'a> ConfigView<'a> {
    pub fn new(items: &'a Group) -> Self {
        Self { items }
    }

    /// Check whether `name` is a key of this group.
    ///
    /// # Examples
    /// ```
    /// # use nestcfg::Config;
    /// let config: Config = "server {\n  port = 8080\n}\n".parse().unwrap();
    /// assert!(config.exists("server"));
    /// assert!(!config.exists("client"));
    /// ```
    pub fn exists(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Scalar or subgroup stored under `name`; `None` when absent.
    ///
    /// # Examples
    /// ```
    /// # use nestcfg::{Config, Entry};
    /// let config: Config = "outer {\n  inner = 5\n}\n".parse().unwrap();
    /// let outer = config.get("outer").and_then(|e| e.as_group()).unwrap();
    /// assert_eq!(outer.get("inner"), Some(Entry::Scalar("5")));
    /// assert_eq!(outer.get("missing"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<Entry<'a>> {
        self.items.get(name).map(Entry::from_value)
    }

    pub fn get_str(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(|e| e.as_str())
    }

    pub fn group(&self, name: &str) -> Option<ConfigView<'a>> {
        self.get(name).and_then(|e| e.as_group())
    }

    /// Follow a `/`-separated path of keys, e.g. `server/tls/cert`.
    ///
    /// Empty segments are ignored, so a leading or trailing `/` is harmless.
    pub fn find(&self, path: &str) -> Option<Entry<'a>> {
        let mut current = Entry::Group(*self);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.as_group()?.get(segment)?;
        }
        Some(current)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.items.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_group(&self) -> &'a Group {
        self.items
    }
}

/// Ordered iterator over `(key, entry)` pairs of a group.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Entry<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(k, v)| (k.as_str(), Entry::from_value(v)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for ConfigView<'a> {
    type Item = (&'a str, Entry<'a>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
