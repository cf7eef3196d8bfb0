// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ast::{Group, Value};
use crate::export;
use crate::parser;
use crate::CfgError;

mod access;

pub use access::{ConfigView, Entry, Iter};

/// A parsed config tree.
///
/// The tree is built in one pass and never changes afterwards; read it
/// through [`ConfigView`]s, which may be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    items: Group,
    source: Option<PathBuf>,
}

impl Config {
    /// Parse config text (no file I/O).
    pub fn parse(content: &str) -> Result<Self, CfgError> {
        let items = parser::Parser::new(content).parse_document()?;
        Ok(Self { items, source: None })
    }

    /// Load and parse a config file.
    ///
    /// A leading `~/` is expanded to the home directory. Parse errors are
    /// wrapped in [`CfgError::InFile`] and keep their original code.
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::from_file("app.conf")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        let path = resolve_path(path.as_ref())?;
        let shown = path.to_string_lossy().to_string();

        if !path.exists() {
            return Err(CfgError::FileNotFound { path: shown });
        }

        tracing::debug!(path = %shown, "loading config file");
        let content = fs::read_to_string(&path).map_err(|e| CfgError::FileError {
            message: format!("Failed to read file: {}", e),
            path: shown.clone(),
        })?;

        let mut config = Self::parse(&content).map_err(|e| CfgError::InFile {
            path: shown,
            source: Box::new(e),
        })?;
        config.source = Some(path);
        Ok(config)
    }

    /// Load from `primary`, or from `fallback` when `primary` does not exist.
    ///
    /// Errors inside an existing primary file are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, CfgError> {
        match Self::from_file(&primary) {
            Err(CfgError::FileNotFound { .. }) => {
                tracing::debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config missing, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    CfgError::FileNotFound { .. } => CfgError::FileNotFound {
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                    },
                    other => other,
                })
            }
            other => other,
        }
    }

    /// File this config was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Read-only view of the root group.
    pub fn view(&self) -> ConfigView<'_> {
        ConfigView::new(&self.items)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.view().exists(name)
    }

    pub fn get(&self, name: &str) -> Option<Entry<'_>> {
        self.view().get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.view().get_str(name)
    }

    pub fn group(&self, name: &str) -> Option<ConfigView<'_>> {
        self.view().group(name)
    }

    pub fn find(&self, path: &str) -> Option<Entry<'_>> {
        self.view().find(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.view().iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The underlying mapping.
    pub fn as_group(&self) -> &Group {
        &self.items
    }

    pub fn into_value(self) -> Value {
        Value::Group(self.items)
    }

    /// Render back to config text. See [`export::render`].
    pub fn render(&self) -> String {
        export::render(self.view())
    }
}

impl FromStr for Config {
    type Err = CfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a str, Entry<'a>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Expand a leading "~" component against the home directory.
fn resolve_path(raw: &Path) -> Result<PathBuf, CfgError> {
    let Ok(rest) = raw.strip_prefix("~") else {
        return Ok(raw.to_path_buf());
    };
    let home = dirs::home_dir().ok_or_else(|| CfgError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw.to_string_lossy().to_string(),
    })?;
    Ok(home.join(rest))
}

#[cfg(test)]
mod tests;
