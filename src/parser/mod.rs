// Author: Dustin Pilgrim
// License: MIT

use crate::CfgError;
use crate::ast::{Group, Value};
use crate::lexer::SourceLines;

mod group;
mod scope;
mod value;

pub use scope::{ScopeStack, Variable};

/// Recursive-descent parser for one config text.
///
/// The line cursor, scope stack and group path live only as long as one
/// parse; nothing is shared between parses.
pub struct Parser<'a> {
    lines: SourceLines<'a>,
    scopes: ScopeStack,
    path: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: SourceLines::new(input),
            scopes: ScopeStack::new(),
            path: Vec::new(),
        }
    }

    /// Parse the whole input as the root group.
    pub fn parse_document(mut self) -> Result<Group, CfgError> {
        group::parse_group(&mut self)
    }

    /// Nesting depth of the group being parsed, root = 0.
    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    /// `outer/inner/name` for error messages.
    pub(crate) fn qualified(&self, name: &str) -> String {
        let mut parts = self.path.clone();
        parts.push(name.to_string());
        parts.join("/")
    }
}
