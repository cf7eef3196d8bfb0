use indexmap::IndexMap;

/// A `$name` declared inside a group while it is being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub value: String,
    pub declared_at: usize,
}

/// Variable frames along the active path from the root group to the group
/// currently being parsed. Index 0 is the root.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<IndexMap<String, Variable>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.frames.push(IndexMap::new());
    }

    /// Drop the innermost frame and every variable declared in it.
    pub fn exit(&mut self) {
        self.frames.pop();
    }

    /// Number of open frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Variable declared directly in the innermost frame.
    pub fn local(&self, name: &str) -> Option<&Variable> {
        self.frames.last().and_then(|frame| frame.get(name))
    }

    /// Declare `name` in the innermost frame.
    ///
    /// Only that frame is checked, so an outer variable of the same name is
    /// shadowed rather than rejected. On a clash, returns the line of the
    /// existing declaration.
    pub fn declare(&mut self, name: &str, value: String, line: usize) -> Result<(), usize> {
        if let Some(existing) = self.local(name) {
            return Err(existing.declared_at);
        }
        if let Some(outer) = self.resolve(name) {
            tracing::trace!(
                name,
                line,
                shadowed_line = outer.declared_at,
                "variable shadows an outer declaration"
            );
        }

        let frame = self.innermost_mut();
        frame.insert(
            name.to_string(),
            Variable {
                value,
                declared_at: line,
            },
        );
        Ok(())
    }

    /// The innermost frame. Declaring with no frame open starts the root one.
    fn innermost_mut(&mut self) -> &mut IndexMap<String, Variable> {
        if self.frames.is_empty() {
            self.enter();
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Innermost-first lookup along the active path.
    pub fn resolve(&self, name: &str) -> Option<&Variable> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}
