/// What a physical line holds, as far as the group parser cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Content,
}

pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment
    } else {
        LineKind::Content
    }
}

/// The physical lines of a config text with a cursor over them.
///
/// Line numbers are 1-based. Skipped blank and comment lines still advance
/// the cursor, so numbers always match the source.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> SourceLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    /// Total number of physical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Advance past blank and comment lines and return the next content line,
    /// trimmed, with its number.
    pub fn next_content(&mut self) -> Option<(usize, &'a str)> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            self.pos += 1;
            if classify(line) == LineKind::Content {
                return Some((self.pos, line.trim()));
            }
        }
        None
    }
}
