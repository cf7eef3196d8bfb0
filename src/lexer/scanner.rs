use super::*;

/// Advance the character iterator
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    lexer.peek = lexer.input.next();
    curr
}

/// Skip whitespace; returns whether any was skipped
pub(super) fn skip_whitespace(lexer: &mut Lexer) -> bool {
    let mut skipped = false;
    while let Some(c) = lexer.peek {
        if !c.is_whitespace() {
            break;
        }
        bump(lexer);
        skipped = true;
    }
    skipped
}

/// True when nothing but whitespace is left on the line
pub(super) fn at_line_end(lexer: &Lexer) -> bool {
    lexer.peek.is_none_or(char::is_whitespace) && lexer.input.clone().all(char::is_whitespace)
}
