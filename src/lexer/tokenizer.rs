use super::*;
use super::scanner::{at_line_end, bump, skip_whitespace};

pub(super) enum Scan {
    Token(Token),
    /// A lone `\` ended the line; the value goes on with the next content line.
    Continue,
    End,
}

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Scan, CfgError> {
    let spaced = skip_whitespace(lexer);
    let line = lexer.line;

    let kind = match lexer.peek {
        None => return Ok(Scan::End),
        Some('"') | Some('\'') => tokenize_quoted(lexer)?,
        Some('$') => tokenize_variable(lexer)?,
        Some(_) => {
            let word = tokenize_bare(lexer);
            if word == "\\" && at_line_end(lexer) {
                return Ok(Scan::Continue);
            }
            TokenKind::Bare(word)
        }
    };

    Ok(Scan::Token(Token { kind, spaced, line }))
}

fn tokenize_bare(lexer: &mut Lexer) -> String {
    let mut word = String::new();
    while let Some(ch) = lexer.peek {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        bump(lexer);
    }
    word
}

fn tokenize_variable(lexer: &mut Lexer) -> Result<TokenKind, CfgError> {
    bump(lexer); // consume '$'

    let mut name = String::new();
    while let Some(ch) = lexer.peek {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    if name.is_empty() {
        let rest = tokenize_bare(lexer);
        return Err(CfgError::UnrecognizedToken {
            token: format!("${}", rest),
            line: lexer.line,
        });
    }

    Ok(TokenKind::Variable(name))
}

/// Quoted text runs verbatim up to the next matching quote on the same line.
/// A backslash has no special meaning inside quotes.
fn tokenize_quoted(lexer: &mut Lexer) -> Result<TokenKind, CfgError> {
    let Some(quote) = bump(lexer) else {
        return Ok(TokenKind::Quoted(String::new()));
    };

    let mut content = String::new();
    loop {
        match bump(lexer) {
            None => {
                return Err(CfgError::UnmatchedQuote {
                    quote,
                    line: lexer.line,
                });
            }
            Some(ch) if ch == quote => break,
            Some(ch) => content.push(ch),
        }
    }

    Ok(TokenKind::Quoted(content))
}
