// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CfgError;

mod lines;
mod scanner;
mod tokenizer;

pub use lines::{LineKind, SourceLines, classify};

use tokenizer::Scan;

/// Key and variable names: `[A-Za-z0-9_]+`, case-sensitive.
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+").expect("valid name pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-whitespace text.
    Bare(String),
    /// Content of a '...' or "..." string, taken verbatim.
    Quoted(String),
    /// `$name` at the start of a token. A `$` later in a bare word is plain text.
    Variable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Whitespace (or a line continuation) separated this token from the previous one.
    pub spaced: bool,
    pub line: usize,
}

/// Character scanner over the value part of a single physical line.
pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line,
        };
        lexer.peek = lexer.input.next();
        lexer
    }
}

/// Split a leading key or variable name off `line`.
///
/// Returns the name and the remainder, or `None` when the line does not start
/// with a name character.
pub fn split_name(line: &str) -> Option<(&str, &str)> {
    NAME.find(line).map(|m| (m.as_str(), &line[m.end()..]))
}

/// Tokenize a value expression starting with `rest` (the text after the name
/// and separator on line `line`), pulling continuation lines from `lines`.
pub fn tokenize_value(
    rest: &str,
    line: usize,
    lines: &mut SourceLines<'_>,
) -> Result<Vec<Token>, CfgError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexer::new(rest, line);
    let mut continued = false;

    loop {
        match tokenizer::next_token(&mut lexer)? {
            Scan::Token(mut token) => {
                if continued {
                    token.spaced = true;
                    continued = false;
                }
                tokens.push(token);
            }
            Scan::Continue => {
                let Some((number, text)) = lines.next_content() else {
                    return Err(CfgError::UnexpectedEndOfFile { line: lines.len() });
                };
                tracing::trace!(from = lexer.line, to = number, "value continues");
                lexer = Lexer::new(text, number);
                continued = true;
            }
            Scan::End => break,
        }
    }

    Ok(tokens)
}
