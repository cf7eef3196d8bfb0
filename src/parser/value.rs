use super::*;
use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Bare,
    Quoted,
    Variable,
}

/// Whether a single space goes between two tokens that had whitespace
/// between them in the source.
///
/// Bare words keep one space between them and from a neighbouring variable.
/// Quoted text is always glued to its neighbours, and so are two variables.
fn keeps_space(prev: Piece, next: Piece) -> bool {
    matches!(
        (prev, next),
        (Piece::Bare, Piece::Bare) | (Piece::Bare, Piece::Variable) | (Piece::Variable, Piece::Bare)
    )
}

/// Fold a tokenized value expression into its scalar string.
///
/// Quoted text and variable values go in verbatim. Whitespace between
/// tokens collapses to one space or to nothing, see [`keeps_space`].
pub(super) fn join_tokens(tokens: &[Token], scopes: &ScopeStack, path: &str) -> Result<String, CfgError> {
    let mut out = String::new();
    let mut prev: Option<Piece> = None;

    for token in tokens {
        let (text, piece) = match &token.kind {
            TokenKind::Bare(word) => (word.as_str(), Piece::Bare),
            TokenKind::Quoted(content) => (content.as_str(), Piece::Quoted),
            TokenKind::Variable(name) => {
                let variable = scopes.resolve(name).ok_or_else(|| CfgError::UnknownVariable {
                    name: name.clone(),
                    path: path.to_string(),
                    line: token.line,
                })?;
                (variable.value.as_str(), Piece::Variable)
            }
        };

        if let Some(prev) = prev {
            if token.spaced && keeps_space(prev, piece) {
                out.push(' ');
            }
        }
        out.push_str(text);
        prev = Some(piece);
    }

    Ok(out)
}
