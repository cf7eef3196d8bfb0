use super::*;
use crate::lexer::{split_name, tokenize_value};

/// Parse one group level, from the line after its `{` (or the start of input
/// for the root) up to its closing `}` (or end of input for the root).
pub(super) fn parse_group(parser: &mut Parser) -> Result<Group, CfgError> {
    parser.scopes.enter();
    let result = parse_entries(parser);
    parser.scopes.exit();
    result
}

fn parse_entries(parser: &mut Parser) -> Result<Group, CfgError> {
    let mut items = Group::new();
    let depth = parser.depth();

    while let Some((line, text)) = parser.lines.next_content() {
        if text == "}" {
            if depth == 0 {
                return Err(CfgError::UnexpectedEndOfGroup { line });
            }
            return Ok(items);
        }

        let (is_variable, text) = match text.strip_prefix('$') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let Some((name, rest)) = split_name(text) else {
            return Err(CfgError::NameExpected { line });
        };
        let rest = strip_separator(rest);

        if rest == "{" {
            if is_variable {
                return Err(CfgError::VariableMustBeString {
                    path: parser.qualified(name),
                    line,
                });
            }
            parse_subgroup(parser, &mut items, name, line)?;
        } else if is_variable {
            parse_variable(parser, name, rest, line)?;
        } else {
            parse_scalar(parser, &mut items, name, rest, line)?;
        }
    }

    if depth > 0 {
        return Err(CfgError::UnexpectedEndOfFile {
            line: parser.lines.len(),
        });
    }
    Ok(items)
}

/// Drop one optional `=` or `:` between a name and its value.
fn strip_separator(rest: &str) -> &str {
    let rest = rest.trim_start();
    rest.strip_prefix(['=', ':']).map_or(rest, str::trim_start)
}

fn ensure_new_key(parser: &Parser, items: &Group, name: &str, line: usize) -> Result<(), CfgError> {
    if items.contains_key(name) {
        return Err(CfgError::DuplicateKey {
            path: parser.qualified(name),
            line,
        });
    }
    Ok(())
}

fn parse_subgroup(parser: &mut Parser, items: &mut Group, name: &str, line: usize) -> Result<(), CfgError> {
    ensure_new_key(parser, items, name, line)?;

    parser.path.push(name.to_string());
    tracing::debug!(group = %parser.path.join("/"), line, "entering group");
    let group = parse_group(parser)?;
    parser.path.pop();

    items.insert(name.to_string(), Value::Group(group));
    Ok(())
}

fn parse_scalar(
    parser: &mut Parser,
    items: &mut Group,
    name: &str,
    rest: &str,
    line: usize,
) -> Result<(), CfgError> {
    ensure_new_key(parser, items, name, line)?;

    let path = parser.qualified(name);
    let tokens = tokenize_value(rest, line, &mut parser.lines)?;
    let value = value::join_tokens(&tokens, &parser.scopes, &path)?;

    items.insert(name.to_string(), Value::Scalar(value));
    Ok(())
}

fn parse_variable(parser: &mut Parser, name: &str, rest: &str, line: usize) -> Result<(), CfgError> {
    let path = parser.qualified(name);
    let duplicate = |first_line| CfgError::DuplicateVariable {
        path: path.clone(),
        line,
        first_line,
    };

    if let Some(existing) = parser.scopes.local(name) {
        return Err(duplicate(existing.declared_at));
    }

    let tokens = tokenize_value(rest, line, &mut parser.lines)?;
    let value = value::join_tokens(&tokens, &parser.scopes, &path)?;

    tracing::trace!(variable = %path, line, "declared");
    parser.scopes.declare(name, value, line).map_err(duplicate)
}
