// Author: Dustin Pilgrim
// License: MIT

use crate::config::{ConfigView, Entry};

const INDENT: &str = "    ";

/// Render a config tree back to config text.
///
/// - a key with an empty value renders as the bare key
/// - any other scalar renders quoted, as `key = "value"`, or `key = 'value'`
///   when the value holds a `"` but no `'`; a value holding both is written
///   as adjacent quoted pieces, which join back without spaces
/// - a group renders as `key = {`, its entries one level deeper, then `}`
///
/// Comments, variables and the original layout are not preserved; the output
/// depends only on the tree and parses back to an equal tree.
///
/// # Examples
/// ```
/// use nestcfg::{Config, export};
///
/// let config: Config = "$who = world\ngreeting = hello $who\nempty\n".parse().unwrap();
/// assert_eq!(export::render(config.view()), "greeting = \"hello world\"\nempty\n");
/// ```
pub fn render(view: ConfigView<'_>) -> String {
    let mut out = String::new();
    render_group(view, 0, &mut out);
    out
}

fn render_group(view: ConfigView<'_>, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);

    for (key, entry) in view {
        match entry {
            Entry::Scalar("") => {
                out.push_str(&format!("{}{}\n", indent, key));
            }
            Entry::Scalar(value) => {
                out.push_str(&format!("{}{} = {}\n", indent, key, quote(value)));
            }
            Entry::Group(group) => {
                out.push_str(&format!("{}{} = {{\n", indent, key));
                render_group(group, depth + 1, out);
                out.push_str(&format!("{}}}\n", indent));
            }
        }
    }
}

/// Quote `value` so it reads back verbatim. Quoted text has no escapes, so
/// the quote character is picked to avoid the value's own quotes.
fn quote(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }
    if !value.contains('\'') {
        return format!("'{}'", value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for (i, part) in value.split('"').enumerate() {
        if i > 0 {
            out.push_str("'\"'");
        }
        if !part.is_empty() {
            out.push('"');
            out.push_str(part);
            out.push('"');
        }
    }
    out
}

/// Export a config tree as pretty-printed JSON.
///
/// Scalars become JSON strings and groups become objects, keeping key order.
pub fn to_json(view: ConfigView<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view.as_group())
}
