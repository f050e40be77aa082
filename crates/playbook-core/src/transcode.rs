//! Conversion between structured step fields and their flat text editing
//! representation.
//!
//! List fields edit as one item per line; the toolbox edits as
//! `Name - https://url` lines. Parsing strips surrounding whitespace and
//! drops blank lines, so `text_to_list` is an inverse of `list_to_text`
//! only for inputs free of blank/whitespace-only lines. That asymmetry is
//! intentional.

use playbook_store::ToolRef;

/// Join list items with newlines, one item per line, in order.
pub fn list_to_text(items: &[String]) -> String {
    items.join("\n")
}

/// Split text into trimmed, non-empty lines, preserving order.
pub fn text_to_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render the toolbox as `{name} - {url}` lines, in order.
pub fn toolbox_to_text(tools: &[ToolRef]) -> String {
    tools
        .iter()
        .map(|tool| format!("{} - {}", tool.name, tool.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse toolbox lines back into tool references.
///
/// Per non-blank line, separator precedence:
/// 1. the first `" - "` splits name from url;
/// 2. otherwise the first `"|"` splits name from url;
/// 3. otherwise the whole line is both name and url.
///
/// Name and url are trimmed individually. Blank lines produce no entry.
pub fn text_to_toolbox(text: &str) -> Vec<ToolRef> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (name, url) = if let Some((name, url)) = line.split_once(" - ") {
                (name, url)
            } else if let Some((name, url)) = line.split_once('|') {
                (name, url)
            } else {
                (line, line)
            };
            ToolRef {
                name: name.trim().to_owned(),
                url: url.trim().to_owned(),
            }
        })
        .collect()
}
