//! Rendering an outline as a nested, linked table of contents.
//!
//! The walk is depth-first in document order, so entries appear exactly as a
//! reader meets the headings top-to-bottom. Each heading becomes one bulleted
//! line whose anchor matches the in-document link target markdown viewers
//! derive from heading text, with a numeric suffix when the same heading name
//! recurs.

use crate::outline::{Node, Outline, Root};
use std::collections::HashMap;

/// Sentinel line wrapped around generated output so a later run can find and
/// replace the whole block.
pub const GENERATED_MARKER: &str = "<!-- mdtoc generated table of contents -->";

/// Render the table of contents for `outline`.
///
/// Produces the empty string when the outline holds no headings; otherwise
/// the bulleted list wrapped in [`GENERATED_MARKER`] lines. Rendering is
/// pure: the duplicate-name counter lives and dies inside this call.
#[must_use]
pub fn render(outline: &Outline) -> String {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut body = String::new();
    match &outline.root {
        Root::Heading(node) => render_node(node, 0, &mut counts, &mut body),
        Root::Container(nodes) => {
            // the container itself emits nothing; its children sit one level
            // below it, exactly as a real root's children would
            for node in nodes {
                render_node(node, 1, &mut counts, &mut body);
            }
        }
    }
    if body.is_empty() {
        String::new()
    } else {
        format!("\n{GENERATED_MARKER}\n{body}\n{GENERATED_MARKER}\n")
    }
}

/// Derive the in-document link target for a heading name.
///
/// Lower-cases the name, doubles literal dashes, turns spaces into dashes,
/// then strips everything up to the first alphabetic character.
#[must_use]
pub fn anchor(name: &str) -> String {
    let escaped = name.to_lowercase().replace('-', "--").replace(' ', "-");
    escaped
        .trim_start_matches(|c: char| !c.is_alphabetic())
        .to_string()
}

fn render_node(node: &Node, level: usize, counts: &mut HashMap<String, usize>, out: &mut String) {
    let display = node.heading.name.trim();
    let seen = counts.entry(display.to_string()).or_default();
    let link = if *seen > 0 {
        format!("{}-{seen}", anchor(&node.heading.name))
    } else {
        anchor(&node.heading.name)
    };
    *seen += 1;

    let indent = "\t".repeat(level);
    out.push_str(&format!("{indent}* [{display}](#{link})\n"));

    for child in &node.children {
        render_node(child, level + 1, counts, out);
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
