//! Outline tree produced from a document's heading lines.
//!
//! A document's headings form a single rooted tree: either the document's
//! own top-level `#` heading, or a synthetic container when the first
//! heading sits deeper than `#`. Nodes own their children directly; there
//! are no parent pointers and no sharing between subtrees.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One detected heading, stripped of its `#` marker run.
pub struct Heading {
    /// Nesting level, zero-based: the marker count minus one.
    pub depth: usize,
    /// Text after the marker run, kept verbatim (leading whitespace and all).
    pub name: String,
    /// The original line, kept for diagnostics.
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A heading together with the headings nested beneath it.
pub struct Node {
    /// The heading this node was built from.
    pub heading: Heading,
    /// Strictly deeper headings, in document order. Depth gaps are allowed:
    /// an `##` node may directly own an `#####` child if nothing intervened.
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// How the outline is anchored.
pub enum Root {
    /// The document's single top-level `#` heading owns the whole tree.
    Heading(Node),
    /// Synthetic depth-zero container for documents whose first heading is
    /// deeper than `#`. Purely structural; it is never rendered.
    Container(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Completed outline for one document.
///
/// Built once by [`crate::parser::parse`] and read-only afterwards; there is
/// no mutation after construction and no reuse across documents.
pub struct Outline {
    /// The root heading or synthetic container holding every detected heading.
    pub root: Root,
}
