//! Line-by-line construction of the outline tree.
//!
//! Headings arrive as a flat sequence whose depths can jump in either
//! direction. The builder keeps the chain from the root to the most recently
//! attached heading on a stack of in-progress nodes; an outdent closes nodes
//! off the top of the stack (attaching each to its parent as it pops) until
//! the nearest ancestor shallower than the new heading is exposed.

use crate::outline::{Heading, Node, Outline, Root};
use std::mem;
use thiserror::Error;

/// Character whose leading run marks a heading line.
const HEADING_MARKER: char = '#';

/// Longest marker run still treated as a heading. Longer runs are prose.
const MAX_MARKER_RUN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
/// Structural defects that make a document's heading sequence unusable.
///
/// All of these are fatal for the current document: no partial tree is
/// produced and the conversion cannot be retried.
pub enum ParseError {
    /// A second `#` line after the depth-zero root was established.
    #[error("a document may declare only one top-level `#` heading")]
    MultipleRootHeadings,
    /// A heading shallower than the root itself.
    #[error("cannot climb past the root depth, given: {depth}")]
    DepthBelowRoot {
        /// Depth of the offending heading.
        depth: usize,
    },
    /// The parent chain emptied without exposing a usable parent.
    #[error("no parent available for a heading at depth {depth}")]
    NoParentAvailable {
        /// Depth of the heading that could not be attached.
        depth: usize,
    },
}

/// Build an outline from a complete document.
///
/// Returns `Ok(None)` when the document contains no heading lines at all;
/// that is an ordinary outcome, not an error.
///
/// # Errors
///
/// Returns a [`ParseError`] when the document declares a second top-level
/// heading, or when a heading cannot be attached below the root.
pub fn parse(source: &str) -> Result<Option<Outline>, ParseError> {
    let mut builder = Builder::default();
    for line in source.lines() {
        builder.feed(line)?;
    }
    builder.finish()
}

/// Length of the leading `#` marker run, zero for prose lines.
pub(crate) fn marker_run(line: &str) -> usize {
    line.chars().take_while(|&c| c == HEADING_MARKER).count()
}

#[derive(Clone, Copy, PartialEq, Eq)]
/// How the first heading anchored the tree.
enum Anchor {
    /// The first heading was a `#` and doubles as the tree root.
    Heading,
    /// The first heading was deeper; top-level nodes collect in a container.
    Container,
}

#[derive(Default)]
/// Incremental tree builder holding the transient parse path.
struct Builder {
    /// Open chain from the root to the most recently attached heading.
    /// Depths along the stack are strictly increasing.
    stack: Vec<Node>,
    /// Completed top-level subtrees, in document order.
    finished: Vec<Node>,
    /// Set by the first heading; `None` while no heading has been seen.
    anchor: Option<Anchor>,
    /// Depth of the tree root; outdents may never climb below this.
    root_depth: usize,
}

impl Builder {
    fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        let markers = marker_run(line);
        if markers == 0 {
            // blank lines and prose leave the parse path untouched
            return Ok(());
        }
        if markers == 1 && self.anchor.is_some() {
            return Err(ParseError::MultipleRootHeadings);
        }
        if markers > MAX_MARKER_RUN {
            // over-deep marker runs are prose, even mid-sequence
            return Ok(());
        }

        let node = Node {
            heading: Heading {
                depth: markers - 1,
                name: line[markers..].to_string(),
                raw: line.to_string(),
            },
            children: Vec::new(),
        };

        if self.anchor.is_none() {
            self.init(node);
            Ok(())
        } else {
            self.attach(node)
        }
    }

    /// Anchor the tree on the first heading.
    fn init(&mut self, node: Node) {
        self.anchor = Some(if node.heading.depth == 0 {
            Anchor::Heading
        } else {
            Anchor::Container
        });
        self.root_depth = 0;
        self.stack.push(node);
    }

    /// Attach a subsequent heading under the nearest shallower ancestor.
    fn attach(&mut self, node: Node) -> Result<(), ParseError> {
        let depth = node.heading.depth;
        if depth < self.root_depth {
            return Err(ParseError::DepthBelowRoot { depth });
        }

        while self
            .stack
            .last()
            .is_some_and(|open| open.heading.depth >= depth)
        {
            self.close_top();
        }

        // under a real root the depth-zero root can never be climbed past,
        // so an empty stack here means the parse path was lost
        if self.stack.is_empty() && self.anchor == Some(Anchor::Heading) {
            return Err(ParseError::NoParentAvailable { depth });
        }

        self.stack.push(node);
        Ok(())
    }

    /// Close the deepest open node, attaching it to its parent, or to the
    /// finished top level when nothing shallower is open.
    fn close_top(&mut self) {
        let Some(done) = self.stack.pop() else { return };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => self.finished.push(done),
        }
    }

    fn finish(mut self) -> Result<Option<Outline>, ParseError> {
        let Some(anchor) = self.anchor else {
            return Ok(None);
        };
        while !self.stack.is_empty() {
            self.close_top();
        }
        let finished = mem::take(&mut self.finished);
        let root = match anchor {
            Anchor::Heading => {
                let mut nodes = finished;
                match nodes.pop() {
                    Some(node) => Root::Heading(node),
                    // cannot happen: the anchor was set by pushing the root
                    None => return Err(ParseError::NoParentAvailable { depth: 0 }),
                }
            }
            Anchor::Container => Root::Container(finished),
        };
        Ok(Some(Outline { root }))
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
