//! Splicing a generated table of contents into a document on disk.
//!
//! The block goes immediately after the document's top-level `#` heading
//! line. A block left behind by a previous run is recognised by its sentinel
//! lines and replaced in place, so repeated writes never stack up.

use crate::parser;
use crate::toc::GENERATED_MARKER;
use std::fs;
use std::io;
use std::path::Path;

/// Write `toc` into the document at `path`.
///
/// Returns `Ok(false)` without touching the file when the document has no
/// top-level heading to anchor the block and no previously generated block.
///
/// # Errors
///
/// Returns an error when the file cannot be read or written.
pub fn splice(path: &Path, toc: &str) -> io::Result<bool> {
    let content = fs::read_to_string(path)?;
    match weave(&content, toc) {
        Some(updated) => {
            fs::write(path, updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Produce the updated document text, or `None` when there is nowhere to put
/// the block.
fn weave(content: &str, toc: &str) -> Option<String> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    // a previous run's block is replaced, sentinel to sentinel inclusive
    let mut sentinels = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| (line.trim() == GENERATED_MARKER).then_some(index));
    if let (Some(open), Some(close)) = (sentinels.next(), sentinels.next()) {
        let block = toc.strip_prefix('\n').unwrap_or(toc);
        let mut updated = lines[..open].concat();
        updated.push_str(block);
        updated.push_str(&lines[close + 1..].concat());
        return Some(updated);
    }

    // otherwise the block lands directly after the first `#` line
    let top = lines
        .iter()
        .position(|line| parser::marker_run(line.trim()) == 1)?;
    let mut updated = lines[..=top].concat();
    updated.push_str(toc);
    updated.push_str(&lines[top + 1..].concat());
    Some(updated)
}

#[cfg(test)]
#[path = "tests/writer.rs"]
mod tests;
