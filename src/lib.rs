//! Convert markdown-style headings into a linked table of contents.
//!
//! The library splits into two halves consumed in sequence: [`parser`]
//! rebuilds a heading hierarchy from a flat, possibly non-monotonic sequence
//! of heading lines, and [`toc`] walks that tree into a nested list of
//! collision-free in-document links. The binary wires these to command-line
//! flags, project configuration, and the file-splicing [`writer`].
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod outline;
pub mod parser;
pub mod toc;
pub mod writer;
