//! Document sources for outline generation.
//!
//! A document arrives either as a path on disk or as inline text passed on
//! the command line; everything downstream only ever sees the full text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
/// Where the markdown source comes from.
pub enum Document {
    /// Read the document from a file on disk.
    File(PathBuf),
    /// Use text supplied directly by the caller.
    Text(String),
}

impl Document {
    /// Produce the full document text.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing file cannot be read.
    pub fn load(&self) -> io::Result<String> {
        match self {
            Self::File(path) => fs::read_to_string(path),
            Self::Text(text) => Ok(text.clone()),
        }
    }

    /// Path of the backing file, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Text(_) => None,
        }
    }
}
