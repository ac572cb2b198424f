//! Configuration to acknowledge per-project defaults.
//!
//! Specifically, we try to find an mdtoc.toml in the working directory, and
//! if present we load settings from there. This lets a project pin the
//! document its table of contents belongs to, so `mdtoc --write` runs bare.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// Project preferences loaded from mdtoc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = String::new())]
    /// Document path used when neither `--file` nor `--text` is given.
    /// Empty means no default document.
    pub file: String,
}

impl Config {
    #[must_use]
    /// Load configuration from mdtoc.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("mdtoc.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
