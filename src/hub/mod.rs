//! Hub identity module
//!
//! Derives the repository name, slug, URL and local directory of a hub.

mod builder;

pub use builder::*;
