//! skill-catalog - browse a curated catalog of Claude skills.
//!
//! The library loads the catalog document through a fallback chain of
//! providers (remote, local file, embedded copy), keeps it in a read-only
//! [`catalog::CatalogStore`] and derives category-filtered views from it.
//! The `skills` binary renders those views in the terminal.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod showcase;
pub mod test_utils;

pub use error::{CatalogError, Result};
