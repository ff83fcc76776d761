#![forbid(unsafe_code)]

//! Core domain model and report logic for Befund.
//!
//! This crate provides:
//! - Domain types (items, entries, sides)
//! - Catalog loading from CSV
//! - Selection of items by code
//! - Classification into normal and pathological findings
//! - Rendering of the two-line summary
//! - Interactive prompts

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod selector;
pub mod engine;
pub mod summary;
pub mod prompt;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::Catalog;
pub use config::Config;
pub use selector::{parse_affected, select_items, split_tokens};
pub use engine::{classify, OverrideProvider};
pub use summary::build_summary;
pub use prompt::Prompter;
