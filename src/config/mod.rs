//! Manifest loading.
//!
//! - `manifest` - the `scriptseq.toml` schema and its conversion into a
//!   [`PageContext`](crate::context::PageContext)
//! - `parser` - generic TOML file parsing with file-path context

pub mod manifest;
mod parser;

pub use manifest::{Manifest, NameListSpec, ScriptEntry, Settings, find_manifest};
pub use parser::{parse_config, parse_config_str};
