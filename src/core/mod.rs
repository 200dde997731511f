//! Core types for scriptseq
//!
//! This module holds the pieces every other layer depends on: the error type
//! and the user-facing error context used by the CLI.
//!
//! # Error Management
//!
//! - **Strongly-typed errors** ([`ScriptseqError`]) for precise error handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - **Automatic error conversion** from [`std::io::Error`] and [`toml::de::Error`]
//!
//! # Examples
//!
//! ```rust
//! use scriptseq::core::{ScriptseqError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(ScriptseqError::ManifestNotFound {
//!         path: "scriptseq.toml".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{
    ErrorContext, IntoAnyhowWithContext, ScriptseqError, closest_name, user_friendly_error,
};
