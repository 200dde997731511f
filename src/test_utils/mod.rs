//! Test utilities for scriptseq
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.
//!
//! - [`init_test_logging`] - opt-in tracing output for tests
//! - [`ManifestFixture`] - canned `scriptseq.toml` contents
//! - [`TestEnvironment`] - a temporary project directory holding a manifest
//!
//! # Example
//!
//! ```rust,no_run
//! use scriptseq::test_utils::{ManifestFixture, TestEnvironment};
//!
//! let env = TestEnvironment::with_manifest(&ManifestFixture::reversed_chain()).unwrap();
//! assert!(env.file_exists("scriptseq.toml"));
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::fragment::Fragment;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging once per process.
///
/// With `Some(level)` that level is used; otherwise `RUST_LOG` decides, and
/// without it no subscriber is installed.
///
/// ```bash
/// RUST_LOG=scriptseq=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Effective names of a fragment sequence, for order assertions.
pub fn names(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter().map(Fragment::effective_name).collect()
}
