//! Global constants used throughout the scriptseq codebase.
//!
//! This module contains the resolver's iteration bound, the characters that
//! separate names in alias and dependency lists, and the defaults used when a
//! manifest leaves a setting out. Defining them centrally keeps the magic
//! numbers discoverable.

/// Maximum number of full passes a resolver performs before returning a
/// best-effort order (15).
///
/// This is the only runaway protection: circular dependencies never converge
/// and are cut off here instead of raising a dedicated cycle error.
pub const MAX_RESOLUTION_PASSES: usize = 15;

/// Characters accepted between tokens of a name list.
///
/// Any mixture of space, tab, comma, pipe and semicolon separates aliases or
/// dependency names, e.g. `"jquery, util | app;core"`.
pub const NAME_LIST_DELIMITERS: &[char] = &[' ', '\t', ',', '|', ';'];

/// Default manifest file name looked up in the current directory.
pub const DEFAULT_MANIFEST_FILE: &str = "scriptseq.toml";

/// Environment variable overriding the manifest location.
pub const MANIFEST_ENV_VAR: &str = "SCRIPTSEQ_MANIFEST";

/// Prefix marking a source reference as relative to the application root.
///
/// `~/js/app.js` is rewritten against the configured base URL at render time.
pub const DEFAULT_URL_PLACEHOLDER: &str = "~/";

/// Maximum Levenshtein distance for "did you mean" suggestions on missing
/// dependencies.
pub const SUGGESTION_MAX_DISTANCE: usize = 3;
