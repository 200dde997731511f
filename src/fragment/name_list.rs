//! Parsing of delimiter-separated alias and dependency lists.
//!
//! Lists arrive as a single string such as `"jquery, util | app;core"`.
//! Tokens are separated by any mixture of the characters in
//! [`NAME_LIST_DELIMITERS`]; empty tokens are discarded. Input containing a
//! character that is neither a delimiter nor a valid token character is
//! rejected before it ever reaches the resolver.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::NAME_LIST_DELIMITERS;
use crate::core::ScriptseqError;

/// Characters that may appear neither inside a token nor between tokens:
/// whitespace other than space and tab, quotes and angle brackets.
fn forbidden_chars() -> &'static Regex {
    static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
    FORBIDDEN.get_or_init(|| {
        Regex::new(r#"[\s"'`<>&&[^ \t]]"#).expect("forbidden-character pattern is valid")
    })
}

/// Split a delimiter-separated name list into its tokens.
///
/// An empty or whitespace-only string yields no tokens. Duplicate tokens are
/// kept; callers that need set semantics insert through
/// [`Fragment::add_dependency`](crate::fragment::Fragment::add_dependency) or
/// [`Fragment::add_alias`](crate::fragment::Fragment::add_alias).
///
/// # Errors
///
/// Returns [`ScriptseqError::InvalidNameList`] when the input contains a
/// newline or other non-delimiter whitespace, a quote character, or an angle
/// bracket.
///
/// # Examples
///
/// ```rust
/// use scriptseq::fragment::parse_name_list;
///
/// let names = parse_name_list("jquery, util |app;;core").unwrap();
/// assert_eq!(names, ["jquery", "util", "app", "core"]);
///
/// assert!(parse_name_list("   ").unwrap().is_empty());
/// assert!(parse_name_list("jquery\nutil").is_err());
/// ```
pub fn parse_name_list(input: &str) -> Result<Vec<String>, ScriptseqError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(found) = forbidden_chars().find(trimmed) {
        return Err(ScriptseqError::InvalidNameList {
            input: input.to_string(),
            reason: format!("unexpected character {:?} at offset {}", found.as_str(), found.start()),
        });
    }

    Ok(trimmed
        .split(NAME_LIST_DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}
