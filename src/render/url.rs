//! Application-root URL templating for external script references.

/// Rewrite a placeholder-prefixed source against `base_url`.
///
/// `~/js/app.js` with base `https://cdn.example.com/site/` becomes
/// `https://cdn.example.com/site/js/app.js`. Without a base URL the
/// placeholder collapses to `/`. Sources that don't start with the
/// placeholder, including absolute and protocol-relative URLs, pass through
/// untouched. An empty placeholder disables rewriting.
///
/// # Examples
///
/// ```rust
/// use scriptseq::render::url::expand_url;
///
/// assert_eq!(expand_url("~/js/app.js", "~/", Some("https://example.com/app/")),
///            "https://example.com/app/js/app.js");
/// assert_eq!(expand_url("~/js/app.js", "~/", None), "/js/app.js");
/// assert_eq!(expand_url("//cdn.example.com/x.js", "~/", None), "//cdn.example.com/x.js");
/// ```
pub fn expand_url(source: &str, placeholder: &str, base_url: Option<&str>) -> String {
    if placeholder.is_empty() {
        return source.to_string();
    }

    let Some(rest) = source.strip_prefix(placeholder) else {
        return source.to_string();
    };
    let rest = rest.trim_start_matches('/');

    match base_url.map(|base| base.trim_end_matches('/')) {
        Some(base) if !base.is_empty() => format!("{base}/{rest}"),
        _ => format!("/{rest}"),
    }
}
