//! Placeholder checks for step templates.
//!
//! Rendering only substitutes `{details}`. Anything else in braces is left
//! in the output verbatim; this module finds such tokens so loading can
//! warn about them.

use std::sync::LazyLock;

use regex::Regex;

/// The only placeholder the renderer substitutes.
pub const SUPPORTED_PLACEHOLDER: &str = "details";

/// Return the names of placeholders in `template` other than `{details}`,
/// in order of appearance.
pub fn unknown_placeholders(template: &str) -> Vec<&str> {
    static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\{([^{}]*)\}").expect("valid regex")
    });

    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| *name != SUPPORTED_PLACEHOLDER)
        .collect()
}
