//! Syntax rules for prefixes and namespaces
//!
//! Prefixes follow a restricted CURIE prefix syntax. Namespaces follow a
//! restricted subset of URI syntax that filters out pseudo-semantic URLs,
//! i.e. web pages with query parameters (`?`, `=`) that are not meant to be
//! used as subjects of RDF triples.

use regex::Regex;
use std::sync::OnceLock;

/// Word characters and dots, nothing else
pub const PREFIX_PATTERN: &str = r"^[\w\.]+$";

/// http(s) URI over word characters, dots, hyphens and slashes,
/// terminated by one of `#`, `/`, `_` or `:`
pub const NAMESPACE_PATTERN: &str = r"^https?://[\w\.\-/]+[#/_:]$";

pub fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PREFIX_PATTERN).expect("prefix regex must compile"))
}

pub fn namespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAMESPACE_PATTERN).expect("namespace regex must compile"))
}

pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix_regex().is_match(prefix)
}

/// Check whether a namespace looks like it is intended for semantic use
pub fn is_semantic_namespace(namespace: &str) -> bool {
    namespace_regex().is_match(namespace)
}
