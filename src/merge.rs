//! Merging contexts
//!
//! Merging replays expansions through `add_prefix`, so the receiving
//! context keeps its canonical mappings and colliding incoming expansions
//! are demoted to aliases.

use crate::context::Context;
use crate::error::Result;

impl Context {
    /// Merge another context into this one
    ///
    /// Each expansion of `other` is added with its own status as the fallback
    /// classification. If there are conflicts, the current context takes
    /// precedence. `other` is left untouched.
    pub fn combine(&mut self, other: &Context) -> Result<()> {
        for pe in other.prefix_expansions() {
            self.add_prefix(&pe.prefix, &pe.namespace, pe.status, false)?;
        }
        Ok(())
    }
}

/// Build a new context from several others
///
/// Earlier contexts take precedence over later ones. The names of the
/// inputs are recorded in `merged_from`.
pub fn merge_contexts<'a>(
    name: impl Into<String>,
    contexts: impl IntoIterator<Item = &'a Context>,
) -> Result<Context> {
    let mut merged = Context::new(name);
    let mut merged_from = Vec::new();

    for context in contexts {
        merged.combine(context)?;
        merged_from.push(context.name.clone());
    }

    merged.merged_from = Some(merged_from);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::StatusType;

    #[test]
    fn test_combine_current_context_wins() {
        let mut a = Context::new("a");
        a.add("p", "http://example.org/n1/").unwrap();

        let mut b = Context::new("b");
        b.add("p", "http://example.org/n2/").unwrap();

        a.combine(&b).unwrap();

        assert_eq!(a.len(), 2);
        let pes = a.prefix_expansions();
        assert_eq!(pes[0].namespace, "http://example.org/n1/");
        assert_eq!(pes[0].status, StatusType::Canonical);
        assert_eq!(pes[1].namespace, "http://example.org/n2/");
        assert_eq!(pes[1].status, StatusType::PrefixAlias);
        // records carry the receiving context's name
        assert_eq!(pes[1].context, "a");

        assert_eq!(a.as_dict()["p"], "http://example.org/n1/");
        // other context untouched
        assert_eq!(b.len(), 1);
        assert_eq!(b.prefix_expansions()[0].status, StatusType::Canonical);
    }

    #[test]
    fn test_combine_namespace_collision() {
        let mut a = Context::new("a");
        a.add("schema", "http://schema.org/").unwrap();

        let mut b = Context::new("b");
        b.add("sdo", "http://schema.org/").unwrap();
        b.add("foaf", "http://xmlns.com/foaf/0.1/").unwrap();

        a.combine(&b).unwrap();

        let sdo = a.filter(Some("sdo"), None);
        assert_eq!(sdo[0].status, StatusType::NamespaceAlias);
        let foaf = a.filter(Some("foaf"), None);
        assert_eq!(foaf[0].status, StatusType::Canonical);
    }

    #[test]
    fn test_combine_replays_source_status() {
        let mut b = Context::new("b");
        b.add_prefix("p", "http://example.org/n2/", StatusType::PrefixAlias, false).unwrap();

        // Neither side exists in `a`, so the source status is kept
        let mut a = Context::new("a");
        a.add("q", "http://example.org/n1/").unwrap();
        a.combine(&b).unwrap();

        let pes = a.filter(Some("p"), None);
        assert_eq!(pes.len(), 1);
        assert_eq!(pes[0].status, StatusType::PrefixAlias);
        assert_eq!(a.check_integrity().len(), 1);
    }

    #[test]
    fn test_combine_skips_duplicates() {
        let mut a = Context::new("a");
        a.add("p", "http://example.org/").unwrap();
        let b = a.clone();

        a.combine(&b).unwrap();
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_combine_applies_case_normalization() {
        let mut a = Context::new("a").with_upper(true);
        a.add("GO", "http://purl.obolibrary.org/obo/GO_").unwrap();

        let mut b = Context::new("b");
        b.add("chebi", "http://purl.obolibrary.org/obo/CHEBI_").unwrap();

        a.combine(&b).unwrap();
        assert!(a.as_dict().contains_key("CHEBI"));
    }

    #[test]
    fn test_merge_contexts() {
        let mut obo = Context::new("obo");
        obo.add("GO", "http://purl.obolibrary.org/obo/GO_").unwrap();

        let mut other = Context::new("go");
        other.add("GO", "http://identifiers.org/GO:").unwrap();
        other.add("SO", "http://purl.obolibrary.org/obo/SO_").unwrap();

        let merged = merge_contexts("merged", [&obo, &other]).unwrap();

        assert_eq!(merged.name, "merged");
        assert_eq!(
            merged.merged_from,
            Some(vec!["obo".to_string(), "go".to_string()])
        );
        let dict = merged.as_dict();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["GO"], "http://purl.obolibrary.org/obo/GO_");
    }
}
