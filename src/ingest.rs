//! Building contexts from external prefix sources
//!
//! A source yields (prefix, namespace, preferred) records in its natural
//! order. Order matters: the first record to claim a prefix or namespace
//! becomes canonical.

use std::collections::HashSet;

use crate::context::Context;
use crate::error::Result;
use crate::expansion::StatusType;
use crate::syntax::is_semantic_namespace;

/// A prefix declaration as provided by a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    pub prefix: String,
    pub namespace: String,
    /// The prefix casing is authoritative and must not be normalized
    pub preferred: bool,
}

impl PrefixRecord {
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            namespace: namespace.into(),
            preferred: false,
        }
    }

    pub fn preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }
}

/// Trait for anything that can feed prefix declarations into a context
pub trait PrefixSource {
    /// Name given to contexts built from this source
    fn name(&self) -> &str;

    /// All records, in the order they should be added
    fn records(&self) -> Result<Vec<PrefixRecord>>;
}

/// An in-memory source, e.g. a curated prefix list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    name: String,
    records: Vec<PrefixRecord>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Build from ordered (prefix, namespace) pairs
    pub fn from_pairs<P, N>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (P, N)>,
    ) -> Self
    where
        P: Into<String>,
        N: Into<String>,
    {
        Self {
            name: name.into(),
            records: pairs
                .into_iter()
                .map(|(prefix, namespace)| PrefixRecord::new(prefix, namespace))
                .collect(),
        }
    }

    pub fn push(&mut self, record: PrefixRecord) {
        self.records.push(record);
    }
}

impl PrefixSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Result<Vec<PrefixRecord>> {
        Ok(self.records.clone())
    }
}

/// Options for an ingestion run
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Uppercase prefixes unless the record is preferred
    pub upper: bool,
    /// Skip namespaces that do not look like semantic URIs
    pub filter_dubious: bool,
    /// Prefixes to leave out entirely
    pub skip: HashSet<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            upper: false,
            filter_dubious: true,
            skip: HashSet::new(),
        }
    }
}

/// Build a context from a source
pub fn ingest(source: &dyn PrefixSource, options: &IngestOptions) -> Result<Context> {
    let mut context = Context::new(source.name()).with_upper(options.upper);
    let mut skipped = 0usize;

    for record in source.records()? {
        if options.skip.contains(&record.prefix) {
            log::debug!("Skipping listed prefix {}", record.prefix);
            skipped += 1;
            continue;
        }
        if options.filter_dubious && !is_semantic_namespace(&record.namespace) {
            log::debug!(
                "Skipping dubious ns {} => {}",
                record.prefix,
                record.namespace
            );
            skipped += 1;
            continue;
        }
        context.add_prefix(
            &record.prefix,
            &record.namespace,
            StatusType::Canonical,
            record.preferred,
        )?;
    }

    log::debug!(
        "Ingested {} expansions into context {} ({} records skipped)",
        context.len(),
        context.name,
        skipped
    );
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrefixMapError;

    struct FailingSource;

    impl PrefixSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn records(&self) -> Result<Vec<PrefixRecord>> {
            Err(PrefixMapError::Source {
                source_name: "failing".to_string(),
                reason: "unreachable registry".to_string(),
            })
        }
    }

    #[test]
    fn test_ingest_static_source() {
        let source = StaticSource::from_pairs(
            "bioportal",
            [
                ("OA", "http://www.w3.org/ns/oa#"),
                ("SCHEMA", "http://schema.org/"),
                ("SCHEMA", "https://schema.org/"),
            ],
        );

        let ctx = ingest(&source, &IngestOptions::default()).unwrap();
        assert_eq!(ctx.name, "bioportal");
        assert_eq!(ctx.len(), 3);

        let dict = ctx.as_dict();
        assert_eq!(dict["OA"], "http://www.w3.org/ns/oa#");
        assert_eq!(dict["SCHEMA"], "http://schema.org/");
        assert_eq!(ctx.as_inverted_dict()["http://schema.org/"], "SCHEMA");
    }

    #[test]
    fn test_ingest_filters_dubious_and_skipped() {
        let source = StaticSource::from_pairs(
            "registry",
            [
                ("gro", "http://www.bootstrep.eu/ontology/GRO#"),
                ("search", "https://example.org/search?q="),
                ("kgcl", "https://w3id.org/kgcl/"),
            ],
        );
        let options = IngestOptions {
            skip: HashSet::from(["gro".to_string()]),
            ..Default::default()
        };

        let ctx = ingest(&source, &options).unwrap();
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.as_dict()["kgcl"], "https://w3id.org/kgcl/");
    }

    #[test]
    fn test_ingest_keeps_dubious_when_unfiltered() {
        let source =
            StaticSource::from_pairs("registry", [("search", "https://example.org/search?q=")]);
        let options = IngestOptions {
            filter_dubious: false,
            ..Default::default()
        };

        let ctx = ingest(&source, &options).unwrap();
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.validate(true).len(), 1);
    }

    #[test]
    fn test_ingest_upper_respects_preferred() {
        let mut source = StaticSource::new("bioregistry");
        source.push(PrefixRecord::new("go", "http://purl.obolibrary.org/obo/GO_"));
        source.push(
            PrefixRecord::new("NCBITaxon", "http://purl.obolibrary.org/obo/NCBITaxon_")
                .preferred(true),
        );
        let options = IngestOptions {
            upper: true,
            ..Default::default()
        };

        let ctx = ingest(&source, &options).unwrap();
        let dict = ctx.as_dict();
        assert!(dict.contains_key("GO"));
        assert!(dict.contains_key("NCBITaxon"));
    }

    #[test]
    fn test_ingest_propagates_source_error() {
        let err = ingest(&FailingSource, &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, PrefixMapError::Source { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to read prefixes from failing: unreachable registry"
        );
    }
}
