//! Extended prefix maps
//!
//! An extended prefix map holds one record per canonical expansion, plus the
//! synonym prefixes and synonym URI prefixes collected from alias
//! expansions. It collapses to a plain prefix map by taking `prefix` and
//! `uri_prefix` of each record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::context::Context;
use crate::expansion::StatusType;

/// One entry of an extended prefix map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The canonical prefix
    pub prefix: String,
    /// The canonical URI prefix (namespace)
    pub uri_prefix: String,
    /// Extra prefixes for the same URI prefix, sorted
    #[serde(default)]
    pub prefix_synonyms: Vec<String>,
    /// Extra URI prefixes for the same prefix, sorted
    #[serde(default)]
    pub uri_prefix_synonyms: Vec<String>,
}

impl Record {
    pub fn new(prefix: impl Into<String>, uri_prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri_prefix: uri_prefix.into(),
            prefix_synonyms: Vec::new(),
            uri_prefix_synonyms: Vec::new(),
        }
    }
}

impl Context {
    /// Project the context into an extended prefix map, sorted by prefix
    ///
    /// - prefix aliases become URI prefix synonyms of their prefix
    /// - namespace aliases become prefix synonyms of the canonical owner of
    ///   their namespace; one without a canonical owner is skipped with a warning
    pub fn as_extended_prefix_map(&self) -> Vec<Record> {
        let mut prefix_map: BTreeMap<&str, &str> = BTreeMap::new();
        let mut reverse_prefix_map: HashMap<&str, &str> = HashMap::new();
        for pe in self.canonical_expansions() {
            prefix_map.insert(&pe.prefix, &pe.namespace);
            reverse_prefix_map.insert(&pe.namespace, &pe.prefix);
        }

        let mut uri_prefix_synonyms: HashMap<&str, BTreeSet<&str>> = HashMap::new();
        let mut prefix_synonyms: HashMap<&str, BTreeSet<&str>> = HashMap::new();
        for pe in self.prefix_expansions() {
            match pe.status {
                StatusType::PrefixAlias => {
                    uri_prefix_synonyms
                        .entry(&pe.prefix)
                        .or_default()
                        .insert(&pe.namespace);
                }
                StatusType::NamespaceAlias => match reverse_prefix_map.get(pe.namespace.as_str()) {
                    Some(owner) => {
                        prefix_synonyms.entry(*owner).or_default().insert(&pe.prefix);
                    }
                    None => {
                        log::warn!(
                            "Namespace {} has no canonical prefix in context {}",
                            pe.namespace,
                            self.name
                        );
                    }
                },
                _ => {}
            }
        }

        prefix_map
            .into_iter()
            .map(|(prefix, uri_prefix)| Record {
                prefix: prefix.to_string(),
                uri_prefix: uri_prefix.to_string(),
                prefix_synonyms: collect_sorted(prefix_synonyms.get(prefix)),
                uri_prefix_synonyms: collect_sorted(uri_prefix_synonyms.get(prefix)),
            })
            .collect()
    }
}

fn collect_sorted(values: Option<&BTreeSet<&str>>) -> Vec<String> {
    values
        .map(|set| set.iter().map(|v| v.to_string()).collect())
        .unwrap_or_default()
}
