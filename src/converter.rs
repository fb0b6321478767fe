//! Bidirectional CURIE/URI conversion over an extended prefix map

use std::collections::HashMap;

use crate::context::Context;
use crate::epm::Record;
use crate::error::{PrefixMapError, Result};

/// Expands CURIEs and compresses URIs using canonical prefixes
#[derive(Debug, Clone, Default)]
pub struct Converter {
    records: Vec<Record>,
    /// Canonical and synonym prefixes to their record
    prefix_index: HashMap<String, usize>,
    /// Canonical and synonym URI prefixes to their record, longest first
    uri_prefixes: Vec<(String, usize)>,
}

impl Converter {
    /// Build a converter, rejecting prefixes or URI prefixes shared by records
    pub fn from_extended_prefix_map(records: Vec<Record>) -> Result<Self> {
        let mut prefix_index = HashMap::new();
        let mut uri_index: HashMap<String, usize> = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            let prefixes = std::iter::once(&record.prefix).chain(&record.prefix_synonyms);
            for prefix in prefixes {
                match prefix_index.get(prefix) {
                    Some(&owner) if owner != i => {
                        return Err(PrefixMapError::DuplicatePrefix(prefix.clone()));
                    }
                    _ => {
                        prefix_index.insert(prefix.clone(), i);
                    }
                }
            }

            let uri_prefixes =
                std::iter::once(&record.uri_prefix).chain(&record.uri_prefix_synonyms);
            for uri_prefix in uri_prefixes {
                match uri_index.get(uri_prefix) {
                    Some(&owner) if owner != i => {
                        return Err(PrefixMapError::DuplicateUriPrefix(uri_prefix.clone()));
                    }
                    _ => {
                        uri_index.insert(uri_prefix.clone(), i);
                    }
                }
            }
        }

        let mut uri_prefixes: Vec<(String, usize)> = uri_index.into_iter().collect();
        uri_prefixes.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(Self {
            records,
            prefix_index,
            uri_prefixes,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The canonical form of a canonical or synonym prefix
    pub fn standardize_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefix_index
            .get(prefix)
            .map(|&i| self.records[i].prefix.as_str())
    }

    /// Expand a CURIE into a URI using the canonical URI prefix
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        let record = &self.records[*self.prefix_index.get(prefix)?];
        Some(format!("{}{}", record.uri_prefix, local))
    }

    /// Compress a URI into a CURIE, matching the longest known URI prefix
    pub fn compress(&self, uri: &str) -> Option<String> {
        self.uri_prefixes.iter().find_map(|(uri_prefix, i)| {
            uri.strip_prefix(uri_prefix.as_str())
                .map(|local| format!("{}:{}", self.records[*i].prefix, local))
        })
    }

    /// Canonical prefixes to canonical URI prefixes
    pub fn prefix_map(&self) -> HashMap<String, String> {
        self.records
            .iter()
            .map(|r| (r.prefix.clone(), r.uri_prefix.clone()))
            .collect()
    }

    /// Every known URI prefix, synonyms included, to its canonical prefix
    pub fn reverse_prefix_map(&self) -> HashMap<String, String> {
        self.uri_prefixes
            .iter()
            .map(|(uri_prefix, i)| (uri_prefix.clone(), self.records[*i].prefix.clone()))
            .collect()
    }
}

impl Context {
    /// Build a converter from this context's extended prefix map
    pub fn as_converter(&self) -> Result<Converter> {
        Converter::from_extended_prefix_map(self.as_extended_prefix_map())
    }
}
