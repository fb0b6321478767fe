//! Contexts: ordered, internally consistent collections of prefix expansions
//!
//! A context grows only by appending. Each new expansion is classified
//! against what is already in the context, so the first expansion to claim a
//! prefix or a namespace is the canonical one and every later expansion
//! touching either side becomes an alias. This keeps the canonical
//! expansions bijective (case-insensitively) without a separate pass.
//!
//! There is no guarantee that a context is consistent with other contexts.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::error::{PrefixMapError, Result};
use crate::expansion::{PrefixExpansion, StatusType};

/// A named, localized collection of prefix expansions
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
    /// Unique stable handle for the context
    pub name: String,
    /// Concise human readable description
    pub description: Option<String>,
    /// All expansions in insertion order; order decides canonicality
    prefix_expansions: Vec<PrefixExpansion>,
    pub comments: Option<Vec<String>>,
    pub location: Option<String>,
    pub format: Option<String>,
    /// Names of the contexts this one was merged from
    pub merged_from: Option<Vec<String>>,
    /// Uppercase prefixes on insert unless they are preferred
    pub upper: bool,
    /// Lowercase prefixes on insert unless they are preferred
    pub lower: bool,
    /// Lowercased prefixes of all expansions
    #[serde(skip)]
    prefix_index: HashSet<String>,
    /// Lowercased namespaces of all expansions
    #[serde(skip)]
    namespace_index: HashSet<String>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_upper(mut self, upper: bool) -> Self {
        self.upper = upper;
        self
    }

    pub fn with_lower(mut self, lower: bool) -> Self {
        self.lower = lower;
        self
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn prefix_expansions(&self) -> &[PrefixExpansion] {
        &self.prefix_expansions
    }

    pub fn len(&self) -> usize {
        self.prefix_expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_expansions.is_empty()
    }

    /// Add a canonical, non-preferred prefix expansion
    pub fn add(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        self.add_prefix(prefix, namespace, StatusType::Canonical, false)
    }

    /// Add a prefix expansion to this context
    ///
    /// Unless `preferred` is set, the prefix is case normalized according to
    /// the `upper`/`lower` flags. Both flags set is a configuration error,
    /// reported here rather than at construction.
    ///
    /// Classification, case-insensitive against the current contents:
    /// - prefix and namespace both known: nothing is added
    /// - only the prefix known: `PrefixAlias`
    /// - only the namespace known: `NamespaceAlias`
    /// - neither known: the given `status`
    pub fn add_prefix(
        &mut self,
        prefix: &str,
        namespace: &str,
        status: StatusType,
        preferred: bool,
    ) -> Result<()> {
        let mut prefix = prefix.to_string();
        if !preferred {
            if self.upper {
                prefix = prefix.to_uppercase();
                if self.lower {
                    return Err(PrefixMapError::ConflictingCaseNormalization {
                        context: self.name.clone(),
                    });
                }
            }
            if self.lower {
                prefix = prefix.to_lowercase();
            }
        }

        let prefix_key = prefix.to_lowercase();
        let namespace_key = namespace.to_lowercase();
        let prefix_known = self.prefix_index.contains(&prefix_key);
        let namespace_known = self.namespace_index.contains(&namespace_key);

        // An exact pair already represented is a no-op rather than a multi alias
        let status = match (prefix_known, namespace_known) {
            (true, true) => return Ok(()),
            (true, false) => StatusType::PrefixAlias,
            (false, true) => StatusType::NamespaceAlias,
            (false, false) => status,
        };

        self.prefix_index.insert(prefix_key);
        self.namespace_index.insert(namespace_key);
        self.prefix_expansions.push(PrefixExpansion {
            context: self.name.clone(),
            prefix,
            namespace: namespace.to_string(),
            status,
        });
        Ok(())
    }

    /// Expansions matching both constraints, using exact string equality
    ///
    /// A `None` constraint matches anything.
    pub fn filter(&self, prefix: Option<&str>, namespace: Option<&str>) -> Vec<&PrefixExpansion> {
        self.prefix_expansions
            .iter()
            .filter(|pe| prefix.map_or(true, |p| p == pe.prefix))
            .filter(|pe| namespace.map_or(true, |ns| ns == pe.namespace))
            .collect()
    }

    /// All unique prefixes, canonical or not
    pub fn prefixes(&self, lower: bool) -> HashSet<String> {
        if lower {
            return self.prefix_index.clone();
        }
        self.prefix_expansions
            .iter()
            .map(|pe| pe.prefix.clone())
            .collect()
    }

    /// All unique namespaces, canonical or not
    pub fn namespaces(&self, lower: bool) -> HashSet<String> {
        if lower {
            return self.namespace_index.clone();
        }
        self.prefix_expansions
            .iter()
            .map(|pe| pe.namespace.clone())
            .collect()
    }

    pub fn canonical_expansions(&self) -> impl Iterator<Item = &PrefixExpansion> {
        self.prefix_expansions.iter().filter(|pe| pe.canonical())
    }

    /// Canonical prefixes mapped to their namespaces
    ///
    /// Safe to use in the header of RDF documents.
    pub fn as_dict(&self) -> HashMap<String, String> {
        self.canonical_expansions()
            .map(|pe| (pe.prefix.clone(), pe.namespace.clone()))
            .collect()
    }

    /// Canonical namespaces mapped to their prefixes
    pub fn as_inverted_dict(&self) -> HashMap<String, String> {
        self.canonical_expansions()
            .map(|pe| (pe.namespace.clone(), pe.prefix.clone()))
            .collect()
    }

    /// Validate each expansion, collecting all messages
    pub fn validate(&self, canonical_only: bool) -> Vec<String> {
        self.prefix_expansions
            .iter()
            .filter(|pe| !canonical_only || pe.canonical())
            .flat_map(|pe| pe.validate())
            .collect()
    }

    /// Report structural inconsistencies between canonical and alias expansions
    ///
    /// Checks for duplicated canonical prefixes or namespaces, prefix aliases
    /// without a canonical prefix, and namespace aliases without a canonical
    /// namespace. Such states only arise when `combine` replays an alias
    /// status for a pair the target context has never seen.
    pub fn check_integrity(&self) -> Vec<String> {
        let mut messages = Vec::new();

        let mut prefix_counts: HashMap<&str, usize> = HashMap::new();
        let mut namespace_counts: HashMap<&str, usize> = HashMap::new();
        for pe in self.canonical_expansions() {
            *prefix_counts.entry(pe.prefix.as_str()).or_default() += 1;
            *namespace_counts.entry(pe.namespace.as_str()).or_default() += 1;
        }

        let mut duplicate_prefixes: Vec<_> = prefix_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(prefix, _)| *prefix)
            .collect();
        duplicate_prefixes.sort();
        for prefix in duplicate_prefixes {
            messages.push(format!(
                "[{}] multiple canonical records with prefix {}",
                self.name, prefix
            ));
        }

        let mut duplicate_namespaces: Vec<_> = namespace_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(namespace, _)| *namespace)
            .collect();
        duplicate_namespaces.sort();
        for namespace in duplicate_namespaces {
            messages.push(format!(
                "[{}] multiple canonical records with namespace {}",
                self.name, namespace
            ));
        }

        for pe in &self.prefix_expansions {
            match pe.status {
                StatusType::PrefixAlias if !prefix_counts.contains_key(pe.prefix.as_str()) => {
                    messages.push(format!(
                        "[{}] prefix alias {} => {} has no canonical prefix",
                        self.name, pe.prefix, pe.namespace
                    ));
                }
                StatusType::NamespaceAlias
                    if !namespace_counts.contains_key(pe.namespace.as_str()) =>
                {
                    messages.push(format!(
                        "[{}] namespace alias {} => {} has no canonical namespace",
                        self.name, pe.prefix, pe.namespace
                    ));
                }
                _ => {}
            }
        }

        messages
    }
}
