//! Individual prefix expansions and their classification

use serde::{Deserialize, Serialize};

use crate::syntax::{is_semantic_namespace, is_valid_prefix, NAMESPACE_PATTERN, PREFIX_PATTERN};

/// Classification of a prefix expansion within its context
///
/// Only canonical expansions are exposed through the plain prefix maps.
/// The alias classifications are kept so that extended prefix maps and
/// debugging of ingestion runs can see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    /// The authoritative mapping. Canonical mappings are bijective within a context.
    #[default]
    Canonical,
    /// Same prefix as an existing expansion, different namespace
    PrefixAlias,
    /// Same namespace as an existing expansion, different prefix
    NamespaceAlias,
    /// Both the prefix and the namespace are aliases
    MultiAlias,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::Canonical => "canonical",
            StatusType::PrefixAlias => "prefix_alias",
            StatusType::NamespaceAlias => "namespace_alias",
            StatusType::MultiAlias => "multi_alias",
        }
    }
}

impl std::fmt::Display for StatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single mapping between a prefix and a namespace
///
/// Corresponds to a SHACL prefix declaration. The status is fixed when the
/// expansion is added to its context and never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixExpansion {
    /// Name of the owning context
    pub context: String,
    pub prefix: String,
    pub namespace: String,
    pub status: StatusType,
}

impl PrefixExpansion {
    pub fn new(
        context: impl Into<String>,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
        status: StatusType,
    ) -> Self {
        Self {
            context: context.into(),
            prefix: prefix.into(),
            namespace: namespace.into(),
            status,
        }
    }

    /// True if this is the canonical mapping in both directions
    pub fn canonical(&self) -> bool {
        self.status == StatusType::Canonical
    }

    /// Check the prefix and namespace against the restricted syntax rules
    ///
    /// Returns one message per problem; an empty list means the expansion is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if !is_valid_prefix(&self.prefix) {
            messages.push(format!(
                "prefix {} does not match {}",
                self.prefix, PREFIX_PATTERN
            ));
        }
        if !is_semantic_namespace(&self.namespace) {
            messages.push(format!(
                "namespace {} does not match {} (prefix: {})",
                self.namespace, NAMESPACE_PATTERN, self.prefix
            ));
        }
        messages
    }
}
