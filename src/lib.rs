//! Semantic Prefix Map Library
//!
//! This library maintains contexts: named, internally consistent
//! collections of prefix-to-namespace mappings such as the prefix
//! declarations of RDF documents or CURIE prefix maps.
//!
//! # Overview
//!
//! A [`Context`] is populated by repeatedly adding (prefix, namespace)
//! pairs. Each pair is classified against what is already present:
//!
//! 1. The first pair to claim a prefix or a namespace is `canonical`
//! 2. A later pair reusing a known prefix is a `prefix_alias`
//! 3. A later pair reusing a known namespace is a `namespace_alias`
//! 4. A pair whose prefix and namespace are both known is dropped
//!
//! Comparisons are case-insensitive, so the canonical mappings of a
//! context are always bijective.
//!
//! Once populated, a context projects into a plain prefix map
//! ([`Context::as_dict`]), an inverted map ([`Context::as_inverted_dict`]),
//! an extended prefix map with synonyms ([`Context::as_extended_prefix_map`])
//! or a [`Converter`] for CURIE expansion and URI compression.
//!
//! # Usage
//!
//! ```
//! use prefixmaps::{Context, StatusType};
//!
//! let mut context = Context::new("obo");
//! context.add("GO", "http://purl.obolibrary.org/obo/GO_")?;
//! context.add("GO", "http://identifiers.org/GO:")?;
//!
//! assert_eq!(context.prefix_expansions()[1].status, StatusType::PrefixAlias);
//! assert_eq!(context.as_dict()["GO"], "http://purl.obolibrary.org/obo/GO_");
//!
//! let converter = context.as_converter()?;
//! assert_eq!(
//!     converter.compress("http://identifiers.org/GO:0008150").as_deref(),
//!     Some("GO:0008150")
//! );
//! # Ok::<(), prefixmaps::PrefixMapError>(())
//! ```

pub mod context;
pub mod converter;
pub mod epm;
pub mod error;
pub mod expansion;
pub mod ingest;
pub mod merge;
pub mod syntax;

// Re-export main types for convenience
pub use crate::context::Context;
pub use crate::converter::Converter;
pub use crate::epm::Record;
pub use crate::error::{PrefixMapError, Result};
pub use crate::expansion::{PrefixExpansion, StatusType};
pub use crate::ingest::{ingest, IngestOptions, PrefixRecord, PrefixSource, StaticSource};
pub use crate::merge::merge_contexts;
pub use crate::syntax::{NAMESPACE_PATTERN, PREFIX_PATTERN};
