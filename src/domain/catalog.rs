//! Upstream catalog records.
//!
//! Read-only snapshots of what the catalog returned for one request; the
//! gateway never caches them or re-fetches detail for a member reference.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog entity with its ordered category labels.
///
/// `types` preserves upstream order and duplicates; the aggregation layer
/// reports them exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntity {
    /// Lowercase entity key.
    pub name: String,
    /// Category labels in upstream order.
    pub types: Vec<String>,
}

/// Reference to an entity inside a category member list.
///
/// Returned verbatim to clients, exactly as the upstream listed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntityRef {
    /// Entity name.
    #[schema(example = "pikachu")]
    pub name: String,
    /// Upstream detail URL for the entity.
    #[schema(example = "https://pokeapi.co/api/v2/pokemon/25/")]
    pub url: String,
}

impl EntityRef {
    /// Build a reference from upstream values.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
