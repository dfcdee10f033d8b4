//! Derived queries over the catalog port.
//!
//! Three read-only aggregations, each one fetch plus a pure selection step.
//! Every operation fetches fresh upstream data, succeeds fully or fails
//! fully, and is never retried.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::catalog::EntityRef;
use super::error::Error;
use super::ports::{CatalogError, CatalogSource};

/// Category labels reported for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypesReport {
    /// Entity name exactly as the caller requested it.
    #[schema(example = "pikachu")]
    pub name: String,
    /// Category labels in upstream order, duplicates preserved.
    pub types: Vec<String>,
}

/// Read-side service computing the derived queries.
#[derive(Clone)]
pub struct AggregationEngine {
    catalog: Arc<dyn CatalogSource>,
}

impl AggregationEngine {
    /// Build an engine over a catalog port.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// Report the category labels attached to one entity.
    ///
    /// The upstream key is the lowercased name; the response echoes the
    /// name as requested.
    pub async fn types_of(&self, name: &str) -> Result<TypesReport, Error> {
        let entity = self
            .catalog
            .fetch_entity(&name.to_lowercase())
            .await
            .map_err(|err| map_catalog_error(err, "pokemon not found", "name", name))?;
        info!(name, types = ?entity.types, "resolved entity types");
        Ok(TypesReport {
            name: name.to_owned(),
            types: entity.types,
        })
    }

    /// Pick one member of a category uniformly at random.
    pub async fn random_by_category(&self, category: &str) -> Result<EntityRef, Error> {
        let members = self.category_members(category).await?;
        let mut rng = rand::thread_rng();
        let member = choose_member(&members, &mut rng).clone();
        info!(category, member = %member.name, "selected random member");
        Ok(member)
    }

    /// Pick the member of a category with the longest name.
    ///
    /// Ties resolve to the first such member in upstream list order.
    pub async fn longest_name_by_category(&self, category: &str) -> Result<EntityRef, Error> {
        let members = self.category_members(category).await?;
        let member = longest_member(&members).clone();
        info!(category, member = %member.name, "selected longest-named member");
        Ok(member)
    }

    /// Fetch a category's member list and reject empty categories.
    async fn category_members(&self, category: &str) -> Result<Vec<EntityRef>, Error> {
        let members = self
            .catalog
            .fetch_category_members(&category.to_lowercase())
            .await
            .map_err(|err| map_catalog_error(err, "type not found", "type", category))?;
        if members.is_empty() {
            warn!(category, "category has no members");
            return Err(Error::not_found("no pokemon found for this type"));
        }
        Ok(members)
    }
}

/// Translate a catalog port error into the gateway taxonomy.
///
/// Upstream "no such resource" becomes a 404-class error with the given
/// message; transport and decode faults become a fixed upstream failure
/// with the underlying cause logged here and nowhere else.
fn map_catalog_error(err: CatalogError, not_found: &str, parameter: &str, requested: &str) -> Error {
    match err {
        CatalogError::NotFound => {
            warn!(parameter, requested, "upstream reports no such resource");
            Error::not_found(not_found)
        }
        CatalogError::Transport { .. } | CatalogError::Decode { .. } => {
            error!(parameter, requested, error = %err, "upstream catalog request failed");
            Error::upstream("upstream catalog request failed")
        }
    }
}

/// Uniform random selection over a non-empty member list.
fn choose_member<'a, R: Rng + ?Sized>(members: &'a [EntityRef], rng: &mut R) -> &'a EntityRef {
    &members[rng.gen_range(0..members.len())]
}

/// First member with the maximum name length, in list order.
fn longest_member(members: &[EntityRef]) -> &EntityRef {
    let mut longest = &members[0];
    for member in &members[1..] {
        if member.name.chars().count() > longest.name.chars().count() {
            longest = member;
        }
    }
    longest
}
