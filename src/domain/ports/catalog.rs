//! Driven port for the upstream creature catalog.
//!
//! The adapter translates upstream HTTP statuses before results cross this
//! boundary: any non-200 response surfaces as [`CatalogError::NotFound`]
//! (the gateway deliberately does not distinguish an upstream 404 from an
//! upstream 500), while transport and decode faults stay separate so the
//! aggregation layer can report them as upstream failures.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogEntity, EntityRef};

/// Errors surfaced while querying the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The upstream reported no such resource (any non-200 status).
    #[error("catalog reports no such resource")]
    NotFound,
    /// Network transport failed before a response arrived.
    #[error("catalog transport failed: {message}")]
    Transport { message: String },
    /// The upstream body could not be decoded into the expected shape.
    #[error("catalog response decode failed: {message}")]
    Decode { message: String },
}

impl CatalogError {
    /// Build a [`CatalogError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`CatalogError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for fetching catalog data fresh per request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one entity by its lowercase key.
    async fn fetch_entity(&self, key: &str) -> Result<CatalogEntity, CatalogError>;

    /// Fetch the member references of one category by its lowercase key.
    async fn fetch_category_members(&self, key: &str) -> Result<Vec<EntityRef>, CatalogError>;
}

/// Fixture implementation returning an entity with no labels and an empty
/// member list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalogSource;

#[async_trait]
impl CatalogSource for FixtureCatalogSource {
    async fn fetch_entity(&self, key: &str) -> Result<CatalogEntity, CatalogError> {
        Ok(CatalogEntity {
            name: key.to_owned(),
            types: Vec::new(),
        })
    }

    async fn fetch_category_members(&self, _key: &str) -> Result<Vec<EntityRef>, CatalogError> {
        Ok(Vec::new())
    }
}
