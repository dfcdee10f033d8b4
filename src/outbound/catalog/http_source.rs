//! Reqwest-backed catalog source adapter.
//!
//! This adapter owns transport details only: URL assembly, status
//! translation, and JSON decoding into domain records. Every non-200
//! upstream status collapses to "not found", so an upstream 500 is
//! indistinguishable from a missing resource here. No request is retried
//! or cached.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{CategoryDto, EntityDto};
use crate::domain::ports::{CatalogError, CatalogSource};
use crate::domain::{CatalogEntity, EntityRef};

/// Catalog adapter issuing GET requests against one base URL.
pub struct CatalogHttpSource {
    client: Client,
    base_url: Url,
}

impl CatalogHttpSource {
    /// Build an adapter over the catalog base URL.
    ///
    /// The transport keeps reqwest's default timeout behavior; the gateway
    /// does not override it.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segment: &str, key: &str) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| CatalogError::transport("catalog base URL cannot carry a path"))?;
            path.pop_if_empty().push(segment).push(key);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        translate_status(response.status())?;
        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_body(body.as_ref())
    }
}

#[async_trait]
impl CatalogSource for CatalogHttpSource {
    async fn fetch_entity(&self, key: &str) -> Result<CatalogEntity, CatalogError> {
        let url = self.endpoint("pokemon", key)?;
        debug!(key, "fetching entity");
        let dto: EntityDto = self.get_json(url).await?;
        Ok(dto.into_domain())
    }

    async fn fetch_category_members(&self, key: &str) -> Result<Vec<EntityRef>, CatalogError> {
        let url = self.endpoint("type", key)?;
        debug!(key, "fetching category members");
        let dto: CategoryDto = self.get_json(url).await?;
        Ok(dto.into_members())
    }
}

/// Collapse every non-200 status into the not-found signal.
fn translate_status(status: StatusCode) -> Result<(), CatalogError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        debug!(status = status.as_u16(), "catalog returned a non-200 status");
        Err(CatalogError::NotFound)
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(body)
        .map_err(|err| CatalogError::decode(format!("invalid catalog JSON payload: {err}")))
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    CatalogError::transport(err.to_string())
}
