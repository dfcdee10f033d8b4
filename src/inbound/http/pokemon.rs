//! Gated catalog query handlers.
//!
//! ```text
//! GET /pokemon/type?name=pikachu
//! GET /pokemon/random?type=fire
//! GET /pokemon/longest?type=water
//! ```
//!
//! Every handler takes an [`Authorized`] argument, so the gate runs before
//! the handler body and no upstream call happens for a refused requester.
//! Parameter validation follows the gate; a missing parameter also makes
//! zero upstream calls.

use actix_web::{get, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{ApiResult, EntityRef, TypesReport};
use crate::inbound::http::guard::Authorized;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_query_param};

const NAME_PARAM: FieldName = FieldName::new("name");
const TYPE_PARAM: FieldName = FieldName::new("type");

/// Query naming the entity to look up.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    /// Entity name, matched case-insensitively upstream.
    pub name: Option<String>,
}

/// Query naming the category to search.
#[derive(Debug, Deserialize)]
pub struct TypeQuery {
    /// Category label, matched case-insensitively upstream.
    #[serde(rename = "type")]
    pub category: Option<String>,
}

/// Report the category labels attached to one entity.
#[utoipa::path(
    get,
    path = "/pokemon/type",
    params(
        ("name" = Option<String>, Query, description = "Entity name, matched case-insensitively upstream")
    ),
    responses(
        (status = 200, description = "Labels in upstream order", body = TypesReport),
        (status = 302, description = "No session; redirect to login"),
        (status = 400, description = "Missing name parameter", body = crate::domain::Error),
        (status = 403, description = "Not on the allow-list"),
        (status = 404, description = "Entity not found", body = crate::domain::Error),
        (status = 500, description = "Upstream failure", body = crate::domain::Error)
    ),
    tags = ["pokemon"],
    operation_id = "pokemonTypes"
)]
#[get("/pokemon/type")]
pub async fn pokemon_types(
    _auth: Authorized,
    state: web::Data<HttpState>,
    query: web::Query<NameQuery>,
) -> ApiResult<web::Json<TypesReport>> {
    let name = require_query_param(query.into_inner().name, NAME_PARAM)?;
    info!(name, "type lookup requested");
    state.engine.types_of(&name).await.map(web::Json)
}

/// Pick one member of a category at random.
#[utoipa::path(
    get,
    path = "/pokemon/random",
    params(
        ("type" = Option<String>, Query, description = "Category label, matched case-insensitively upstream")
    ),
    responses(
        (status = 200, description = "One member, chosen uniformly", body = EntityRef),
        (status = 302, description = "No session; redirect to login"),
        (status = 400, description = "Missing type parameter", body = crate::domain::Error),
        (status = 403, description = "Not on the allow-list"),
        (status = 404, description = "Category missing or empty", body = crate::domain::Error),
        (status = 500, description = "Upstream failure", body = crate::domain::Error)
    ),
    tags = ["pokemon"],
    operation_id = "pokemonRandom"
)]
#[get("/pokemon/random")]
pub async fn pokemon_random(
    _auth: Authorized,
    state: web::Data<HttpState>,
    query: web::Query<TypeQuery>,
) -> ApiResult<web::Json<EntityRef>> {
    let category = require_query_param(query.into_inner().category, TYPE_PARAM)?;
    info!(category, "random member requested");
    state.engine.random_by_category(&category).await.map(web::Json)
}

/// Pick the member of a category with the longest name.
#[utoipa::path(
    get,
    path = "/pokemon/longest",
    params(
        ("type" = Option<String>, Query, description = "Category label, matched case-insensitively upstream")
    ),
    responses(
        (status = 200, description = "First member with the longest name", body = EntityRef),
        (status = 302, description = "No session; redirect to login"),
        (status = 400, description = "Missing type parameter", body = crate::domain::Error),
        (status = 403, description = "Not on the allow-list"),
        (status = 404, description = "Category missing or empty", body = crate::domain::Error),
        (status = 500, description = "Upstream failure", body = crate::domain::Error)
    ),
    tags = ["pokemon"],
    operation_id = "pokemonLongest"
)]
#[get("/pokemon/longest")]
pub async fn pokemon_longest(
    _auth: Authorized,
    state: web::Data<HttpState>,
    query: web::Query<TypeQuery>,
) -> ApiResult<web::Json<EntityRef>> {
    let category = require_query_param(query.into_inner().category, TYPE_PARAM)?;
    info!(category, "longest-named member requested");
    state
        .engine
        .longest_name_by_category(&category)
        .await
        .map(web::Json)
}
