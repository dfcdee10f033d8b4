//! Login flow handlers.
//!
//! ```text
//! GET /          landing page with a login link
//! GET /login     302 to the identity provider
//! GET /callback  code exchange, establishes the session, 302 to /dashboard
//! GET /dashboard claims of the authenticated requester
//! GET /logout    clears the session, 302 to the provider logout
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{ApiResult, Error, IdentityClaims};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_query_param};

const CODE_PARAM: FieldName = FieldName::new("code");

/// Query parameters delivered by the provider callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Single-use authorization code issued by the provider.
    pub code: Option<String>,
}

/// Landing page pointing anonymous visitors at the login flow.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page with a login link")),
    tags = ["auth"],
    operation_id = "home",
    security([])
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    info!("landing page visited");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(concat!(
            "Welcome to the Pokemon gateway. ",
            "You must <a href=\"/login\">log in</a> to continue.",
        ))
}

/// Start the delegated login flow.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 302, description = "Redirect to the identity provider")),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[get("/login")]
pub async fn login(state: web::Data<HttpState>) -> HttpResponse {
    let target = state.identity.authorize_redirect();
    info!("redirecting to the identity provider for login");
    HttpResponse::Found()
        .insert_header((header::LOCATION, target.to_string()))
        .finish()
}

/// Complete the delegated login flow.
///
/// Exchanges the single-use authorization code for identity claims and
/// establishes the server-side session, overwriting any prior session for
/// this requester. A failed exchange is never retried.
#[utoipa::path(
    get,
    path = "/callback",
    params(
        ("code" = Option<String>, Query, description = "Single-use authorization code issued by the provider")
    ),
    responses(
        (status = 302, description = "Session established; redirect to the dashboard"),
        (status = 400, description = "Missing authorization code", body = Error),
        (status = 500, description = "Code exchange failed", body = Error)
    ),
    tags = ["auth"],
    operation_id = "callback",
    security([])
)]
#[get("/callback")]
pub async fn callback(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<CallbackQuery>,
) -> ApiResult<HttpResponse> {
    let code = require_query_param(query.into_inner().code, CODE_PARAM)?;
    let claims = state.identity.exchange_code(&code).await.map_err(|err| {
        error!(error = %err, "identity provider code exchange failed");
        Error::exchange_failed("authentication with the identity provider failed")
    })?;
    info!(subject = claims.subject(), "login completed");
    // A repeat login replaces the requester's session rather than
    // accumulating records.
    if let Some(previous) = session.session_id().ok().flatten() {
        state.sessions.remove(&previous);
    }
    let id = state.sessions.create(claims);
    session.persist(&id)?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/dashboard"))
        .finish())
}

/// Show the claims of the authenticated requester.
///
/// Requires a live session but no allow-list membership; the gate only
/// guards the catalog queries.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Claims of the authenticated requester", body = IdentityClaims),
        (status = 302, description = "No session; redirect to login")
    ),
    tags = ["auth"],
    operation_id = "dashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<IdentityClaims>> {
    let claims = session
        .session_id()?
        .and_then(|id| state.sessions.get(&id))
        .ok_or_else(|| Error::unauthorized("login required"))?;
    info!(subject = claims.subject(), "dashboard visited");
    Ok(web::Json(claims))
}

/// End the session and hand off to the provider logout.
///
/// Always succeeds: the store entry and cookie are cleared whether or not
/// a session existed.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 302, description = "Redirect to the identity provider logout")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[get("/logout")]
pub async fn logout(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    if let Some(id) = session.session_id().ok().flatten() {
        state.sessions.remove(&id);
    }
    session.purge();
    info!("session cleared");
    HttpResponse::Found()
        .insert_header((header::LOCATION, state.identity.logout_redirect().to_string()))
        .finish()
}
