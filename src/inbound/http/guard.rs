//! Request-scoped authorization gate.
//!
//! [`Authorized`] is an extractor evaluated before a protected handler
//! body runs: it resolves the session cookie to server-side claims, applies
//! the pure gate rule, and refuses the request before any upstream call can
//! happen. Handlers that take an `Authorized` argument cannot be reached by
//! an unauthenticated or unlisted requester.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AccessDecision, Error, IdentityClaims, authorize};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Proof that the gate admitted the requester, carrying their claims.
#[derive(Debug, Clone)]
pub struct Authorized(pub IdentityClaims);

impl Authorized {
    /// Claims of the admitted identity.
    pub fn claims(&self) -> &IdentityClaims {
        &self.0
    }
}

impl FromRequest for Authorized {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let session_fut = Session::from_request(req, payload);
        Box::pin(async move {
            let session = SessionContext::new(session_fut.await?);
            let state =
                state.ok_or_else(|| Error::internal("gateway state missing from app data"))?;
            let claims = session
                .session_id()?
                .and_then(|id| state.sessions.get(&id));
            admit(claims, &state).map_err(Into::into)
        })
    }
}

fn admit(claims: Option<IdentityClaims>, state: &HttpState) -> Result<Authorized, Error> {
    match authorize(claims.as_ref(), &state.allow_list) {
        AccessDecision::Allow => claims
            .map(Authorized)
            .ok_or_else(|| Error::unauthorized("login required")),
        AccessDecision::DenyUnauthenticated => {
            warn!("access denied: requester is not authenticated");
            Err(Error::unauthorized("login required"))
        }
        AccessDecision::DenyForbidden => {
            // The denied email is logged server-side only; the response
            // stays a bare 403.
            if let Some(email) = claims.as_ref().and_then(IdentityClaims::email) {
                warn!(email, "access denied: email is not on the allow-list");
            }
            Err(Error::forbidden("access denied"))
        }
    }
}
