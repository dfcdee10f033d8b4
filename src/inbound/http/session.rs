//! Session cookie helpers.
//!
//! Thin wrapper around Actix sessions so handlers only deal with the
//! domain-level [`SessionId`]. The signed cookie stores nothing but that
//! id; the claims it resolves to live in the server-side store.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, SessionId};

pub(crate) const SESSION_ID_KEY: &str = "session_id";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist a session id in the cookie, replacing any prior one.
    pub fn persist(&self, id: &SessionId) -> Result<(), Error> {
        self.0
            .insert(SESSION_ID_KEY, id.to_string())
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Fetch the current session id from the cookie, if present.
    ///
    /// A cookie value that does not parse is treated as absent; tampering
    /// with the id only ever logs the requester out.
    pub fn session_id(&self) -> Result<Option<SessionId>, Error> {
        let raw = self
            .0
            .get::<String>(SESSION_ID_KEY)
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))?;
        match raw {
            Some(raw) => match SessionId::parse(&raw) {
                Ok(id) => Ok(Some(id)),
                Err(err) => {
                    tracing::warn!(error = %err, "invalid session id in cookie");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Drop the cookie state entirely.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
