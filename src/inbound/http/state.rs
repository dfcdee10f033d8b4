//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and stores, and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::IdentityProvider;
use crate::domain::{AggregationEngine, AllowList, SessionStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Derived-query service over the catalog port.
    pub engine: AggregationEngine,
    /// Delegated login exchange.
    pub identity: Arc<dyn IdentityProvider>,
    /// Server-side session records.
    pub sessions: Arc<SessionStore>,
    /// Authorized email addresses, loaded once at startup.
    pub allow_list: Arc<AllowList>,
}

impl HttpState {
    /// Bundle the injected dependencies for the handler layer.
    pub fn new(
        engine: AggregationEngine,
        identity: Arc<dyn IdentityProvider>,
        sessions: Arc<SessionStore>,
        allow_list: Arc<AllowList>,
    ) -> Self {
        Self {
            engine,
            identity,
            sessions,
            allow_list,
        }
    }
}
