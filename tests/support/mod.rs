//! Shared fixtures for the integration suites.
//!
//! Stub port implementations with observable call counts, plus an app
//! builder assembling the same routes and session middleware as the
//! binary.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use url::Url;

use pokegate::domain::ports::{CatalogError, CatalogSource, IdentityError, IdentityProvider};
use pokegate::domain::{
    AggregationEngine, AllowList, CatalogEntity, EntityRef, IdentityClaims, SessionStore,
};
use pokegate::inbound::http::state::HttpState;
use pokegate::server::routes;

/// Catalog stub with canned responses and an upstream call counter.
pub struct StubCatalog {
    entity: Result<CatalogEntity, CatalogError>,
    members: Result<Vec<EntityRef>, CatalogError>,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub fn new(
        entity: Result<CatalogEntity, CatalogError>,
        members: Result<Vec<EntityRef>, CatalogError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            entity,
            members,
            calls: AtomicUsize::new(0),
        })
    }

    /// Stub serving one entity; category lookups report not-found.
    pub fn with_entity(name: &str, types: &[&str]) -> Arc<Self> {
        Self::new(
            Ok(CatalogEntity {
                name: name.to_owned(),
                types: types.iter().map(|label| (*label).to_owned()).collect(),
            }),
            Err(CatalogError::NotFound),
        )
    }

    /// Stub serving one member list; entity lookups report not-found.
    pub fn with_members(names: &[&str]) -> Arc<Self> {
        Self::new(
            Err(CatalogError::NotFound),
            Ok(names.iter().map(|name| member(name)).collect()),
        )
    }

    /// Stub where the upstream reports not-found for everything.
    pub fn not_found() -> Arc<Self> {
        Self::new(Err(CatalogError::NotFound), Err(CatalogError::NotFound))
    }

    /// Stub where the upstream transport fails for everything.
    pub fn unreachable() -> Arc<Self> {
        Self::new(
            Err(CatalogError::transport("connection refused")),
            Err(CatalogError::transport("connection refused")),
        )
    }

    /// Number of upstream calls the stub has served.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn fetch_entity(&self, _key: &str) -> Result<CatalogEntity, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entity.clone()
    }

    async fn fetch_category_members(&self, _key: &str) -> Result<Vec<EntityRef>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.members.clone()
    }
}

/// Member reference in the upstream shape.
pub fn member(name: &str) -> EntityRef {
    EntityRef::new(name, format!("https://pokeapi.co/api/v2/pokemon/{name}/"))
}

pub const PROVIDER_AUTHORIZE_URL: &str = "https://provider.test/authorize?response_type=code";
pub const PROVIDER_LOGOUT_URL: &str = "https://provider.test/v2/logout?client_id=client-123";

/// Identity provider stub with a canned exchange outcome.
pub struct StubProvider {
    outcome: Result<IdentityClaims, IdentityError>,
}

impl StubProvider {
    /// Provider issuing claims for the given email.
    pub fn for_email(email: &str) -> Self {
        Self {
            outcome: Ok(IdentityClaims::new(
                "auth0|stub",
                "Ada Lovelace",
                Some(email.to_owned()),
            )),
        }
    }

    /// Provider issuing claims without an email.
    pub fn without_email() -> Self {
        Self {
            outcome: Ok(IdentityClaims::new("auth0|stub", "Ada Lovelace", None)),
        }
    }

    /// Provider whose exchange always fails.
    pub fn failing() -> Self {
        Self {
            outcome: Err(IdentityError::exchange("token endpoint returned status 403")),
        }
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    fn authorize_redirect(&self) -> Url {
        Url::parse(PROVIDER_AUTHORIZE_URL).expect("static stub URL")
    }

    fn logout_redirect(&self) -> Url {
        Url::parse(PROVIDER_LOGOUT_URL).expect("static stub URL")
    }

    async fn exchange_code(&self, _code: &str) -> Result<IdentityClaims, IdentityError> {
        self.outcome.clone()
    }
}

/// Handles retained by a test to observe gateway state from the outside.
pub struct TestState {
    pub state: HttpState,
    pub catalog: Arc<StubCatalog>,
    pub sessions: Arc<SessionStore>,
}

/// Assemble gateway state over stub ports and the given allow-list.
pub fn gateway_state(
    catalog: Arc<StubCatalog>,
    provider: StubProvider,
    allow_list: &str,
) -> TestState {
    let sessions = Arc::new(SessionStore::default());
    let state = HttpState::new(
        AggregationEngine::new(catalog.clone()),
        Arc::new(provider),
        sessions.clone(),
        Arc::new(AllowList::from_delimited(allow_list)),
    );
    TestState {
        state,
        catalog,
        sessions,
    }
}

/// Build the full gateway app over the given state, test-configured.
pub fn gateway_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(state))
        .service(routes().wrap(session))
}

/// Extract the session cookie from a response.
pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie should be set")
        .into_owned()
}
