//! HTTP server assembly.
//!
//! Route registration and session middleware construction live here so the
//! binary and the test harnesses build the same application.

pub mod config;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{Scope, web};

use crate::inbound::http::{auth, pokemon};

pub use config::{BuildMode, ConfigError, GatewayConfig};

/// Session middleware over the signed cookie store.
///
/// The cookie holds only the opaque session id; claims live in the
/// injected [`crate::domain::SessionStore`].
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// All gateway routes, ready to be wrapped in the session middleware.
pub fn routes() -> Scope {
    let scope = web::scope("")
        .service(auth::home)
        .service(auth::login)
        .service(auth::callback)
        .service(auth::dashboard)
        .service(auth::logout)
        .service(pokemon::pokemon_types)
        .service(pokemon::pokemon_random)
        .service(pokemon::pokemon_longest);

    #[cfg(debug_assertions)]
    let scope = scope.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(<crate::ApiDoc as utoipa::OpenApi>::openapi()) }),
    );

    scope
}
