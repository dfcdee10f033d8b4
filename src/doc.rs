//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the gateway. It
//! registers the login-flow and catalog-query paths, the domain schemas
//! they reference, and the session cookie security scheme. The generated
//! document is served at `/api-docs/openapi.json` in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{EntityRef, Error, ErrorCode, IdentityClaims, TypesReport};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie established by the GET /callback login exchange.",
            ))),
        );
    }
}

/// OpenAPI document for the gateway API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Pokemon gateway API",
        description = "Allow-listed access to derived queries over the public Pokemon catalog."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::home,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::callback,
        crate::inbound::http::auth::dashboard,
        crate::inbound::http::auth::logout,
        crate::inbound::http::pokemon::pokemon_types,
        crate::inbound::http::pokemon::pokemon_random,
        crate::inbound::http::pokemon::pokemon_longest,
    ),
    components(schemas(Error, ErrorCode, IdentityClaims, TypesReport, EntityRef)),
    tags(
        (name = "auth", description = "Login flow and session endpoints"),
        (name = "pokemon", description = "Gated catalog queries")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying path and schema registration.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/")]
    #[case("/login")]
    #[case("/callback")]
    #[case("/dashboard")]
    #[case("/logout")]
    #[case("/pokemon/type")]
    #[case("/pokemon/random")]
    #[case("/pokemon/longest")]
    fn registers_every_gateway_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "missing path: {path}"
        );
    }

    #[test]
    fn registers_the_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components should be present");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
