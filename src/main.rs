//! Gateway entry-point: wires configuration, adapters, and the HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pokegate::domain::{AggregationEngine, SessionStore};
use pokegate::inbound::http::state::HttpState;
use pokegate::outbound::catalog::CatalogHttpSource;
use pokegate::outbound::identity::Auth0HttpProvider;
use pokegate::server::{self, BuildMode, GatewayConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let config = GatewayConfig::from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let catalog =
        CatalogHttpSource::new(config.catalog_base_url.clone()).map_err(std::io::Error::other)?;
    let identity = Auth0HttpProvider::new(config.provider).map_err(std::io::Error::other)?;

    let state = HttpState::new(
        AggregationEngine::new(Arc::new(catalog)),
        Arc::new(identity),
        Arc::new(SessionStore::default()),
        Arc::new(config.allow_list),
    );

    let key = config.session_key;
    let cookie_secure = config.cookie_secure;
    info!(addr = %config.bind_addr, "starting gateway");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(server::routes().wrap(server::session_middleware(key.clone(), cookie_secure)))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
