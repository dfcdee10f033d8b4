//! Gateway configuration parsing and validation.
//!
//! Centralises the environment-driven settings so they are validated
//! consistently at startup and can be tested in isolation against an
//! injected environment.

use std::net::SocketAddr;

use actix_web::cookie::Key;
use mockable::Env;
use tracing::warn;
use url::Url;
use zeroize::Zeroizing;

use crate::domain::AllowList;
use crate::outbound::identity::ProviderSettings;

const DOMAIN_ENV: &str = "AUTH0_DOMAIN";
const CLIENT_ID_ENV: &str = "AUTH0_CLIENT_ID";
const CLIENT_SECRET_ENV: &str = "AUTH0_CLIENT_SECRET";
const CALLBACK_URL_ENV: &str = "AUTH0_CALLBACK_URL";
const CATALOG_URL_ENV: &str = "POKEAPI_BASE_URL";
const ALLOWED_EMAILS_ENV: &str = "ALLOWED_EMAILS";
const POST_LOGOUT_ENV: &str = "POST_LOGOUT_URL";
const SESSION_SECRET_ENV: &str = "SESSION_SECRET";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const BIND_ADDR_ENV: &str = "BIND_ADDR";

const CATALOG_URL_DEFAULT: &str = "https://pokeapi.co/api/v2";
const POST_LOGOUT_DEFAULT: &str = "http://localhost:8080/";
const BIND_ADDR_DEFAULT: &str = "0.0.0.0:8080";

/// Minimum length for the session signing secret.
const SESSION_SECRET_MIN_LEN: usize = 32;

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing session secret and derive an
    /// ephemeral key with a warning.
    Debug,
    /// Release builds require an explicit session secret.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while validating gateway configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but does not parse as a URL.
    #[error("invalid URL in {name}='{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// A variable is present but does not parse as a socket address.
    #[error("invalid socket address in {name}='{value}': {source}")]
    InvalidAddr {
        name: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The session secret is too short to derive a signing key from.
    #[error("SESSION_SECRET too short: need >= {min} bytes, got {length}")]
    SecretTooShort { length: usize, min: usize },
}

/// Validated gateway settings loaded once at startup.
pub struct GatewayConfig {
    /// Identity provider tenant settings.
    pub provider: ProviderSettings,
    /// Base URL of the upstream catalog API.
    pub catalog_base_url: Url,
    /// Authorized email addresses.
    pub allow_list: AllowList,
    /// Signing key for the session cookie.
    pub session_key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    /// Build gateway settings from environment variables and build mode.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// value fails validation.
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, ConfigError> {
        let provider = ProviderSettings {
            domain: required(env, DOMAIN_ENV)?,
            client_id: required(env, CLIENT_ID_ENV)?,
            client_secret: Zeroizing::new(required(env, CLIENT_SECRET_ENV)?),
            callback_url: required_url(env, CALLBACK_URL_ENV)?,
            post_logout_url: url_or_default(env, POST_LOGOUT_ENV, POST_LOGOUT_DEFAULT)?,
        };

        let catalog_base_url = url_or_default(env, CATALOG_URL_ENV, CATALOG_URL_DEFAULT)?;
        let allow_list = allow_list_from_env(env);
        let session_key = session_key_from_env(env, mode)?;
        let cookie_secure = env
            .string(COOKIE_SECURE_ENV)
            .map(|value| value != "0")
            .unwrap_or(true);
        let bind_addr = bind_addr_from_env(env)?;

        Ok(Self {
            provider,
            catalog_base_url,
            allow_list,
            session_key,
            cookie_secure,
            bind_addr,
        })
    }
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    env.string(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingEnv { name })
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value,
        source,
    })
}

fn required_url<E: Env>(env: &E, name: &'static str) -> Result<Url, ConfigError> {
    parse_url(name, required(env, name)?)
}

fn url_or_default<E: Env>(
    env: &E,
    name: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    let value = env
        .string(name)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned());
    parse_url(name, value)
}

fn allow_list_from_env<E: Env>(env: &E) -> AllowList {
    let allow_list = AllowList::from_delimited(&env.string(ALLOWED_EMAILS_ENV).unwrap_or_default());
    if allow_list.is_empty() {
        warn!(
            "{} is empty; every authenticated identity will be refused",
            ALLOWED_EMAILS_ENV
        );
    }
    allow_list
}

fn session_key_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Key, ConfigError> {
    match env.string(SESSION_SECRET_ENV) {
        Some(secret) => {
            let secret = Zeroizing::new(secret.into_bytes());
            if secret.len() < SESSION_SECRET_MIN_LEN {
                return Err(ConfigError::SecretTooShort {
                    length: secret.len(),
                    min: SESSION_SECRET_MIN_LEN,
                });
            }
            Ok(Key::derive_from(&secret))
        }
        None if mode.is_debug() => {
            warn!("{} not set; using an ephemeral session key", SESSION_SECRET_ENV);
            Ok(Key::generate())
        }
        None => Err(ConfigError::MissingEnv {
            name: SESSION_SECRET_ENV,
        }),
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let value = env
        .string(BIND_ADDR_ENV)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| BIND_ADDR_DEFAULT.to_owned());
    value.parse().map_err(|source| ConfigError::InvalidAddr {
        name: BIND_ADDR_ENV,
        value,
        source,
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for gateway configuration parsing.
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;
    use std::collections::HashMap;

    fn mock_env(vars: HashMap<String, String>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    fn release_defaults() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert(DOMAIN_ENV.to_owned(), "tenant.eu.auth0.com".to_owned());
        vars.insert(CLIENT_ID_ENV.to_owned(), "client-123".to_owned());
        vars.insert(CLIENT_SECRET_ENV.to_owned(), "shh".to_owned());
        vars.insert(
            CALLBACK_URL_ENV.to_owned(),
            "http://localhost:8080/callback".to_owned(),
        );
        vars.insert(
            ALLOWED_EMAILS_ENV.to_owned(),
            "ada@example.com,grace@example.com".to_owned(),
        );
        vars.insert(SESSION_SECRET_ENV.to_owned(), "s".repeat(64));
        vars
    }

    #[test]
    fn full_environment_parses_with_defaults_applied() {
        let env = mock_env(release_defaults());
        let config =
            GatewayConfig::from_env(&env, BuildMode::Release).expect("config should parse");

        assert_eq!(config.provider.domain, "tenant.eu.auth0.com");
        assert_eq!(
            config.catalog_base_url.as_str(),
            "https://pokeapi.co/api/v2"
        );
        assert_eq!(config.allow_list.len(), 2);
        assert!(config.cookie_secure);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.provider.post_logout_url.as_str(),
            "http://localhost:8080/"
        );
    }

    #[rstest]
    #[case(DOMAIN_ENV)]
    #[case(CLIENT_ID_ENV)]
    #[case(CLIENT_SECRET_ENV)]
    #[case(CALLBACK_URL_ENV)]
    fn missing_required_variables_are_rejected(#[case] name: &'static str) {
        let mut vars = release_defaults();
        vars.remove(name);
        let env = mock_env(vars);
        let err = GatewayConfig::from_env(&env, BuildMode::Release)
            .err()
            .expect("config should fail");
        assert!(matches!(err, ConfigError::MissingEnv { name: missing } if missing == name));
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let mut vars = release_defaults();
        vars.insert(SESSION_SECRET_ENV.to_owned(), "too-short".to_owned());
        let env = mock_env(vars);
        let err = GatewayConfig::from_env(&env, BuildMode::Release)
            .err()
            .expect("config should fail");
        assert!(matches!(err, ConfigError::SecretTooShort { length: 9, .. }));
    }

    #[test]
    fn release_builds_require_a_session_secret() {
        let mut vars = release_defaults();
        vars.remove(SESSION_SECRET_ENV);
        let env = mock_env(vars);
        let err = GatewayConfig::from_env(&env, BuildMode::Release)
            .err()
            .expect("config should fail");
        assert!(matches!(
            err,
            ConfigError::MissingEnv {
                name: SESSION_SECRET_ENV
            }
        ));
    }

    #[test]
    fn debug_builds_fall_back_to_an_ephemeral_key() {
        let mut vars = release_defaults();
        vars.remove(SESSION_SECRET_ENV);
        let env = mock_env(vars);
        assert!(GatewayConfig::from_env(&env, BuildMode::Debug).is_ok());
    }

    #[test]
    fn invalid_callback_url_is_rejected() {
        let mut vars = release_defaults();
        vars.insert(CALLBACK_URL_ENV.to_owned(), "not a url".to_owned());
        let env = mock_env(vars);
        let err = GatewayConfig::from_env(&env, BuildMode::Release)
            .err()
            .expect("config should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                name: CALLBACK_URL_ENV,
                ..
            }
        ));
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let mut vars = release_defaults();
        vars.insert(BIND_ADDR_ENV.to_owned(), "localhost".to_owned());
        let env = mock_env(vars);
        let err = GatewayConfig::from_env(&env, BuildMode::Release)
            .err()
            .expect("config should fail");
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }

    #[test]
    fn missing_allow_list_parses_as_empty() {
        let mut vars = release_defaults();
        vars.remove(ALLOWED_EMAILS_ENV);
        let env = mock_env(vars);
        let config =
            GatewayConfig::from_env(&env, BuildMode::Release).expect("config should parse");
        assert!(config.allow_list.is_empty());
    }

    #[test]
    fn cookie_secure_zero_disables_the_flag() {
        let mut vars = release_defaults();
        vars.insert(COOKIE_SECURE_ENV.to_owned(), "0".to_owned());
        let env = mock_env(vars);
        let config =
            GatewayConfig::from_env(&env, BuildMode::Release).expect("config should parse");
        assert!(!config.cookie_secure);
    }
}
