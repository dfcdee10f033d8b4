//! Driven port for the delegated identity provider.
//!
//! The provider's OAuth wire exchange is opaque to the domain: the port
//! exposes the two redirect targets the login flow needs and a single
//! "exchange code for identity claims" operation. Authorization codes are
//! single-use, so a failed exchange is never retried.

use async_trait::async_trait;
use url::Url;

use crate::domain::identity::IdentityClaims;

/// Errors surfaced while talking to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected the code exchange or the userinfo request.
    #[error("provider code exchange failed: {message}")]
    Exchange { message: String },
    /// Network transport failed before a response arrived.
    #[error("provider transport failed: {message}")]
    Transport { message: String },
    /// A provider response could not be decoded.
    #[error("provider response decode failed: {message}")]
    Decode { message: String },
}

impl IdentityError {
    /// Build an [`IdentityError::Exchange`].
    pub fn exchange(message: impl Into<String>) -> Self {
        Self::Exchange {
            message: message.into(),
        }
    }

    /// Build an [`IdentityError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build an [`IdentityError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the delegated login exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Redirect target starting the login flow at the provider.
    fn authorize_redirect(&self) -> Url;

    /// Redirect target ending the provider-side session after logout.
    fn logout_redirect(&self) -> Url;

    /// Exchange an authorization code for verified identity claims.
    async fn exchange_code(&self, code: &str) -> Result<IdentityClaims, IdentityError>;
}

/// Fixture implementation handing out static claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureIdentityProvider;

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    fn authorize_redirect(&self) -> Url {
        Url::parse("https://provider.invalid/authorize").expect("static fixture URL")
    }

    fn logout_redirect(&self) -> Url {
        Url::parse("https://provider.invalid/v2/logout").expect("static fixture URL")
    }

    async fn exchange_code(&self, _code: &str) -> Result<IdentityClaims, IdentityError> {
        Ok(IdentityClaims::new(
            "auth0|fixture",
            "Ada Lovelace",
            Some("ada@example.com".to_owned()),
        ))
    }
}
