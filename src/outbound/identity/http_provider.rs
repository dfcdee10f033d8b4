//! Auth0-shaped identity provider adapter.
//!
//! Owns the OAuth wire exchange: the authorize and logout redirect targets
//! derived from the configured tenant domain, the form-encoded token
//! request, and the bearer userinfo request. Claims extraction and session
//! handling live elsewhere; this adapter never stores anything.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use super::dto::{TokenResponseDto, UserInfoDto};
use crate::domain::IdentityClaims;
use crate::domain::ports::{IdentityError, IdentityProvider};

const AUTH_SCOPE: &str = "openid profile email";

/// Tenant settings the adapter derives its endpoints from.
pub struct ProviderSettings {
    /// Provider tenant domain, e.g. `tenant.eu.auth0.com`.
    pub domain: String,
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: Zeroizing<String>,
    /// Callback URL registered with the provider.
    pub callback_url: Url,
    /// Where the provider sends the browser after its own logout.
    pub post_logout_url: Url,
}

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum ProviderInitError {
    /// The tenant domain does not form valid endpoint URLs.
    #[error("invalid provider endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Identity provider adapter speaking the Auth0 endpoint layout.
pub struct Auth0HttpProvider {
    client: Client,
    authorize_url: Url,
    token_url: Url,
    userinfo_url: Url,
    logout_url: Url,
    client_id: String,
    client_secret: Zeroizing<String>,
    callback_url: Url,
    post_logout_url: Url,
}

impl Auth0HttpProvider {
    /// Build an adapter from tenant settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the domain does not yield valid endpoint URLs
    /// or the reqwest client cannot be constructed.
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderInitError> {
        let ProviderSettings {
            domain,
            client_id,
            client_secret,
            callback_url,
            post_logout_url,
        } = settings;
        let authorize_url = Url::parse(&format!("https://{domain}/authorize"))?;
        let token_url = Url::parse(&format!("https://{domain}/oauth/token"))?;
        let userinfo_url = Url::parse(&format!("https://{domain}/userinfo"))?;
        let logout_url = Url::parse(&format!("https://{domain}/v2/logout"))?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            authorize_url,
            token_url,
            userinfo_url,
            logout_url,
            client_id,
            client_secret,
            callback_url,
            post_logout_url,
        })
    }

    async fn request_access_token(&self, code: &str) -> Result<String, IdentityError> {
        let response = self
            .client
            .post(self.token_url.clone())
            .form(&[
                ("grant_type", "authorization_code"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.callback_url.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::exchange(format!(
                "token endpoint returned status {}",
                status.as_u16()
            )));
        }
        let token: TokenResponseDto = response
            .json()
            .await
            .map_err(|err| IdentityError::decode(format!("invalid token response: {err}")))?;
        Ok(token.access_token)
    }

    async fn request_userinfo(&self, access_token: &str) -> Result<UserInfoDto, IdentityError> {
        let response = self
            .client
            .get(self.userinfo_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::exchange(format!(
                "userinfo endpoint returned status {}",
                status.as_u16()
            )));
        }
        response
            .json()
            .await
            .map_err(|err| IdentityError::decode(format!("invalid userinfo response: {err}")))
    }
}

#[async_trait]
impl IdentityProvider for Auth0HttpProvider {
    fn authorize_redirect(&self) -> Url {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", self.callback_url.as_str())
            .append_pair("scope", AUTH_SCOPE);
        url
    }

    fn logout_redirect(&self) -> Url {
        let mut url = self.logout_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", self.post_logout_url.as_str());
        url
    }

    async fn exchange_code(&self, code: &str) -> Result<IdentityClaims, IdentityError> {
        debug!("exchanging authorization code");
        let access_token = self.request_access_token(code).await?;
        let userinfo = self.request_userinfo(&access_token).await?;
        Ok(userinfo.into_domain())
    }
}

fn map_transport_error(err: reqwest::Error) -> IdentityError {
    IdentityError::transport(err.to_string())
}
