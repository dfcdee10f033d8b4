//! Wire shapes for the identity provider endpoints.

use serde::Deserialize;

use crate::domain::IdentityClaims;

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: String,
}

/// Userinfo document; fields beyond the claims the gateway keeps are left
/// undeclared.
#[derive(Debug, Deserialize)]
pub(super) struct UserInfoDto {
    pub(super) sub: String,
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
}

impl UserInfoDto {
    /// Reduce the userinfo document to the claims the gateway keeps.
    ///
    /// A missing display name falls back to the subject; a missing email
    /// stays absent so the gate can refuse the session later.
    pub(super) fn into_domain(self) -> IdentityClaims {
        let name = self.name.unwrap_or_else(|| self.sub.clone());
        IdentityClaims::new(self.sub, name, self.email)
    }
}
