//! Verified identity claims.
//!
//! Claims originate from the identity provider's userinfo document after a
//! successful code exchange and live in the session store for the duration
//! of the browser session. The gate only trusts the `email` claim; a claims
//! record without one can never pass authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity claims established by a completed login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaims {
    /// Stable subject identifier issued by the provider.
    #[serde(rename = "sub")]
    #[schema(example = "auth0|507f1f77bcf86cd799439011")]
    subject: String,
    /// Display name from the provider profile.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Verified email address; absent when the provider did not share one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ada@example.com")]
    email: Option<String>,
}

impl IdentityClaims {
    /// Build claims from provider-supplied values.
    pub fn new(
        subject: impl Into<String>,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            email,
        }
    }

    /// Provider subject identifier.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Display name shown on the dashboard.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email claim, if the provider shared one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_subject_under_the_sub_key() {
        let claims = IdentityClaims::new("auth0|abc", "Ada", Some("ada@example.com".to_owned()));
        let value = serde_json::to_value(&claims).expect("serialise claims");
        assert_eq!(
            value,
            serde_json::json!({
                "sub": "auth0|abc",
                "name": "Ada",
                "email": "ada@example.com",
            })
        );
    }

    #[test]
    fn missing_email_is_omitted_and_deserialises_to_none() {
        let claims = IdentityClaims::new("auth0|abc", "Ada", None);
        let value = serde_json::to_value(&claims).expect("serialise claims");
        assert!(value.get("email").is_none());

        let parsed: IdentityClaims =
            serde_json::from_value(serde_json::json!({ "sub": "auth0|abc", "name": "Ada" }))
                .expect("deserialise claims");
        assert_eq!(parsed.email(), None);
    }
}
