//! The authorization gate rule.
//!
//! A pure decision over session state and the allow-list, evaluated before
//! any protected handler touches the upstream catalog. The HTTP adapter
//! decides how each branch looks on the wire (redirect vs 403); this module
//! only decides which branch applies.

use super::allow_list::AllowList;
use super::identity::IdentityClaims;

/// Outcome of gating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session exists and its email is on the allow-list.
    Allow,
    /// No session, or the session has no email claim: send to login.
    DenyUnauthenticated,
    /// Authenticated but not on the allow-list: refuse without detail.
    DenyForbidden,
}

/// Apply the gate rule, in order: session present, email claim present,
/// exact allow-list membership.
pub fn authorize(claims: Option<&IdentityClaims>, allow_list: &AllowList) -> AccessDecision {
    let Some(claims) = claims else {
        return AccessDecision::DenyUnauthenticated;
    };
    let Some(email) = claims.email() else {
        return AccessDecision::DenyUnauthenticated;
    };
    if allow_list.is_member(email) {
        AccessDecision::Allow
    } else {
        AccessDecision::DenyForbidden
    }
}
