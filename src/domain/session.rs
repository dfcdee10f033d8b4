//! Server-side session records.
//!
//! The browser cookie carries only an opaque [`SessionId`]; the claims it
//! resolves to live here, keyed by id behind one coarse lock. Records are
//! created by the login callback, read by the gate and the dashboard, and
//! removed by logout. Nothing mutates a record in place.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use super::identity::IdentityClaims;

/// Opaque identifier binding a browser session to a claims record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier previously issued by [`SessionId::random`].
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory session store guarded by a single coarse lock.
///
/// Reads and writes for one key never race in practice (a browser drives
/// its session sequentially); the lock guards concurrent access across
/// distinct sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: RwLock<HashMap<SessionId, IdentityClaims>>,
}

impl SessionStore {
    /// Insert a new record and return its freshly generated id.
    pub fn create(&self, claims: IdentityClaims) -> SessionId {
        let id = SessionId::random();
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, claims);
        id
    }

    /// Look up the claims for a session id.
    pub fn get(&self, id: &SessionId) -> Option<IdentityClaims> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Remove a record, returning the claims it held.
    pub fn remove(&self, id: &SessionId) -> Option<IdentityClaims> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no records are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    fn claims(subject: &str) -> IdentityClaims {
        IdentityClaims::new(subject, "Ada", Some("ada@example.com".to_owned()))
    }

    #[test]
    fn create_then_get_round_trips_claims() {
        let store = SessionStore::default();
        let id = store.create(claims("auth0|one"));
        let found = store.get(&id).expect("record should exist");
        assert_eq!(found.subject(), "auth0|one");
    }

    #[test]
    fn distinct_sessions_get_distinct_ids() {
        let store = SessionStore::default();
        let first = store.create(claims("auth0|one"));
        let second = store.create(claims("auth0|two"));
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_clears_the_record_and_is_idempotent() {
        let store = SessionStore::default();
        let id = store.create(claims("auth0|one"));
        assert!(store.remove(&id).is_some());
        assert!(store.remove(&id).is_none());
        assert!(store.get(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn session_id_round_trips_through_its_string_form() {
        let id = SessionId::random();
        let parsed = SessionId::parse(&id.to_string()).expect("valid id");
        assert_eq!(id, parsed);
    }

    #[test]
    fn tampered_session_id_fails_to_parse() {
        assert!(SessionId::parse("not-a-session-id").is_err());
    }
}
