//! Domain primitives and rules.
//!
//! Purpose: define the strongly typed building blocks of the gateway and
//! keep them free of HTTP and wire concerns. Inbound adapters map these
//! types to responses; outbound adapters produce them from upstream data.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — failure taxonomy shared by every operation.
//! - `IdentityClaims` — verified identity established by the login flow.
//! - `AllowList` — immutable authorization predicate.
//! - `AccessDecision` / `authorize` — the gate rule.
//! - `SessionStore` / `SessionId` — server-side session records.
//! - `AggregationEngine` — derived queries over the catalog port.

pub mod access;
pub mod aggregation;
pub mod allow_list;
pub mod catalog;
pub mod error;
pub mod identity;
pub mod ports;
pub mod session;

pub use self::access::{AccessDecision, authorize};
pub use self::aggregation::{AggregationEngine, TypesReport};
pub use self::allow_list::AllowList;
pub use self::catalog::{CatalogEntity, EntityRef};
pub use self::error::{Error, ErrorCode};
pub use self::identity::IdentityClaims;
pub use self::session::{SessionId, SessionStore};

/// Convenient result alias for gateway operations.
pub type ApiResult<T> = Result<T, Error>;
