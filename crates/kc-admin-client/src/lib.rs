//! # kc-admin-client
//!
//! Authenticated client for the Keycloak Admin REST API.
//!
//! This crate owns the administrative session against a Keycloak server:
//! credential bootstrapping via the `admin-cli` password grant, token
//! caching, and narrowly scoped realm accessors. It holds no business
//! rules; higher layers decide what to do with a realm representation.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod accessor;
pub mod config;
pub mod error;
pub mod realm;
pub mod session;

pub use accessor::RealmAccessor;
pub use config::AdminSessionConfig;
pub use error::{AdminClientError, AdminClientResult};
pub use realm::RealmRepresentation;
pub use session::{AdminSession, RealmHandle};
