//! # kc-policy
//!
//! Realm password-policy reconciliation.
//!
//! This crate holds the business logic of the service: reading the
//! current policy from a realm and overwriting it with a configured
//! desired value, translating the admin API's heterogeneous failures
//! into a small error taxonomy callers can act on.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod reconciler;

pub use error::{PolicyError, PolicyResult};
pub use reconciler::PolicyReconciler;
