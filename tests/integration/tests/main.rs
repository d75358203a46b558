//! End-to-End Integration Tests
//!
//! These tests validate the complete password policy service against an
//! in-process stub of the Keycloak admin API.

mod common;
