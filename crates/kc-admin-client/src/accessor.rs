//! Realm accessor seam.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AdminClientResult;
use crate::realm::RealmRepresentation;

/// Narrow capability seam over a single realm of the admin API.
///
/// Implementations perform the actual remote calls; consumers stay
/// testable against an in-memory fake. Implementations must be
/// thread-safe and support concurrent access.
#[async_trait]
pub trait RealmAccessor: Send + Sync {
    /// Returns the name of the realm this accessor is scoped to.
    fn realm_name(&self) -> &str;

    /// Fetches a fresh copy of the realm representation.
    ///
    /// ## Errors
    ///
    /// Authentication failures, transport failures, and provider-side
    /// rejections are surfaced distinctly; see
    /// [`AdminClientError`](crate::error::AdminClientError).
    async fn fetch(&self) -> AdminClientResult<RealmRepresentation>;

    /// Submits a realm representation back to the provider.
    ///
    /// The representation should be one that was just fetched; the admin
    /// API replaces the whole realm record with what is submitted.
    async fn submit(&self, representation: &RealmRepresentation) -> AdminClientResult<()>;
}

#[async_trait]
impl<T: RealmAccessor + ?Sized> RealmAccessor for Arc<T> {
    fn realm_name(&self) -> &str {
        (**self).realm_name()
    }

    async fn fetch(&self) -> AdminClientResult<RealmRepresentation> {
        (**self).fetch().await
    }

    async fn submit(&self, representation: &RealmRepresentation) -> AdminClientResult<()> {
        (**self).submit(representation).await
    }
}
