//! Password-policy reconciliation against a single realm.

use kc_admin_client::RealmAccessor;
use tracing::{error, info};

use crate::error::{PolicyError, PolicyResult};

/// Reconciles a realm's password policy with a desired value.
///
/// Both operations are single-shot, stateless request/response
/// interactions: a fresh representation is fetched per call and
/// discarded afterwards. No retry is performed here; the caller decides
/// which failure categories are worth retrying and with what backoff.
///
/// Concurrent [`apply_desired_policy`](Self::apply_desired_policy)
/// calls against the same realm are not coordinated by this component;
/// the provider's own concurrency control is the only defense against
/// overlapping fetch/submit round trips.
pub struct PolicyReconciler<A> {
    realm: A,
}

impl<A: RealmAccessor> PolicyReconciler<A> {
    /// Creates a reconciler over the given realm accessor.
    pub const fn new(realm: A) -> Self {
        Self { realm }
    }

    /// Returns the realm's current password policy.
    ///
    /// A realm with no policy configured yields the empty string; that
    /// is a successful outcome, not a fetch failure.
    ///
    /// ## Errors
    ///
    /// `FetchFailed`, `AuthFailed`, or `RealmNotFound`, each carrying
    /// the provider detail.
    pub async fn current_policy(&self) -> PolicyResult<String> {
        let representation = self
            .realm
            .fetch()
            .await
            .map_err(|err| PolicyError::from_fetch_failure(self.realm.realm_name(), err))?;

        Ok(representation.password_policy.unwrap_or_default())
    }

    /// Overwrites the realm's password policy with `desired`.
    ///
    /// Fetches a fresh realm representation, replaces only the policy
    /// field, and submits the result back; every other realm field is
    /// submitted exactly as fetched. On success the applied policy
    /// string is returned so the caller can log what was written.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` if `desired` is empty after trimming (no
    /// remote call is made). Fetch-phase failures as for
    /// [`Self::current_policy`], in which case nothing is written.
    /// `RemoteRejected` when the provider refuses the write and
    /// `RemoteUnavailable` when it fails server-side, both preserving
    /// the response status and body.
    pub async fn apply_desired_policy(&self, desired: &str) -> PolicyResult<String> {
        if desired.trim().is_empty() {
            return Err(PolicyError::InvalidConfiguration(
                "desired password policy is empty".to_string(),
            ));
        }

        let realm = self.realm.realm_name();
        info!(realm, policy = desired, "updating realm password policy");

        let mut representation = self
            .realm
            .fetch()
            .await
            .map_err(|err| PolicyError::from_fetch_failure(realm, err))?;

        representation.password_policy = Some(desired.to_string());

        if let Err(err) = self.realm.submit(&representation).await {
            let err = PolicyError::from_submit_failure(err);
            error!(realm, error = %err, "failed to update realm password policy");
            return Err(err);
        }

        info!(realm, "realm password policy updated");
        Ok(desired.to_string())
    }
}
