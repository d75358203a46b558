//! Realm representation DTO.

use serde::{Deserialize, Serialize};

/// A realm record as exchanged with the Keycloak Admin REST API.
///
/// Only the fields this client acts on are typed. Everything else the
/// server returns is captured in `other` and submitted back untouched,
/// so a fetch/submit round trip never sheds unrelated realm settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmRepresentation {
    /// Realm name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,

    /// Composite password policy expression
    /// (e.g., "length(8) and digits(1)"). Opaque to this client;
    /// the server is the sole authority on its validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<String>,

    /// Every other field of the realm record, kept as fetched.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
