//! Operator credentials for the configuration API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session store key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Session store key of the organization id.
pub const ORG_ID_KEY: &str = "orgId";
/// Session store key of the client id (sent as the API key).
pub const CLIENT_ID_KEY: &str = "clientId";
/// Session store key of the client secret.
pub const CLIENT_SECRET_KEY: &str = "clientSecret";

/// The four credential keys in persistence order.
pub const CREDENTIAL_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, ORG_ID_KEY, CLIENT_ID_KEY, CLIENT_SECRET_KEY];

/// Media type of every request body and response.
pub const CONTENT_TYPE: &str = "application/vnd.api+json";

/// Versioned accept header value.
pub const ACCEPT: &str = "application/vnd.api+json;revision=1";

/// Access token, org id, client id and client secret.
///
/// The client secret is never sent; it is only stored so the form can be
/// restored.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub org_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Builds credentials from raw form values, trimming each one.
    #[must_use]
    pub fn from_form(access_token: &str, org_id: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            access_token: access_token.trim().to_string(),
            org_id: org_id.trim().to_string(),
            client_id: client_id.trim().to_string(),
            client_secret: client_secret.trim().to_string(),
        }
    }

    /// `true` iff all four values are non-empty after trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.trim().is_empty())
    }

    /// `(storage key, value)` pairs in persistence order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (ACCESS_TOKEN_KEY, &self.access_token),
            (ORG_ID_KEY, &self.org_id),
            (CLIENT_ID_KEY, &self.client_id),
            (CLIENT_SECRET_KEY, &self.client_secret),
        ]
    }

    /// Mutable slot for a storage key, `None` for unknown keys.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            ACCESS_TOKEN_KEY => Some(&mut self.access_token),
            ORG_ID_KEY => Some(&mut self.org_id),
            CLIENT_ID_KEY => Some(&mut self.client_id),
            CLIENT_SECRET_KEY => Some(&mut self.client_secret),
            _ => None,
        }
    }

    /// The five request headers derived from these credentials.
    #[must_use]
    pub fn auth_headers(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Authorization", format!("Bearer {}", self.access_token)),
            ("x-api-key", self.client_id.clone()),
            ("x-gw-ims-org-id", self.org_id.clone()),
            ("Content-Type", CONTENT_TYPE.to_string()),
            ("Accept", ACCEPT.to_string()),
        ])
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("org_id", &self.org_id)
            .field("client_id", &self.client_id)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}
