//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use reactor_explorer::api::{page_path, ResourceFetcher};
use reactor_explorer::app::AppState;
use reactor_explorer::domain::Credentials;
use reactor_explorer::storage::{CredentialStore, MemoryStorage};
use reactor_explorer::{ExplorerError, Result, Theme};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned responses by exact path; clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct FakeFetcher {
    routes: Arc<HashMap<String, std::result::Result<Value, u16>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new(routes: impl IntoIterator<Item = (String, std::result::Result<Value, u16>)>) -> Self {
        Self {
            routes: Arc::new(routes.into_iter().collect()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Factory handed to `dispatch`.
    pub fn connector(&self) -> impl Fn(&Credentials) -> Result<FakeFetcher> + '_ {
        move |_| Ok(self.clone())
    }
}

#[async_trait]
impl ResourceFetcher for FakeFetcher {
    async fn get(&self, path: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(path.to_string());
        match self.routes.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ExplorerError::Transport {
                status: *status,
                status_text: String::new(),
            }),
            None => Err(ExplorerError::Transport {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }
}

pub const STORED_CREDENTIALS: [(&str, &str); 4] = [
    ("accessToken", "tok"),
    ("orgId", "ORG@AdobeOrg"),
    ("clientId", "client"),
    ("clientSecret", "secret"),
];

pub fn state_with_stored_credentials() -> AppState {
    let store = MemoryStorage::with_values(STORED_CREDENTIALS);
    AppState::new(CredentialStore::new(Box::new(store)), Theme::default())
}

pub fn empty_state() -> AppState {
    AppState::new(CredentialStore::new(Box::new(MemoryStorage::new())), Theme::default())
}

pub fn strip_ansi(text: &str) -> String {
    regex::Regex::new("\u{1b}\\[[0-9;]*m").unwrap().replace_all(text, "").into_owned()
}

/// One company (CO1 "Acme") with one property (PR1 "Main Site") holding two
/// rules (one unpublished), one XDM data element and one extension.
pub fn property_routes() -> Vec<(String, std::result::Result<Value, u16>)> {
    vec![
        (
            "/companies".into(),
            Ok(json!({"data": [{"id": "CO1", "attributes": {"name": "Acme"}}]})),
        ),
        (
            "/companies/CO1/properties".into(),
            Ok(json!({"data": [{"id": "PR1", "attributes": {"name": "Main Site"}}]})),
        ),
        (
            page_path("/properties/PR1/rules", 1),
            Ok(json!({
                "data": [
                    {"id": "RL1", "attributes": {
                        "name": "Page View", "published": true, "enabled": true,
                        "settings": "track('view');"
                    }, "meta": {"latest_revision_number": 3}},
                    {"id": "RL2", "attributes": {"name": "Draft Rule", "published": false}}
                ],
                "meta": {"pagination": {"total_pages": 1}}
            })),
        ),
        (
            "/rules/RL1/rule_components".into(),
            Ok(json!({"data": [
                {"id": "RC1", "attributes": {
                    "delegate_descriptor_id": "core::events::library-loaded",
                    "settings": "{\"trigger\":\"pageBottom\"}"
                }},
                {"id": "RC2", "attributes": {
                    "delegate_descriptor_id": "core::actions::custom-code",
                    "settings": "{\"source\":\"console.log(1)\"}"
                }}
            ]})),
        ),
        (
            "/rules/RL2/rule_components".into(),
            Ok(json!({"data": []})),
        ),
        (
            page_path("/properties/PR1/data_elements", 1),
            Ok(json!({"data": [
                {"id": "DE1", "attributes": {
                    "name": "XDM Page",
                    "delegate_descriptor_id": "adobe-alloy::dataElements::xdm-object",
                    "settings": "{\"data\":{\"web\":{\"name\":\"home\"}}}",
                    "published": true,
                    "enabled": true
                }}
            ]})),
        ),
        (
            "/properties/PR1/extensions".into(),
            Ok(json!({"data": [
                {"id": "EX1", "attributes": {"name": "core", "display_name": "Core", "published": true}}
            ]})),
        ),
    ]
}
