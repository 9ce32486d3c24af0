//! In-memory fetcher for unit tests.

use crate::api::fetcher::ResourceFetcher;
use crate::domain::error::{ExplorerError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned bodies by exact path and records every requested path.
/// Unknown paths answer 404.
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    routes: HashMap<String, std::result::Result<Value, u16>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(path.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceFetcher for RecordingFetcher {
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
