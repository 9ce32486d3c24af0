//! Typed endpoints of the configuration API.

use crate::api::fetcher::ResourceFetcher;
use crate::api::pagination::get_all_pages;
use crate::domain::error::{ExplorerError, Result};
use crate::domain::{Choice, Company, DataElement, Extension, Property, Resource, RuleComponent};
use serde_json::Value;

/// Read-only client over a [`ResourceFetcher`].
///
/// Rules and data elements are paginated; companies, properties, rule
/// components and extensions are read from a single response.
#[derive(Debug, Clone)]
pub struct ReactorApi<F> {
    fetcher: F,
}

impl<F: ResourceFetcher> ReactorApi<F> {
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// `GET /companies`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub async fn companies(&self) -> Result<Vec<Company>> {
        let body = self.fetcher.get("/companies").await?;
        Ok(choices(&decode_data(body)?))
    }

    /// `GET /companies/{id}/properties`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub async fn properties(&self, company_id: &str) -> Result<Vec<Property>> {
        let body = self.fetcher.get(&format!("/companies/{company_id}/properties")).await?;
        Ok(choices(&decode_data(body)?))
    }

    /// All pages of `GET /properties/{id}/rules`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors from any page.
    pub async fn rules(&self, property_id: &str) -> Result<Vec<Resource>> {
        let items = get_all_pages(&self.fetcher, &format!("/properties/{property_id}/rules")).await?;
        decode_items(items)
    }

    /// All pages of `GET /properties/{id}/data_elements`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors from any page.
    pub async fn data_elements(&self, property_id: &str) -> Result<Vec<DataElement>> {
        let items =
            get_all_pages(&self.fetcher, &format!("/properties/{property_id}/data_elements")).await?;
        decode_items(items)
    }

    /// `GET /rules/{id}/rule_components`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub async fn rule_components(&self, rule_id: &str) -> Result<Vec<RuleComponent>> {
        let body = self.fetcher.get(&format!("/rules/{rule_id}/rule_components")).await?;
        decode_data(body)
    }

    /// `GET /properties/{id}/extensions`.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub async fn extensions(&self, property_id: &str) -> Result<Vec<Extension>> {
        let body = self.fetcher.get(&format!("/properties/{property_id}/extensions")).await?;
        decode_data(body)
    }
}

/// Decodes the `data` array of a response; a missing or non-array `data` is empty.
fn decode_data(mut body: Value) -> Result<Vec<Resource>> {
    match body.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => decode_items(items),
        _ => Ok(Vec::new()),
    }
}

fn decode_items(items: Vec<Value>) -> Result<Vec<Resource>> {
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|e| ExplorerError::Decode(format!("unexpected resource shape: {e}")))
        })
        .collect()
}

fn choices(resources: &[Resource]) -> Vec<Choice> {
    resources.iter().map(Choice::from).collect()
}
